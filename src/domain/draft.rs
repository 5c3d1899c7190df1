use serde::{Deserialize, Serialize};

use super::{BudgetRange, GuestCount, LocationChoice, Schedule, Section, SectionValue};

/// Every value gathered by the booking form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub location: LocationChoice,
    pub schedule: Schedule,
    pub guests: GuestCount,
    pub budget: BudgetRange,
}

impl BookingDraft {
    /// A fresh draft whose budget spans `[0, ceiling]`.
    pub fn with_ceiling(ceiling: f64) -> Self {
        Self {
            budget: BudgetRange::full(ceiling),
            ..Self::default()
        }
    }

    pub fn value(&self, section: Section) -> SectionValue {
        match section {
            Section::Location => SectionValue::Location(self.location.clone()),
            Section::DateTime => SectionValue::DateTime(self.schedule.clone()),
            Section::Guests => SectionValue::Guests(self.guests),
            Section::Budget => SectionValue::Budget(self.budget),
        }
    }
}
