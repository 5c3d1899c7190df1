use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

use super::{BudgetRange, GuestCount, LocationChoice, Schedule};

/// Identifies one of the four independently editable parts of a booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Section {
    Location,
    DateTime,
    Guests,
    Budget,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 4] = [
        Section::Location,
        Section::DateTime,
        Section::Guests,
        Section::Budget,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Location => "Location",
            Section::DateTime => "Date & Time",
            Section::Guests => "Guests",
            Section::Budget => "Budget",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Section {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "location" | "where" => Ok(Section::Location),
            "datetime" | "date" | "time" | "when" => Ok(Section::DateTime),
            "guests" | "who" => Ok(Section::Guests),
            "budget" => Ok(Section::Budget),
            other => Err(BookingError::InvalidInput(format!(
                "unknown section `{}` (expected location, datetime, guests or budget)",
                other
            ))),
        }
    }
}

/// A complete value for exactly one section. The variant selects the target.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionValue {
    Location(LocationChoice),
    DateTime(Schedule),
    Guests(GuestCount),
    Budget(BudgetRange),
}

impl SectionValue {
    pub fn section(&self) -> Section {
        match self {
            SectionValue::Location(_) => Section::Location,
            SectionValue::DateTime(_) => Section::DateTime,
            SectionValue::Guests(_) => Section::Guests,
            SectionValue::Budget(_) => Section::Budget,
        }
    }
}
