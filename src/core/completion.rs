//! Decides whether a section's current value is good enough to submit.

use crate::domain::{BookingDraft, BudgetRange, GuestCount, LocationChoice, Schedule, Section};

pub fn is_location_complete(location: &LocationChoice) -> bool {
    location.value.is_some() || location.is_flexible
}

pub fn is_date_time_complete(schedule: &Schedule) -> bool {
    (schedule.date.is_some() || schedule.is_date_flexible)
        && (schedule.time.is_some() || schedule.is_time_flexible)
}

pub fn is_guests_complete(guests: &GuestCount) -> bool {
    guests.adults >= 1
}

/// NaN bounds fail every comparison and are therefore never complete.
pub fn is_budget_complete(budget: &BudgetRange) -> bool {
    budget.min >= 0.0 && budget.max >= 0.0 && budget.min <= budget.max
}

pub fn is_section_complete(draft: &BookingDraft, section: Section) -> bool {
    match section {
        Section::Location => is_location_complete(&draft.location),
        Section::DateTime => is_date_time_complete(&draft.schedule),
        Section::Guests => is_guests_complete(&draft.guests),
        Section::Budget => is_budget_complete(&draft.budget),
    }
}

pub fn all_complete(draft: &BookingDraft) -> bool {
    Section::ALL
        .iter()
        .all(|section| is_section_complete(draft, *section))
}

/// Sections still blocking submission, in display order.
pub fn incomplete_sections(draft: &BookingDraft) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|section| !is_section_complete(draft, *section))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn location_needs_value_or_flexibility() {
        assert!(!is_location_complete(&LocationChoice::default()));
        assert!(is_location_complete(&LocationChoice::flexible()));
        assert!(is_location_complete(&LocationChoice::named("Beltline")));
    }

    #[test]
    fn date_time_needs_both_parts_resolved() {
        assert!(is_date_time_complete(&Schedule::flexible()));

        let date_only = Schedule {
            date: NaiveDate::from_ymd_opt(2025, 7, 4),
            ..Schedule::default()
        };
        assert!(!is_date_time_complete(&date_only));

        let date_and_flexible_time = Schedule {
            is_time_flexible: true,
            ..date_only
        };
        assert!(is_date_time_complete(&date_and_flexible_time));
    }

    #[test]
    fn budget_rejects_inverted_and_negative_ranges() {
        assert!(!is_budget_complete(&BudgetRange::new(50.0, 30.0)));
        assert!(!is_budget_complete(&BudgetRange::new(-1.0, 30.0)));
        assert!(!is_budget_complete(&BudgetRange::new(f64::NAN, 30.0)));
        assert!(is_budget_complete(&BudgetRange::new(30.0, 30.0)));
    }

    #[test]
    fn guests_require_an_adult() {
        assert!(is_guests_complete(&GuestCount::default()));
        let nobody = GuestCount {
            adults: 0,
            children: 1,
            infants: 0,
        };
        assert!(!is_guests_complete(&nobody));
    }

    #[test]
    fn fresh_draft_is_missing_location_and_date_time() {
        let draft = BookingDraft::default();
        assert!(!all_complete(&draft));
        assert_eq!(
            incomplete_sections(&draft),
            vec![Section::Location, Section::DateTime]
        );
    }
}
