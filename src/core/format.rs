//! One-line summaries shown on collapsed sections.
//!
//! Every formatter is pure and total: an empty section yields `""` and the
//! caller decides whether that means "not started".

use crate::domain::{
    BookingDraft, BudgetRange, GuestCount, LocationChoice, Schedule, Section, TimeRange,
};

pub const FLEXIBLE_LOCATION: &str = "Flexible";
pub const FLEXIBLE_DATE: &str = "Flexible date";
pub const FLEXIBLE_TIME: &str = "Flexible time";
pub const FLEXIBLE_DATE_AND_TIME: &str = "Flexible date & time";

pub fn format_location(location: &LocationChoice) -> String {
    if location.is_flexible {
        FLEXIBLE_LOCATION.to_string()
    } else {
        location.value.clone().unwrap_or_default()
    }
}

/// Joins the date part and the time part with `", "`; either may be missing.
pub fn format_date_time(schedule: &Schedule) -> String {
    let date = if schedule.is_date_flexible {
        Some(FLEXIBLE_DATE.to_string())
    } else {
        schedule.date.map(|date| date.format("%b %-d").to_string())
    };

    let time = if schedule.is_time_flexible {
        Some(FLEXIBLE_TIME.to_string())
    } else {
        schedule.time.as_ref().map(format_time_range)
    };

    match (date, time) {
        (Some(date), Some(time)) => format!("{}, {}", date, time),
        (Some(part), None) | (None, Some(part)) => part,
        (None, None) => String::new(),
    }
}

/// Like [`format_date_time`] but collapses a fully flexible schedule into one phrase.
pub fn format_date_time_summary(schedule: &Schedule) -> String {
    if schedule.is_date_flexible && schedule.is_time_flexible {
        FLEXIBLE_DATE_AND_TIME.to_string()
    } else {
        format_date_time(schedule)
    }
}

/// `9:00-11:30AM`; only the end period is spelled out.
pub fn format_time_range(range: &TimeRange) -> String {
    format!(
        "{}-{}{}",
        range.start.clock_label(),
        range.end.clock_label(),
        range.end.period()
    )
}

pub fn format_guests(guests: &GuestCount) -> String {
    let mut summary = plural(guests.adults, "Adult", "Adults");
    if guests.children > 0 {
        summary.push_str(", ");
        summary.push_str(&plural(guests.children, "Child", "Children"));
    }
    if guests.infants > 0 {
        summary.push_str(", ");
        summary.push_str(&plural(guests.infants, "Infant", "Infants"));
    }
    summary
}

pub fn format_budget(budget: &BudgetRange) -> String {
    format!(
        "${} - {} per hour",
        format_amount(budget.min),
        format_amount(budget.max)
    )
}

pub fn format_section(draft: &BookingDraft, section: Section) -> String {
    match section {
        Section::Location => format_location(&draft.location),
        Section::DateTime => format_date_time_summary(&draft.schedule),
        Section::Guests => format_guests(&draft.guests),
        Section::Budget => format_budget(&draft.budget),
    }
}

/// Whole amounts print without decimals, everything else with two.
pub fn format_amount(value: f64) -> String {
    // -0.0 would otherwise print as "-0"
    let value = value + 0.0;
    if value.fract().abs() < f64::EPSILON {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn plural(count: u32, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
