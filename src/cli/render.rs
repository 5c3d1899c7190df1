//! Text rendering of the booking form. Returns plain lines; styling happens in `output`.

use crate::core::{
    format_amount, format_budget, format_time_range, BookingFlow, BookingWizard, SectionMode,
    SectionView,
};
use crate::domain::{BookingDraft, Section};

const NOT_SET: &str = "(not set)";

pub fn render_form(wizard: &BookingWizard, flow: BookingFlow) -> Vec<String> {
    let mut lines = Vec::new();
    for view in wizard.section_views() {
        lines.extend(render_section(&view, wizard));
    }
    let action = wizard.primary_action(flow);
    let state = if action.enabled { "" } else { " (disabled)" };
    lines.push(format!("[ {} ]{}", action.label, state));
    lines
}

pub fn render_section(view: &SectionView, wizard: &BookingWizard) -> Vec<String> {
    match view.mode {
        SectionMode::Untouched => vec![format!("[ ] {}", view.title)],
        SectionMode::Completed => vec![format!(
            "[x] {}: {}  (edit {})",
            view.title,
            view.summary.as_deref().unwrap_or_default(),
            command_name(view.section)
        )],
        SectionMode::Active => {
            let mut lines = vec![format!("[>] {}", view.title)];
            lines.extend(
                active_details(wizard.draft(), view.section, wizard.budget_ceiling())
                    .into_iter()
                    .map(|line| format!("    {}", line)),
            );
            lines
        }
    }
}

fn active_details(draft: &BookingDraft, section: Section, ceiling: f64) -> Vec<String> {
    match section {
        Section::Location => vec![
            format!(
                "Where: {}",
                draft.location.value.as_deref().unwrap_or(NOT_SET)
            ),
            format!("Flexible: {}", yes_no(draft.location.is_flexible)),
        ],
        Section::DateTime => {
            let schedule = &draft.schedule;
            vec![
                format!(
                    "Date: {}",
                    schedule
                        .date
                        .map(|date| date.format("%a %b %-d, %Y").to_string())
                        .unwrap_or_else(|| NOT_SET.to_string())
                ),
                format!(
                    "Time: {}",
                    schedule
                        .time
                        .as_ref()
                        .map(format_time_range)
                        .unwrap_or_else(|| NOT_SET.to_string())
                ),
                format!("Flexible date: {}", yes_no(schedule.is_date_flexible)),
                format!("Flexible time: {}", yes_no(schedule.is_time_flexible)),
            ]
        }
        Section::Guests => vec![
            format!("Adults: {}", draft.guests.adults),
            format!("Children: {}", draft.guests.children),
            format!("Infants: {}", draft.guests.infants),
            format!("Total: {}", draft.guests.total()),
        ],
        Section::Budget => vec![
            format!("Range: {}", format_budget(&draft.budget)),
            format!("Ceiling: ${}", format_amount(ceiling)),
        ],
    }
}

pub fn command_name(section: Section) -> &'static str {
    match section {
        Section::Location => "location",
        Section::DateTime => "datetime",
        Section::Guests => "guests",
        Section::Budget => "budget",
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
