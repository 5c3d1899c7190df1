//! Booking form state: which section is open, which are saved, and the draft.
//!
//! Every edit is committed to the draft immediately, so moving to another
//! section never discards anything. Saving a section is the only way it
//! becomes "completed"; editing alone never does.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{
    BookingDraft, BudgetRange, GuestCount, GuestKind, LocationChoice, Schedule, Section,
    SectionValue, TimeRange, DEFAULT_BUDGET_CEILING,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BookingWizard {
    active: Option<Section>,
    completed: BTreeSet<Section>,
    draft: BookingDraft,
    budget_ceiling: f64,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET_CEILING)
    }
}

impl BookingWizard {
    /// Fresh form with the location section open.
    pub fn new(budget_ceiling: f64) -> Self {
        let budget_ceiling = if budget_ceiling.is_finite() && budget_ceiling > 0.0 {
            budget_ceiling
        } else {
            DEFAULT_BUDGET_CEILING
        };
        Self {
            active: Some(Section::Location),
            completed: BTreeSet::new(),
            draft: BookingDraft::with_ceiling(budget_ceiling),
            budget_ceiling,
        }
    }

    pub fn active(&self) -> Option<Section> {
        self.active
    }

    pub fn completed(&self) -> &BTreeSet<Section> {
        &self.completed
    }

    pub fn is_completed(&self, section: Section) -> bool {
        self.completed.contains(&section)
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn budget_ceiling(&self) -> f64 {
        self.budget_ceiling
    }

    /// Opens `section` for editing. Whatever was open stays as last edited.
    pub fn activate(&mut self, section: Section) {
        if self.active != Some(section) {
            debug!(%section, previous = ?self.active, "section activated");
        }
        self.active = Some(section);
    }

    /// Collapses every section without saving anything.
    pub fn deactivate(&mut self) {
        self.active = None;
    }

    /// Replaces one section's value, normalising counters and budget bounds.
    pub fn update(&mut self, value: SectionValue) {
        let section = value.section();
        match value {
            SectionValue::Location(location) => self.draft.location = location,
            SectionValue::DateTime(schedule) => self.draft.schedule = schedule,
            SectionValue::Guests(guests) => self.draft.guests = guests.normalized(),
            SectionValue::Budget(budget) => {
                self.draft.budget = budget.clamped(self.budget_ceiling)
            }
        }
        debug!(%section, "section value updated");
    }

    /// Saves `section`, collapses the form. Saving twice changes nothing.
    pub fn complete_section(&mut self, section: Section) {
        self.active = None;
        if self.completed.insert(section) {
            debug!(%section, "section completed");
        }
    }

    /// Restores the section default and forgets that it was saved.
    pub fn clear_section(&mut self, section: Section) {
        match section {
            Section::Location => self.draft.location = LocationChoice::default(),
            Section::DateTime => self.draft.schedule = Schedule::default(),
            Section::Guests => self.draft.guests = GuestCount::default(),
            Section::Budget => self.draft.budget = BudgetRange::full(self.budget_ceiling),
        }
        self.completed.remove(&section);
        debug!(%section, "section cleared");
    }

    /// Clears every section and reopens the location section.
    pub fn reset(&mut self) {
        *self = Self::new(self.budget_ceiling);
    }

    pub fn set_location_text(&mut self, text: &str) {
        self.draft.location = LocationChoice::named(text);
    }

    pub fn set_location_flexible(&mut self, flexible: bool) {
        self.draft.location.is_flexible = flexible;
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.draft.schedule.date = date;
    }

    pub fn set_time_range(&mut self, range: Option<TimeRange>) {
        self.draft.schedule.time = range;
    }

    pub fn set_date_flexible(&mut self, flexible: bool) {
        self.draft.schedule.is_date_flexible = flexible;
    }

    pub fn set_time_flexible(&mut self, flexible: bool) {
        self.draft.schedule.is_time_flexible = flexible;
    }

    pub fn increment_guests(&mut self, kind: GuestKind) {
        self.draft.guests.increment(kind);
    }

    /// No-op once the counter reaches its floor.
    pub fn decrement_guests(&mut self, kind: GuestKind) {
        self.draft.guests.decrement(kind);
    }

    pub fn set_budget_min(&mut self, min: f64) {
        self.draft.budget = self.draft.budget.with_min(min);
    }

    pub fn set_budget_max(&mut self, max: f64) {
        self.draft.budget = self.draft.budget.with_max(max, self.budget_ceiling);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_location_with_nothing_saved() {
        let wizard = BookingWizard::default();
        assert_eq!(wizard.active(), Some(Section::Location));
        assert!(wizard.completed().is_empty());
        assert_eq!(wizard.draft().budget, BudgetRange::new(0.0, 200.0));
    }

    #[test]
    fn completing_twice_is_idempotent() {
        let mut wizard = BookingWizard::default();
        wizard.complete_section(Section::Guests);
        let once = wizard.completed().clone();
        wizard.complete_section(Section::Guests);
        assert_eq!(wizard.completed(), &once);
        assert_eq!(wizard.active(), None);
    }

    #[test]
    fn editing_never_marks_a_section_complete() {
        let mut wizard = BookingWizard::default();
        wizard.set_location_text("Beltline, Calgary");
        wizard.update(SectionValue::DateTime(Schedule::flexible()));
        assert!(wizard.completed().is_empty());
        assert_eq!(wizard.active(), Some(Section::Location));
    }

    #[test]
    fn switching_sections_keeps_edits() {
        let mut wizard = BookingWizard::default();
        wizard.set_location_text("Mission");
        wizard.activate(Section::Budget);
        assert_eq!(wizard.draft().location.value.as_deref(), Some("Mission"));
        assert!(!wizard.is_completed(Section::Location));
    }

    #[test]
    fn clear_restores_defaults_and_keeps_active() {
        let mut wizard = BookingWizard::default();
        for section in Section::ALL {
            wizard.complete_section(section);
        }
        wizard.set_location_flexible(true);
        wizard.update(SectionValue::DateTime(Schedule::flexible()));
        wizard.increment_guests(GuestKind::Infants);
        wizard.set_budget_min(25.0);
        wizard.activate(Section::Guests);

        for section in Section::ALL {
            wizard.clear_section(section);
            assert!(!wizard.is_completed(section));
            assert_eq!(wizard.active(), Some(Section::Guests));
        }
        assert_eq!(wizard.draft(), &BookingDraft::default());
    }

    #[test]
    fn update_clamps_budget_to_ceiling() {
        let mut wizard = BookingWizard::new(150.0);
        wizard.update(SectionValue::Budget(BudgetRange::new(80.0, 400.0)));
        assert_eq!(wizard.draft().budget, BudgetRange::new(80.0, 150.0));
        wizard.set_budget_max(10.0);
        assert_eq!(wizard.draft().budget.max, 80.0);
    }

    #[test]
    fn invalid_ceiling_falls_back_to_default() {
        let wizard = BookingWizard::new(-3.0);
        assert_eq!(wizard.budget_ceiling(), DEFAULT_BUDGET_CEILING);
    }

    #[test]
    fn reset_reopens_location() {
        let mut wizard = BookingWizard::new(120.0);
        wizard.set_location_text("Inglewood");
        wizard.complete_section(Section::Location);
        wizard.reset();
        assert_eq!(wizard, BookingWizard::new(120.0));
    }
}
