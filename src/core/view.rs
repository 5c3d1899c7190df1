//! What the presentation layer should draw for each section.

use crate::domain::Section;

use super::completion::is_section_complete;
use super::format::format_section;
use super::wizard::BookingWizard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMode {
    /// Full editable controls.
    Active,
    /// Collapsed with its summary and an edit affordance.
    Completed,
    /// Collapsed to its title only.
    Untouched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub section: Section,
    pub title: &'static str,
    pub mode: SectionMode,
    /// Present only in [`SectionMode::Completed`].
    pub summary: Option<String>,
    /// Whether the current value would pass submission.
    pub complete: bool,
}

impl BookingWizard {
    pub fn section_mode(&self, section: Section) -> SectionMode {
        if self.active() == Some(section) {
            SectionMode::Active
        } else if self.is_completed(section) {
            SectionMode::Completed
        } else {
            SectionMode::Untouched
        }
    }

    pub fn section_view(&self, section: Section) -> SectionView {
        let mode = self.section_mode(section);
        SectionView {
            section,
            title: section.title(),
            mode,
            summary: (mode == SectionMode::Completed)
                .then(|| format_section(self.draft(), section)),
            complete: is_section_complete(self.draft(), section),
        }
    }

    pub fn section_views(&self) -> Vec<SectionView> {
        Section::ALL
            .into_iter()
            .map(|section| self.section_view(section))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_follow_active_and_completed() {
        let mut wizard = BookingWizard::default();
        wizard.set_location_text("Downtown, Calgary");
        wizard.complete_section(Section::Location);
        wizard.activate(Section::DateTime);

        assert_eq!(wizard.section_mode(Section::Location), SectionMode::Completed);
        assert_eq!(wizard.section_mode(Section::DateTime), SectionMode::Active);
        assert_eq!(wizard.section_mode(Section::Guests), SectionMode::Untouched);
    }

    #[test]
    fn reopened_completed_section_is_active() {
        let mut wizard = BookingWizard::default();
        wizard.complete_section(Section::Guests);
        wizard.activate(Section::Guests);
        let view = wizard.section_view(Section::Guests);
        assert_eq!(view.mode, SectionMode::Active);
        assert_eq!(view.summary, None);
        assert!(view.complete);
    }

    #[test]
    fn completed_view_carries_summary() {
        let mut wizard = BookingWizard::default();
        wizard.set_location_flexible(true);
        wizard.complete_section(Section::Location);
        let view = wizard.section_view(Section::Location);
        assert_eq!(view.summary.as_deref(), Some("Flexible"));
        assert_eq!(view.title, "Location");
    }
}
