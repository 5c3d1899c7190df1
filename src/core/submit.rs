//! The form's single terminal action and the hand-off that follows it.

use tracing::info;

use crate::domain::Section;
use crate::errors::BookingError;

use super::completion::{all_complete, incomplete_sections};
use super::flow::BookingFlow;
use super::handoff::{BookingPayload, NavigationHost};
use super::wizard::BookingWizard;

pub const SAVE_LABEL: &str = "Save";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryAction {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrimaryOutcome {
    /// The open section was saved.
    Saved(Section),
    /// Every section is complete; the payload is ready to hand off.
    Submitted(BookingPayload),
    /// Nothing open to save and sections still missing.
    Blocked(Vec<Section>),
}

impl BookingWizard {
    pub fn can_submit(&self) -> bool {
        all_complete(self.draft())
    }

    /// Label and availability of the terminal action, computed for the whole form.
    pub fn primary_action(&self, flow: BookingFlow) -> PrimaryAction {
        if self.can_submit() {
            PrimaryAction {
                label: flow.submit_label(),
                enabled: true,
            }
        } else {
            PrimaryAction {
                label: SAVE_LABEL,
                enabled: self.active().is_some(),
            }
        }
    }

    pub fn press_primary(&mut self, flow: BookingFlow) -> PrimaryOutcome {
        if self.can_submit() {
            if let Some(section) = self.active() {
                self.complete_section(section);
            }
            return PrimaryOutcome::Submitted(BookingPayload::from_draft(self.draft(), flow));
        }
        match self.active() {
            Some(section) => {
                self.complete_section(section);
                PrimaryOutcome::Saved(section)
            }
            None => PrimaryOutcome::Blocked(incomplete_sections(self.draft())),
        }
    }

    /// Sends the finished form to the next screen of `flow`.
    pub fn hand_off<H: NavigationHost + ?Sized>(
        &self,
        flow: BookingFlow,
        host: &mut H,
    ) -> Result<BookingPayload, BookingError> {
        self.ensure_complete()?;
        self.send(BookingPayload::from_draft(self.draft(), flow), host)
    }

    /// Hands over a payload already built by [`BookingWizard::press_primary`].
    pub fn send<H: NavigationHost + ?Sized>(
        &self,
        payload: BookingPayload,
        host: &mut H,
    ) -> Result<BookingPayload, BookingError> {
        self.ensure_complete()?;
        let flow = payload.flow;
        let target = flow.hand_off_target();
        host.navigate(target, &payload)?;
        info!(%flow, %target, request_id = %payload.request_id, "booking handed off");
        Ok(payload)
    }

    fn ensure_complete(&self) -> Result<(), BookingError> {
        let missing = incomplete_sections(self.draft());
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BookingError::Incomplete(missing))
        }
    }

    /// Leaves the flow; the form state is simply dropped by the caller.
    pub fn cancel<H: NavigationHost + ?Sized>(&self, host: &mut H) -> Result<(), BookingError> {
        info!("booking flow cancelled");
        host.dismiss()
    }
}
