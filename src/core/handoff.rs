//! Passing a finished booking form to whatever shows the next screen.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{BookingDraft, GuestCount};
use crate::errors::BookingError;

use super::flow::{BookingFlow, Screen};

/// Navigation-safe snapshot of a finished draft: dates and times become strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPayload {
    pub request_id: Uuid,
    pub flow: BookingFlow,
    pub location: Option<String>,
    pub is_location_flexible: bool,
    /// ISO-8601 calendar date, e.g. `2025-07-04`.
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_date_flexible: bool,
    pub is_time_flexible: bool,
    pub guests: GuestCount,
    pub budget_min: f64,
    pub budget_max: f64,
}

impl BookingPayload {
    pub fn from_draft(draft: &BookingDraft, flow: BookingFlow) -> Self {
        let schedule = &draft.schedule;
        Self {
            request_id: Uuid::new_v4(),
            flow,
            location: draft.location.value.clone(),
            is_location_flexible: draft.location.is_flexible,
            date: schedule
                .date
                .map(|date| date.format("%Y-%m-%d").to_string()),
            start_time: schedule.time.map(|range| range.start.to_string()),
            end_time: schedule.time.map(|range| range.end.to_string()),
            is_date_flexible: schedule.is_date_flexible,
            is_time_flexible: schedule.is_time_flexible,
            guests: draft.guests,
            budget_min: draft.budget.min,
            budget_max: draft.budget.max,
        }
    }

    pub fn to_json(&self) -> Result<String, BookingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Screen-switching collaborator owned by the host application.
pub trait NavigationHost {
    fn navigate(&mut self, target: Screen, payload: &BookingPayload) -> Result<(), BookingError>;

    /// Closes the booking flow without handing anything off.
    fn dismiss(&mut self) -> Result<(), BookingError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationEvent {
    Navigated {
        target: Screen,
        payload: BookingPayload,
    },
    Dismissed,
}

/// Host that only remembers what it was asked to do.
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Vec<NavigationEvent>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[NavigationEvent] {
        &self.events
    }

    pub fn last_payload(&self) -> Option<&BookingPayload> {
        self.events.iter().rev().find_map(|event| match event {
            NavigationEvent::Navigated { payload, .. } => Some(payload),
            NavigationEvent::Dismissed => None,
        })
    }
}

impl NavigationHost for RecordingHost {
    fn navigate(&mut self, target: Screen, payload: &BookingPayload) -> Result<(), BookingError> {
        self.events.push(NavigationEvent::Navigated {
            target,
            payload: payload.clone(),
        });
        Ok(())
    }

    fn dismiss(&mut self) -> Result<(), BookingError> {
        self.events.push(NavigationEvent::Dismissed);
        Ok(())
    }
}
