//! The two booking journeys and their linear screen sequences.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingFlow {
    /// Search available spaces and book one straight away.
    #[default]
    InstantBooking,
    /// Describe the need and let hosts respond with offers.
    MatchRequest,
}

impl BookingFlow {
    /// Label of the form's terminal action once every section is complete.
    pub fn submit_label(self) -> &'static str {
        match self {
            BookingFlow::InstantBooking => "Search",
            BookingFlow::MatchRequest => "Send Request",
        }
    }

    pub fn steps(self) -> &'static [Screen] {
        match self {
            BookingFlow::InstantBooking => &[
                Screen::BookingForm,
                Screen::SearchResults,
                Screen::Payment,
                Screen::Confirmation,
            ],
            BookingFlow::MatchRequest => &[
                Screen::BookingForm,
                Screen::MatchDetails,
                Screen::Payment,
                Screen::Pin,
                Screen::Confirmation,
            ],
        }
    }

    /// Screen that receives the finished booking form.
    pub fn hand_off_target(self) -> Screen {
        match self {
            BookingFlow::InstantBooking => Screen::SearchResults,
            BookingFlow::MatchRequest => Screen::MatchDetails,
        }
    }
}

impl fmt::Display for BookingFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingFlow::InstantBooking => f.write_str("instant booking"),
            BookingFlow::MatchRequest => f.write_str("match request"),
        }
    }
}

impl FromStr for BookingFlow {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "instant" | "instant_booking" | "instant-booking" => Ok(BookingFlow::InstantBooking),
            "match" | "match_request" | "match-request" => Ok(BookingFlow::MatchRequest),
            other => Err(BookingError::InvalidInput(format!(
                "unknown flow `{}` (expected instant or match)",
                other
            ))),
        }
    }
}

/// Screens a navigation host knows how to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    BookingForm,
    SearchResults,
    MatchDetails,
    /// Visual placeholder; no payment is taken.
    Payment,
    /// Visual placeholder for PIN entry.
    Pin,
    Confirmation,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Screen::BookingForm => "Booking form",
            Screen::SearchResults => "Search results",
            Screen::MatchDetails => "Match details",
            Screen::Payment => "Payment",
            Screen::Pin => "PIN",
            Screen::Confirmation => "Confirmation",
        };
        f.write_str(label)
    }
}

/// Walks a flow's screens by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowStepper {
    flow: BookingFlow,
    index: usize,
}

impl FlowStepper {
    pub fn new(flow: BookingFlow) -> Self {
        Self { flow, index: 0 }
    }

    pub fn flow(&self) -> BookingFlow {
        self.flow
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.flow.steps().len()
    }

    pub fn current(&self) -> Screen {
        self.flow
            .steps()
            .get(self.index)
            .copied()
            .unwrap_or(Screen::Confirmation)
    }

    /// Moves forward one screen; returns false once the last screen is showing.
    pub fn advance(&mut self) -> bool {
        if self.index + 1 < self.total() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one screen; returns false on the first screen.
    pub fn back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `screen`; screens outside this flow are refused.
    pub fn jump_to(&mut self, screen: Screen) -> Result<(), BookingError> {
        let index = self
            .flow
            .steps()
            .iter()
            .position(|step| *step == screen)
            .ok_or_else(|| {
                BookingError::Navigation(format!(
                    "{} is not a step of the {} flow",
                    screen, self.flow
                ))
            })?;
        self.index = index;
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.current() == Screen::Confirmation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_request_walks_through_pin() {
        let mut stepper = FlowStepper::new(BookingFlow::MatchRequest);
        assert_eq!(stepper.current(), Screen::BookingForm);
        assert!(!stepper.back());

        let mut visited = vec![stepper.current()];
        while stepper.advance() {
            visited.push(stepper.current());
        }
        assert_eq!(visited, BookingFlow::MatchRequest.steps());
        assert!(stepper.is_finished());
        assert!(!stepper.advance());
    }

    #[test]
    fn jump_rejects_foreign_screens() {
        let mut stepper = FlowStepper::new(BookingFlow::InstantBooking);
        let err = stepper.jump_to(Screen::Pin).unwrap_err();
        assert!(matches!(err, BookingError::Navigation(_)));
        assert_eq!(
            err.to_string(),
            "Navigation failed: PIN is not a step of the instant booking flow"
        );
        assert_eq!(stepper.index(), 0);

        stepper.jump_to(Screen::SearchResults).unwrap();
        assert_eq!(stepper.index(), 1);
    }

    #[test]
    fn submit_labels_follow_flow() {
        assert_eq!(BookingFlow::InstantBooking.submit_label(), "Search");
        assert_eq!(BookingFlow::MatchRequest.submit_label(), "Send Request");
        assert_eq!("match".parse::<BookingFlow>().unwrap(), BookingFlow::MatchRequest);
    }
}
