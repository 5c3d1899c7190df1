use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

/// Guest categories with independent counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuestKind {
    Adults,
    Children,
    Infants,
}

impl GuestKind {
    /// Lowest value the counter may reach.
    pub fn floor(self) -> u32 {
        match self {
            GuestKind::Adults => 1,
            GuestKind::Children | GuestKind::Infants => 0,
        }
    }
}

impl fmt::Display for GuestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GuestKind::Adults => "adults",
            GuestKind::Children => "children",
            GuestKind::Infants => "infants",
        };
        f.write_str(label)
    }
}

impl FromStr for GuestKind {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "adult" | "adults" => Ok(GuestKind::Adults),
            "child" | "children" => Ok(GuestKind::Children),
            "infant" | "infants" => Ok(GuestKind::Infants),
            other => Err(BookingError::InvalidInput(format!(
                "unknown guest kind `{}` (expected adults, children or infants)",
                other
            ))),
        }
    }
}

/// Value of the "Guests" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestCount {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl Default for GuestCount {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}

impl GuestCount {
    pub fn get(&self, kind: GuestKind) -> u32 {
        match kind {
            GuestKind::Adults => self.adults,
            GuestKind::Children => self.children,
            GuestKind::Infants => self.infants,
        }
    }

    fn slot(&mut self, kind: GuestKind) -> &mut u32 {
        match kind {
            GuestKind::Adults => &mut self.adults,
            GuestKind::Children => &mut self.children,
            GuestKind::Infants => &mut self.infants,
        }
    }

    pub fn increment(&mut self, kind: GuestKind) {
        let slot = self.slot(kind);
        *slot = slot.saturating_add(1);
    }

    /// Decrements the counter unless it already sits at its floor.
    pub fn decrement(&mut self, kind: GuestKind) {
        let floor = kind.floor();
        let slot = self.slot(kind);
        if *slot > floor {
            *slot -= 1;
        }
    }

    /// Raises any counter that sits below its floor.
    pub fn normalized(self) -> Self {
        Self {
            adults: self.adults.max(GuestKind::Adults.floor()),
            ..self
        }
    }

    pub fn total(&self) -> u32 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }
}
