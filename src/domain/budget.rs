use serde::{Deserialize, Serialize};

/// Upper bound of the hourly budget slider unless configured otherwise.
pub const DEFAULT_BUDGET_CEILING: f64 = 200.0;

/// Value of the "Budget" section, in dollars per hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self::full(DEFAULT_BUDGET_CEILING)
    }
}

impl BudgetRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The widest range allowed under `ceiling`.
    pub fn full(ceiling: f64) -> Self {
        Self {
            min: 0.0,
            max: ceiling,
        }
    }

    /// Moves the lower bound, clamped into `[0, max]`. Non-finite input is ignored.
    pub fn with_min(self, min: f64) -> Self {
        if !min.is_finite() {
            return self;
        }
        Self {
            min: min.max(0.0).min(self.max) + 0.0,
            ..self
        }
    }

    /// Moves the upper bound, clamped into `[min, ceiling]`. Non-finite input is ignored.
    pub fn with_max(self, max: f64, ceiling: f64) -> Self {
        if !max.is_finite() {
            return self;
        }
        Self {
            max: max.min(ceiling).max(self.min) + 0.0,
            ..self
        }
    }

    /// Forces `0 <= min <= max <= ceiling`, keeping as much of the input as possible.
    pub fn clamped(self, ceiling: f64) -> Self {
        let bound = |value: f64, fallback: f64| {
            if value.is_finite() {
                value.max(0.0).min(ceiling) + 0.0
            } else {
                fallback
            }
        };
        let min = bound(self.min, 0.0);
        let max = bound(self.max, ceiling);
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max }
        }
    }
}
