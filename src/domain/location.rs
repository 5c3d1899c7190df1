use serde::{Deserialize, Serialize};

/// Value of the "Location" section: a free-text place or "anywhere".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationChoice {
    pub value: Option<String>,
    pub is_flexible: bool,
}

impl LocationChoice {
    /// Builds a fixed location; blank input yields an unset value.
    pub fn named(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        Self {
            value: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            is_flexible: false,
        }
    }

    pub fn flexible() -> Self {
        Self {
            value: None,
            is_flexible: true,
        }
    }
}
