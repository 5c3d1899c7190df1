use thiserror::Error;

use crate::domain::Section;

/// Failures raised by the booking library.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Booking is incomplete: {}", describe_sections(.0))]
    Incomplete(Vec<Section>),
    #[error("Navigation failed: {0}")]
    Navigation(String),
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_sections(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|section| section.title())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_lists_section_titles() {
        let err = BookingError::Incomplete(vec![Section::Location, Section::DateTime]);
        assert_eq!(
            err.to_string(),
            "Booking is incomplete: Location, Date & Time"
        );
    }
}
