//! Shell state and command dispatch.

use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use thiserror::Error;

use crate::config::{Config, ConfigManager};
use crate::core::{BookingFlow, BookingWizard, FlowStepper, RecordingHost, Screen};
use crate::errors::{BookingError, CliError};

use super::commands;
use super::output::{self, OutputPreferences};
use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Exit requested")]
    ExitRequested,
    #[error(transparent)]
    Booking(#[from] BookingError),
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) config: Config,
    pub(crate) wizard: BookingWizard,
    pub(crate) stepper: FlowStepper,
    pub(crate) host: RecordingHost,
    pub(crate) last_command: Option<String>,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::from_env()?.load()?;
        Ok(Self::with_config(mode, config))
    }

    pub fn with_config(mode: CliMode, config: Config) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        output::set_preferences(OutputPreferences {
            plain_mode: config.plain_output || mode == CliMode::Script,
            high_contrast_mode: config.high_contrast,
        });

        Self {
            mode,
            registry,
            wizard: BookingWizard::new(config.budget_ceiling),
            stepper: FlowStepper::new(config.default_flow),
            config,
            host: RecordingHost::new(),
            last_command: None,
            running: true,
        }
    }

    pub fn flow(&self) -> BookingFlow {
        self.stepper.flow()
    }

    pub fn wizard(&self) -> &BookingWizard {
        &self.wizard
    }

    pub fn screen(&self) -> Screen {
        self.stepper.current()
    }

    pub fn host(&self) -> &RecordingHost {
        &self.host
    }

    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    /// Starts a new booking session, discarding the current form.
    pub(crate) fn restart(&mut self, flow: BookingFlow) {
        self.wizard = BookingWizard::new(self.config.budget_ceiling);
        self.stepper = FlowStepper::new(flow);
    }

    pub(crate) fn ensure_on_form(&self) -> CommandResult {
        if self.screen() == Screen::BookingForm {
            Ok(())
        } else {
            Err(CommandError::InvalidArguments(format!(
                "The booking form is closed (currently on {}). Use `back` to return to it.",
                self.screen()
            )))
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        match (self.screen(), self.wizard.active()) {
            (Screen::BookingForm, Some(section)) => format!("spacebook [{}]> ", section),
            (Screen::BookingForm, None) => "spacebook> ".to_string(),
            (screen, _) => format!("spacebook ({})> ", screen),
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_ascii_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Leave the booking flow?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Booking(BookingError::Incomplete(missing)) => {
                output::error(BookingError::Incomplete(missing).to_string());
                output::hint("Fill in the remaining sections, then `submit` again.");
            }
            other => output::error(other.to_string()),
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        super::shell::handle_line(self, line)
    }
}
