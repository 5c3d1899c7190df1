//! Line-oriented shell that drives the booking form.

pub mod commands;
pub mod context;
pub mod output;
pub mod registry;
pub mod render;
mod shell;

pub use context::{CliMode, CommandError, ShellContext};
pub use shell::{run_cli, SCRIPT_ENV};
