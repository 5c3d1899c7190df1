#![doc(test(attr(deny(warnings))))]

//! Spacebook models the booking form of a space-rental app: four sections
//! (location, date & time, guests, budget), their summaries and completion
//! rules, and the hand-off to instant booking or a match request.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Spacebook tracing initialized.");
    });
}
