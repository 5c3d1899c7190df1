//! Booking form logic: formatting, completion rules, the section state
//! machine, and hand-off to the next screen. No terminal I/O.

pub mod completion;
pub mod flow;
pub mod format;
pub mod handoff;
pub mod submit;
pub mod view;
pub mod wizard;

pub use completion::*;
pub use flow::{BookingFlow, FlowStepper, Screen};
pub use format::*;
pub use handoff::{BookingPayload, NavigationEvent, NavigationHost, RecordingHost};
pub use submit::{PrimaryAction, PrimaryOutcome, SAVE_LABEL};
pub use view::{SectionMode, SectionView};
pub use wizard::BookingWizard;
