//! Plain value types collected by the booking form.
//! No I/O and no presentation logic.

pub mod budget;
pub mod draft;
pub mod guests;
pub mod location;
pub mod schedule;
pub mod section;

pub use budget::*;
pub use draft::*;
pub use guests::*;
pub use location::*;
pub use schedule::*;
pub use section::*;
