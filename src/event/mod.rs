//! Event record loading for mtgen.
//!
//! This module reads a PySEP-style event file (`event_tag`, `origin_time`,
//! hypocenter, magnitude, data paths) into a validated, read-only
//! [`EventRecord`]. Unknown keys are ignored since PySEP config files carry
//! many settings unrelated to script generation.

mod loader;
mod model;


pub use loader::load;
pub use model::{EventRecord, RawEventDocument, REQUIRED_FIELDS};
