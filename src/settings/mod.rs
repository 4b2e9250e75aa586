//! Tool settings for mtgen.
//!
//! Settings are read from an optional YAML file passed with `--settings`.
//! Unknown fields are ignored and every field has a default, so an empty
//! file is equivalent to no file at all.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::{FetchSettings, Settings, DEFAULT_TEMPLATE};
