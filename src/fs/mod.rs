//! Filesystem utilities for mtgen.
//!
//! Generated scripts are written atomically so a failed run never leaves a
//! truncated script behind in the output directory.

pub mod atomic;

pub use atomic::atomic_write_file;
