//! # Utilities Module
//!
//! Internal utility modules for the flog crate.
//! These modules are marked as `pub(crate)` to enforce API boundaries.

pub(crate) mod logger;

pub use logger::{setup_logger, FlogFormatter};
