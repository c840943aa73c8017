//! # Flog - Colored Console Lines and Guarded Callbacks
//!
//! This crate renders log messages with colored prefixes and category
//! labels, raises error-class messages as terminating signals, and wraps
//! callback execution with optional diagnostic tracing.
//!
//! ## Modules
//!
//! - [`category`] - Log and error categories with their color tables
//! - [`config`] - Default prefixes, suffixes and styling switches
//! - [`error`] - Typed error handling with thiserror
//! - [`executor`] - Guarded callback execution
//! - [`format`] - Line composition
//! - [`inspect`] - Call-stack capture
//! - [`output`] - Console and in-memory output streams
//! - [`style`] - Style tokens and providers

// Module declarations - internal modules marked pub(crate)
pub mod category;
pub mod config;
pub mod error;
pub mod executor;
pub(crate) mod flog;
pub mod format;
pub mod inspect;
pub mod output;
pub mod style;
pub(crate) mod utils;

// Selective exports - only public API types
pub use category::{ErrorCategory, LogCategory};
pub use config::FlogConfig;
pub use error::{CallbackFailure, FlogError, FlogSignal};
pub use executor::{Argument, ExecuteOptions};
pub use flog::Flog;
pub use format::LogLine;
pub use inspect::{BacktraceInspector, StackInspector, StackOrder};
pub use output::{Console, Memory, Output, Record, Stream};
pub use style::{AnsiStyle, Hue, PlainStyle, StyleProvider, Token};

// Utils are pub(crate) - only export specific public utilities
pub use utils::{setup_logger, FlogFormatter};
