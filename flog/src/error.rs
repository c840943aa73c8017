//! # Flog Error Types
//!
//! Centralized error definitions for the flog crate.
//! All errors implement `std::error::Error` and `std::fmt::Display`.

use crate::category::ErrorCategory;
use crate::format::LogLine;
use thiserror::Error;

/// Unified error type for flog operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlogError {
    #[error("Unrecognized log category: '{name}'")]
    InvalidCategory { name: String },

    #[error(transparent)]
    Signal(#[from] FlogSignal),
}

/// Terminating signal raised for error-class messages that are not fake.
///
/// Displays as the exact rendered line, so printing the signal reproduces
/// what a fake raise would have written to stderr.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{line}")]
pub struct FlogSignal {
    message: String,
    category: ErrorCategory,
    line: LogLine,
}

impl FlogSignal {
    pub(crate) fn new(message: String, category: ErrorCategory, line: LogLine) -> Self {
        Self {
            message,
            category,
            line,
        }
    }

    /// The undecorated message the signal was raised with.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn line(&self) -> &LogLine {
        &self.line
    }
}

/// How a callback passed to [`Flog::execute`](crate::Flog::execute) failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallbackFailure {
    #[error("{0}")]
    Error(String),

    #[error("panicked: {0}")]
    Panic(String),
}

impl CallbackFailure {
    pub(crate) fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let info = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "unknown panic".to_string()
        };
        CallbackFailure::Panic(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_payload_messages() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("static boom");
        assert_eq!(
            CallbackFailure::from_panic(&*boxed),
            CallbackFailure::Panic("static boom".to_string())
        );

        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("owned boom"));
        assert_eq!(CallbackFailure::from_panic(&*boxed).to_string(), "panicked: owned boom");

        let boxed: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        assert_eq!(
            CallbackFailure::from_panic(&*boxed),
            CallbackFailure::Panic("unknown panic".to_string())
        );
    }

    #[test]
    fn test_invalid_category_message() {
        let err = FlogError::InvalidCategory {
            name: "loud".to_string(),
        };
        assert_eq!(err.to_string(), "Unrecognized log category: 'loud'");
    }
}
