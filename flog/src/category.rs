//! # Log Categories
//!
//! The closed set of categories a line can be rendered for, and the
//! smaller error-class subset accepted by [`Flog::raise`](crate::Flog::raise).

use crate::error::FlogError;
use crate::style::Hue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic class of a log line. Drives color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    #[default]
    Normal,
    Warning,
    Error,
    Fatal,
    Success,
    Info,
}

impl LogCategory {
    pub const ALL: [LogCategory; 6] = [
        LogCategory::Normal,
        LogCategory::Warning,
        LogCategory::Error,
        LogCategory::Fatal,
        LogCategory::Success,
        LogCategory::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Normal => "normal",
            LogCategory::Warning => "warning",
            LogCategory::Error => "error",
            LogCategory::Fatal => "fatal",
            LogCategory::Success => "success",
            LogCategory::Info => "info",
        }
    }

    /// Hue used for both the prefix text and the label background.
    pub fn hue(&self) -> Hue {
        match self {
            LogCategory::Normal => Hue::White,
            LogCategory::Warning => Hue::Yellow,
            LogCategory::Error => Hue::Red,
            LogCategory::Fatal => Hue::Purple,
            LogCategory::Success => Hue::Green,
            LogCategory::Info => Hue::Blue,
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogCategory {
    type Err = FlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| FlogError::InvalidCategory {
                name: s.to_string(),
            })
    }
}

/// Categories that may be raised as a [`FlogSignal`](crate::FlogSignal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    #[default]
    Error,
    Fatal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Error => "error",
            ErrorCategory::Fatal => "fatal",
        }
    }

    // Kept separate from LogCategory::hue so the raiser owns its own table.
    pub fn hue(&self) -> Hue {
        match self {
            ErrorCategory::Error => Hue::Red,
            ErrorCategory::Fatal => Hue::Purple,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorCategory> for LogCategory {
    fn from(category: ErrorCategory) -> Self {
        match category {
            ErrorCategory::Error => LogCategory::Error,
            ErrorCategory::Fatal => LogCategory::Fatal,
        }
    }
}

impl TryFrom<LogCategory> for ErrorCategory {
    type Error = FlogError;

    fn try_from(category: LogCategory) -> Result<Self, FlogError> {
        match category {
            LogCategory::Error => Ok(ErrorCategory::Error),
            LogCategory::Fatal => Ok(ErrorCategory::Fatal),
            other => Err(FlogError::InvalidCategory {
                name: other.as_str().to_string(),
            }),
        }
    }
}

impl FromStr for ErrorCategory {
    type Err = FlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<LogCategory>()
            .and_then(ErrorCategory::try_from)
            .map_err(|_| FlogError::InvalidCategory {
                name: s.to_string(),
            })
    }
}
