//! # Stack Inspection
//!
//! Call-stack capture as an injected capability, so traces can be mocked.

use serde::{Deserialize, Serialize};
use std::backtrace::{Backtrace, BacktraceStatus};

/// Produces the current call stack, innermost frame first.
pub trait StackInspector: Send + Sync {
    fn frames(&self) -> Vec<String>;
}

/// Order in which frames appear in the trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackOrder {
    #[default]
    OutermostFirst,
    InnermostFirst,
}

impl StackOrder {
    /// Arranges innermost-first `frames` into this order.
    pub fn arrange(&self, mut frames: Vec<String>) -> Vec<String> {
        if *self == StackOrder::OutermostFirst {
            frames.reverse();
        }
        frames
    }
}

/// Captures frames with `std::backtrace`, regardless of `RUST_BACKTRACE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceInspector;

impl StackInspector for BacktraceInspector {
    fn frames(&self) -> Vec<String> {
        let trace = Backtrace::force_capture();
        if trace.status() != BacktraceStatus::Captured {
            return Vec::new();
        }
        parse_frames(&trace.to_string())
    }
}

// Rendered backtraces look like:
//    0: symbol::path
//              at ./src/file.rs:12:5
fn parse_frames(rendered: &str) -> Vec<String> {
    let mut frames: Vec<String> = Vec::new();
    for line in rendered.lines().map(str::trim) {
        if let Some(location) = line.strip_prefix("at ") {
            if let Some(last) = frames.last_mut() {
                last.push_str(" at ");
                last.push_str(location);
            }
        } else if let Some((index, symbol)) = line.split_once(": ") {
            if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
                frames.push(symbol.to_string());
            }
        }
    }
    frames
}
