//! # Output Streams
//!
//! Where composed lines end up: the process console, or an in-memory
//! capture.

use crate::format::LogLine;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

pub trait Output: Send + Sync {
    fn write(&self, stream: Stream, line: &LogLine);
}

/// Writes lines verbatim to the process stdout/stderr, flushing each one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Output for Console {
    fn write(&self, stream: Stream, line: &LogLine) {
        let result = match stream {
            Stream::Stdout => write_line(io::stdout().lock(), line),
            Stream::Stderr => write_line(io::stderr().lock(), line),
        };
        if let Err(e) = result {
            warn!("Failed to write log line to {:?}: {}", stream, e);
        }
    }
}

fn write_line(mut writer: impl Write, line: &LogLine) -> io::Result<()> {
    writer.write_all(line.as_str().as_bytes())?;
    writer.flush()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub stream: Stream,
    pub line: LogLine,
}

/// In-memory capture. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    records: Arc<Mutex<Vec<Record>>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Lines written to `stream`, in order.
    pub fn lines(&self, stream: Stream) -> Vec<LogLine> {
        self.records()
            .into_iter()
            .filter(|record| record.stream == stream)
            .map(|record| record.line)
            .collect()
    }

    pub fn stdout(&self) -> Vec<LogLine> {
        self.lines(Stream::Stdout)
    }

    pub fn stderr(&self) -> Vec<LogLine> {
        self.lines(Stream::Stderr)
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Output for Memory {
    fn write(&self, stream: Stream, line: &LogLine) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Record {
                stream,
                line: line.clone(),
            });
    }
}
