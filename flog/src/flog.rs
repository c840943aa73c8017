//! # Flog
//!
//! The utility object: formatting, signal raising and introspection lines.
//! The guarded callback executor lives in [`crate::executor`].

use crate::category::{ErrorCategory, LogCategory};
use crate::config::FlogConfig;
use crate::error::FlogSignal;
use crate::format::LogLine;
use crate::inspect::{BacktraceInspector, StackInspector};
use crate::output::{Console, Output, Stream};
use crate::style::{AnsiStyle, PlainStyle, StyleProvider};
use std::fmt;
use std::panic::Location;

pub struct Flog {
    config: FlogConfig,
    style: Box<dyn StyleProvider>,
    output: Box<dyn Output>,
    inspector: Box<dyn StackInspector>,
}

impl Default for Flog {
    fn default() -> Self {
        Self::new(FlogConfig::default())
    }
}

impl fmt::Debug for Flog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flog")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Flog {
    /// Console output, backtrace-based stack capture, and ANSI styling
    /// unless `config.color` is false.
    pub fn new(config: FlogConfig) -> Self {
        let style: Box<dyn StyleProvider> = if config.color {
            Box::new(AnsiStyle)
        } else {
            Box::new(PlainStyle)
        };
        Self {
            config,
            style,
            output: Box::new(Console),
            inspector: Box::new(BacktraceInspector),
        }
    }

    pub fn with_style(mut self, style: impl StyleProvider + 'static) -> Self {
        self.style = Box::new(style);
        self
    }

    pub fn with_output(mut self, output: impl Output + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    pub fn with_inspector(mut self, inspector: impl StackInspector + 'static) -> Self {
        self.inspector = Box::new(inspector);
        self
    }

    pub fn config(&self) -> &FlogConfig {
        &self.config
    }

    /// Builds a line for `category` without writing it.
    pub fn format(
        &self,
        message: impl fmt::Display,
        prefix: &str,
        category: LogCategory,
        suffix: &str,
    ) -> LogLine {
        LogLine::compose(
            self.style.as_ref(),
            message,
            prefix,
            category,
            category.hue(),
            category.as_str(),
            suffix,
        )
    }

    /// Writes a formatted line to stdout.
    pub fn emit(
        &self,
        message: impl fmt::Display,
        prefix: &str,
        category: LogCategory,
        suffix: &str,
    ) {
        let line = self.format(message, prefix, category, suffix);
        self.output.write(Stream::Stdout, &line);
    }

    pub fn print(&self, message: impl fmt::Display) {
        self.log(LogCategory::Normal, message);
    }

    pub fn log(&self, category: LogCategory, message: impl fmt::Display) {
        self.emit(message, &self.config.prefix, category, &self.config.suffix);
    }

    /// Writes the line to stderr when `fake`, otherwise returns it as a
    /// [`FlogSignal`] for the caller to propagate.
    pub fn raise(
        &self,
        message: impl fmt::Display,
        prefix: &str,
        category: ErrorCategory,
        fake: bool,
        suffix: &str,
    ) -> Result<(), FlogSignal> {
        let message = message.to_string();
        let line = LogLine::compose(
            self.style.as_ref(),
            &message,
            prefix,
            category.into(),
            category.hue(),
            category.as_str(),
            suffix,
        );
        if fake {
            self.output.write(Stream::Stderr, &line);
            return Ok(());
        }
        Err(FlogSignal::new(message, category, line))
    }

    pub fn throw(&self, message: impl fmt::Display) -> Result<(), FlogSignal> {
        self.raise(
            message,
            &self.config.prefix,
            ErrorCategory::Error,
            false,
            &self.config.raise_suffix,
        )
    }

    /// Logs the current call stack at info.
    pub fn trace(&self) {
        let frames = self.config.stack_order.arrange(self.inspector.frames());
        self.tagged(format!("callback trace: {}", frames.join(", ")));
    }

    /// Logs the call site of this method at info.
    #[track_caller]
    pub fn callee(&self) {
        self.report_callee(Location::caller());
    }

    /// Logs the static type name of `value` at info.
    pub fn type_of<T: ?Sized>(&self, _value: &T) {
        self.tagged(std::any::type_name::<T>());
    }

    pub(crate) fn report_callee(&self, site: &Location<'_>) {
        self.tagged(format!("callback callee: {}", site));
    }

    pub(crate) fn tagged(&self, message: impl fmt::Display) {
        self.emit(message, &self.config.tag, LogCategory::Info, &self.config.tag_suffix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Memory;

    fn plain() -> (Flog, Memory) {
        let memory = Memory::new();
        let flog = Flog::new(FlogConfig::default().without_color()).with_output(memory.clone());
        (flog, memory)
    }

    #[test]
    fn test_print_uses_defaults() {
        let (flog, memory) = plain();
        flog.print("hello");
        let lines = memory.stdout();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].as_str(), "[+] - hello ->  normal \n");
    }

    #[test]
    fn test_throw_defaults() {
        let (flog, memory) = plain();
        let signal = flog.throw("disk full").unwrap_err();
        assert_eq!(signal.category(), ErrorCategory::Error);
        assert_eq!(signal.message(), "disk full");
        assert_eq!(signal.to_string(), "[+] - disk full !!!  error \n");
        assert!(memory.is_empty());
    }

    #[test]
    fn test_callee_reports_call_site() {
        let (flog, memory) = plain();
        flog.callee();
        let line = memory.stdout().remove(0);
        assert!(line.as_str().starts_with("[flog] - callback callee: "));
        assert!(line.as_str().contains("flog.rs"));
        assert_eq!(line.category(), LogCategory::Info);
    }
}
