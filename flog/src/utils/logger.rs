use crate::category::LogCategory;
use crate::config::FlogConfig;
use crate::format::LogLine;
use crate::style::{AnsiStyle, PlainStyle, StyleProvider};
use anyhow::{Context, Result};
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
    prelude::*,
    registry::LookupSpan,
    EnvFilter,
};

/// Routes `tracing` events to stderr as flog lines.
///
/// Filtering follows `RUST_LOG`, defaulting to `warn`.
pub fn setup_logger(config: &FlogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.color)
        .event_format(FlogFormatter::from_config(config));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init()
        .context("Failed to set global subscriber")
}

// --- Formatters ---

struct MessageVisitor {
    message: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

pub(crate) fn category_for_level(level: &Level) -> LogCategory {
    match *level {
        Level::ERROR => LogCategory::Error,
        Level::WARN => LogCategory::Warning,
        Level::INFO => LogCategory::Info,
        _ => LogCategory::Normal,
    }
}

/// Renders each event as a [`LogLine`], using the event target as prefix.
pub struct FlogFormatter {
    style: Box<dyn StyleProvider>,
    suffix: String,
}

impl FlogFormatter {
    pub fn new(style: impl StyleProvider + 'static, suffix: impl Into<String>) -> Self {
        Self {
            style: Box::new(style),
            suffix: suffix.into(),
        }
    }

    pub fn from_config(config: &FlogConfig) -> Self {
        if config.color {
            Self::new(AnsiStyle, config.suffix.clone())
        } else {
            Self::new(PlainStyle, config.suffix.clone())
        }
    }
}

impl<S, N> FormatEvent<S, N> for FlogFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut msg_visitor = MessageVisitor {
            message: String::new(),
        };
        event.record(&mut msg_visitor);

        let metadata = event.metadata();
        let category = category_for_level(metadata.level());
        let line = LogLine::compose(
            self.style.as_ref(),
            msg_visitor.message,
            metadata.target(),
            category,
            category.hue(),
            category.as_str(),
            &self.suffix,
        );
        write!(writer, "{}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex, PoisonError};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(category_for_level(&Level::ERROR), LogCategory::Error);
        assert_eq!(category_for_level(&Level::WARN), LogCategory::Warning);
        assert_eq!(category_for_level(&Level::INFO), LogCategory::Info);
        assert_eq!(category_for_level(&Level::DEBUG), LogCategory::Normal);
        assert_eq!(category_for_level(&Level::TRACE), LogCategory::Normal);
    }

    #[test]
    fn test_formatter_renders_flog_line() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .event_format(FlogFormatter::new(PlainStyle, "->"))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "flog::test", "disk almost full");
        });

        let bytes = buf.0.lock().unwrap_or_else(PoisonError::into_inner).clone();
        let output = String::from_utf8(bytes).unwrap();
        assert_eq!(output, "[flog::test] - disk almost full ->  warning \n");
    }
}
