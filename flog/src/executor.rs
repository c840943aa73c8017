//! # Callback Executor
//!
//! Runs a callback between an attempt notice and a stop notice. Failures
//! (returned errors and panics alike) are swallowed unless the execution is
//! throwable, in which case they come back as a fatal [`FlogSignal`]. The
//! completion phase, including the optional debug dump, always runs before
//! `execute` returns.

use crate::category::{ErrorCategory, LogCategory};
use crate::error::{CallbackFailure, FlogSignal};
use crate::flog::Flog;
use std::fmt;
use std::panic::{self, AssertUnwindSafe, Location};
use tracing::debug;

const ATTEMPT_NOTICE: &str = "attempting to execute callback";
const STOP_NOTICE: &str = "stopped callback execution";

/// A positional value reported by the debug dump.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// The callback itself, shown by type name.
    Callback(&'static str),
    Boolean(bool),
    Value(String),
}

impl Argument {
    pub fn value(value: impl fmt::Display) -> Self {
        Argument::Value(value.to_string())
    }

    fn describe(&self, index: usize) -> String {
        match self {
            Argument::Boolean(flag) => format!("argument {}: boolean {}", index, flag),
            other => format!("argument {}: {}", index, other),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Callback(name) => f.write_str(name),
            Argument::Boolean(flag) => write!(f, "{}", flag),
            Argument::Value(value) => f.write_str(value),
        }
    }
}

impl From<bool> for Argument {
    fn from(flag: bool) -> Self {
        Argument::Boolean(flag)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Value(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Value(value)
    }
}

macro_rules! argument_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Argument::value(value)
                }
            }
        )*
    };
}

argument_from_display!(char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecuteOptions {
    /// Dump arguments, caller and stack after the callback runs.
    pub debug: bool,
    /// Escalate callback failures to a fatal [`FlogSignal`].
    pub throwable: bool,
    /// Extra values appended to the debug dump, in order.
    pub extras: Vec<Argument>,
}

impl ExecuteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_throwable(mut self, throwable: bool) -> Self {
        self.throwable = throwable;
        self
    }

    pub fn with_extra(mut self, extra: impl Into<Argument>) -> Self {
        self.extras.push(extra.into());
        self
    }
}

/// Runs the completion phase when dropped, so it covers every exit path.
struct Completion<'a> {
    flog: &'a Flog,
    site: &'static Location<'static>,
    debug: bool,
    arguments: Vec<Argument>,
}

impl Drop for Completion<'_> {
    fn drop(&mut self) {
        let flog = self.flog;
        let tag = &flog.config().tag;
        let suffix = &flog.config().suffix;

        if self.debug {
            for (index, argument) in self.arguments.iter().enumerate() {
                flog.emit(argument.describe(index + 1), tag, LogCategory::Info, suffix);
            }
            flog.emit(
                format!("arguments being passed: {}", self.arguments.len()),
                tag,
                LogCategory::Info,
                suffix,
            );
            flog.report_callee(self.site);
            flog.trace();
        }
        flog.emit(STOP_NOTICE, tag, LogCategory::Normal, suffix);
    }
}

impl Flog {
    /// Executes `callback` with attempt/stop notices around it.
    ///
    /// Returns `Err` only when `options.throwable` is set and the callback
    /// failed; by then the stop notice has already been written.
    #[track_caller]
    pub fn execute<F, E>(&self, callback: F, options: ExecuteOptions) -> Result<(), FlogSignal>
    where
        F: FnOnce() -> Result<(), E>,
        E: fmt::Display,
    {
        let site = Location::caller();
        let ExecuteOptions {
            debug,
            throwable,
            extras,
        } = options;

        let config = self.config();
        self.emit(ATTEMPT_NOTICE, &config.tag, LogCategory::Normal, &config.suffix);

        let arguments = if debug {
            let mut arguments = vec![
                Argument::Callback(std::any::type_name::<F>()),
                Argument::Boolean(debug),
                Argument::Boolean(throwable),
            ];
            arguments.extend(extras);
            arguments
        } else {
            Vec::new()
        };
        let _completion = Completion {
            flog: self,
            site,
            debug,
            arguments,
        };

        let failure = match panic::catch_unwind(AssertUnwindSafe(callback)) {
            Ok(Ok(())) => return Ok(()),
            Ok(Err(e)) => CallbackFailure::Error(e.to_string()),
            Err(payload) => CallbackFailure::from_panic(&*payload),
        };

        if !throwable {
            debug!("Swallowed callback failure: {}", failure);
            return Ok(());
        }

        debug!("Escalating callback failure: {}", failure);
        self.raise(
            format!("something went wrong: {}", failure),
            &config.tag,
            ErrorCategory::Fatal,
            false,
            &config.raise_suffix,
        )
    }
}
