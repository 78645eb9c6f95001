//! Diagnostic output on stderr.
//!
//! Tick-level failures and config problems go here, one line each,
//! flushed immediately so they never lag behind the sample stream.
//! Sample lines stay on stdout; the two streams are never mixed.

use std::fmt;
use std::io::{self, Write};

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Writes one `[level] message` line to stderr and flushes it.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let mut err = io::stderr().lock();
    let _ = writeln!(err, "[{}] {}", level.as_str(), args);
    let _ = err.flush();
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::diag::write($crate::diag::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::diag::write($crate::diag::Level::Error, format_args!($($arg)*)) };
}
