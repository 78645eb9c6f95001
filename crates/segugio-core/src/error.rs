//! Error types for the tracker.

use thiserror::Error;

/// An OS query primitive failed.
///
/// Always tick-local: the sampling loop reports it, substitutes a zeroed
/// fallback for the affected field, and keeps going. The next tick
/// resamples naturally, so there is no retry logic anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The cursor position could not be read.
    #[error("cursor position query failed: {0}")]
    CursorPosition(String),

    /// The window bounding rectangle could not be read.
    #[error("window rect query failed: {0}")]
    WindowRect(String),

    /// The client rectangle could not be computed.
    #[error("client rect query failed: {0}")]
    ClientRect(String),

    /// A screen coordinate could not be translated to client space.
    #[error("screen-to-client translation failed: {0}")]
    ScreenToClient(String),
}

/// A failure while bringing up the tracker window.
///
/// The one fatal error in the program: without a window there is nothing
/// to track, so the process exits non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The OS refused to create the window.
    #[error("failed to create tracker window: {0}")]
    CreateWindow(String),

    /// Built for a platform without tracking support.
    #[error("window tracking is only supported on Windows")]
    Unsupported,
}

/// A malformed command-line value.
///
/// Never fatal: the caller reports it and falls back to the default.
/// Carries an `f64`, so no `Eq` here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The interval argument did not parse as a number.
    #[error("invalid interval {0:?}: expected a positive number of seconds")]
    InvalidInterval(String),

    /// The interval argument parsed but is zero or negative.
    #[error("interval {0} must be positive")]
    NonPositiveInterval(f64),

    /// The interval argument parsed but is beyond the accepted maximum.
    #[error("interval {0} is too large; the maximum is 3600 seconds")]
    OversizedInterval(f64),
}
