//! Win32 bindings for Segugio.
//!
//! Everything here is gated on Windows; on other targets the crate
//! compiles to nothing and the CLI reports tracking as unsupported.

/// Ctrl+C handling via `SetConsoleCtrlHandler`.
#[cfg(windows)]
pub mod ctrl_c;

/// Process-wide DPI awareness (tiered, best-effort).
#[cfg(windows)]
pub mod dpi;

/// The tracker window and its timer-driven message loop.
#[cfg(windows)]
pub mod host;

/// Win32 implementation of the OS query interface.
#[cfg(windows)]
pub mod queries;

#[cfg(windows)]
pub use host::TrackerHost;
#[cfg(windows)]
pub use queries::Win32Queries;
