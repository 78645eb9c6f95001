//! Ctrl+C signal handler using `SetConsoleCtrlHandler`.
//!
//! The console interrupt is a hard stop: the handler exits the process
//! directly with status 0 instead of unwinding through the message loop.

use windows::Win32::System::Console::{CTRL_C_EVENT, SetConsoleCtrlHandler};

/// Registers a Ctrl+C handler that terminates the process.
///
/// Best-effort: when there is no console attached, registration fails
/// and there is nothing to handle anyway.
pub fn install_exit_handler() {
    // SAFETY: SetConsoleCtrlHandler is safe to call once at startup.
    unsafe {
        let _ = SetConsoleCtrlHandler(Some(handler), true);
    }
}

// Runs on a thread the console spawns, not the message-loop thread,
// which is why it must not touch the tick state.
unsafe extern "system" fn handler(ctrl_type: u32) -> windows::core::BOOL {
    if ctrl_type == CTRL_C_EVENT {
        std::process::exit(0);
    }
    windows::core::BOOL(0)
}
