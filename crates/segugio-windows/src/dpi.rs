use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, PROCESS_PER_MONITOR_DPI_AWARE,
    SetProcessDpiAwareness, SetProcessDpiAwarenessContext,
};
use windows::Win32::UI::WindowsAndMessaging::SetProcessDPIAware;

/// Declares this process as DPI aware, trying the most precise mode first.
///
/// Without this, Windows scales coordinates for us based on the primary
/// monitor's DPI, which gives wrong pixel positions on mixed-DPI setups.
/// Each tier targets an older OS generation than the one before it:
/// per-monitor V2 (Windows 10 1703+), per-monitor (Windows 8.1), then
/// legacy system-wide awareness. If every tier fails the process keeps
/// running with scaled coordinates, which is degraded but acceptable.
///
/// Must be called once at process startup, before creating any windows.
pub fn enable_dpi_awareness() {
    // SAFETY: these are one-shot process configuration calls. Each can
    // fail (e.g. awareness already set via manifest); we fall through.
    unsafe {
        if SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2).is_ok() {
            return;
        }
        if SetProcessDpiAwareness(PROCESS_PER_MONITOR_DPI_AWARE).is_ok() {
            return;
        }
        let _ = SetProcessDPIAware();
    }
}
