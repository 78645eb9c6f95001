//! The tracker window and its timer-driven sampling loop.
//!
//! One visible top-level window, one `WM_TIMER`-based tick, one blocking
//! message pump. Each tick runs to completion before the next one is
//! armed, so the loop is never re-entered and the only cross-thread
//! state is the stop flag.

use std::cell::RefCell;
use std::io::{self, Write};
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use segugio_core::sample::{self, STARTUP_BANNER};
use segugio_core::{
    HostError, OsQueries, Sample, Sampler, TickInterval, WindowHandle, log_error,
};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Gdi::HBRUSH;
use windows::Win32::UI::Input::KeyboardAndMouse::VK_ESCAPE;
use windows::Win32::UI::WindowsAndMessaging::{
    COLOR_WINDOW, CS_HREDRAW, CS_VREDRAW, CreateWindowExW, DefWindowProcW, DestroyWindow,
    DispatchMessageW, GetMessageW, IDC_ARROW, KillTimer, LoadCursorW, MSG, PostQuitMessage,
    RegisterClassW, SetTimer, TranslateMessage, WINDOW_EX_STYLE, WM_DESTROY, WM_KEYDOWN, WM_TIMER,
    WNDCLASSW, WS_OVERLAPPEDWINDOW, WS_VISIBLE,
};
use windows::core::w;

use crate::queries::Win32Queries;

/// Initial window bounds: 400x240 at screen position (200,200).
const WINDOW_X: i32 = 200;
const WINDOW_Y: i32 = 200;
const WINDOW_WIDTH: i32 = 400;
const WINDOW_HEIGHT: i32 = 240;

const TIMER_ID: usize = 1;

static REGISTER_CLASS: Once = Once::new();

/// Set by the Esc handler; checked at the top of every tick. Atomic
/// because `request_stop` is callable from outside the pump thread.
static STOP_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Per-tick state for the window procedure.
///
/// Lives in a thread-local because the pump is single-threaded and
/// `WNDPROC` callbacks cannot carry a closure environment.
struct TickState {
    sampler: Sampler<Win32Queries>,
    interval_ms: u32,
    /// Resolved lazily on the first tick; the window may not be fully
    /// realized when the state is installed.
    handle: Option<WindowHandle>,
}

thread_local! {
    static TICK_STATE: RefCell<Option<TickState>> = const { RefCell::new(None) };
}

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(tracker_wnd_proc),
            lpszClassName: w!("SegugioTrackerWindow"),
            hCursor: unsafe { LoadCursorW(None, IDC_ARROW) }.unwrap_or_default(),
            // Default window-color background; the content area stays blank.
            hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as usize as *mut _),
            ..Default::default()
        };
        unsafe {
            RegisterClassW(&wc);
        }
    });
}

/// The on-screen window being tracked, plus the message pump that drives
/// the sampling loop.
pub struct TrackerHost {
    hwnd: HWND,
    interval: TickInterval,
}

impl TrackerHost {
    /// Creates the visible tracker window.
    ///
    /// Creation failure is the one fatal error in the program; it
    /// propagates out so the process can exit non-zero.
    pub fn new(interval: TickInterval) -> Result<Self, HostError> {
        ensure_class_registered();

        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                w!("SegugioTrackerWindow"),
                w!("Tracker Window"),
                WS_OVERLAPPEDWINDOW | WS_VISIBLE,
                WINDOW_X,
                WINDOW_Y,
                WINDOW_WIDTH,
                WINDOW_HEIGHT,
                None,
                None,
                None,
                None,
            )
        }
        .map_err(|e| HostError::CreateWindow(e.message()))?;

        Ok(Self { hwnd, interval })
    }

    /// The tracked window's handle, for OS queries.
    pub fn window_handle(&self) -> WindowHandle {
        WindowHandle::from_raw(self.hwnd.0 as usize)
    }

    /// Requests shutdown. Idempotent; safe to call from any trigger.
    pub fn request_stop(&self) {
        request_stop(self.hwnd);
    }

    /// Prints the startup banners, schedules the first tick, and blocks
    /// in the message pump until the loop is stopped.
    pub fn start(self) {
        let queries = Win32Queries;

        emit_line(STARTUP_BANNER);
        if let Some(dpi) = queries.window_dpi(self.window_handle()) {
            emit_line(&sample::dpi_banner(dpi));
        }

        TICK_STATE.with(|cell| {
            *cell.borrow_mut() = Some(TickState {
                sampler: Sampler::new(queries),
                interval_ms: self.interval.as_millis(),
                handle: None,
            });
        });

        // First tick as soon as possible; the OS clamps a zero delay to
        // its own ~10 ms timer floor, which matches ours.
        unsafe {
            let _ = SetTimer(Some(self.hwnd), TIMER_ID, 0, None);
        }

        run_message_pump();

        TICK_STATE.with(|cell| cell.borrow_mut().take());
    }
}

/// The Win32 message pump. Blocks until WM_QUIT is received.
fn run_message_pump() {
    let mut msg = MSG::default();

    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

unsafe extern "system" fn tracker_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_TIMER if wparam.0 == TIMER_ID => {
            on_tick(hwnd);
            LRESULT(0)
        }
        WM_KEYDOWN if wparam.0 as u16 == VK_ESCAPE.0 => {
            request_stop(hwnd);
            LRESULT(0)
        }
        WM_DESTROY => {
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

/// One tick: check the stop flag, sample, emit, re-arm the timer.
fn on_tick(hwnd: HWND) {
    // Once stopped the tick is a no-op and the timer is never re-armed,
    // so the loop terminates.
    if STOP_REQUESTED.load(Ordering::SeqCst) {
        return;
    }

    TICK_STATE.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(state) = slot.as_mut() else {
            return;
        };

        let handle = *state
            .handle
            .get_or_insert_with(|| WindowHandle::from_raw(hwnd.0 as usize));

        let report = state.sampler.tick(Some(handle));
        for error in &report.errors {
            log_error!("{error}");
        }
        if let Some(sample) = report.sample {
            emit_sample(&sample);
        }

        // Re-arm from "now" rather than the previous nominal deadline;
        // SetTimer with the same id resets the pending timer. Drift
        // under load is accepted, this is not time-critical.
        unsafe {
            let _ = SetTimer(Some(hwnd), TIMER_ID, state.interval_ms, None);
        }
    });
}

/// Stops the loop: flips the flag and tears the window down, which ends
/// the pump via WM_DESTROY -> WM_QUIT.
fn request_stop(hwnd: HWND) {
    if STOP_REQUESTED.swap(true, Ordering::SeqCst) {
        return;
    }

    unsafe {
        let _ = KillTimer(Some(hwnd), TIMER_ID);
        let _ = DestroyWindow(hwnd);
    }
}

/// Writes one sample line to stdout, flushed so consumers can tail live.
fn emit_sample(sample: &Sample) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{sample}");
    let _ = out.flush();
}

fn emit_line(line: &str) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{line}");
    let _ = out.flush();
}
