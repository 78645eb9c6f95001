use crate::error::QueryError;
use crate::geometry::{Point, Rect};

/// An opaque handle to the tracked window.
///
/// A pointer-sized integer so callers can construct one without depending
/// on any platform crate. On Windows this wraps the raw `HWND` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle(usize);

impl WindowHandle {
    /// Creates a handle from a raw pointer-sized value.
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    pub const fn raw(&self) -> usize {
        self.0
    }
}

/// The OS primitives the sampling loop needs, behind a trait so the
/// platform bindings are swappable and the loop is testable with canned
/// coordinates.
///
/// Every method is a plain request/response call: no caching, no retry,
/// no state. Implementations are expected to return promptly.
pub trait OsQueries {
    /// Current cursor position in screen coordinates.
    fn cursor_position(&self) -> Result<Point, QueryError>;

    /// Bounding rectangle of the whole window, decoration included.
    fn window_rect(&self, handle: WindowHandle) -> Result<Rect, QueryError>;

    /// The window's drawable interior, translated to screen coordinates.
    fn client_rect_on_screen(&self, handle: WindowHandle) -> Result<Rect, QueryError>;

    /// Translates a screen coordinate into the window's client space.
    fn screen_to_client(&self, handle: WindowHandle, point: Point) -> Result<Point, QueryError>;

    /// The window's DPI, if the platform can report it.
    ///
    /// Best-effort: `None` rather than an error when unsupported (older
    /// OS versions, non-top-level windows).
    fn window_dpi(&self, handle: WindowHandle) -> Option<u32>;
}
