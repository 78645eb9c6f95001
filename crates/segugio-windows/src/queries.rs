use segugio_core::{OsQueries, Point, QueryError, Rect, WindowHandle};

use windows::Win32::Foundation::{HWND, POINT, RECT};
use windows::Win32::Graphics::Gdi::{ClientToScreen, ScreenToClient};
use windows::Win32::UI::HiDpi::GetDpiForWindow;
use windows::Win32::UI::WindowsAndMessaging::{GetClientRect, GetCursorPos, GetWindowRect};

/// The Win32 implementation of [`OsQueries`].
///
/// Stateless; every method is a single synchronous user32 call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Queries;

impl Win32Queries {
    fn hwnd(handle: WindowHandle) -> HWND {
        HWND(handle.raw() as *mut _)
    }
}

impl OsQueries for Win32Queries {
    fn cursor_position(&self) -> Result<Point, QueryError> {
        let mut point = POINT::default();

        // SAFETY: GetCursorPos writes into the POINT we own.
        unsafe { GetCursorPos(&mut point) }
            .map_err(|e| QueryError::CursorPosition(e.message()))?;

        Ok(Point::new(point.x, point.y))
    }

    fn window_rect(&self, handle: WindowHandle) -> Result<Rect, QueryError> {
        let mut rect = RECT::default();

        // SAFETY: GetWindowRect writes into the RECT we own. Fails if
        // the handle went stale (window destroyed concurrently).
        unsafe { GetWindowRect(Self::hwnd(handle), &mut rect) }
            .map_err(|e| QueryError::WindowRect(e.message()))?;

        Ok(Rect::new(rect.left, rect.top, rect.right, rect.bottom))
    }

    fn client_rect_on_screen(&self, handle: WindowHandle) -> Result<Rect, QueryError> {
        let hwnd = Self::hwnd(handle);
        let mut rect = RECT::default();

        // SAFETY: GetClientRect writes into the RECT we own. The result
        // is origin-relative: left/top are always 0.
        unsafe { GetClientRect(hwnd, &mut rect) }
            .map_err(|e| QueryError::ClientRect(e.message()))?;

        // Translate the client origin to screen space, then re-apply
        // the client size to get the on-screen rectangle.
        let mut origin = POINT { x: 0, y: 0 };

        // SAFETY: ClientToScreen translates the POINT in place.
        if !unsafe { ClientToScreen(hwnd, &mut origin) }.as_bool() {
            return Err(QueryError::ClientRect("ClientToScreen failed".into()));
        }

        Ok(Rect::from_origin_size(
            Point::new(origin.x, origin.y),
            rect.right - rect.left,
            rect.bottom - rect.top,
        ))
    }

    fn screen_to_client(&self, handle: WindowHandle, point: Point) -> Result<Point, QueryError> {
        let mut p = POINT {
            x: point.x,
            y: point.y,
        };

        // SAFETY: ScreenToClient translates the POINT in place.
        if !unsafe { ScreenToClient(Self::hwnd(handle), &mut p) }.as_bool() {
            return Err(QueryError::ScreenToClient("ScreenToClient failed".into()));
        }

        Ok(Point::new(p.x, p.y))
    }

    fn window_dpi(&self, handle: WindowHandle) -> Option<u32> {
        // SAFETY: GetDpiForWindow is a simple query; it returns 0 for an
        // invalid window or when the OS predates per-window DPI.
        match unsafe { GetDpiForWindow(Self::hwnd(handle)) } {
            0 => None,
            dpi => Some(dpi),
        }
    }
}
