//! The per-tick sampling logic, independent of any event loop.
//!
//! The host owns scheduling; this module owns what happens inside one
//! tick: query the OS, degrade per-field on failure, and compose a
//! [`Sample`]. A tick never fails as a whole unless the cursor itself
//! cannot be read, and even then the caller is expected to reschedule.

use std::time::Instant;

use crate::error::QueryError;
use crate::geometry::{Point, Rect};
use crate::query::{OsQueries, WindowHandle};
use crate::sample::Sample;

/// What one tick produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// The composed sample, or `None` when the cursor query failed.
    pub sample: Option<Sample>,
    /// Non-fatal query failures encountered while composing the sample.
    pub errors: Vec<QueryError>,
}

/// Runs one tick's worth of OS queries against an [`OsQueries`] backend.
pub struct Sampler<Q> {
    queries: Q,
    started: Instant,
}

impl<Q: OsQueries> Sampler<Q> {
    pub fn new(queries: Q) -> Self {
        Self {
            queries,
            started: Instant::now(),
        }
    }

    /// Executes one tick.
    ///
    /// `handle` is `None` while the window is not yet realized; all
    /// rectangle-dependent fields then fall back to zero and the tick
    /// still yields a sample. Rectangle and translation failures degrade
    /// the affected field to zero and are recorded in the report; only a
    /// failed cursor query suppresses the sample.
    pub fn tick(&mut self, handle: Option<WindowHandle>) -> TickReport {
        let mut errors = Vec::new();

        let mouse = match self.queries.cursor_position() {
            Ok(p) => p,
            Err(e) => {
                errors.push(e);
                return TickReport {
                    sample: None,
                    errors,
                };
            }
        };

        let (window, client, mouse_in_client) = match handle {
            None => (Rect::ZERO, Rect::ZERO, Point::ZERO),
            Some(h) => {
                let window = self
                    .queries
                    .window_rect(h)
                    .unwrap_or_else(|e| {
                        errors.push(e);
                        Rect::ZERO
                    });
                let client = self
                    .queries
                    .client_rect_on_screen(h)
                    .unwrap_or_else(|e| {
                        errors.push(e);
                        Rect::ZERO
                    });
                let rel = self
                    .queries
                    .screen_to_client(h, mouse)
                    .unwrap_or_else(|e| {
                        errors.push(e);
                        Point::ZERO
                    });
                (window, client, rel)
            }
        };

        TickReport {
            sample: Some(Sample {
                t: self.started.elapsed().as_secs_f64(),
                mouse,
                window,
                client,
                mouse_in_client,
            }),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Canned-coordinate backend; each query can be forced to fail.
    struct FakeQueries {
        cursor: Result<Point, QueryError>,
        window: Result<Rect, QueryError>,
        client: Result<Rect, QueryError>,
        translated: Result<Point, QueryError>,
        dpi: Option<u32>,
    }

    impl FakeQueries {
        // Cursor at (120,160), inside the client rect (108,132,492,332);
        // the translated point is cursor minus client origin.
        fn healthy() -> Self {
            Self {
                cursor: Ok(Point::new(120, 160)),
                window: Ok(Rect::new(100, 100, 500, 340)),
                client: Ok(Rect::new(108, 132, 492, 332)),
                translated: Ok(Point::new(12, 28)),
                dpi: Some(96),
            }
        }
    }

    impl OsQueries for FakeQueries {
        fn cursor_position(&self) -> Result<Point, QueryError> {
            self.cursor.clone()
        }

        fn window_rect(&self, _: WindowHandle) -> Result<Rect, QueryError> {
            self.window.clone()
        }

        fn client_rect_on_screen(&self, _: WindowHandle) -> Result<Rect, QueryError> {
            self.client.clone()
        }

        fn screen_to_client(&self, _: WindowHandle, _: Point) -> Result<Point, QueryError> {
            self.translated.clone()
        }

        fn window_dpi(&self, _: WindowHandle) -> Option<u32> {
            self.dpi
        }
    }

    const HANDLE: WindowHandle = WindowHandle::from_raw(0x1234);

    #[test]
    fn healthy_tick_composes_all_fields() {
        // Arrange
        let mut sampler = Sampler::new(FakeQueries::healthy());

        // Act
        let report = sampler.tick(Some(HANDLE));

        // Assert
        let sample = report.sample.expect("tick should yield a sample");
        assert_eq!(sample.mouse, Point::new(120, 160));
        assert_eq!(sample.window, Rect::new(100, 100, 500, 340));
        assert_eq!(sample.client, Rect::new(108, 132, 492, 332));
        assert_eq!(sample.mouse_in_client, Point::new(12, 28));
        assert!(report.errors.is_empty());
    }

    #[test]
    fn missing_handle_zeroes_window_fields() {
        // Arrange
        let mut sampler = Sampler::new(FakeQueries::healthy());

        // Act
        let report = sampler.tick(None);

        // Assert: the tick still emits, with zeroed rectangles
        let sample = report.sample.expect("tick should yield a sample");
        assert_eq!(sample.mouse, Point::new(120, 160));
        assert_eq!(sample.window, Rect::ZERO);
        assert_eq!(sample.client, Rect::ZERO);
        assert_eq!(sample.mouse_in_client, Point::ZERO);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn cursor_failure_suppresses_sample() {
        // Arrange
        let mut queries = FakeQueries::healthy();
        queries.cursor = Err(QueryError::CursorPosition("denied".into()));
        let mut sampler = Sampler::new(queries);

        // Act
        let report = sampler.tick(Some(HANDLE));

        // Assert: no line this cycle, exactly one error reported
        assert!(report.sample.is_none());
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn rect_failure_zeroes_that_field_only() {
        // Arrange
        let mut queries = FakeQueries::healthy();
        queries.window = Err(QueryError::WindowRect("window destroyed".into()));
        let mut sampler = Sampler::new(queries);

        // Act
        let report = sampler.tick(Some(HANDLE));

        // Assert
        let sample = report.sample.expect("tick should yield a sample");
        assert_eq!(sample.window, Rect::ZERO);
        assert_eq!(sample.client, Rect::new(108, 132, 492, 332));
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn translation_failure_substitutes_origin() {
        // Arrange
        let mut queries = FakeQueries::healthy();
        queries.translated = Err(QueryError::ScreenToClient("stale handle".into()));
        let mut sampler = Sampler::new(queries);

        // Act
        let report = sampler.tick(Some(HANDLE));

        // Assert
        let sample = report.sample.expect("tick should yield a sample");
        assert_eq!(sample.mouse_in_client, Point::ZERO);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn translated_point_lands_inside_client_bounds() {
        // Arrange
        let queries = FakeQueries::healthy();
        let cursor = queries.cursor.clone().unwrap();
        let client = queries.client.clone().unwrap();
        assert!(client.contains(cursor), "fixture cursor must be in-client");
        let mut sampler = Sampler::new(queries);

        // Act
        let report = sampler.tick(Some(HANDLE));

        // Assert: a cursor inside the on-screen client rectangle maps
        // into [0,width) x [0,height)
        let sample = report.sample.unwrap();
        let rel = sample.mouse_in_client;
        assert!(rel.x >= 0 && rel.x < client.width());
        assert!(rel.y >= 0 && rel.y < client.height());
    }
}
