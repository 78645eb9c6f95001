//! Tick interval parsing and clamping.

use std::time::Duration;

use crate::error::ConfigError;

/// The sampling interval, fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(Duration);

/// Default interval when no argument is given: 100 ms.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Smallest accepted interval. Anything lower is clamped up so a typo
/// cannot turn the sampler into a busy loop.
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Largest accepted interval: one hour. A diagnostic tool that samples
/// less often than that is not sampling, and the bound keeps the value
/// safely inside what `Duration` and the OS timer can represent.
pub const MAX_INTERVAL: Duration = Duration::from_secs(3600);

impl TickInterval {
    /// Builds an interval from seconds, clamped to
    /// [`MIN_INTERVAL`]..=[`MAX_INTERVAL`]. Total: a non-finite input
    /// falls back to the default rather than panicking in `Duration`.
    pub fn from_secs(secs: f64) -> Self {
        if !secs.is_finite() {
            return Self::default();
        }
        let secs = secs.clamp(MIN_INTERVAL.as_secs_f64(), MAX_INTERVAL.as_secs_f64());
        Self(Duration::from_secs_f64(secs))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    /// Interval in whole milliseconds, as the OS timer wants it.
    pub fn as_millis(&self) -> u32 {
        u32::try_from(self.0.as_millis()).unwrap_or(u32::MAX)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(DEFAULT_INTERVAL)
    }
}

/// Parses the optional `interval_seconds` argument.
///
/// A missing argument yields the default. A malformed or non-positive
/// value yields the default together with the error, so the caller can
/// report it and keep running.
pub fn parse(arg: Option<&str>) -> (TickInterval, Option<ConfigError>) {
    let Some(raw) = arg else {
        return (TickInterval::default(), None);
    };

    match raw.trim().parse::<f64>() {
        Ok(secs) if secs > 0.0 && secs <= MAX_INTERVAL.as_secs_f64() => {
            (TickInterval::from_secs(secs), None)
        }
        Ok(secs) if secs > 0.0 => (
            TickInterval::default(),
            Some(ConfigError::OversizedInterval(secs)),
        ),
        Ok(secs) => (
            TickInterval::default(),
            Some(ConfigError::NonPositiveInterval(secs)),
        ),
        Err(_) => (
            TickInterval::default(),
            Some(ConfigError::InvalidInterval(raw.to_string())),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_uses_default() {
        // Act
        let (interval, error) = parse(None);

        // Assert
        assert_eq!(interval.as_duration(), DEFAULT_INTERVAL);
        assert!(error.is_none());
    }

    #[test]
    fn valid_seconds_are_accepted() {
        // Act
        let (interval, error) = parse(Some("0.05"));

        // Assert
        assert_eq!(interval.as_duration(), Duration::from_millis(50));
        assert!(error.is_none());
    }

    #[test]
    fn malformed_value_degrades_to_default() {
        // Act
        let (interval, error) = parse(Some("abc"));

        // Assert
        assert_eq!(interval.as_duration(), DEFAULT_INTERVAL);
        assert!(matches!(error, Some(ConfigError::InvalidInterval(_))));
    }

    #[test]
    fn tiny_interval_is_clamped_to_floor() {
        // Act
        let (interval, error) = parse(Some("0.001"));

        // Assert
        assert_eq!(interval.as_duration(), MIN_INTERVAL);
        assert!(error.is_none());
    }

    #[test]
    fn non_positive_values_are_rejected() {
        // Act
        let (zero, zero_err) = parse(Some("0"));
        let (negative, negative_err) = parse(Some("-0.5"));

        // Assert
        assert_eq!(zero.as_duration(), DEFAULT_INTERVAL);
        assert!(matches!(zero_err, Some(ConfigError::NonPositiveInterval(_))));
        assert_eq!(negative.as_duration(), DEFAULT_INTERVAL);
        assert!(matches!(
            negative_err,
            Some(ConfigError::NonPositiveInterval(_))
        ));
    }

    #[test]
    fn oversized_interval_degrades_to_default() {
        // Act
        let (huge, huge_err) = parse(Some("1e20"));
        let (infinite, infinite_err) = parse(Some("inf"));

        // Assert: no panic in Duration construction, default + diagnostic
        assert_eq!(huge.as_duration(), DEFAULT_INTERVAL);
        assert!(matches!(huge_err, Some(ConfigError::OversizedInterval(_))));
        assert_eq!(infinite.as_duration(), DEFAULT_INTERVAL);
        assert!(matches!(
            infinite_err,
            Some(ConfigError::OversizedInterval(_))
        ));
    }

    #[test]
    fn nan_is_rejected_without_panicking() {
        // Act
        let (interval, error) = parse(Some("NaN"));

        // Assert
        assert_eq!(interval.as_duration(), DEFAULT_INTERVAL);
        assert!(matches!(error, Some(ConfigError::NonPositiveInterval(_))));
    }

    #[test]
    fn from_secs_is_total_over_extreme_inputs() {
        // Assert: clamped at both ends, default for non-finite
        assert_eq!(TickInterval::from_secs(1e20).as_duration(), MAX_INTERVAL);
        assert_eq!(TickInterval::from_secs(1e-9).as_duration(), MIN_INTERVAL);
        assert_eq!(
            TickInterval::from_secs(f64::NAN).as_duration(),
            DEFAULT_INTERVAL
        );
    }

    #[test]
    fn millis_fit_the_os_timer_at_the_maximum() {
        // Assert: the one-hour cap stays well inside u32 milliseconds
        assert_eq!(TickInterval::from_secs(3600.0).as_millis(), 3_600_000);
    }

    #[test]
    fn millis_round_down_for_the_os_timer() {
        // Act
        let (interval, _) = parse(Some("0.2"));

        // Assert
        assert_eq!(interval.as_millis(), 200);
    }
}
