//! Error types for ratecurve.
//!
//! Every crate in the workspace reports failures through the single
//! `thiserror`-derived [`Error`] enum defined here.  Errors are raised
//! synchronously by the call that detects them; nothing is retried
//! internally and no partial results are returned.

use thiserror::Error;

/// The top-level error type used throughout ratecurve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A malformed calendar date, or date arithmetic that left the
    /// supported range.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// An interval whose end precedes its start (including a discount
    /// requested before a curve's reference date).
    #[error("invalid range: end ({end}) is before start ({start})")]
    InvalidRange {
        /// The start of the interval, rendered for display.
        start: String,
        /// The end of the interval, rendered for display.
        end: String,
    },

    /// A schedule with fewer than two dates was used to build a leg.
    #[error("insufficient periods: schedule has {found} date(s), at least 2 required")]
    InsufficientPeriods {
        /// Number of dates actually present.
        found: usize,
    },

    /// A frequency or period with no calendar step.
    #[error("unsupported frequency: {0}")]
    UnsupportedFrequency(String),

    /// A quote was read while holding no value.
    #[error("null value")]
    NullValue,

    /// `npv()` was requested on an instrument with no pricing engine bound.
    #[error("no pricing engine set")]
    MissingPricingEngine,

    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error (see [`fail!`](crate::fail)).
    #[error("{0}")]
    Runtime(String),
}

impl Error {
    /// Build an [`Error::InvalidRange`] from any two displayable bounds.
    pub fn invalid_range(start: impl std::fmt::Display, end: impl std::fmt::Display) -> Self {
        Error::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Shorthand `Result` type used throughout ratecurve.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rc_core::{ensure, errors::Error};
/// fn positive(x: f64) -> rc_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use rc_core::{fail, errors::Error};
/// fn always_err() -> rc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_message() {
        let e = Error::invalid_range("2025-01-02", "2025-01-01");
        assert_eq!(
            e.to_string(),
            "invalid range: end (2025-01-01) is before start (2025-01-02)"
        );
    }

    #[test]
    fn insufficient_periods_message() {
        let e = Error::InsufficientPeriods { found: 1 };
        assert!(e.to_string().contains("1 date(s)"));
    }
}
