//! `DayCounter` trait and built-in day-count conventions.
//!
//! A day counter computes the **day count fraction**, the fraction of a year
//! between two dates, used when discounting or accruing interest.

use crate::date::Date;
use rc_core::errors::{Error, Result};
use rc_core::{Real, Time};

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/360"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    /// Negative when `d2 < d1`.
    fn day_count(&self, d1: Date, d2: Date) -> i64;

    /// Fraction of a year between `d1` and `d2`, assuming `d1 <= d2`.
    ///
    /// Implementors provide this; callers go through
    /// [`year_fraction`](Self::year_fraction), which validates the order.
    fn year_fraction_impl(&self, d1: Date, d2: Date) -> Time;

    /// Fraction of a year between `d1` and `d2`.
    ///
    /// Returns `0.0` when `d1 == d2`.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `d2` is before `d1`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Result<Time> {
        if d2 < d1 {
            return Err(Error::invalid_range(d1, d2));
        }
        Ok(self.year_fraction_impl(d1, d2))
    }
}

/// Actual/360 day counter.
///
/// `year_fraction = actual_days / 360`
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual360;

impl DayCounter for Actual360 {
    fn name(&self) -> &str {
        "Actual/360"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        d1.days_between(d2) as i64
    }

    fn year_fraction_impl(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Actual/365 (Fixed) day counter.
///
/// `year_fraction = actual_days / 365`
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        d1.days_between(d2) as i64
    }

    fn year_fraction_impl(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.0
    }
}

/// 30/360 day counter, US bond basis.
///
/// `day_count = 360(Y2−Y1) + 30(M2−M1) + (D2−D1)` where a day-of-month of 31
/// on the start date becomes 30, and a 31 on the end date becomes 30 when the
/// (adjusted) start day is 30.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360;

impl DayCounter for Thirty360 {
    fn name(&self) -> &str {
        "30/360 (Bond Basis)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        let dd1 = (d1.day_of_month() as i64).min(30);
        let mut dd2 = d2.day_of_month() as i64;
        if dd2 == 31 && dd1 == 30 {
            dd2 = 30;
        }
        360 * (d2.year() as i64 - d1.year() as i64)
            + 30 * (d2.month() as i64 - d1.month() as i64)
            + (dd2 - dd1)
    }

    fn year_fraction_impl(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn actual360() {
        let dc = Actual360;
        let d1 = date(2024, 10, 10);
        let d2 = date(2025, 10, 10);
        assert_eq!(dc.day_count(d1, d2), 365);
        assert_abs_diff_eq!(dc.year_fraction(d1, d2).unwrap(), 365.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn actual360_same_date_is_zero() {
        let d = date(2024, 10, 10);
        assert_eq!(Actual360.year_fraction(d, d).unwrap(), 0.0);
    }

    #[test]
    fn reversed_dates_are_rejected() {
        let d1 = date(2024, 10, 10);
        let d2 = date(2024, 10, 9);
        assert!(matches!(
            Actual360.year_fraction(d1, d2),
            Err(Error::InvalidRange { .. })
        ));
        assert_eq!(Actual360.day_count(d1, d2), -1);
    }

    #[test]
    fn actual365_fixed() {
        let d1 = date(2024, 1, 1);
        let d2 = date(2025, 1, 1);
        assert_abs_diff_eq!(
            Actual365Fixed.year_fraction(d1, d2).unwrap(),
            366.0 / 365.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn thirty360() {
        let dc = Thirty360;
        assert_eq!(dc.day_count(date(2023, 1, 1), date(2024, 1, 1)), 360);
        // 31st to 31st counts as 30th to 30th.
        assert_eq!(dc.day_count(date(2023, 1, 31), date(2023, 3, 31)), 60);
        // End day 31 is kept when the start day is before the 30th.
        assert_eq!(dc.day_count(date(2023, 1, 15), date(2023, 3, 31)), 76);
        assert_abs_diff_eq!(
            dc.year_fraction(date(2023, 1, 1), date(2023, 7, 1)).unwrap(),
            0.5,
            epsilon = 1e-15
        );
    }
}
