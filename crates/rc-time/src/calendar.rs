//! `Calendar` trait and concrete calendar implementations.
//!
//! A calendar knows which dates are business days and can adjust dates
//! according to a [`BusinessDayConvention`].  Adjustment walks one day at a
//! time, so it can fail only when the walk leaves the supported date range.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use rc_core::errors::Result;

/// A financial calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Null"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is the last business day of its month.
    fn is_end_of_month(&self, date: Date) -> Result<bool> {
        let next = self.adjust(date.add_days(1)?, BusinessDayConvention::Following)?;
        Ok(date.month() != next.month())
    }

    /// Return the last business day of the month containing `date`.
    fn end_of_month(&self, date: Date) -> Result<Date> {
        self.adjust(date.end_of_month(), BusinessDayConvention::Preceding)
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => walk(self, date, 1),
            BusinessDayConvention::Preceding => walk(self, date, -1),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = walk(self, date, 1)?;
                if adjusted.month() != date.month() {
                    walk(self, date, -1)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = walk(self, date, -1)?;
                if adjusted.month() != date.month() {
                    walk(self, date, 1)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Nearest => {
                if self.is_business_day(date) {
                    return Ok(date);
                }
                // Either walk may leave the date range; the other still answers.
                match (walk(self, date, 1), walk(self, date, -1)) {
                    (Ok(fwd), Ok(bwd)) if date - bwd < fwd - date => Ok(bwd),
                    (Ok(fwd), _) => Ok(fwd),
                    (Err(_), bwd) => bwd,
                }
            }
        }
    }

    /// Advance `date` by `n` business days.
    fn advance_business_days(&self, mut date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let sign = if d2 >= d1 { 1 } else { -1 };
        let (start, end) = if d2 >= d1 { (d1, d2) } else { (d2, d1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|d| self.is_business_day(*d))
            .count() as i32;
        sign * count
    }
}

/// Step from `date` in direction `step` until a business day is found.
fn walk<C: Calendar + ?Sized>(cal: &C, mut date: Date, step: i32) -> Result<Date> {
    while cal.is_holiday(date) {
        date = date.add_days(step)?;
    }
    Ok(date)
}

/// A null calendar: treats every day as a business day, so every
/// adjustment is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }

    fn is_weekend(&self, _date: Date) -> bool {
        false
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no additional holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn null_calendar_always_business() {
        let cal = NullCalendar;
        assert!(cal.is_business_day(date(2023, 12, 25)));
        assert!(cal.is_business_day(date(2023, 9, 2)));
        let sat = date(2023, 9, 2);
        for c in [
            BusinessDayConvention::Following,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::Nearest,
        ] {
            assert_eq!(cal.adjust(sat, c).unwrap(), sat);
        }
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        assert!(!cal.is_business_day(date(2023, 9, 2)));
        assert!(cal.is_business_day(date(2023, 9, 4)));
    }

    #[test]
    fn adjust_following() {
        let cal = WeekendsOnly;
        // Saturday → next business day is Monday 2023-09-04
        let adjusted = cal.adjust(date(2023, 9, 2), BusinessDayConvention::Following);
        assert_eq!(adjusted.unwrap(), date(2023, 9, 4));
    }

    #[test]
    fn adjust_preceding() {
        let cal = WeekendsOnly;
        let adjusted = cal.adjust(date(2023, 9, 2), BusinessDayConvention::Preceding);
        assert_eq!(adjusted.unwrap(), date(2023, 9, 1)); // Friday
    }

    #[test]
    fn adjust_modified_following_stays_in_month() {
        let cal = WeekendsOnly;
        // 2023-09-30 is a Saturday; Following would roll into October.
        let d = date(2023, 9, 30);
        assert_eq!(
            cal.adjust(d, BusinessDayConvention::Following).unwrap(),
            date(2023, 10, 2)
        );
        assert_eq!(
            cal.adjust(d, BusinessDayConvention::ModifiedFollowing).unwrap(),
            date(2023, 9, 29)
        );
        // 2023-07-01 is a Saturday; Preceding would roll into June.
        assert_eq!(
            cal.adjust(date(2023, 7, 1), BusinessDayConvention::ModifiedPreceding)
                .unwrap(),
            date(2023, 7, 3)
        );
    }

    #[test]
    fn adjust_nearest() {
        let cal = WeekendsOnly;
        // Saturday is nearer to Friday, Sunday nearer to Monday.
        assert_eq!(
            cal.adjust(date(2023, 9, 2), BusinessDayConvention::Nearest).unwrap(),
            date(2023, 9, 1)
        );
        assert_eq!(
            cal.adjust(date(2023, 9, 3), BusinessDayConvention::Nearest).unwrap(),
            date(2023, 9, 4)
        );
    }

    #[derive(Debug)]
    struct Closed;

    impl Calendar for Closed {
        fn name(&self) -> &str {
            "Closed"
        }

        fn is_business_day(&self, _date: Date) -> bool {
            false
        }
    }

    #[test]
    fn adjust_out_of_range() {
        // 2199-12-31 is a Tuesday: no walk needed.
        assert!(WeekendsOnly
            .adjust(Date::MAX, BusinessDayConvention::Following)
            .is_ok());
        // A walk that never finds a business day fails at the range boundary.
        let err = Closed.adjust(Date::MAX - 3, BusinessDayConvention::Following);
        assert!(matches!(err, Err(rc_core::Error::InvalidDate(_))));
    }

    /// Business days are those on or after the opening date.
    #[derive(Debug)]
    struct OpenFrom(Date);

    impl Calendar for OpenFrom {
        fn name(&self) -> &str {
            "OpenFrom"
        }

        fn is_business_day(&self, date: Date) -> bool {
            date >= self.0
        }
    }

    #[test]
    fn adjust_nearest_at_range_start() {
        // No business day precedes the date; the forward answer stands.
        let opening = Date::MIN + 9;
        let cal = OpenFrom(opening);
        assert_eq!(
            cal.adjust(Date::MIN + 2, BusinessDayConvention::Nearest).unwrap(),
            opening
        );
        assert!(cal
            .adjust(Date::MIN + 2, BusinessDayConvention::Preceding)
            .is_err());
        // Nothing in range at all still fails.
        assert!(matches!(
            Closed.adjust(Date::MIN + 2, BusinessDayConvention::Nearest),
            Err(rc_core::Error::InvalidDate(_))
        ));
    }

    #[test]
    fn end_of_month() {
        let cal = WeekendsOnly;
        // September 2023 ends on a Saturday; last business day is the 29th.
        assert_eq!(cal.end_of_month(date(2023, 9, 10)).unwrap(), date(2023, 9, 29));
        assert!(cal.is_end_of_month(date(2023, 9, 29)).unwrap());
        assert!(!cal.is_end_of_month(date(2023, 9, 28)).unwrap());
    }

    #[test]
    fn business_days() {
        let cal = WeekendsOnly;
        let d1 = date(2023, 9, 4); // Monday
        let d2 = date(2023, 9, 8); // Friday
        // Tue, Wed, Thu, Fri = 4 business days (d1 exclusive)
        assert_eq!(cal.business_days_between(d1, d2), 4);
        assert_eq!(cal.business_days_between(d2, d1), -4);
        assert_eq!(cal.advance_business_days(d2, 1).unwrap(), date(2023, 9, 11));
        assert_eq!(cal.advance_business_days(date(2023, 9, 11), -1).unwrap(), d2);
    }
}
