//! `Date` type.
//!
//! Dates are represented as a serial number of days since an epoch:
//!
//! * Serial 0 is used as the "null date" sentinel.
//! * Serial 1 = January 1, 1900.
//! * The valid date range is 1900-01-01 to 2199-12-31.
//!
//! The difference of two serials is the actual number of calendar days
//! between the dates, which is what Actual/xxx day counters rely on.

use crate::period::Period;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use rc_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// The null date sentinel (serial 0).
    pub const NULL: Date = Date(0);

    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial <= 0` (which would be the null sentinel or
    /// before the epoch) or out of range.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            return Err(Error::InvalidDate(format!(
                "serial number must be positive, got {serial}"
            )));
        }
        let d = Date(serial);
        if d > Self::MAX {
            return Err(Error::InvalidDate(format!(
                "serial {serial} exceeds maximum date"
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::InvalidDate(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `true` if this is the null date sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Jan 1, 1900 (serial 1) is a Monday.
        match (self.0 - 1).rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) if serial > 0 && Date(serial) <= Self::MAX => Ok(Date(serial)),
            _ => Err(Error::InvalidDate(format!(
                "{self} advanced by {n} day(s) leaves the supported range"
            ))),
        }
    }

    /// Advance by `n` units of `unit`.
    ///
    /// Month and year steps keep the day of month, clamped to the length of
    /// the target month (Jan 31 + 1M = Feb 28/29).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(checked_scale(self, n, 7, unit)?),
            TimeUnit::Months => {
                let (y, m, d) = ymd_from_serial(self.0);
                let total = ((y as i32) * 12 + (m as i32 - 1))
                    .checked_add(n)
                    .ok_or_else(|| out_of_range(self, n, unit))?;
                let new_y = total.div_euclid(12);
                let new_m = (total.rem_euclid(12) + 1) as u8;
                if !(1900..=2199).contains(&new_y) {
                    return Err(out_of_range(self, n, unit));
                }
                let new_y = new_y as u16;
                let new_d = d.min(days_in_month(new_y, new_m));
                Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
            }
            TimeUnit::Years => self.advance(checked_scale(self, n, 12, unit)?, TimeUnit::Months),
        }
    }

    /// Advance by a [`Period`].
    pub fn advance_by(self, period: Period) -> Result<Self> {
        self.advance(period.length, period.unit)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────
//
// These panic when the result leaves the supported range; library code uses
// the checked `add_days` / `advance` instead.

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl TryFrom<i32> for Date {
    type Error = Error;
    fn try_from(serial: i32) -> Result<Self> {
        Date::from_serial(serial)
    }
}

impl From<Date> for i32 {
    fn from(date: Date) -> i32 {
        date.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "Date(null)");
        }
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn out_of_range(date: Date, n: i32, unit: TimeUnit) -> Error {
    Error::InvalidDate(format!(
        "{date} advanced by {n} {unit:?} leaves the supported range"
    ))
}

/// `n * factor`, or `InvalidDate` when the product does not fit an `i32`.
fn checked_scale(date: Date, n: i32, factor: i32, unit: TimeUnit) -> Result<i32> {
    n.checked_mul(factor).ok_or_else(|| out_of_range(date, n, unit))
}

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Convert (year, month, day) to a serial number.  Serial 1 = 1900-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    // Whole years since 1900, plus one day per leap year in [1900, year).
    let mut serial = (y - 1900) * 365;
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    while serial < serial_from_ymd(y, 1, 1) {
        y -= 1;
    }
    while y < 2199 && serial >= serial_from_ymd(y + 1, 1, 1) {
        y += 1;
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    while m < 12 && remaining > days_in_month(y, m) as i32 {
        remaining -= days_in_month(y, m) as i32;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(Date::from_ymd(2199, 12, 31).unwrap(), Date::MAX);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2024, 10, 10),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_dates() {
        assert!(matches!(Date::from_ymd(2023, 2, 29), Err(Error::InvalidDate(_))));
        assert!(matches!(Date::from_ymd(2023, 13, 1), Err(Error::InvalidDate(_))));
        assert!(matches!(Date::from_ymd(1899, 12, 31), Err(Error::InvalidDate(_))));
        assert!(matches!(Date::from_serial(0), Err(Error::InvalidDate(_))));
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_overflowing_steps_are_errors() {
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert!(matches!(d.add_days(i32::MAX), Err(Error::InvalidDate(_))));
        assert!(matches!(d.add_days(i32::MIN), Err(Error::InvalidDate(_))));
        assert!(matches!(d.advance(i32::MAX, TimeUnit::Weeks), Err(Error::InvalidDate(_))));
        assert!(matches!(d.advance(i32::MAX, TimeUnit::Months), Err(Error::InvalidDate(_))));
        assert!(matches!(d.advance(1_000_000_000, TimeUnit::Years), Err(Error::InvalidDate(_))));
        assert!(matches!(d.advance(-1_000_000_000, TimeUnit::Years), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday);
        // 2024-10-10 is a Thursday
        let d2 = Date::from_ymd(2024, 10, 10).unwrap();
        assert_eq!(d2.weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_advance_months() {
        let d = Date::from_ymd(2023, 1, 31).unwrap();
        // Jan 31 + 1 month = Feb 28 (clamp to end of month)
        let next = d.advance(1, TimeUnit::Months).unwrap();
        assert_eq!(next, Date::from_ymd(2023, 2, 28).unwrap());
        let back = Date::from_ymd(2024, 1, 15).unwrap().advance(-1, TimeUnit::Months);
        assert_eq!(back.unwrap(), Date::from_ymd(2023, 12, 15).unwrap());
    }

    #[test]
    fn test_advance_year_over_leap_span() {
        let d = Date::from_ymd(2024, 10, 10).unwrap();
        let next = d.advance(1, TimeUnit::Years).unwrap();
        assert_eq!(next, Date::from_ymd(2025, 10, 10).unwrap());
        assert_eq!(next - d, 365);
        let feb = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(
            feb.advance(1, TimeUnit::Years).unwrap(),
            Date::from_ymd(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_end_of_month() {
        let d = Date::from_ymd(2024, 2, 15).unwrap();
        let eom = d.end_of_month();
        assert_eq!(eom.day_of_month(), 29); // 2024 is a leap year
        assert!(eom.is_end_of_month());
        assert!(!d.is_end_of_month());
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2, Date::from_ymd(2023, 2, 1).unwrap());
        assert_eq!(d2 - d, 31);
        assert_eq!(d.days_between(d2), 31);
        assert_eq!(d2 - 31, d);
    }

    #[test]
    fn test_display() {
        let d = Date::from_ymd(2024, 10, 10).unwrap();
        assert_eq!(d.to_string(), "2024-10-10");
        assert_eq!(format!("{d:?}"), "Date(2024-10-10)");
        assert_eq!(Date::NULL.to_string(), "null date");
    }
}
