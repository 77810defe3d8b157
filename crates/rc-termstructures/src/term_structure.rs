//! `TermStructure`: base trait for all term structures.
//!
//! Every term structure has a **reference date**, a **day counter**, and a
//! **maximum date**.  Times are year fractions measured from the reference
//! date with the structure's own day counter.

use std::sync::Arc;

use rc_core::{errors::Result, Error, Time};
use rc_time::{Calendar, Date, DayCounter};

/// Base trait for all term structures.
pub trait TermStructure: std::fmt::Debug + Send + Sync {
    /// The date at which discount = 1.0 and from which time is measured.
    fn reference_date(&self) -> Date;

    /// The day counter used for date → time conversions.
    fn day_counter(&self) -> &Arc<dyn DayCounter>;

    /// The calendar used for date adjustments.
    fn calendar(&self) -> &dyn Calendar;

    /// The latest date for which the curve can be used.
    fn max_date(&self) -> Date;

    /// The latest time for which the curve can be used.
    fn max_time(&self) -> Result<Time> {
        self.time_from_reference(self.max_date())
    }

    /// Convert a date to a year fraction relative to the reference date.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `date` precedes the reference date.
    fn time_from_reference(&self, date: Date) -> Result<Time> {
        self.day_counter().year_fraction(self.reference_date(), date)
    }

    /// Check that `date` lies in `[reference_date, max_date]`.
    fn check_range(&self, date: Date) -> Result<()> {
        if date < self.reference_date() {
            return Err(Error::invalid_range(self.reference_date(), date));
        }
        if date > self.max_date() {
            return Err(Error::invalid_range(date, self.max_date()));
        }
        Ok(())
    }
}
