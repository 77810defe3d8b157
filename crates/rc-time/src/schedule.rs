//! `Schedule`: a sequence of period boundary dates.
//!
//! A `Schedule` holds the payment/accrual dates for a cash-flow stream given
//! a start date, maturity date, tenor, calendar, and business-day
//! conventions.
//!
//! # Stubs
//!
//! When the tenor does not divide the start-to-maturity span evenly, the
//! leftover is a **short stub**: at the end of the schedule for
//! [`DateGeneration::Forward`], at the front for
//! [`DateGeneration::Backward`].  Stub periods are flagged as irregular.

use crate::business_day_convention::BusinessDayConvention;
use crate::calendar::Calendar;
use crate::date::Date;
use crate::period::Period;
use crate::time_unit::TimeUnit;
use rc_core::errors::{Error, Result};
use rc_core::{ensure, Size};
use tracing::{debug, warn};

/// Date generation rule for schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateGeneration {
    /// Dates generated backward from the maturity date.
    Backward,
    /// Dates generated forward from the start date.
    Forward,
    /// Zero coupon: only start and maturity dates.
    Zero,
}

/// An ordered, strictly increasing sequence of period boundary dates.
///
/// A schedule is immutable once built; building a different one means
/// generating a new instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    dates: Vec<Date>,
    /// One entry per period (`dates.len() - 1` entries).
    is_regular: Vec<bool>,
    tenor: Option<Period>,
    rule: Option<DateGeneration>,
}

impl Schedule {
    /// Generate a schedule.
    ///
    /// `convention` adjusts the start and every intermediate date;
    /// `termination_convention` adjusts the maturity date.
    ///
    /// # Errors
    /// * [`Error::InvalidRange`] if `maturity` is not after `start`;
    /// * [`Error::Precondition`] for a negative tenor;
    /// * [`Error::InvalidDate`] if date arithmetic leaves the supported range.
    #[allow(clippy::too_many_arguments)]
    pub fn generate(
        start: Date,
        maturity: Date,
        tenor: Period,
        calendar: &dyn Calendar,
        convention: BusinessDayConvention,
        termination_convention: BusinessDayConvention,
        rule: DateGeneration,
        end_of_month: bool,
    ) -> Result<Self> {
        ScheduleBuilder::new(start, maturity, tenor, calendar)
            .with_convention(convention)
            .with_termination_convention(termination_convention)
            .with_rule(rule)
            .end_of_month(end_of_month)
            .build()
    }

    /// Build a schedule from an explicit list of dates.
    ///
    /// Every period is considered regular.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if the dates are not strictly increasing.
    pub fn from_dates(dates: Vec<Date>) -> Result<Self> {
        if let Some(w) = dates.windows(2).find(|w| w[1] <= w[0]) {
            return Err(Error::invalid_range(w[0], w[1]));
        }
        Ok(Self {
            is_regular: vec![true; dates.len().saturating_sub(1)],
            dates,
            tenor: None,
            rule: None,
        })
    }

    /// Return all dates in the schedule.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of dates.
    pub fn size(&self) -> Size {
        self.dates.len()
    }

    /// Return `true` if the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Return the `i`-th date.
    ///
    /// # Panics
    /// If `i >= self.size()`, like slice indexing.
    pub fn date(&self, i: usize) -> Date {
        self.dates[i]
    }

    /// Return the start (effective) date.
    pub fn start_date(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Return the end (termination) date.
    pub fn end_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Iterate over consecutive `(period_start, period_end)` pairs.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        self.dates.windows(2).map(|w| (w[0], w[1]))
    }

    /// Return `true` if period `i` (0-based, between `date(i)` and
    /// `date(i + 1)`) is a full tenor rather than a stub.
    pub fn is_regular(&self, i: usize) -> bool {
        self.is_regular.get(i).copied().unwrap_or(true)
    }

    /// The tenor used for generation, if generated.
    pub fn tenor(&self) -> Option<Period> {
        self.tenor
    }

    /// The generation rule, if generated.
    pub fn rule(&self) -> Option<DateGeneration> {
        self.rule
    }
}

/// Builder for [`Schedule`].
///
/// Defaults: `ModifiedFollowing` for both conventions, `Backward`
/// generation, no end-of-month snapping.
#[derive(Debug)]
pub struct ScheduleBuilder<'a> {
    effective_date: Date,
    termination_date: Date,
    tenor: Period,
    calendar: &'a dyn Calendar,
    convention: BusinessDayConvention,
    termination_convention: BusinessDayConvention,
    rule: DateGeneration,
    end_of_month: bool,
}

impl<'a> ScheduleBuilder<'a> {
    /// Begin building a schedule.
    pub fn new(
        effective_date: Date,
        termination_date: Date,
        tenor: Period,
        calendar: &'a dyn Calendar,
    ) -> Self {
        Self {
            effective_date,
            termination_date,
            tenor,
            calendar,
            convention: BusinessDayConvention::ModifiedFollowing,
            termination_convention: BusinessDayConvention::ModifiedFollowing,
            rule: DateGeneration::Backward,
            end_of_month: false,
        }
    }

    /// Set the business-day convention for the start and intermediate dates.
    pub fn with_convention(mut self, c: BusinessDayConvention) -> Self {
        self.convention = c;
        self
    }

    /// Set the business-day convention for the termination date.
    pub fn with_termination_convention(mut self, c: BusinessDayConvention) -> Self {
        self.termination_convention = c;
        self
    }

    /// Set the date-generation rule.
    pub fn with_rule(mut self, rule: DateGeneration) -> Self {
        self.rule = rule;
        self
    }

    /// Whether to snap intermediate dates to the end of the month when the
    /// anchor date is the last business day of its month.  Only affects
    /// month and year tenors.
    pub fn end_of_month(mut self, flag: bool) -> Self {
        self.end_of_month = flag;
        self
    }

    /// Build the `Schedule`.
    pub fn build(self) -> Result<Schedule> {
        let start = self.effective_date;
        let end = self.termination_date;

        if end <= start {
            return Err(Error::invalid_range(start, end));
        }
        ensure!(self.tenor.length >= 0, "negative tenor {} not allowed", self.tenor);

        let rule = if self.tenor.length == 0 {
            DateGeneration::Zero
        } else {
            self.rule
        };

        // Unadjusted boundaries plus the regularity of each period.
        let (raw, regular) = match rule {
            DateGeneration::Zero => (vec![start, end], vec![true]),
            DateGeneration::Forward => self.roll_forward(start, end)?,
            DateGeneration::Backward => self.roll_backward(start, end)?,
        };

        let anchor = match rule {
            DateGeneration::Backward => end,
            _ => start,
        };
        let snap = self.end_of_month
            && matches!(self.tenor.unit, TimeUnit::Months | TimeUnit::Years)
            && self.calendar.is_end_of_month(anchor)?;

        let first = self.calendar.adjust(start, self.convention)?;
        let last = self.calendar.adjust(end, self.termination_convention)?;
        if last <= first {
            return Err(Error::invalid_range(first, last));
        }

        let mut dates = Vec::with_capacity(raw.len());
        let mut is_regular = Vec::with_capacity(regular.len());
        dates.push(first);
        let mut merged = false;
        for (i, &d) in raw.iter().enumerate().take(raw.len() - 1).skip(1) {
            let adjusted = if snap {
                self.snap_to_end_of_month(d)?
            } else {
                self.calendar.adjust(d, self.convention)?
            };
            let previous = dates[dates.len() - 1];
            if adjusted <= previous || adjusted >= last {
                warn!(
                    date = %d,
                    adjusted = %adjusted,
                    "dropping schedule date that collides with its neighbour"
                );
                merged = true;
                continue;
            }
            dates.push(adjusted);
            is_regular.push(regular[i - 1] && !merged);
            merged = false;
        }
        dates.push(last);
        is_regular.push(regular[regular.len() - 1] && !merged);

        debug!(
            rule = ?rule,
            tenor = %self.tenor,
            calendar = self.calendar.name(),
            dates = dates.len(),
            "generated schedule"
        );

        Ok(Schedule {
            dates,
            is_regular,
            tenor: Some(self.tenor),
            rule: Some(rule),
        })
    }

    /// Length of `n` tenors in tenor units.
    fn step(&self, n: i32, from: Date) -> Result<i32> {
        n.checked_mul(self.tenor.length).ok_or_else(|| {
            Error::InvalidDate(format!("{from} advanced by {n} x {} overflows", self.tenor))
        })
    }

    /// Step forward from `start`; a short stub, if any, ends the schedule.
    fn roll_forward(&self, start: Date, end: Date) -> Result<(Vec<Date>, Vec<bool>)> {
        let mut dates = vec![start];
        let mut regular = Vec::new();
        let mut n = 1;
        let last_regular = loop {
            let next = start.advance(self.step(n, start)?, self.tenor.unit)?;
            if next >= end {
                break next == end;
            }
            dates.push(next);
            regular.push(true);
            n += 1;
        };
        dates.push(end);
        regular.push(last_regular);
        Ok((dates, regular))
    }

    /// Step backward from `end`; a short stub, if any, starts the schedule.
    fn roll_backward(&self, start: Date, end: Date) -> Result<(Vec<Date>, Vec<bool>)> {
        let mut dates = vec![end];
        let mut regular = Vec::new();
        let mut n = 1;
        let first_regular = loop {
            let prev = end.advance(-self.step(n, end)?, self.tenor.unit)?;
            if prev <= start {
                break prev == start;
            }
            dates.push(prev);
            regular.push(true);
            n += 1;
        };
        dates.push(start);
        regular.push(first_regular);
        dates.reverse();
        regular.reverse();
        Ok((dates, regular))
    }

    fn snap_to_end_of_month(&self, d: Date) -> Result<Date> {
        if self.convention == BusinessDayConvention::Unadjusted {
            Ok(d.end_of_month())
        } else {
            self.calendar.end_of_month(d)
        }
    }
}
