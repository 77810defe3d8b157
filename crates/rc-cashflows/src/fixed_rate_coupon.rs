//! Fixed-rate coupons and the fixed-rate leg builder.

use std::sync::Arc;

use crate::cashflow::{CashFlow, Leg, Redemption};
use crate::coupon::Coupon;
use rc_core::{ensure, errors::Result, Compounding, Error, Real};
use rc_time::{
    Actual365Fixed, BusinessDayConvention, Calendar, Date, DayCounter, Frequency, InterestRate,
    NullCalendar, Schedule,
};
use tracing::debug;

/// A coupon paying a fixed interest rate.
///
/// The amount is `nominal × (compound_factor(accrual_period) − 1)`, which for
/// simple compounding is `nominal × rate × accrual_period`.  It is computed
/// once at construction.
#[derive(Debug)]
pub struct FixedRateCoupon {
    nominal: Real,
    payment_date: Date,
    rate: InterestRate,
    accrual_start: Date,
    accrual_end: Date,
    ref_start: Date,
    ref_end: Date,
    accrual_period: Real,
    amount: Real,
}

impl FixedRateCoupon {
    /// Create a new fixed-rate coupon.  Accrual uses the rate's day counter.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `accrual_end` precedes `accrual_start`, or
    /// any error from compounding the rate over the accrual period.
    pub fn new(
        payment_date: Date,
        nominal: Real,
        rate: InterestRate,
        accrual_start: Date,
        accrual_end: Date,
    ) -> Result<Self> {
        let accrual_period = rate.day_counter().year_fraction(accrual_start, accrual_end)?;
        let amount = nominal * (rate.compound_factor_time(accrual_period)? - 1.0);
        Ok(Self {
            nominal,
            payment_date,
            rate,
            accrual_start,
            accrual_end,
            ref_start: accrual_start,
            ref_end: accrual_end,
            accrual_period,
            amount,
        })
    }

    /// Set a reference period differing from the accrual period.
    pub fn with_reference_period(mut self, start: Date, end: Date) -> Self {
        self.ref_start = start;
        self.ref_end = end;
        self
    }

    /// The coupon's `InterestRate`.
    pub fn interest_rate(&self) -> &InterestRate {
        &self.rate
    }
}

impl CashFlow for FixedRateCoupon {
    fn date(&self) -> Date {
        self.payment_date
    }

    fn amount(&self) -> Real {
        self.amount
    }

    fn as_coupon(&self) -> Option<&dyn Coupon> {
        Some(self)
    }
}

impl Coupon for FixedRateCoupon {
    fn nominal(&self) -> Real {
        self.nominal
    }

    fn accrual_start_date(&self) -> Date {
        self.accrual_start
    }

    fn accrual_end_date(&self) -> Date {
        self.accrual_end
    }

    fn reference_period_start(&self) -> Date {
        self.ref_start
    }

    fn reference_period_end(&self) -> Date {
        self.ref_end
    }

    fn accrual_period(&self) -> Real {
        self.accrual_period
    }

    fn day_counter(&self) -> &dyn DayCounter {
        self.rate.day_counter()
    }

    fn rate(&self) -> Real {
        self.rate.rate()
    }

    fn accrued_amount(&self, date: Date) -> Result<Real> {
        if date <= self.accrual_start || date > self.payment_date {
            return Ok(0.0);
        }
        let end = date.min(self.accrual_end);
        Ok(self.nominal * (self.rate.compound_factor(self.accrual_start, end)? - 1.0))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed-rate leg builder
// ────────────────────────────────────────────────────────────────────────────

/// Build a fixed-rate leg from a schedule.
///
/// One coupon is emitted per schedule period.  Notionals and coupon rates
/// may be given per period; a vector shorter than the number of periods
/// extends its last value, and a single value applies to every period.
///
/// Defaults: Actual/365 (Fixed) accrual, simple compounding, payment on the
/// period end adjusted `Following` on a `NullCalendar`, no redemption.
pub struct FixedRateLegBuilder<'a> {
    schedule: &'a Schedule,
    notionals: Vec<Real>,
    coupon_rates: Vec<Real>,
    day_counter: Arc<dyn DayCounter>,
    compounding: Compounding,
    frequency: Frequency,
    payment_calendar: Arc<dyn Calendar>,
    payment_convention: BusinessDayConvention,
    redemption: bool,
}

impl<'a> FixedRateLegBuilder<'a> {
    /// Create a new builder from a schedule.
    pub fn new(schedule: &'a Schedule) -> Self {
        Self {
            schedule,
            notionals: Vec::new(),
            coupon_rates: Vec::new(),
            day_counter: Arc::new(Actual365Fixed),
            compounding: Compounding::Simple,
            frequency: Frequency::Annual,
            payment_calendar: Arc::new(NullCalendar),
            payment_convention: BusinessDayConvention::Following,
            redemption: false,
        }
    }

    /// Use a single notional for every period.
    pub fn with_notional(self, notional: Real) -> Self {
        self.with_notionals(vec![notional])
    }

    /// Set per-period notionals.
    pub fn with_notionals(mut self, notionals: Vec<Real>) -> Self {
        self.notionals = notionals;
        self
    }

    /// Use a single coupon rate for every period.
    pub fn with_coupon_rate(self, rate: Real) -> Self {
        self.with_coupon_rates(vec![rate])
    }

    /// Set per-period coupon rates.
    pub fn with_coupon_rates(mut self, rates: Vec<Real>) -> Self {
        self.coupon_rates = rates;
        self
    }

    /// Set the accrual day counter.
    pub fn with_day_counter(mut self, dc: impl DayCounter + 'static) -> Self {
        self.day_counter = Arc::new(dc);
        self
    }

    /// Set the compounding convention of the coupon rates.
    pub fn with_compounding(mut self, compounding: Compounding, frequency: Frequency) -> Self {
        self.compounding = compounding;
        self.frequency = frequency;
        self
    }

    /// Set the calendar used to adjust payment dates.
    pub fn with_payment_calendar(mut self, calendar: impl Calendar + 'static) -> Self {
        self.payment_calendar = Arc::new(calendar);
        self
    }

    /// Set the payment business-day convention.
    pub fn with_payment_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.payment_convention = convention;
        self
    }

    /// Append a repayment of the final notional at maturity.
    pub fn with_redemption(mut self, flag: bool) -> Self {
        self.redemption = flag;
        self
    }

    /// Build the leg.
    ///
    /// # Errors
    /// * [`Error::InsufficientPeriods`] if the schedule has fewer than two
    ///   dates;
    /// * [`Error::Precondition`] if no notional or no coupon rate was given;
    /// * any error from payment-date adjustment or coupon accrual.
    pub fn build(self) -> Result<Leg> {
        let dates = self.schedule.dates();
        if dates.len() < 2 {
            return Err(Error::InsufficientPeriods { found: dates.len() });
        }
        ensure!(!self.notionals.is_empty(), "no notional given");
        ensure!(!self.coupon_rates.is_empty(), "no coupon rate given");

        let n = dates.len() - 1;
        let mut leg: Leg = Vec::with_capacity(n + usize::from(self.redemption));
        for (i, (start, end)) in self.schedule.periods().enumerate() {
            let payment = self.payment_calendar.adjust(end, self.payment_convention)?;
            let rate = InterestRate::with_shared_day_counter(
                extended(&self.coupon_rates, i),
                Arc::clone(&self.day_counter),
                self.compounding,
                self.frequency,
            );
            let coupon =
                FixedRateCoupon::new(payment, extended(&self.notionals, i), rate, start, end)?;
            leg.push(Box::new(coupon));
        }

        if self.redemption {
            let payment = self.payment_calendar.adjust(dates[n], self.payment_convention)?;
            leg.push(Box::new(Redemption::new(extended(&self.notionals, n - 1), payment)));
        }

        debug!(
            coupons = n,
            redemption = self.redemption,
            day_counter = self.day_counter.name(),
            "built fixed-rate leg"
        );
        Ok(leg)
    }
}

/// The `i`-th value, or the last one if `values` is shorter.
fn extended(values: &[Real], i: usize) -> Real {
    values[i.min(values.len() - 1)]
}
