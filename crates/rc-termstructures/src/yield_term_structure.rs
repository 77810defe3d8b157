//! `YieldTermStructure`: yield / interest-rate term structures.
//!
//! Implementors provide [`discount_impl`](YieldTermStructure::discount_impl);
//! everything else (date-based discounting, zero and forward rates under
//! any compounding convention) is derived from it.

use std::sync::Arc;

use crate::term_structure::TermStructure;
use rc_core::{errors::Result, Compounding, DiscountFactor, Error, Real, Time};
use rc_time::{Date, DayCounter, Frequency, InterestRate};

/// Time step used when a rate is requested over a zero-length interval.
const DT: Real = 1.0e-4;

/// A yield (interest-rate) term structure.
pub trait YieldTermStructure: TermStructure {
    /// Discount factor for a non-negative time `t`.
    fn discount_impl(&self, t: Time) -> Result<DiscountFactor>;

    // ── Discount factors ─────────────────────────────────────────────────

    /// Discount factor for a time.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `t < 0`.
    fn discount(&self, t: Time) -> Result<DiscountFactor> {
        if t < 0.0 {
            return Err(Error::invalid_range(0.0, t));
        }
        self.discount_impl(t)
    }

    /// Discount factor for a date.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `date` precedes the reference date or lies
    /// beyond [`max_date`](TermStructure::max_date).
    fn discount_date(&self, date: Date) -> Result<DiscountFactor> {
        self.check_range(date)?;
        self.discount_impl(self.time_from_reference(date)?)
    }

    // ── Zero rates ───────────────────────────────────────────────────────

    /// Zero rate between the reference date and `date`, expressed under the
    /// given day counter and compounding conventions.
    fn zero_rate(
        &self,
        date: Date,
        dc: Arc<dyn DayCounter>,
        comp: Compounding,
        freq: Frequency,
    ) -> Result<InterestRate> {
        let (compound, t) = if date == self.reference_date() {
            (1.0 / self.discount(DT)?, DT)
        } else {
            (
                1.0 / self.discount_date(date)?,
                dc.year_fraction(self.reference_date(), date)?,
            )
        };
        let implied = InterestRate::implied_rate_time(compound, comp, freq, t)?;
        Ok(InterestRate::with_shared_day_counter(implied.rate(), dc, comp, freq))
    }

    /// Zero rate for time `t`, expressed with the curve's day counter.
    fn zero_rate_time(&self, t: Time, comp: Compounding, freq: Frequency) -> Result<InterestRate> {
        let t = if t == 0.0 { DT } else { t };
        let compound = 1.0 / self.discount(t)?;
        let implied = InterestRate::implied_rate_time(compound, comp, freq, t)?;
        Ok(InterestRate::with_shared_day_counter(
            implied.rate(),
            Arc::clone(self.day_counter()),
            comp,
            freq,
        ))
    }

    // ── Forward rates ────────────────────────────────────────────────────

    /// Forward rate between two dates, expressed under the given conventions.
    ///
    /// When `d1 == d2` the instantaneous forward rate at `d1` is returned.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `d2 < d1` or `d1` precedes the reference
    /// date.
    fn forward_rate(
        &self,
        d1: Date,
        d2: Date,
        dc: Arc<dyn DayCounter>,
        comp: Compounding,
        freq: Frequency,
    ) -> Result<InterestRate> {
        if d2 < d1 {
            return Err(Error::invalid_range(d1, d2));
        }
        if d1 == d2 {
            self.check_range(d1)?;
            let t = self.time_from_reference(d1)?;
            let t1 = (t - DT / 2.0).max(0.0);
            let t2 = t1 + DT;
            let compound = self.discount(t1)? / self.discount(t2)?;
            let implied = InterestRate::implied_rate_time(compound, comp, freq, DT)?;
            return Ok(InterestRate::with_shared_day_counter(implied.rate(), dc, comp, freq));
        }
        let compound = self.discount_date(d1)? / self.discount_date(d2)?;
        let t = dc.year_fraction(d1, d2)?;
        let implied = InterestRate::implied_rate_time(compound, comp, freq, t)?;
        Ok(InterestRate::with_shared_day_counter(implied.rate(), dc, comp, freq))
    }

    /// Forward rate between two times, expressed with the curve's day counter.
    fn forward_rate_time(
        &self,
        t1: Time,
        t2: Time,
        comp: Compounding,
        freq: Frequency,
    ) -> Result<InterestRate> {
        if t2 < t1 {
            return Err(Error::invalid_range(t1, t2));
        }
        let (t1, t2) = if t2 == t1 {
            let start = (t1 - DT / 2.0).max(0.0);
            (start, start + DT)
        } else {
            (t1, t2)
        };
        let compound = self.discount(t1)? / self.discount(t2)?;
        let implied = InterestRate::implied_rate_time(compound, comp, freq, t2 - t1)?;
        Ok(InterestRate::with_shared_day_counter(
            implied.rate(),
            Arc::clone(self.day_counter()),
            comp,
            freq,
        ))
    }
}
