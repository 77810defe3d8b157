//! Interest rate with compounding and day-counting conventions.
//!
//! An `InterestRate` bundles a rate value with a `DayCounter`, a
//! `Compounding` convention, and a `Frequency`.  It computes compound
//! factors, discount factors, and implied/equivalent rates.

use crate::date::Date;
use crate::day_counter::{Actual365Fixed, DayCounter};
use crate::frequency::Frequency;
use rc_core::errors::{Error, Result};
use rc_core::{ensure, Compounding, DiscountFactor, Rate, Real, Time};
use std::sync::Arc;

/// An interest rate with associated compounding and day-counting conventions.
#[derive(Debug, Clone)]
pub struct InterestRate {
    rate: Rate,
    dc: Arc<dyn DayCounter>,
    compounding: Compounding,
    frequency: Frequency,
}

impl InterestRate {
    /// Create a new interest rate.
    ///
    /// # Arguments
    /// * `rate`: the annual rate as a decimal (e.g. 0.05 = 5%)
    /// * `dc`: day counter for year-fraction calculations
    /// * `compounding`: compounding convention
    /// * `frequency`: compounding frequency (ignored for Simple and Continuous)
    pub fn new(
        rate: Rate,
        dc: impl DayCounter + 'static,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Self {
        Self::with_shared_day_counter(rate, Arc::new(dc), compounding, frequency)
    }

    /// Create a new interest rate sharing an existing day counter.
    pub fn with_shared_day_counter(
        rate: Rate,
        dc: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Self {
        Self {
            rate,
            dc,
            compounding,
            frequency,
        }
    }

    /// The rate value.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// The day counter.
    pub fn day_counter(&self) -> &dyn DayCounter {
        &*self.dc
    }

    /// The shared day counter.
    pub fn shared_day_counter(&self) -> Arc<dyn DayCounter> {
        Arc::clone(&self.dc)
    }

    /// The compounding convention.
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// The compounding frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Compound factor for a given time period `t` (in years).
    ///
    /// # Errors
    /// * [`Error::InvalidRange`] if `t < 0`;
    /// * [`Error::UnsupportedFrequency`] for `Compounded` without a
    ///   per-year frequency;
    /// * [`Error::Precondition`] if a simple factor `1 + r·t` is not positive.
    pub fn compound_factor_time(&self, t: Time) -> Result<Real> {
        if t < 0.0 {
            return Err(Error::invalid_range(0.0, t));
        }
        if t == 0.0 {
            return Ok(1.0);
        }
        match self.compounding {
            Compounding::Simple => {
                let factor = 1.0 + self.rate * t;
                ensure!(factor > 0.0, "non-positive compound factor {factor}");
                Ok(factor)
            }
            Compounding::Compounded => {
                let f = compounding_frequency(self.frequency)?;
                Ok((1.0 + self.rate / f).powf(f * t))
            }
            Compounding::Continuous => Ok((self.rate * t).exp()),
        }
    }

    /// Compound factor between two dates, using this rate's day counter.
    pub fn compound_factor(&self, d1: Date, d2: Date) -> Result<Real> {
        self.compound_factor_time(self.dc.year_fraction(d1, d2)?)
    }

    /// Discount factor for a given time period `t` (in years).
    pub fn discount_factor_time(&self, t: Time) -> Result<DiscountFactor> {
        Ok(1.0 / self.compound_factor_time(t)?)
    }

    /// Discount factor between two dates.
    pub fn discount_factor(&self, d1: Date, d2: Date) -> Result<DiscountFactor> {
        Ok(1.0 / self.compound_factor(d1, d2)?)
    }

    /// The rate equivalent to this one under different conventions over `t`.
    pub fn equivalent_rate_time(
        &self,
        comp: Compounding,
        freq: Frequency,
        t: Time,
    ) -> Result<InterestRate> {
        let compound = self.compound_factor_time(t)?;
        let implied = Self::implied_rate_time(compound, comp, freq, t)?;
        Ok(Self::with_shared_day_counter(
            implied.rate,
            self.shared_day_counter(),
            comp,
            freq,
        ))
    }

    /// Implied rate from a compound factor observed over time `t`.
    ///
    /// The returned rate carries an Actual/365 (Fixed) day counter; use
    /// [`with_shared_day_counter`](Self::with_shared_day_counter) to attach
    /// another one.
    pub fn implied_rate_time(
        compound: Real,
        comp: Compounding,
        freq: Frequency,
        t: Time,
    ) -> Result<InterestRate> {
        ensure!(compound > 0.0, "positive compound factor required, got {compound}");
        if t < 0.0 {
            return Err(Error::invalid_range(0.0, t));
        }
        let r = if t == 0.0 {
            0.0
        } else {
            match comp {
                Compounding::Simple => (compound - 1.0) / t,
                Compounding::Compounded => {
                    let f = compounding_frequency(freq)?;
                    (compound.powf(1.0 / (f * t)) - 1.0) * f
                }
                Compounding::Continuous => compound.ln() / t,
            }
        };
        Ok(InterestRate::new(r, Actual365Fixed, comp, freq))
    }
}

/// Number of compounding periods per year for `Compounded` rates.
fn compounding_frequency(freq: Frequency) -> Result<Real> {
    match freq.periods_per_year() {
        Some(n) if n > 0 => Ok(n as Real),
        _ => Err(Error::UnsupportedFrequency(format!(
            "{freq} is not a compounding frequency"
        ))),
    }
}

impl std::fmt::Display for InterestRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.4}% {} {} {}",
            self.rate * 100.0,
            self.dc.name(),
            self.compounding,
            self.frequency,
        )
    }
}
