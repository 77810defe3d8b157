//! `Instrument` and `PricingEngine` traits.
//!
//! An instrument holds its contractual data plus an optional pricing
//! engine.  Pricing is never memoised: every `calculate` call runs the
//! engine again, so moving market data between calls is always observed.

use rc_core::{errors::Result, Real};
use rc_time::Date;
use std::collections::HashMap;

/// Results of pricing an instrument.
///
/// Contains the NPV and optionally additional named results
/// (e.g. `"leg_npv_0"`).
#[derive(Debug, Clone, Default)]
pub struct PricingResults {
    /// Net present value.
    pub npv: Real,
    /// Date the NPV refers to, if the engine reports one.
    pub valuation_date: Option<Date>,
    /// Additional named results.
    pub additional_results: HashMap<String, Real>,
}

impl PricingResults {
    /// Create pricing results with just an NPV.
    pub fn from_npv(npv: Real) -> Self {
        Self {
            npv,
            ..Self::default()
        }
    }

    /// Record the valuation date.
    pub fn with_valuation_date(mut self, date: Date) -> Self {
        self.valuation_date = Some(date);
        self
    }

    /// Add a named result.
    pub fn with_result(mut self, key: impl Into<String>, value: Real) -> Self {
        self.additional_results.insert(key.into(), value);
        self
    }

    /// Look up a named result.
    pub fn result(&self, key: &str) -> Option<Real> {
        self.additional_results.get(key).copied()
    }
}

/// A pricing engine for instruments of type `I`.
pub trait PricingEngine<I: ?Sized>: std::fmt::Debug + Send + Sync {
    /// Price `instrument`.
    fn calculate(&self, instrument: &I) -> Result<PricingResults>;
}

/// Base trait for all financial instruments.
pub trait Instrument: std::fmt::Debug + Send + Sync {
    /// Run the attached pricing engine.
    ///
    /// # Errors
    /// [`Error::MissingPricingEngine`](rc_core::Error::MissingPricingEngine)
    /// if no engine is attached, or any error raised by the engine.
    fn calculate(&self) -> Result<PricingResults>;

    /// Net present value, recomputed on every call.
    fn npv(&self) -> Result<Real> {
        Ok(self.calculate()?.npv)
    }

    /// Whether every cash flow of the instrument has already occurred.
    fn is_expired(&self) -> bool;

    /// The maturity or last relevant date.
    fn maturity_date(&self) -> Option<Date> {
        None
    }
}
