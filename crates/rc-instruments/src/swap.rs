//! Generic multi-leg swap.

use crate::instrument::{Instrument, PricingEngine, PricingResults};
use rc_cashflows::{start_date, Leg};
use rc_core::{ensure, errors::Result, Error, Real, Settings};
use rc_time::Date;
use std::sync::Arc;

/// An exchange of cash-flow legs.
///
/// Each leg carries a sign: `+1` for a received leg, `−1` for a paid one.
/// The swap NPV is the signed sum of the leg NPVs.
#[derive(Debug)]
pub struct Swap {
    legs: Vec<Leg>,
    payer: Vec<Real>,
    engine: Option<Arc<dyn PricingEngine<Swap>>>,
}

impl Swap {
    /// Create a two-leg swap receiving `first` and paying `second`.
    ///
    /// With an empty `second` leg the swap NPV is the NPV of `first`.
    ///
    /// This is the reverse of the QuantLib `Swap(first, second)`
    /// constructor, which pays its first leg. Code ported from there should
    /// swap the arguments or use [`Swap::from_legs`] with explicit payer
    /// flags.
    pub fn new(first: Leg, second: Leg) -> Self {
        Self {
            legs: vec![first, second],
            payer: vec![1.0, -1.0],
            engine: None,
        }
    }

    /// Create a swap from any number of legs; `payer[i]` marks leg `i` as
    /// paid.
    ///
    /// # Errors
    /// [`Error::Precondition`] if the two vectors differ in length.
    pub fn from_legs(legs: Vec<Leg>, payer: Vec<bool>) -> Result<Self> {
        ensure!(
            legs.len() == payer.len(),
            "{} legs but {} payer flags",
            legs.len(),
            payer.len()
        );
        Ok(Self {
            legs,
            payer: payer.into_iter().map(|p| if p { -1.0 } else { 1.0 }).collect(),
            engine: None,
        })
    }

    /// Attach a pricing engine, replacing any previous one.  No pricing
    /// happens here.
    pub fn set_pricing_engine(&mut self, engine: Arc<dyn PricingEngine<Swap>>) {
        self.engine = Some(engine);
    }

    /// Whether an engine is attached.
    pub fn has_pricing_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// All legs.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of legs.
    pub fn num_legs(&self) -> usize {
        self.legs.len()
    }

    /// The `i`-th leg, if present.
    pub fn leg(&self, i: usize) -> Option<&Leg> {
        self.legs.get(i)
    }

    /// `+1.0` if leg `i` is received, `−1.0` if paid.
    pub fn payer_sign(&self, i: usize) -> Option<Real> {
        self.payer.get(i).copied()
    }

    /// Whether leg `i` is paid.
    pub fn is_payer(&self, i: usize) -> bool {
        self.payer.get(i).is_some_and(|s| *s < 0.0)
    }

    /// Signed NPV of leg `i`, as reported by the engine.
    pub fn leg_npv(&self, i: usize) -> Result<Real> {
        ensure!(i < self.legs.len(), "leg {i} does not exist");
        self.calculate()?
            .result(&format!("leg_npv_{i}"))
            .ok_or_else(|| Error::Runtime(format!("engine did not report leg_npv_{i}")))
    }

    /// Earliest accrual start across the non-empty legs.
    pub fn start_date(&self) -> Option<Date> {
        self.legs
            .iter()
            .filter(|leg| !leg.is_empty())
            .filter_map(|leg| start_date(leg).ok())
            .min()
    }

    /// Latest payment date across all legs.
    pub fn maturity(&self) -> Option<Date> {
        self.legs
            .iter()
            .flat_map(|leg| leg.iter().map(|cf| cf.date()))
            .max()
    }
}

impl Instrument for Swap {
    fn calculate(&self) -> Result<PricingResults> {
        let engine = self.engine.as_ref().ok_or(Error::MissingPricingEngine)?;
        engine.calculate(self)
    }

    fn is_expired(&self) -> bool {
        let settings = Settings::instance();
        let Some(today) = settings
            .evaluation_date_serial()
            .and_then(|s| Date::from_serial(s).ok())
        else {
            return false;
        };
        let include = settings.include_reference_date_events();
        self.legs
            .iter()
            .flatten()
            .all(|cf| cf.has_occurred(today, include))
    }

    fn maturity_date(&self) -> Option<Date> {
        self.maturity()
    }
}
