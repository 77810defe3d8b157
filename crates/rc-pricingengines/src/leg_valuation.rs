//! A leg bound to a discount curve.

use rc_cashflows::{npv, CashFlow};
use rc_core::{errors::Result, Handle, Real};
use rc_termstructures::YieldTermStructure;

/// A borrowed leg paired with a discount curve.
///
/// Binding stores references only.  [`npv`](LegValuation::npv) discounts
/// every flow again on each call, so quote moves on the curve are always
/// reflected.
#[derive(Debug, Clone)]
pub struct LegValuation<'a> {
    leg: &'a [Box<dyn CashFlow>],
    curve: Handle<dyn YieldTermStructure>,
}

impl<'a> LegValuation<'a> {
    /// Pair `leg` with `curve`.
    pub fn bind(leg: &'a [Box<dyn CashFlow>], curve: Handle<dyn YieldTermStructure>) -> Self {
        Self { leg, curve }
    }

    /// Replace the curve, keeping the leg.
    pub fn rebind(&mut self, curve: Handle<dyn YieldTermStructure>) {
        self.curve = curve;
    }

    /// The bound leg.
    pub fn leg(&self) -> &'a [Box<dyn CashFlow>] {
        self.leg
    }

    /// The bound curve.
    pub fn curve(&self) -> &Handle<dyn YieldTermStructure> {
        &self.curve
    }

    /// `Σ amount × discount(payment_date)` over the whole leg.
    ///
    /// # Errors
    /// [`Error::NullValue`](rc_core::Error::NullValue) for an empty curve
    /// handle; [`Error::InvalidRange`](rc_core::Error::InvalidRange) if a
    /// flow precedes the curve's reference date.
    pub fn npv(&self) -> Result<Real> {
        npv(self.leg, self.curve.current()?)
    }
}
