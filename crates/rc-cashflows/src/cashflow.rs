//! `CashFlow` trait: the base for all cash-flow types.
//!
//! A cash flow is an amount of money paid or received at a specific date.

use crate::coupon::Coupon;
use rc_core::Real;
use rc_time::Date;
use std::fmt;

/// Base trait for all cash flows.
pub trait CashFlow: fmt::Debug + Send + Sync {
    /// The date on which this cash flow is paid.
    fn date(&self) -> Date;

    /// The amount of cash paid on the payment date.
    fn amount(&self) -> Real;

    /// Whether this cash flow has already occurred relative to `ref_date`.
    ///
    /// A flow paid exactly on `ref_date` counts as not yet occurred when
    /// `include_ref_date` is `true`, and as occurred otherwise.
    fn has_occurred(&self, ref_date: Date, include_ref_date: bool) -> bool {
        if include_ref_date {
            self.date() < ref_date
        } else {
            self.date() <= ref_date
        }
    }

    /// View this cash flow as a coupon, if it is one.
    fn as_coupon(&self) -> Option<&dyn Coupon> {
        None
    }
}

/// An ordered sequence of cash flows, in payment order.
pub type Leg = Vec<Box<dyn CashFlow>>;

/// A fixed amount at a fixed date.
#[derive(Debug, Clone)]
pub struct SimpleCashFlow {
    amount: Real,
    date: Date,
}

impl SimpleCashFlow {
    /// Create a new simple cash flow.
    pub fn new(amount: Real, date: Date) -> Self {
        Self { amount, date }
    }
}

impl CashFlow for SimpleCashFlow {
    fn date(&self) -> Date {
        self.date
    }

    fn amount(&self) -> Real {
        self.amount
    }
}

/// Repayment of notional at maturity.
#[derive(Debug, Clone)]
pub struct Redemption(SimpleCashFlow);

impl Redemption {
    /// Create a new redemption cash flow.
    pub fn new(amount: Real, date: Date) -> Self {
        Self(SimpleCashFlow::new(amount, date))
    }
}

impl CashFlow for Redemption {
    fn date(&self) -> Date {
        self.0.date
    }

    fn amount(&self) -> Real {
        self.0.amount
    }
}
