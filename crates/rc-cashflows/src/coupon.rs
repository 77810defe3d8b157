//! `Coupon` trait: base for interest-rate coupons.
//!
//! A coupon accrues interest over `[accrual_start, accrual_end]` and pays on
//! its payment date.

use crate::cashflow::CashFlow;
use rc_core::{errors::Result, Real};
use rc_time::{Date, DayCounter};

/// Base trait for interest-rate coupons.
pub trait Coupon: CashFlow {
    /// The notional (face) amount.
    fn nominal(&self) -> Real;

    /// Start of the accrual period.
    fn accrual_start_date(&self) -> Date;

    /// End of the accrual period.
    fn accrual_end_date(&self) -> Date;

    /// Reference period start (may differ for irregular coupons).
    fn reference_period_start(&self) -> Date {
        self.accrual_start_date()
    }

    /// Reference period end (may differ for irregular coupons).
    fn reference_period_end(&self) -> Date {
        self.accrual_end_date()
    }

    /// The accrual period as a year fraction.
    fn accrual_period(&self) -> Real;

    /// The day counter used for accrual.
    fn day_counter(&self) -> &dyn DayCounter;

    /// The annualized coupon rate.
    fn rate(&self) -> Real;

    /// Interest accrued from the accrual start up to `date`.
    ///
    /// Zero before the accrual start and after the payment date.
    fn accrued_amount(&self, date: Date) -> Result<Real>;
}
