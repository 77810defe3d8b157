//! # rc-cashflows
//!
//! Cash flows, fixed-rate coupons, leg construction and leg analytics.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `CashFlow` trait, `Leg`, and plain cash flows.
pub mod cashflow;

/// Functions over a whole leg: NPV, BPS, and date queries.
pub mod cashflows;

/// `Coupon` trait.
pub mod coupon;

/// `FixedRateCoupon` and `FixedRateLegBuilder`.
pub mod fixed_rate_coupon;

pub use cashflow::{CashFlow, Leg, Redemption, SimpleCashFlow};
pub use cashflows::{
    bps, maturity_date, next_cashflow_date, npv, npv_after, previous_cashflow_date, start_date,
};
pub use coupon::Coupon;
pub use fixed_rate_coupon::{FixedRateCoupon, FixedRateLegBuilder};
