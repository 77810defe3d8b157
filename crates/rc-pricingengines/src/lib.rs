//! # rc-pricingengines
//!
//! Discounting engines for fixed-rate legs and swaps.
//!
//! - [`DiscountingSwapEngine`]: attaches to a [`Swap`](rc_instruments::Swap)
//!   and discounts every pending cash flow on a yield curve
//! - [`LegValuation`]: binds a leg to a curve and reprices it on demand

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod discounting_swap_engine;
pub mod leg_valuation;

pub use discounting_swap_engine::DiscountingSwapEngine;
pub use leg_valuation::LegValuation;
