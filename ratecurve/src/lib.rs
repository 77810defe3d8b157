//! # ratecurve
//!
//! Flat-forward yield curves, business-day schedules, fixed-rate legs and
//! discounting valuation.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on it rather than on
//! the individual `rc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use ratecurve::prelude::*;
//!
//! # fn main() -> ratecurve::core::Result<()> {
//! let today = Date::from_ymd(2024, 10, 10)?;
//! let curve = Arc::new(FlatForward::new(today, 0.03, Actual360));
//!
//! let schedule = Schedule::generate(
//!     today,
//!     Date::from_ymd(2025, 10, 10)?,
//!     Period::from_frequency(Frequency::Annual)?,
//!     &NullCalendar,
//!     BusinessDayConvention::Following,
//!     BusinessDayConvention::Following,
//!     DateGeneration::Forward,
//!     false,
//! )?;
//! let leg = FixedRateLegBuilder::new(&schedule)
//!     .with_notional(1_000_000.0)
//!     .with_coupon_rate(0.05)
//!     .with_day_counter(Actual360)
//!     .build()?;
//!
//! let mut swap = Swap::new(leg, Leg::new());
//! let handle = Handle::from_arc(curve.clone() as Arc<dyn YieldTermStructure>);
//! swap.set_pricing_engine(Arc::new(DiscountingSwapEngine::new(handle)));
//! let npv = swap.npv()?;
//! assert!((npv - 49_175.70).abs() < 0.01);
//!
//! // Moving the quote reprices without rebuilding anything.
//! curve.set_rate(0.04)?;
//! assert!(swap.npv()? < npv);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, errors, handles and settings.
pub use rc_core as core;

/// Date, calendar, day counter, interest rate and schedule types.
pub use rc_time as time;

/// Market quotes.
pub use rc_quotes as quotes;

/// Yield term structures.
pub use rc_termstructures as termstructures;

/// Cash flows, coupons and leg analytics.
pub use rc_cashflows as cashflows;

/// Instruments and the pricing-engine interface.
pub use rc_instruments as instruments;

/// Pricing engines.
pub use rc_pricingengines as pricingengines;

/// The types needed to build and value a fixed-rate leg.
pub mod prelude {
    pub use rc_cashflows::{CashFlow, Coupon, FixedRateLegBuilder, Leg};
    pub use rc_core::{Compounding, Error, Handle, Settings};
    pub use rc_instruments::{Instrument, Swap};
    pub use rc_pricingengines::{DiscountingSwapEngine, LegValuation};
    pub use rc_quotes::{Quote, SimpleQuote};
    pub use rc_termstructures::{FlatForward, TermStructure, YieldTermStructure};
    pub use rc_time::{
        Actual360, Actual365Fixed, BusinessDayConvention, Calendar, Date, DateGeneration,
        DayCounter, Frequency, NullCalendar, Period, Schedule, ScheduleBuilder, Thirty360,
        TimeUnit, WeekendsOnly,
    };
}
