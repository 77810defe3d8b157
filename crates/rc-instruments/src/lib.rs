//! # rc-instruments
//!
//! Priceable instruments and the engine interface they delegate to.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod instrument;
pub mod swap;

pub use instrument::{Instrument, PricingEngine, PricingResults};
pub use swap::Swap;
