//! # rc-quotes
//!
//! Observable market values that term structures read through a
//! [`Handle`](rc_core::Handle).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Quote` trait and `SimpleQuote`.
pub mod quote;

pub use quote::{Quote, SimpleQuote};
