//! # rc-termstructures
//!
//! Yield term structures: the `TermStructure` base trait, the
//! `YieldTermStructure` query interface, and the quote-driven `FlatForward`
//! curve.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `TermStructure`: base trait for all term structures.
pub mod term_structure;

/// `YieldTermStructure`: discount factors, zero and forward rates.
pub mod yield_term_structure;

/// `FlatForward`: constant forward-rate yield curve.
pub mod flat_forward;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use flat_forward::FlatForward;
pub use term_structure::TermStructure;
pub use yield_term_structure::YieldTermStructure;
