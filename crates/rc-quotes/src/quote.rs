//! `Quote` trait and `SimpleQuote` implementation.

use std::sync::RwLock;

use rc_core::{errors::Result, Error, Real};

/// A market-observable value.
pub trait Quote: std::fmt::Debug + Send + Sync {
    /// Return the current value, or `None` if the quote is not set.
    fn value(&self) -> Option<Real>;

    /// Return `true` if the quote currently holds a value.
    fn is_valid(&self) -> bool {
        self.value().is_some()
    }

    /// Return the current value.
    ///
    /// # Errors
    /// [`Error::NullValue`] if the quote is not set.
    fn current(&self) -> Result<Real> {
        self.value().ok_or(Error::NullValue)
    }
}

/// A settable market quote.
///
/// The value lives behind a lock so that every holder of a shared
/// `Handle<SimpleQuote>` observes updates made through any other holder.
#[derive(Debug, Default)]
pub struct SimpleQuote {
    value: RwLock<Option<Real>>,
}

impl SimpleQuote {
    /// Create a new quote with the given value.
    pub fn new(value: Real) -> Self {
        Self {
            value: RwLock::new(Some(value)),
        }
    }

    /// Create an empty (invalid) quote.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set a new value and return the previous one.
    pub fn set_value(&self, value: Real) -> Option<Real> {
        let mut slot = self.value.write().unwrap_or_else(|e| e.into_inner());
        slot.replace(value)
    }

    /// Clear the value, making the quote invalid.
    pub fn reset(&self) {
        *self.value.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl Quote for SimpleQuote {
    fn value(&self) -> Option<Real> {
        *self.value.read().unwrap_or_else(|e| e.into_inner())
    }
}
