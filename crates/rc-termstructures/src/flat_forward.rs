//! `FlatForward`: a yield term structure with a constant forward rate.
//!
//! The rate is read from a [`SimpleQuote`] behind a [`Handle`] on every
//! query, so moving the quote reprices every holder of the curve without
//! rebuilding it.  Nothing is cached.

use std::sync::Arc;

use rc_core::{errors::Result, Compounding, DiscountFactor, Handle, Rate, Time};
use rc_quotes::{Quote, SimpleQuote};
use rc_time::{Calendar, Date, DayCounter, Frequency, InterestRate, NullCalendar};
use tracing::trace;

use crate::term_structure::TermStructure;
use crate::yield_term_structure::YieldTermStructure;

/// A flat (constant) forward-rate yield term structure.
///
/// By default the quoted rate is continuously compounded, so
/// `P(t) = exp(-r·t)` with `t` measured by the curve's day counter.
#[derive(Debug)]
pub struct FlatForward {
    reference_date: Date,
    quote: Handle<SimpleQuote>,
    day_counter: Arc<dyn DayCounter>,
    calendar: Arc<dyn Calendar>,
    compounding: Compounding,
    frequency: Frequency,
}

impl FlatForward {
    /// Create a flat-forward curve owning a fresh quote for `rate`.
    pub fn new(reference_date: Date, rate: Rate, day_counter: impl DayCounter + 'static) -> Self {
        Self::with_quote(reference_date, Handle::new(SimpleQuote::new(rate)), day_counter)
    }

    /// Create a flat-forward curve observing an existing quote.
    pub fn with_quote(
        reference_date: Date,
        quote: Handle<SimpleQuote>,
        day_counter: impl DayCounter + 'static,
    ) -> Self {
        Self {
            reference_date,
            quote,
            day_counter: Arc::new(day_counter),
            calendar: Arc::new(NullCalendar),
            compounding: Compounding::Continuous,
            frequency: Frequency::Annual,
        }
    }

    /// Interpret the quoted rate under the given compounding convention.
    pub fn with_compounding(mut self, compounding: Compounding, frequency: Frequency) -> Self {
        self.compounding = compounding;
        self.frequency = frequency;
        self
    }

    /// Attach a calendar to the curve.
    pub fn with_calendar(mut self, calendar: impl Calendar + 'static) -> Self {
        self.calendar = Arc::new(calendar);
        self
    }

    /// The quote handle backing this curve.
    pub fn quote(&self) -> &Handle<SimpleQuote> {
        &self.quote
    }

    /// The current quoted rate.
    ///
    /// # Errors
    /// [`Error::NullValue`](rc_core::Error::NullValue) if the handle is empty
    /// or the quote holds no value.
    pub fn rate(&self) -> Result<Rate> {
        self.quote.current()?.current()
    }

    /// Move the quoted rate.  Every later query observes the new value.
    pub fn set_rate(&self, rate: Rate) -> Result<()> {
        let previous = self.quote.current()?.set_value(rate);
        trace!(?previous, rate, "flat forward rate updated");
        Ok(())
    }

    /// Compounding convention of the quoted rate.
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Compounding frequency of the quoted rate.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// The current rate together with its conventions.
    pub fn interest_rate(&self) -> Result<InterestRate> {
        Ok(InterestRate::with_shared_day_counter(
            self.rate()?,
            Arc::clone(&self.day_counter),
            self.compounding,
            self.frequency,
        ))
    }
}

impl TermStructure for FlatForward {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }

    fn calendar(&self) -> &dyn Calendar {
        &*self.calendar
    }

    fn max_date(&self) -> Date {
        Date::MAX
    }
}

impl YieldTermStructure for FlatForward {
    fn discount_impl(&self, t: Time) -> Result<DiscountFactor> {
        self.interest_rate()?.discount_factor_time(t)
    }
}
