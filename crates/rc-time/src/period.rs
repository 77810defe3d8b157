//! `Period`: a time span expressed in a [`TimeUnit`].

use crate::frequency::Frequency;
use crate::time_unit::TimeUnit;
use rc_core::errors::{Error, Result};

/// A time span made up of an integer length and a [`TimeUnit`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    /// Number of units.
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Construct a `Period` from a [`Frequency`].
    ///
    /// `Once` maps to a zero-length period, which schedules treat as a
    /// single start-to-end period.
    ///
    /// # Errors
    /// [`Error::UnsupportedFrequency`] for `NoFrequency` and `OtherFrequency`.
    pub fn from_frequency(freq: Frequency) -> Result<Self> {
        match freq {
            Frequency::NoFrequency | Frequency::OtherFrequency => Err(
                Error::UnsupportedFrequency(format!("cannot convert {freq} to a period")),
            ),
            Frequency::Once => Ok(Period::new(0, TimeUnit::Years)),
            Frequency::Annual => Ok(Period::new(1, TimeUnit::Years)),
            Frequency::Semiannual => Ok(Period::new(6, TimeUnit::Months)),
            Frequency::EveryFourthMonth => Ok(Period::new(4, TimeUnit::Months)),
            Frequency::Quarterly => Ok(Period::new(3, TimeUnit::Months)),
            Frequency::Bimonthly => Ok(Period::new(2, TimeUnit::Months)),
            Frequency::Monthly => Ok(Period::new(1, TimeUnit::Months)),
            Frequency::EveryFourthWeek => Ok(Period::new(4, TimeUnit::Weeks)),
            Frequency::Biweekly => Ok(Period::new(2, TimeUnit::Weeks)),
            Frequency::Weekly => Ok(Period::new(1, TimeUnit::Weeks)),
            Frequency::Daily => Ok(Period::new(1, TimeUnit::Days)),
        }
    }

    /// The frequency whose step is this period, if any.
    ///
    /// # Errors
    /// [`Error::UnsupportedFrequency`] when the period does not correspond to
    /// a whole number of events per year (e.g. `5M` or `3D`).
    pub fn frequency(&self) -> Result<Frequency> {
        let n = self.length.abs();
        let freq = match (self.unit, n) {
            (_, 0) => Some(Frequency::Once),
            (TimeUnit::Years, 1) | (TimeUnit::Months, 12) => Some(Frequency::Annual),
            (TimeUnit::Months, 6) => Some(Frequency::Semiannual),
            (TimeUnit::Months, 4) => Some(Frequency::EveryFourthMonth),
            (TimeUnit::Months, 3) => Some(Frequency::Quarterly),
            (TimeUnit::Months, 2) => Some(Frequency::Bimonthly),
            (TimeUnit::Months, 1) => Some(Frequency::Monthly),
            (TimeUnit::Weeks, 4) | (TimeUnit::Days, 28) => Some(Frequency::EveryFourthWeek),
            (TimeUnit::Weeks, 2) | (TimeUnit::Days, 14) => Some(Frequency::Biweekly),
            (TimeUnit::Weeks, 1) | (TimeUnit::Days, 7) => Some(Frequency::Weekly),
            (TimeUnit::Days, 1) => Some(Frequency::Daily),
            _ => None,
        };
        freq.ok_or_else(|| Error::UnsupportedFrequency(format!("no frequency for period {self}")))
    }
}

impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        Period::new(-self.length, self.unit)
    }
}

impl std::ops::Mul<i32> for Period {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Period::new(self.length * rhs, self.unit)
    }
}

impl TryFrom<Frequency> for Period {
    type Error = Error;

    fn try_from(freq: Frequency) -> Result<Self> {
        Period::from_frequency(freq)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self.unit {
            TimeUnit::Days => "D",
            TimeUnit::Weeks => "W",
            TimeUnit::Months => "M",
            TimeUnit::Years => "Y",
        };
        write!(f, "{}{abbr}", self.length)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}
