//! Numeric identifiers
//!
//! Provides [`IdNumber`], a non-negative identifier owned by catalogue
//! entities.

use std::fmt::{self, Display, Formatter};

/// A non-negative numeric identifier
///
/// The stored value is never negative: [`IdNumber::set_number`] ignores
/// negative or out-of-range input and keeps the current value.
/// Cheap to clone (Copy); a copy never aliases the original.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct IdNumber {
    number: u32,
}

impl IdNumber {
    /// Create a new identifier
    ///
    /// Starts from the default of 0 and applies `value` through the guarded
    /// setter, so a negative value yields 0.
    #[inline]
    #[must_use]
    pub fn new(value: i64) -> Self {
        let mut id = Self::default();
        id.set_number(value);
        id
    }

    /// Current value
    #[inline]
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Assign a new value
    ///
    /// Returns `false` and keeps the current value when `value` is negative
    /// or does not fit in 32 bits.
    pub fn set_number(&mut self, value: i64) -> bool {
        match u32::try_from(value) {
            Ok(number) => {
                self.number = number;
                true
            }
            Err(_) => {
                tracing::debug!(value, current = self.number, "rejected id number");
                false
            }
        }
    }
}

impl Display for IdNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "IdNumber: {}", self.number)
    }
}

impl From<u32> for IdNumber {
    fn from(number: u32) -> Self {
        Self { number }
    }
}
