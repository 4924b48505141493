//! Entity Trait
//!
//! Defines the capability set shared by every catalogue entity.

use crate::error::InputError;
use crate::input::LineSource;
use rand::Rng;
use std::fmt::{Debug, Display};

/// Trait for catalogue entities
///
/// Every entity is a value with guarded mutators. Beyond the supertraits it
/// can be filled from a random source or from a line-oriented input source.
///
/// # Contract
/// - `Clone` yields an independent instance with no shared owned state
/// - `PartialEq` compares the type's curated field set, not every field
/// - `Display` is the stable rendering used in output and tests
/// - `random_init` only ever produces values the guarded setters accept
/// - `init` consumes exactly one line per settable field, in declaration
///   order, and applies the same validation as the setters
///
/// # Example
/// ```rust,ignore
/// let mut plant = Plant::default();
/// plant.random_init(&mut rand::rng());
///
/// let mut input = "Oak\nBrown\n".as_bytes();
/// plant.init(&mut input)?;
/// ```
pub trait Entity: Clone + PartialEq + Debug + Display {
    /// Fill every settable field from `rng`
    fn random_init<R: Rng + ?Sized>(&mut self, rng: &mut R);

    /// Fill every settable field from `input`, one line per field
    ///
    /// Rejected lines leave the corresponding field unchanged.
    ///
    /// # Errors
    /// Returns error only if the underlying reader fails
    fn init<S: LineSource + ?Sized>(&mut self, input: &mut S) -> Result<(), InputError>;

    /// Build a default instance and fill it from `rng`
    #[must_use]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self
    where
        Self: Default,
    {
        let mut entity = Self::default();
        entity.random_init(rng);
        entity
    }
}
