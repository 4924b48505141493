//! Trees
//!
//! [`Tree`] adds a non-negative height to the base plant.

use crate::plant::{Plant, PlantLike};
use catalog_core::{Entity, InputError, LineSource};
use rand::Rng;
use std::fmt::{self, Display, Formatter};

/// A plant with a height
///
/// Equality also compares `height`; rendering stays the base plant format.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Tree {
    #[serde(flatten)]
    plant: Plant,
    height: f64,
}

impl Tree {
    /// Upper bound of a randomly drawn height
    pub const MAX_RANDOM_HEIGHT: f64 = 20.0;

    /// Create new tree
    ///
    /// An invalid `height` leaves the default of 0.
    #[must_use]
    pub fn new(name: &str, color: &str, height: f64, id: i64) -> Self {
        let mut tree = Self {
            plant: Plant::new(name, color, id),
            height: 0.0,
        };
        tree.set_height(height);
        tree
    }

    /// Height
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Assign a new height
    ///
    /// Returns `false` and keeps the current height for negative or NaN input.
    pub fn set_height(&mut self, value: f64) -> bool {
        if value.is_nan() || value < 0.0 {
            tracing::debug!(value, current = self.height, "rejected tree height");
            return false;
        }
        self.height = value;
        true
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.plant == other.plant && self.height == other.height
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.plant, f)
    }
}

impl Entity for Tree {
    fn random_init<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.plant.randomize_base(rng);
        self.set_height(rng.random_range(0.0..=Self::MAX_RANDOM_HEIGHT));
    }

    fn init<S: LineSource + ?Sized>(&mut self, input: &mut S) -> Result<(), InputError> {
        self.plant.read_base(input)?;
        if let Some(height) = input.read_parsed::<f64>()? {
            self.set_height(height);
        }
        Ok(())
    }
}

impl PlantLike for Tree {
    fn plant(&self) -> &Plant {
        &self.plant
    }

    fn plant_mut(&mut self) -> &mut Plant {
        &mut self.plant
    }
}
