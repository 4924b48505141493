//! Flowers
//!
//! [`Flower`] adds a smell to the base plant.

use crate::plant::{assign_text, Plant, PlantLike};
use catalog_core::{pools, Entity, InputError, LineSource};
use rand::Rng;
use std::fmt::{self, Display, Formatter};

/// Smell used until a valid one is assigned
pub const DEFAULT_SMELL: &str = "Neutral";

/// A plant with a smell
///
/// Equality also compares `smell`; rendering stays the base plant format.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Flower {
    #[serde(flatten)]
    plant: Plant,
    smell: String,
}

impl Flower {
    /// Create new flower
    #[must_use]
    pub fn new(name: &str, color: &str, smell: &str, id: i64) -> Self {
        let mut flower = Self {
            plant: Plant::new(name, color, id),
            ..Self::default()
        };
        flower.set_smell(smell);
        flower
    }

    /// Smell
    #[inline]
    #[must_use]
    pub fn smell(&self) -> &str {
        &self.smell
    }

    /// Assign a new smell
    ///
    /// Returns `false` and keeps the current smell for `None` or `""`.
    pub fn set_smell<'a>(&mut self, value: impl Into<Option<&'a str>>) -> bool {
        assign_text(&mut self.smell, "smell", value.into())
    }
}

impl Default for Flower {
    fn default() -> Self {
        Self {
            plant: Plant::default(),
            smell: DEFAULT_SMELL.to_string(),
        }
    }
}

impl PartialEq for Flower {
    fn eq(&self, other: &Self) -> bool {
        self.plant == other.plant && self.smell == other.smell
    }
}

impl Eq for Flower {}

impl Display for Flower {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.plant, f)
    }
}

impl Entity for Flower {
    fn random_init<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.plant.randomize_base(rng);
        self.set_smell(pools::pick(rng, pools::SMELLS));
    }

    fn init<S: LineSource + ?Sized>(&mut self, input: &mut S) -> Result<(), InputError> {
        self.plant.read_base(input)?;
        let smell = input.read_text()?;
        self.set_smell(smell.as_deref());
        Ok(())
    }
}

impl PlantLike for Flower {
    fn plant(&self) -> &Plant {
        &self.plant
    }

    fn plant_mut(&mut self) -> &mut Plant {
        &mut self.plant
    }
}
