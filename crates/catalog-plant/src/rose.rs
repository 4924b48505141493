//! Roses
//!
//! [`Rose`] has the flower shape (name, color, smell) plus a thorn flag.
//! It is a record of its own, not a wrapped [`crate::Flower`].

use crate::flower::DEFAULT_SMELL;
use crate::plant::{assign_text, Plant, PlantLike};
use catalog_core::{pools, Entity, InputError, LineSource};
use rand::Rng;
use std::fmt::{self, Display, Formatter};

/// A scented plant that may have thorns
#[derive(Debug, Clone, serde::Serialize)]
pub struct Rose {
    #[serde(flatten)]
    plant: Plant,
    smell: String,
    has_thorns: bool,
}

impl Rose {
    /// Create new rose
    #[must_use]
    pub fn new(name: &str, color: &str, smell: &str, has_thorns: bool, id: i64) -> Self {
        let mut rose = Self {
            plant: Plant::new(name, color, id),
            has_thorns,
            ..Self::default()
        };
        rose.set_smell(smell);
        rose
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

    /// Whether the rose has thorns
    #[inline]
    #[must_use]
    pub fn has_thorns(&self) -> bool {
        self.has_thorns
    }

    /// Assign the thorn flag; every value is valid
    #[inline]
    pub fn set_has_thorns(&mut self, value: bool) {
        self.has_thorns = value;
    }
}

/// Interpret a thorn token
///
/// Integers map nonzero to `true`; `true`/`false` are accepted in any case.
fn parse_thorns(token: &str) -> Option<bool> {
    let token = token.trim();
    if let Ok(number) = token.parse::<i64>() {
        return Some(number != 0);
    }
    if token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl Default for Rose {
    fn default() -> Self {
        Self {
            plant: Plant::default(),
            smell: DEFAULT_SMELL.to_string(),
            has_thorns: false,
        }
    }
}

impl PartialEq for Rose {
    fn eq(&self, other: &Self) -> bool {
        self.plant == other.plant
            && self.smell == other.smell
            && self.has_thorns == other.has_thorns
    }
}

impl Eq for Rose {}

impl Display for Rose {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.plant, f)
    }
}

impl Entity for Rose {
    fn random_init<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.plant.randomize_base(rng);
        self.set_smell(pools::pick(rng, pools::SMELLS));
        self.set_has_thorns(rng.random_bool(0.5));
    }

    fn init<S: LineSource + ?Sized>(&mut self, input: &mut S) -> Result<(), InputError> {
        self.plant.read_base(input)?;
        let smell = input.read_text()?;
        self.set_smell(smell.as_deref());
        match input.next_line()?.as_deref().map(parse_thorns) {
            Some(Some(has_thorns)) => self.set_has_thorns(has_thorns),
            Some(None) => tracing::debug!(current = self.has_thorns, "rejected thorn token"),
            None => {}
        }
        Ok(())
    }
}

impl PlantLike for Rose {
    fn plant(&self) -> &Plant {
        &self.plant
    }

    fn plant_mut(&mut self) -> &mut Plant {
        &mut self.plant
    }
}
