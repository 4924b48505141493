//! Base plant record
//!
//! Provides [`Plant`], the shared name/color/id record every specialization
//! embeds, and the [`PlantLike`] trait that exposes it.

use catalog_core::{pools, Entity, IdNumber, InputError, LineSource};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// A plant with a name, a color and an identifier
///
/// # Invariants
/// - `name` and `color` are never empty
/// - the identifier is fixed at construction and excluded from equality
///
/// # Example
/// ```
/// use catalog_plant::Plant;
///
/// let mut plant = Plant::new("Lily", "White", 5);
/// assert!(!plant.set_color(None));
/// assert_eq!(plant.to_string(), "Plant: Name=Lily, Color=White");
/// ```
#[derive(Debug, Clone, serde::Serialize)]
pub struct Plant {
    name: String,
    color: String,
    id: IdNumber,
}

impl Plant {
    /// Name used until a valid one is assigned
    pub const DEFAULT_NAME: &'static str = "Unnamed";

    /// Color used until a valid one is assigned
    pub const DEFAULT_COLOR: &'static str = "Green";

    /// Create new plant
    ///
    /// Empty `name` or `color` falls back to the defaults, exactly as the
    /// setters would reject it.
    #[must_use]
    pub fn new(name: &str, color: &str, id: i64) -> Self {
        let mut plant = Self {
            id: IdNumber::new(id),
            ..Self::default()
        };
        plant.set_name(name);
        plant.set_color(color);
        plant
    }

    /// Plant name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plant color
    #[inline]
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Identifier assigned at construction
    #[inline]
    #[must_use]
    pub fn id(&self) -> IdNumber {
        self.id
    }

    /// Assign a new name
    ///
    /// Returns `false` and keeps the current name for `None` or `""`.
    pub fn set_name<'a>(&mut self, value: impl Into<Option<&'a str>>) -> bool {
        assign_text(&mut self.name, "name", value.into())
    }

    /// Assign a new color
    ///
    /// Returns `false` and keeps the current color for `None` or `""`.
    pub fn set_color<'a>(&mut self, value: impl Into<Option<&'a str>>) -> bool {
        assign_text(&mut self.color, "color", value.into())
    }

    /// Ordinal comparison of names
    ///
    /// Color and identifier are ignored, so two plants can compare `Equal`
    /// without being `==`.
    #[inline]
    #[must_use]
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }

    pub(crate) fn randomize_base<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.set_name(pools::pick(rng, pools::NAMES));
        self.set_color(pools::pick(rng, pools::COLORS));
    }

    pub(crate) fn read_base<S: LineSource + ?Sized>(
        &mut self,
        input: &mut S,
    ) -> Result<(), InputError> {
        let name = input.read_text()?;
        self.set_name(name.as_deref());
        let color = input.read_text()?;
        self.set_color(color.as_deref());
        Ok(())
    }
}

impl Default for Plant {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            color: Self::DEFAULT_COLOR.to_string(),
            id: IdNumber::default(),
        }
    }
}

impl PartialEq for Plant {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.color == other.color
    }
}

impl Eq for Plant {}

impl Display for Plant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Plant: Name={}, Color={}", self.name, self.color)
    }
}

impl Entity for Plant {
    fn random_init<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.randomize_base(rng);
    }

    fn init<S: LineSource + ?Sized>(&mut self, input: &mut S) -> Result<(), InputError> {
        self.read_base(input)
    }
}

/// Shared access to the embedded [`Plant`]
///
/// Implemented by every type in the taxonomy so name/color handling and
/// ordering are written once.
pub trait PlantLike: Entity {
    /// Embedded base record
    fn plant(&self) -> &Plant;

    /// Embedded base record, mutably
    fn plant_mut(&mut self) -> &mut Plant;

    /// Plant name
    fn name(&self) -> &str {
        self.plant().name()
    }

    /// Plant color
    fn color(&self) -> &str {
        self.plant().color()
    }

    /// Identifier assigned at construction
    fn id(&self) -> IdNumber {
        self.plant().id()
    }

    /// Assign a new name, rejecting `None` and `""`
    fn set_name<'a>(&mut self, value: impl Into<Option<&'a str>>) -> bool {
        self.plant_mut().set_name(value)
    }

    /// Assign a new color, rejecting `None` and `""`
    fn set_color<'a>(&mut self, value: impl Into<Option<&'a str>>) -> bool {
        self.plant_mut().set_color(value)
    }

    /// Ordinal comparison of names
    fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.plant().cmp_by_name(other.plant())
    }
}

impl PlantLike for Plant {
    fn plant(&self) -> &Plant {
        self
    }

    fn plant_mut(&mut self) -> &mut Plant {
        self
    }
}

/// Stable sort by name
pub fn sort_by_name<T: PlantLike>(items: &mut [T]) {
    items.sort_by(|a, b| a.cmp_by_name(b));
}

/// Guarded assignment shared by every text field in the taxonomy
pub(crate) fn assign_text(slot: &mut String, field: &'static str, value: Option<&str>) -> bool {
    match value {
        Some(text) if !text.is_empty() => {
            text.clone_into(slot);
            true
        }
        _ => {
            tracing::debug!(field, current = %slot, "rejected empty value");
            false
        }
    }
}
