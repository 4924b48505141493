//! Specimens
//!
//! [`Specimen`] is the sum type over the taxonomy. Equality between two
//! specimens first requires the same variant, so a tree never equals a
//! flower even when name and color match.

use crate::{Flower, Plant, PlantLike, Rose, Tree};
use catalog_core::{Entity, InputError, LineSource};
use rand::Rng;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Variant tag of a [`Specimen`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecimenKind {
    /// Base plant
    Plant,
    /// Tree
    Tree,
    /// Flower
    Flower,
    /// Rose
    Rose,
}

impl SpecimenKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 4] = [Self::Plant, Self::Tree, Self::Flower, Self::Rose];

    /// Lowercase label
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plant => "plant",
            Self::Tree => "tree",
            Self::Flower => "flower",
            Self::Rose => "rose",
        }
    }

    /// Number of input lines `init` consumes for this kind
    #[inline]
    #[must_use]
    pub const fn field_count(self) -> usize {
        match self {
            Self::Plant => 2,
            Self::Tree | Self::Flower => 3,
            Self::Rose => 4,
        }
    }
}

impl Display for SpecimenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecimenKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KindError::Unknown(s.to_string()))
    }
}

/// Errors related to specimen kinds
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KindError {
    /// Unrecognized kind label
    #[error("unknown specimen kind: {0} (expected plant, tree, flower or rose)")]
    Unknown(String),
}

/// Any member of the plant taxonomy
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Specimen {
    /// Base plant
    Plant(Plant),
    /// Tree
    Tree(Tree),
    /// Flower
    Flower(Flower),
    /// Rose
    Rose(Rose),
}

impl Specimen {
    /// Default specimen of the given kind
    #[must_use]
    pub fn empty(kind: SpecimenKind) -> Self {
        match kind {
            SpecimenKind::Plant => Self::Plant(Plant::default()),
            SpecimenKind::Tree => Self::Tree(Tree::default()),
            SpecimenKind::Flower => Self::Flower(Flower::default()),
            SpecimenKind::Rose => Self::Rose(Rose::default()),
        }
    }

    /// Randomly initialized specimen of the given kind
    #[must_use]
    pub fn random_of<R: Rng + ?Sized>(kind: SpecimenKind, rng: &mut R) -> Self {
        let mut specimen = Self::empty(kind);
        specimen.random_init(rng);
        specimen
    }

    /// Variant tag
    #[inline]
    #[must_use]
    pub fn kind(&self) -> SpecimenKind {
        match self {
            Self::Plant(_) => SpecimenKind::Plant,
            Self::Tree(_) => SpecimenKind::Tree,
            Self::Flower(_) => SpecimenKind::Flower,
            Self::Rose(_) => SpecimenKind::Rose,
        }
    }
}

impl Default for Specimen {
    fn default() -> Self {
        Self::empty(SpecimenKind::Plant)
    }
}

impl Display for Specimen {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plant(inner) => Display::fmt(inner, f),
            Self::Tree(inner) => Display::fmt(inner, f),
            Self::Flower(inner) => Display::fmt(inner, f),
            Self::Rose(inner) => Display::fmt(inner, f),
        }
    }
}

impl Entity for Specimen {
    fn random_init<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self {
            Self::Plant(inner) => inner.random_init(rng),
            Self::Tree(inner) => inner.random_init(rng),
            Self::Flower(inner) => inner.random_init(rng),
            Self::Rose(inner) => inner.random_init(rng),
        }
    }

    fn init<S: LineSource + ?Sized>(&mut self, input: &mut S) -> Result<(), InputError> {
        match self {
            Self::Plant(inner) => inner.init(input),
            Self::Tree(inner) => inner.init(input),
            Self::Flower(inner) => inner.init(input),
            Self::Rose(inner) => inner.init(input),
        }
    }
}

impl PlantLike for Specimen {
    fn plant(&self) -> &Plant {
        match self {
            Self::Plant(inner) => inner,
            Self::Tree(inner) => inner.plant(),
            Self::Flower(inner) => inner.plant(),
            Self::Rose(inner) => inner.plant(),
        }
    }

    fn plant_mut(&mut self) -> &mut Plant {
        match self {
            Self::Plant(inner) => inner,
            Self::Tree(inner) => inner.plant_mut(),
            Self::Flower(inner) => inner.plant_mut(),
            Self::Rose(inner) => inner.plant_mut(),
        }
    }
}

impl From<Plant> for Specimen {
    fn from(plant: Plant) -> Self {
        Self::Plant(plant)
    }
}

impl From<Tree> for Specimen {
    fn from(tree: Tree) -> Self {
        Self::Tree(tree)
    }
}

impl From<Flower> for Specimen {
    fn from(flower: Flower) -> Self {
        Self::Flower(flower)
    }
}

impl From<Rose> for Specimen {
    fn from(rose: Rose) -> Self {
        Self::Rose(rose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn specimen_cross_kind_never_equal() {
        let tree = Specimen::from(Tree::new("Oak", "Brown", 0.0, 1));
        let flower = Specimen::from(Flower::new("Oak", "Brown", "Fresh", 1));
        let plant = Specimen::from(Plant::new("Oak", "Brown", 1));

        assert_eq!(tree.name(), flower.name());
        assert_ne!(tree, flower);
        assert_ne!(plant, tree);
    }

    #[test]
    fn specimen_same_kind_uses_kind_equality() {
        let a = Specimen::from(Tree::new("Oak", "Brown", 3.0, 1));
        let b = Specimen::from(Tree::new("Oak", "Brown", 3.0, 2));
        assert_eq!(a, b);
    }

    #[test]
    fn specimen_kind_round_trip() {
        for kind in SpecimenKind::ALL {
            assert_eq!(Specimen::empty(kind).kind(), kind);
            assert_eq!(kind.as_str().parse::<SpecimenKind>().unwrap(), kind);
        }
    }

    #[test]
    fn specimen_kind_parse_case_insensitive() {
        assert_eq!("Rose".parse::<SpecimenKind>().unwrap(), SpecimenKind::Rose);
    }

    #[test]
    fn specimen_kind_parse_unknown() {
        let result = "cactus".parse::<SpecimenKind>();
        assert!(matches!(result, Err(KindError::Unknown(_))));
    }

    #[test]
    fn specimen_random_of_kind() {
        let mut rng = StdRng::seed_from_u64(1);
        for kind in SpecimenKind::ALL {
            let specimen = Specimen::random_of(kind, &mut rng);
            assert_eq!(specimen.kind(), kind);
            assert!(!specimen.name().is_empty());
        }
    }

    #[test]
    fn specimen_init_consumes_field_count_lines() {
        for kind in SpecimenKind::ALL {
            let mut input = "Fern\nGreen\n7\n1\nleftover\n".as_bytes();
            let mut specimen = Specimen::empty(kind);
            specimen.init(&mut input).unwrap();

            let remaining = input.iter().filter(|&&b| b == b'\n').count();
            assert_eq!(remaining, 5 - kind.field_count(), "kind {kind}");
        }
    }

    #[test]
    fn specimen_set_name_through_trait() {
        let mut specimen = Specimen::from(Rose::default());
        assert!(specimen.set_name("Damask"));
        assert!(!specimen.set_name(""));
        assert_eq!(specimen.name(), "Damask");
    }

    #[test]
    fn specimen_display_delegates() {
        let specimen = Specimen::from(Flower::new("Tulip", "Yellow", "Sweet", 3));
        assert_eq!(specimen.to_string(), "Plant: Name=Tulip, Color=Yellow");
    }
}
