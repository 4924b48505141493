//! Entity kinds selectable from the command line

use catalog_plant::{KindError, SpecimenKind};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Any entity the CLI can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A member of the plant taxonomy
    Specimen(SpecimenKind),
    /// A content post
    Post,
}

impl EntityKind {
    /// Every label accepted by [`EntityKind::from_str`]
    pub const LABELS: [&'static str; 5] = ["plant", "tree", "flower", "rose", "post"];

    /// Field labels shown when entering this kind interactively
    #[must_use]
    pub fn field_labels(self) -> &'static [&'static str] {
        match self {
            Self::Specimen(SpecimenKind::Plant) => &["Name", "Color"],
            Self::Specimen(SpecimenKind::Tree) => &["Name", "Color", "Height"],
            Self::Specimen(SpecimenKind::Flower) => &["Name", "Color", "Smell"],
            Self::Specimen(SpecimenKind::Rose) => &["Name", "Color", "Smell", "Has thorns (1/0)"],
            Self::Post => &["Views", "Comments", "Reactions"],
        }
    }
}

impl Default for EntityKind {
    fn default() -> Self {
        Self::Specimen(SpecimenKind::Plant)
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Specimen(kind) => Display::fmt(kind, f),
            Self::Post => f.write_str("post"),
        }
    }
}

impl FromStr for EntityKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("post") {
            return Ok(Self::Post);
        }
        s.parse().map(Self::Specimen)
    }
}
