//! Pet catalog — the static tables shared by every render adapter.
//!
//! Two lookup tables drive identifier resolution:
//!
//! | Table               | Key                 | Value                |
//! |---------------------|---------------------|----------------------|
//! | [`SUPPORTED_PETS`]  | canonical name      | [`PetKind`]          |
//! | [`LEGACY_ALIASES`]  | deprecated suffixed | canonical [`PetKind`]|
//!
//! The supported set is the superset of every shipped asset bundle; older
//! bundles carried 4 or 8 of these entries, and none are dropped.

use core::fmt;

use serde::{Serialize, Serializer};

/// A pet with a bundled image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PetKind {
    Cat,
    Dog1,
    Dog4,
    Frog,
    Hamster,
    Horse1,
    Parrot1,
    Parrot2,
    Rabbit,
    Rhino,
}

impl PetKind {
    /// Canonical name, which is also the drawable / asset-catalog name.
    pub const fn asset_name(self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dog1 => "dog_1",
            Self::Dog4 => "dog_4",
            Self::Frog => "frog",
            Self::Hamster => "hamster",
            Self::Horse1 => "horse_1",
            Self::Parrot1 => "parrot_1",
            Self::Parrot2 => "parrot_2",
            Self::Rabbit => "rabbit",
            Self::Rhino => "rhino",
        }
    }
}

impl fmt::Display for PetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_name())
    }
}

impl Serialize for PetKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.asset_name())
    }
}

/// Supported image set, in display order.
pub const SUPPORTED_PETS: [PetKind; 10] = [
    PetKind::Cat,
    PetKind::Dog1,
    PetKind::Dog4,
    PetKind::Frog,
    PetKind::Hamster,
    PetKind::Horse1,
    PetKind::Parrot1,
    PetKind::Parrot2,
    PetKind::Rabbit,
    PetKind::Rhino,
];

/// Deprecated suffixed identifiers, one per canonical pet.
pub const LEGACY_ALIASES: [(&str, PetKind); 10] = [
    ("cat_01", PetKind::Cat),
    ("dog_01", PetKind::Dog1),
    ("dog_04", PetKind::Dog4),
    ("frog_01", PetKind::Frog),
    ("hamster_01", PetKind::Hamster),
    ("horse_01", PetKind::Horse1),
    ("parrot_01", PetKind::Parrot1),
    ("parrot_02", PetKind::Parrot2),
    ("rabbit_01", PetKind::Rabbit),
    ("rhino_01", PetKind::Rhino),
];

/// Match a canonical name exactly. Callers lower-case first.
pub fn supported(candidate: &str) -> Option<PetKind> {
    SUPPORTED_PETS
        .iter()
        .copied()
        .find(|kind| kind.asset_name() == candidate)
}

/// Map a legacy alias to its canonical pet.
pub fn legacy_alias(candidate: &str) -> Option<PetKind> {
    LEGACY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == candidate)
        .map(|(_, kind)| *kind)
}

/// Canonical names win over aliases.
pub fn lookup(candidate: &str) -> Option<PetKind> {
    supported(candidate).or_else(|| legacy_alias(candidate))
}
