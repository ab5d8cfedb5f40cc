//! Terrain kinds and the fixed kind → cost table.

use std::fmt;

/// The kind of terrain occupying a cell.
///
/// Cost and map character are data looked up per kind; every kind is
/// passable, just at very different prices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TerrainKind {
    Stone,
    Water,
    Road,
    Grass,
    Mud,
    Dune,
}

impl TerrainKind {
    /// Every terrain kind, in declaration order.
    pub const ALL: [TerrainKind; 6] = [
        TerrainKind::Stone,
        TerrainKind::Water,
        TerrainKind::Road,
        TerrainKind::Grass,
        TerrainKind::Mud,
        TerrainKind::Dune,
    ];

    /// Cost of entering a cell of this kind. Always > 0.
    #[inline]
    pub const fn cost(self) -> u32 {
        match self {
            TerrainKind::Stone => 1000,
            TerrainKind::Water => 500,
            TerrainKind::Road => 2,
            TerrainKind::Grass => 3,
            TerrainKind::Mud => 5,
            TerrainKind::Dune => 7,
        }
    }

    /// Character used in the text map format.
    #[inline]
    pub const fn rune(self) -> char {
        match self {
            TerrainKind::Stone => 's',
            TerrainKind::Water => 'w',
            TerrainKind::Road => 'r',
            TerrainKind::Grass => 'g',
            TerrainKind::Mud => 'm',
            TerrainKind::Dune => 'd',
        }
    }

    /// Inverse of [`rune`](Self::rune).
    pub fn from_rune(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.rune() == ch)
    }

    /// Lowercase name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            TerrainKind::Stone => "stone",
            TerrainKind::Water => "water",
            TerrainKind::Road => "road",
            TerrainKind::Grass => "grass",
            TerrainKind::Mud => "mud",
            TerrainKind::Dune => "dune",
        }
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
