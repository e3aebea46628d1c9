//! Autotile bitmask classes
//!
//! A tile's neighbor configuration is an 8-bit mask over the four cardinal
//! and four diagonal neighbors. Diagonals only matter when both adjacent
//! cardinals are present, which collapses the 256 raw masks onto 47 classes.
//! The classes are numbered in the fixed catalog order below.

use bitvec::order::Lsb0;
use bitvec::view::BitView;
use std::fmt;

use crate::io::configuration::BITMASK_CLASS_COUNT;

/// One of the eight neighbors around a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighbor {
    /// Directly above
    Up,
    /// Directly left
    Left,
    /// Directly right
    Right,
    /// Directly below
    Down,
    /// Diagonal above-left
    TopLeft,
    /// Diagonal above-right
    TopRight,
    /// Diagonal below-left
    BottomLeft,
    /// Diagonal below-right
    BottomRight,
}

impl Neighbor {
    /// All neighbors in bit order
    pub const ALL: [Self; 8] = [
        Self::Up,
        Self::Left,
        Self::Right,
        Self::Down,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    const fn bit(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Left => 1,
            Self::Right => 2,
            Self::Down => 3,
            Self::TopLeft => 4,
            Self::TopRight => 5,
            Self::BottomLeft => 6,
            Self::BottomRight => 7,
        }
    }

    /// Parse a neighbor name as typed on the console
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "up" | "u" => Some(Self::Up),
            "left" | "l" => Some(Self::Left),
            "right" | "r" => Some(Self::Right),
            "down" | "d" => Some(Self::Down),
            "top-left" | "tl" => Some(Self::TopLeft),
            "top-right" | "tr" => Some(Self::TopRight),
            "bottom-left" | "bl" => Some(Self::BottomLeft),
            "bottom-right" | "br" => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// Cardinal neighbors a diagonal depends on
    pub const fn supporting_cardinals(self) -> Option<(Self, Self)> {
        match self {
            Self::TopLeft => Some((Self::Up, Self::Left)),
            Self::TopRight => Some((Self::Up, Self::Right)),
            Self::BottomLeft => Some((Self::Down, Self::Left)),
            Self::BottomRight => Some((Self::Down, Self::Right)),
            Self::Up | Self::Left | Self::Right | Self::Down => None,
        }
    }
}

/// Set of connected neighbors around a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Neighbors {
    mask: u8,
}

impl Neighbors {
    /// No connected neighbors
    pub const fn empty() -> Self {
        Self::from_bits(0)
    }

    /// Build from a raw mask, bit `n` matching `Neighbor::ALL[n]`
    pub const fn from_bits(mask: u8) -> Self {
        Self { mask }
    }

    /// Copy with one more neighbor connected
    #[must_use]
    pub fn with(mut self, neighbor: Neighbor) -> Self {
        self.mask.view_bits_mut::<Lsb0>().set(neighbor.bit(), true);
        self
    }

    /// Test whether a neighbor is connected
    pub fn contains(&self, neighbor: Neighbor) -> bool {
        self.mask.view_bits::<Lsb0>().get(neighbor.bit()).as_deref() == Some(&true)
    }

    /// Drop diagonals whose two adjacent cardinals are not both connected
    #[must_use]
    pub fn reduced(self) -> Self {
        Neighbor::ALL
            .into_iter()
            .filter(|&neighbor| self.contains(neighbor))
            .filter(|&neighbor| {
                neighbor
                    .supporting_cardinals()
                    .is_none_or(|(a, b)| self.contains(a) && self.contains(b))
            })
            .fold(Self::empty(), Self::with)
    }
}

// Reduced neighbor mask and description for each class, in class order.
// Bits: up 1, left 2, right 4, down 8, top-left 16, top-right 32,
// bottom-left 64, bottom-right 128.
const CATALOG: [(u8, &str); BITMASK_CLASS_COUNT] = [
    (0, "Island (not surrounded by any connective tile)"),
    (1, "Up"),
    (2, "Left"),
    (3, "Left & up"),
    (19, "Left, up & top-left"),
    (4, "Right"),
    (5, "Right & up"),
    (37, "Right, up & top-right"),
    (6, "Left & right"),
    (7, "Left, right & up"),
    (23, "Left, right, up & top-left"),
    (39, "Left, right, up & top-right"),
    (55, "Left, right, up, top-left & top-right"),
    (8, "Down"),
    (9, "Up & down"),
    (10, "Left & down"),
    (11, "Left, up & down"),
    (27, "Left, up, down & top-left"),
    (12, "Right & down"),
    (13, "Right, up & down"),
    (45, "Right, up, down & top-right"),
    (14, "Left, right & down"),
    (15, "Left, right, up & down"),
    (31, "Left, right, up, down & top-left"),
    (47, "Left, right, up, down & top-right"),
    (63, "Left, right, up, down, top-left & top-right"),
    (74, "Left, down & bottom-left"),
    (75, "Left, up, down & bottom-left"),
    (91, "Left, up, down, top-left & bottom-left"),
    (78, "Left, right, down & bottom-left"),
    (79, "Left, right, up, down & bottom-left"),
    (95, "Left, right, up, down, top-left & bottom-left"),
    (111, "Left, right, up, down, top-right & bottom-left"),
    (127, "Left, right, up, down, top-left, top-right & bottom-left"),
    (140, "Right, down & bottom-right"),
    (141, "Right, up, down & bottom-right"),
    (173, "Right, up, down, top-right & bottom-right"),
    (142, "Left, right, down & bottom-right"),
    (143, "Left, right, up, down & bottom-right"),
    (159, "Left, right, up, down, top-left & bottom-right"),
    (175, "Left, right, up, down, top-right & bottom-right"),
    (191, "Left, right, up, down, top-left, top-right & bottom-right"),
    (206, "Left, right, down, bottom-left & bottom-right"),
    (207, "Left, right, up, down, bottom-left & bottom-right"),
    (223, "Left, right, up, down, top-left, bottom-left & bottom-right"),
    (239, "Left, right, up, down, top-right, bottom-left & bottom-right"),
    (255, "Fully surrounded (or without bitmask)"),
];

/// Index of one of the 47 autotile neighbor classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BitmaskClass(u8);

impl BitmaskClass {
    /// Tile with no connected neighbors
    pub const ISLAND: Self = Self(0);
    /// Tile connected on all sides, also used for tiles without a bitmask
    pub const SURROUNDED: Self = Self(46);

    /// Class at a catalog index, `None` past the last class
    pub const fn new(index: usize) -> Option<Self> {
        if index < BITMASK_CLASS_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Catalog index in `0..47`
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Following class, `None` at the last one
    pub const fn next(self) -> Option<Self> {
        Self::new(self.index() + 1)
    }

    /// Preceding class, `None` at the first one
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(index) => Self::new(index),
            None => None,
        }
    }

    /// Every class in catalog order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BITMASK_CLASS_COUNT).filter_map(Self::new)
    }

    /// Human readable neighbor description
    pub fn description(self) -> &'static str {
        CATALOG.get(self.index()).map_or("", |&(_, text)| text)
    }

    /// Neighbor set this class stands for
    pub fn neighbors(self) -> Neighbors {
        Neighbors::from_bits(CATALOG.get(self.index()).map_or(0, |&(mask, _)| mask))
    }

    /// Classify an arbitrary neighbor configuration
    ///
    /// Unsupported corners are dropped first, so every configuration lands
    /// on exactly one class.
    pub fn from_neighbors(neighbors: Neighbors) -> Self {
        let reduced = neighbors.reduced();
        Self::all()
            .find(|class| class.neighbors() == reduced)
            .unwrap_or(Self::SURROUNDED)
    }
}

impl fmt::Display for BitmaskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.description())
    }
}
