//! Static obstacle layouts, one per level.
//!
//! Levels past the end of the catalog keep the last (hardest) layout.

use super::board::Coordinate;

const fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

const OPEN_FIELD: &[Coordinate] = &[];

const FOUR_PILLARS: &[Coordinate] = &[c(5, 5), c(14, 5), c(5, 14), c(14, 14)];

const TWIN_BEAMS: &[Coordinate] = &[
    c(4, 7), c(5, 7), c(6, 7), c(7, 7), c(8, 7),
    c(11, 12), c(12, 12), c(13, 12), c(14, 12), c(15, 12),
];

const OPEN_BOX: &[Coordinate] = &[
    // top
    c(4, 4), c(5, 4), c(6, 4), c(7, 4), c(8, 4),
    c(11, 4), c(12, 4), c(13, 4), c(14, 4), c(15, 4),
    // bottom
    c(4, 15), c(5, 15), c(6, 15), c(7, 15), c(8, 15),
    c(11, 15), c(12, 15), c(13, 15), c(14, 15), c(15, 15),
    // left
    c(4, 5), c(4, 6), c(4, 13), c(4, 14),
    // right
    c(15, 5), c(15, 6), c(15, 13), c(15, 14),
];

const ROCK_FIELD: &[Coordinate] = &[
    c(2, 2), c(3, 3), c(17, 2), c(16, 3),
    c(2, 17), c(3, 16), c(17, 17), c(16, 16),
    // centre block
    c(9, 9), c(10, 9), c(9, 10), c(10, 10),
    c(6, 10), c(13, 10), c(10, 6), c(10, 13),
];

const CATALOG: &[ObstacleLayout] = &[
    ObstacleLayout(OPEN_FIELD),
    ObstacleLayout(FOUR_PILLARS),
    ObstacleLayout(TWIN_BEAMS),
    ObstacleLayout(OPEN_BOX),
    ObstacleLayout(ROCK_FIELD),
];

/// Immutable set of blocked cells for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleLayout(&'static [Coordinate]);

impl ObstacleLayout {
    pub fn contains(&self, cell: Coordinate) -> bool {
        self.0.contains(&cell)
    }

    pub fn cells(&self) -> &'static [Coordinate] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Layout for `level` (1-based). Level 0 is treated as level 1.
pub fn obstacles_for(level: u32) -> ObstacleLayout {
    let index = (level.max(1) - 1) as usize;
    CATALOG[index.min(CATALOG.len() - 1)]
}

/// True once the player has gone past the last designed layout.
pub fn is_beyond_catalog(level: u32) -> bool {
    level as usize > CATALOG.len()
}

/// All layouts in level order.
pub fn all_layouts() -> impl Iterator<Item = ObstacleLayout> {
    CATALOG.iter().copied()
}
