use super::direction::Direction;

/// A cell on the board. Signed so that a step off the edge is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`; y grows downwards.
    pub fn step(&self, direction: Direction) -> Self {
        let Self { x, y } = *self;
        match direction {
            Direction::Up => Self::new(x, y - 1),
            Direction::Down => Self::new(x, y + 1),
            Direction::Left => Self::new(x - 1, y),
            Direction::Right => Self::new(x + 1, y),
        }
    }
}

/// Square playing field of `size * size` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: i32,
}

impl Board {
    pub fn new(size: u16) -> Self {
        Self {
            size: i32::from(size),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn in_bounds(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.x < self.size && c.y >= 0 && c.y < self.size
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Coordinate::new(x, y)))
    }
}
