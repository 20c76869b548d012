use std::collections::VecDeque;

use super::board::Coordinate;

/// The snake body, head at the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Coordinate>,
}

impl Snake {
    /// Builds a snake from its cells, head first. Returns `None` for an empty body.
    pub fn from_cells(cells: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let body: VecDeque<_> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    /// Three cells stacked vertically with the head on top, centred on a board of `size`.
    pub fn initial(size: u16) -> Self {
        let center = i32::from(size / 2);
        Self {
            body: (0..3).map(|i| Coordinate::new(center, center + i)).collect(),
        }
    }

    pub fn head(&self) -> Coordinate {
        // body is never empty: every constructor checks it and `advanced` only ever adds a head
        self.body[0]
    }

    #[cfg(test)]
    pub fn tail(&self) -> Coordinate {
        self.body[self.body.len() - 1]
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        self.body.contains(&cell)
    }

    pub fn cells(&self) -> impl ExactSizeIterator<Item = Coordinate> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// A new snake with `new_head` in front. The tail stays when `grow` is set.
    pub fn advanced(&self, new_head: Coordinate, grow: bool) -> Self {
        let mut body = self.body.clone();
        body.push_front(new_head);
        if !grow {
            body.pop_back();
        }
        Self { body }
    }
}
