use rand::Rng;

use super::board::{Board, Coordinate};
use super::levels::ObstacleLayout;
use super::snake::Snake;

/// Picks a uniformly random cell that is neither on the snake nor an obstacle.
///
/// Rejection sampling, so the number of draws is unbounded in principle. The
/// free cells are counted first: a saturated board yields `None` instead of
/// spinning forever.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    snake: &Snake,
    obstacles: &ObstacleLayout,
) -> Option<Coordinate> {
    let blocked = |cell: Coordinate| snake.contains(cell) || obstacles.contains(cell);

    if board.cells().all(|cell| blocked(cell)) {
        return None;
    }

    loop {
        let cell = Coordinate::new(
            rng.gen_range(0..board.size()),
            rng.gen_range(0..board.size()),
        );
        if !blocked(cell) {
            return Some(cell);
        }
    }
}
