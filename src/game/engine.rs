//! One tick of the snake: move, collide, eat, grow.

use rand::Rng;

use super::board::{Board, Coordinate};
use super::direction::Direction;
use super::food::place_food;
use super::levels::obstacles_for;
use super::progression::Progression;
use super::snake::Snake;
use crate::config::GameConfig;

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the board
    Wall,
    /// Head hit an obstacle of the current level
    Obstacle,
    /// Head hit the snake's own body
    SelfCollision,
    /// The snake filled every free cell
    BoardFull,
}

/// Everything a tick reads and rewrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub snake: Snake,
    pub food: Coordinate,
    pub progression: Progression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Moved(Field),
    Ate(Field),
    /// The snake ate and now covers every free cell; the move still counts
    Filled(Field),
    Crashed(Collision),
}

/// Advances `field` one cell in `direction`.
///
/// The checks run wall, obstacle, body in that order; the first that fires
/// is reported and nothing is committed. The body check covers the tail cell
/// too, so chasing your own tail ends the round. A meal that leaves no room
/// for the next food is committed and reported as [`TickOutcome::Filled`].
pub fn tick<R: Rng + ?Sized>(
    field: &Field,
    direction: Direction,
    config: &GameConfig,
    rng: &mut R,
) -> TickOutcome {
    let board: Board = config.board();
    let new_head = field.snake.head().step(direction);

    if !board.in_bounds(new_head) {
        return TickOutcome::Crashed(Collision::Wall);
    }
    if obstacles_for(field.progression.level).contains(new_head) {
        return TickOutcome::Crashed(Collision::Obstacle);
    }
    if field.snake.contains(new_head) {
        return TickOutcome::Crashed(Collision::SelfCollision);
    }

    if new_head != field.food {
        return TickOutcome::Moved(Field {
            snake: field.snake.advanced(new_head, false),
            food: field.food,
            progression: field.progression,
        });
    }

    let snake = field.snake.advanced(new_head, true);
    let progression = field.progression.after_food(config);
    let obstacles = obstacles_for(progression.level);
    match place_food(rng, &board, &snake, &obstacles) {
        Some(food) => TickOutcome::Ate(Field {
            snake,
            food,
            progression,
        }),
        None => TickOutcome::Filled(Field {
            snake,
            food: new_head,
            progression,
        }),
    }
}
