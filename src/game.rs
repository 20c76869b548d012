//! Core snake rules with no I/O: board, levels, food, movement, progression.

mod board;
mod direction;
mod engine;
mod food;
mod levels;
mod progression;
mod snake;

pub use board::{Board, Coordinate};
pub use direction::Direction;
pub use engine::{tick, Collision, Field, TickOutcome};
pub use food::place_food;
pub use levels::{all_layouts, is_beyond_catalog, obstacles_for, ObstacleLayout};
pub use progression::{is_level_up, next_speed, Progression};
pub use snake::Snake;
