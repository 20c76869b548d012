//! Neon Snake: a grid snake with per-level obstacle layouts, a speed ramp
//! driven by score, and a commentator that roasts you when the round ends.
//!
//! - [`game`]: the deterministic rules
//! - [`session`]: the round state machine
//! - [`controller`]: tick clock and commentary wiring
//! - [`app`], [`render`], [`input`]: the terminal front-end

pub mod app;
pub mod commentary;
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod session;

pub use config::GameConfig;
pub use controller::{GameController, Snapshot};
pub use error::{CommentaryError, ConfigError};
pub use session::{GameStatus, Session, SessionEvent};
