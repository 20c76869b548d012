//! Round state machine.
//!
//! A [`Session`] is consumed by [`Session::apply`] and a new one returned for
//! every event, so each transition can be exercised on its own.

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::game::{
    self, obstacles_for, place_food, Collision, Coordinate, Direction, Field, ObstacleLayout,
    Progression, Snake, TickOutcome,
};

pub const INITIAL_DIRECTION: Direction = Direction::Up;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Playing,
    Paused,
    GameOver,
}

/// Inputs the state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Begin a round from IDLE or GAME_OVER; resumes a paused round
    Start,
    /// Toggle PLAYING and PAUSED
    Pause,
    /// Always begin a fresh round
    Reset,
    Turn(Direction),
    Tick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    config: GameConfig,
    field: Field,
    direction: Direction,
    /// Turn accepted since the last tick. Only the tick commit clears it.
    accepted_turn: Option<Direction>,
    status: GameStatus,
    high_score: u32,
    round: u64,
    collision: Option<Collision>,
}

impl Session {
    /// An IDLE session showing the initial snake. Food is placed on the first
    /// reset; until then [`Session::food`] is `None`.
    pub fn new(config: GameConfig) -> Self {
        let snake = Snake::initial(config.board_size);
        let field = Field {
            food: snake.head(),
            snake,
            progression: Progression::initial(&config),
        };

        Self {
            config,
            field,
            direction: INITIAL_DIRECTION,
            accepted_turn: None,
            status: GameStatus::Idle,
            high_score: 0,
            round: 0,
            collision: None,
        }
    }

    pub fn apply<R: Rng + ?Sized>(self, event: SessionEvent, rng: &mut R) -> Self {
        match event {
            SessionEvent::Start => match self.status {
                GameStatus::Idle | GameStatus::GameOver => self.reset(rng),
                GameStatus::Paused => self.resume(),
                GameStatus::Playing => self,
            },
            SessionEvent::Pause => match self.status {
                GameStatus::Playing => self.with_status(GameStatus::Paused),
                GameStatus::Paused => self.resume(),
                GameStatus::Idle | GameStatus::GameOver => self,
            },
            SessionEvent::Reset => self.reset(rng),
            SessionEvent::Turn(direction) => self.turn(direction),
            SessionEvent::Tick => self.tick(rng),
        }
    }

    fn reset<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let snake = Snake::initial(self.config.board_size);
        let progression = Progression::initial(&self.config);
        let board = self.config.board();
        let round = self.round + 1;

        // `validate` guarantees the initial snake leaves free cells on level 1
        let (food, status, collision) =
            match place_food(rng, &board, &snake, &obstacles_for(progression.level)) {
                Some(food) => (food, GameStatus::Playing, None),
                None => (snake.head(), GameStatus::GameOver, Some(Collision::BoardFull)),
            };
        info!(round, food_x = food.x, food_y = food.y, "round started");

        Self {
            field: Field {
                snake,
                food,
                progression,
            },
            direction: INITIAL_DIRECTION,
            accepted_turn: None,
            status,
            round,
            collision,
            ..self
        }
    }

    fn resume(self) -> Self {
        self.with_status(GameStatus::Playing)
    }

    fn with_status(self, status: GameStatus) -> Self {
        debug!(from = ?self.status, to = ?status, "status change");
        Self { status, ..self }
    }

    fn turn(self, direction: Direction) -> Self {
        if self.status != GameStatus::Playing
            || self.accepted_turn.is_some()
            || direction.is_opposite(self.direction)
        {
            return self;
        }
        Self {
            accepted_turn: Some(direction),
            ..self
        }
    }

    fn tick<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        if self.status != GameStatus::Playing {
            return self;
        }

        let direction = self.accepted_turn.unwrap_or(self.direction);
        let outcome = game::tick(&self.field, direction, &self.config, rng);
        let next = Self {
            direction,
            accepted_turn: None,
            ..self
        };

        match outcome {
            TickOutcome::Moved(field) => Self { field, ..next },
            TickOutcome::Ate(field) => {
                debug!(
                    score = field.progression.score,
                    food_x = field.food.x,
                    food_y = field.food.y,
                    "food eaten"
                );
                if field.progression.level > next.field.progression.level {
                    info!(
                        level = field.progression.level,
                        speed_ms = field.progression.speed_ms,
                        "level up"
                    );
                }
                Self { field, ..next }
            }
            TickOutcome::Filled(field) => Self { field, ..next }.game_over(Collision::BoardFull),
            TickOutcome::Crashed(collision) => next.game_over(collision),
        }
    }

    fn game_over(self, collision: Collision) -> Self {
        let progression = self.field.progression;
        info!(
            round = self.round,
            reason = ?collision,
            score = progression.score,
            level = progression.level,
            "game over"
        );
        Self {
            status: GameStatus::GameOver,
            high_score: self.high_score.max(progression.score),
            collision: Some(collision),
            ..self
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn snake(&self) -> &Snake {
        &self.field.snake
    }

    /// Food cell, once a round has started.
    pub fn food(&self) -> Option<Coordinate> {
        (self.status != GameStatus::Idle).then_some(self.field.food)
    }

    /// Last committed direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next tick will move in.
    pub fn heading(&self) -> Direction {
        self.accepted_turn.unwrap_or(self.direction)
    }

    pub fn score(&self) -> u32 {
        self.field.progression.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.field.progression.level
    }

    pub fn speed_ms(&self) -> u64 {
        self.field.progression.speed_ms
    }

    pub fn progression(&self) -> Progression {
        self.field.progression
    }

    pub fn obstacles(&self) -> ObstacleLayout {
        obstacles_for(self.level())
    }

    /// Increments on every reset; ties commentary results to the round they describe.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Why the last round ended, while in GAME_OVER.
    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    #[cfg(test)]
    pub(crate) fn with_field(self, snake: Snake, food: Coordinate, progression: Progression) -> Self {
        Self {
            field: Field {
                snake,
                food,
                progression,
            },
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    fn playing() -> (Session, StdRng) {
        let mut rng = rng();
        let session = Session::new(GameConfig::default()).apply(SessionEvent::Start, &mut rng);
        // keep the food out of the way of straight-up movement
        let session = session.with_field(
            Snake::initial(20),
            Coordinate::new(0, 19),
            Progression::initial(&GameConfig::default()),
        );
        (session, rng)
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new(GameConfig::default());
        assert_eq!(session.status(), GameStatus::Idle);
        assert_eq!(session.round(), 0);
        assert_eq!(session.level(), 1);
        assert_eq!(session.food(), None);
    }

    #[test]
    fn test_reset_initial_values() {
        let mut rng = rng();
        let session = Session::new(GameConfig::default()).apply(SessionEvent::Reset, &mut rng);

        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.snake(), &Snake::initial(20));
        assert_eq!(session.direction(), Direction::Up);
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
        assert_eq!(session.speed_ms(), 150);
        assert_eq!(session.round(), 1);
        assert!(!session.snake().contains(session.food().unwrap()));
        assert!(session.obstacles().is_empty());
    }

    #[test]
    fn test_pause_toggles() {
        let (session, mut rng) = playing();
        let paused = session.apply(SessionEvent::Pause, &mut rng);
        assert_eq!(paused.status(), GameStatus::Paused);

        let frozen = paused.clone().apply(SessionEvent::Tick, &mut rng);
        assert_eq!(frozen, paused);

        let resumed = paused.apply(SessionEvent::Pause, &mut rng);
        assert_eq!(resumed.status(), GameStatus::Playing);
    }

    #[test]
    fn test_start_resumes_pause_and_ignores_playing() {
        let (session, mut rng) = playing();
        let same = session.clone().apply(SessionEvent::Start, &mut rng);
        assert_eq!(same, session);

        let paused = session.apply(SessionEvent::Pause, &mut rng);
        let resumed = paused.clone().apply(SessionEvent::Start, &mut rng);
        assert_eq!(resumed.status(), GameStatus::Playing);
        assert_eq!(resumed.round(), paused.round());
    }

    #[test]
    fn test_pause_is_ignored_when_idle_or_over() {
        let mut rng = rng();
        let idle = Session::new(GameConfig::default());
        assert_eq!(idle.clone().apply(SessionEvent::Pause, &mut rng), idle);

        let (mut session, mut rng) = playing();
        for _ in 0..11 {
            session = session.apply(SessionEvent::Tick, &mut rng);
        }
        assert_eq!(session.status(), GameStatus::GameOver);
        let after = session.clone().apply(SessionEvent::Pause, &mut rng);
        assert_eq!(after, session);
    }

    #[test]
    fn test_opposite_turn_rejected() {
        let (session, mut rng) = playing();
        let session = session.apply(SessionEvent::Turn(Direction::Down), &mut rng);
        assert_eq!(session.heading(), Direction::Up);
        assert_eq!(session.direction(), Direction::Up);
    }

    #[test]
    fn test_one_turn_per_tick() {
        let (session, mut rng) = playing();
        let session = session
            .apply(SessionEvent::Turn(Direction::Left), &mut rng)
            .apply(SessionEvent::Turn(Direction::Right), &mut rng);
        assert_eq!(session.heading(), Direction::Left);

        let session = session.apply(SessionEvent::Tick, &mut rng);
        assert_eq!(session.direction(), Direction::Left);
        assert_eq!(session.snake().head(), Coordinate::new(9, 10));

        // lock released by the tick
        let session = session.apply(SessionEvent::Turn(Direction::Down), &mut rng);
        assert_eq!(session.heading(), Direction::Down);
    }

    #[test]
    fn test_turn_ignored_unless_playing() {
        let mut rng = rng();
        let idle = Session::new(GameConfig::default());
        let after = idle.clone().apply(SessionEvent::Turn(Direction::Left), &mut rng);
        assert_eq!(after, idle);

        let (session, mut rng) = playing();
        let paused = session.apply(SessionEvent::Pause, &mut rng);
        let after = paused.apply(SessionEvent::Turn(Direction::Left), &mut rng);
        assert_eq!(after.heading(), Direction::Up);
    }

    #[test]
    fn test_wall_collision_freezes_body() {
        let (mut session, mut rng) = playing();
        for _ in 0..10 {
            session = session.apply(SessionEvent::Tick, &mut rng);
            assert_eq!(session.status(), GameStatus::Playing);
        }
        assert_eq!(session.snake().head(), Coordinate::new(10, 0));

        let before = session.snake().clone();
        let session = session.apply(SessionEvent::Tick, &mut rng);
        assert_eq!(session.status(), GameStatus::GameOver);
        assert_eq!(session.collision(), Some(Collision::Wall));
        assert_eq!(session.snake(), &before);
    }

    #[test]
    fn test_collision_clears_accepted_turn() {
        let (mut session, mut rng) = playing();
        for _ in 0..10 {
            session = session.apply(SessionEvent::Tick, &mut rng);
        }
        let session = session
            .apply(SessionEvent::Turn(Direction::Up), &mut rng)
            .apply(SessionEvent::Tick, &mut rng);
        assert_eq!(session.status(), GameStatus::GameOver);
        assert_eq!(session.heading(), session.direction());
    }

    #[test]
    fn test_eating_updates_progression() {
        let (session, mut rng) = playing();
        let session = session.with_field(
            Snake::initial(20),
            Coordinate::new(10, 9),
            Progression::initial(&GameConfig::default()),
        );
        let session = session.apply(SessionEvent::Tick, &mut rng);

        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.score(), 1);
        assert_eq!(session.snake().len(), 4);
        assert_eq!(session.speed_ms(), 147);
        assert!(!session.snake().contains(session.food().unwrap()));
    }

    #[test]
    fn test_level_up_on_fifth_food() {
        let config = GameConfig::default();
        let (session, mut rng) = playing();
        let session = session.with_field(
            Snake::initial(20),
            Coordinate::new(10, 9),
            Progression {
                score: 4,
                level: 1,
                speed_ms: 138,
            },
        );
        let session = session.apply(SessionEvent::Tick, &mut rng);

        assert_eq!(session.score(), 5);
        assert_eq!(session.level(), 2);
        assert_eq!(session.speed_ms(), 135);
        assert_eq!(session.obstacles(), obstacles_for(2));
        assert!(!session.obstacles().contains(session.food().unwrap()));
        assert_eq!(session.config(), &config);
    }

    #[test]
    fn test_filling_the_board_keeps_last_point() {
        let config = GameConfig {
            board_size: 2,
            ..Default::default()
        };
        let mut rng = rng();
        let session = Session::new(config.clone()).apply(SessionEvent::Start, &mut rng);
        let snake = Snake::from_cells([
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
            Coordinate::new(1, 0),
        ])
        .unwrap();
        let session =
            session.with_field(snake, Coordinate::new(0, 0), Progression::initial(&config));

        let session = session.apply(SessionEvent::Tick, &mut rng);
        assert_eq!(session.status(), GameStatus::GameOver);
        assert_eq!(session.collision(), Some(Collision::BoardFull));
        assert_eq!(session.score(), 1);
        assert_eq!(session.high_score(), 1);
        assert_eq!(session.snake().len(), 4);
        assert_eq!(session.snake().head(), Coordinate::new(0, 0));
    }

    #[test]
    fn test_high_score_survives_reset() {
        let (session, mut rng) = playing();
        let mut session = session.with_field(
            Snake::initial(20),
            Coordinate::new(0, 19),
            Progression {
                score: 7,
                level: 2,
                speed_ms: 129,
            },
        );
        for _ in 0..11 {
            session = session.apply(SessionEvent::Tick, &mut rng);
        }
        assert_eq!(session.status(), GameStatus::GameOver);
        assert_eq!(session.high_score(), 7);

        let session = session.apply(SessionEvent::Reset, &mut rng);
        assert_eq!(session.score(), 0);
        assert_eq!(session.high_score(), 7);
        assert_eq!(session.round(), 2);
        assert_eq!(session.collision(), None);
    }

    #[test]
    fn test_start_after_game_over_begins_new_round() {
        let (mut session, mut rng) = playing();
        for _ in 0..11 {
            session = session.apply(SessionEvent::Tick, &mut rng);
        }
        let round = session.round();
        let session = session.apply(SessionEvent::Start, &mut rng);
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.round(), round + 1);
    }
}
