//! Session controller: owns the [`Session`], the RNG and the commentary side channel.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::commentary::{self, CommentaryProvider, NOT_CONFIGURED};
use crate::config::GameConfig;
use crate::game::{Collision, Coordinate};
use crate::session::{GameStatus, Session, SessionEvent};

/// Commentary for the round on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commentary {
    None,
    Loading { round: u64 },
    Ready(String),
}

/// A finished commentary request, tagged with the round it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentaryReady {
    pub round: u64,
    pub text: String,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board_size: i32,
    pub snake: Vec<Coordinate>,
    /// `None` until the first round starts
    pub food: Option<Coordinate>,
    pub obstacles: &'static [Coordinate],
    pub status: GameStatus,
    pub score: u32,
    pub high_score: u32,
    pub speed_ms: u64,
    pub level: u32,
    pub collision: Option<Collision>,
    pub commentary: Option<String>,
    pub commentary_loading: bool,
}

pub struct GameController {
    session: Session,
    rng: StdRng,
    seed: u64,
    commentator: Option<Arc<dyn CommentaryProvider>>,
    commentary_timeout: Duration,
    commentary: Commentary,
    results: mpsc::UnboundedSender<CommentaryReady>,
}

impl GameController {
    /// Returns the controller and the receiving end of its commentary channel.
    ///
    /// Results must be handed back through [`GameController::deliver`].
    pub fn new(
        config: GameConfig,
        commentator: Option<Arc<dyn CommentaryProvider>>,
        seed: Option<u64>,
    ) -> (Self, mpsc::UnboundedReceiver<CommentaryReady>) {
        let seed = seed.unwrap_or_else(rand::random);
        let (results, receiver) = mpsc::unbounded_channel();
        info!(seed, configured = commentator.is_some(), "controller created");

        let controller = Self {
            session: Session::new(config),
            rng: StdRng::seed_from_u64(seed),
            seed,
            commentator,
            commentary_timeout: commentary::DEFAULT_TIMEOUT,
            commentary: Commentary::None,
            results,
        };
        (controller, receiver)
    }

    pub fn with_commentary_timeout(mut self, timeout: Duration) -> Self {
        self.commentary_timeout = timeout;
        self
    }

    /// Applies one event. Entering GAME_OVER kicks off the commentary request;
    /// starting a new round drops the previous round's commentary.
    pub fn handle(&mut self, event: SessionEvent) {
        let before_status = self.session.status();
        let before_round = self.session.round();

        self.session = self.session.clone().apply(event, &mut self.rng);

        if self.session.round() != before_round {
            self.commentary = Commentary::None;
        }
        if before_status != GameStatus::GameOver && self.session.status() == GameStatus::GameOver {
            self.request_commentary();
        }
    }

    fn request_commentary(&mut self) {
        let round = self.session.round();
        let (score, level) = (self.session.score(), self.session.level());

        let Some(provider) = self.commentator.clone() else {
            self.commentary = Commentary::Ready(NOT_CONFIGURED.to_string());
            return;
        };

        debug!(round, score, level, "requesting commentary");
        self.commentary = Commentary::Loading { round };
        let results = self.results.clone();
        let timeout = self.commentary_timeout;
        tokio::spawn(async move {
            let text = commentary::request_commentary(Some(provider), score, level, timeout).await;
            // receiver gone means the game is shutting down
            let _ = results.send(CommentaryReady { round, text });
        });
    }

    /// Installs a finished commentary. Results for an older round are dropped.
    pub fn deliver(&mut self, ready: CommentaryReady) -> bool {
        if matches!(self.commentary, Commentary::Loading { round } if round == ready.round) {
            self.commentary = Commentary::Ready(ready.text);
            return true;
        }

        debug!(
            result_round = ready.round,
            current_round = self.session.round(),
            "discarding stale commentary"
        );
        false
    }

    /// Interval until the next tick, or `None` when the clock is stopped.
    pub fn tick_interval(&self) -> Option<Duration> {
        (self.session.status() == GameStatus::Playing)
            .then(|| self.session.progression().interval())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn commentary(&self) -> &Commentary {
        &self.commentary
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn snapshot(&self) -> Snapshot {
        let session = &self.session;
        let (commentary, commentary_loading) = match &self.commentary {
            Commentary::None => (None, false),
            Commentary::Loading { .. } => (None, true),
            Commentary::Ready(text) => (Some(text.clone()), false),
        };

        Snapshot {
            board_size: session.config().board().size(),
            snake: session.snake().cells().collect(),
            food: session.food(),
            obstacles: session.obstacles().cells(),
            status: session.status(),
            score: session.score(),
            high_score: session.high_score(),
            speed_ms: session.speed_ms(),
            level: session.level(),
            collision: session.collision(),
            commentary,
            commentary_loading,
        }
    }
}
