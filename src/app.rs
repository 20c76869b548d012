//! Terminal front-end: raw mode, the event loop and the tick clock.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::info;

use crate::controller::{CommentaryReady, GameController};
use crate::input::{map_key, KeyCommand};
use crate::render;
use crate::session::SessionEvent;

pub struct App {
    controller: GameController,
    commentary: mpsc::UnboundedReceiver<CommentaryReady>,
    should_quit: bool,
}

impl App {
    pub fn new(
        controller: GameController,
        commentary: mpsc::UnboundedReceiver<CommentaryReady>,
    ) -> Self {
        Self {
            controller,
            commentary,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)
            .context("Failed to enter alternate screen")?;

        let result = self.event_loop(&mut stdout).await;

        restore_terminal(&mut stdout, terminal::disable_raw_mode)?;

        let snapshot = self.controller.snapshot();
        info!(seed = self.controller.seed(), high_score = snapshot.high_score, "quit");
        println!("Best score this session: {}", snapshot.high_score);
        result
    }

    async fn event_loop(&mut self, out: &mut Stdout) -> Result<()> {
        let mut events = EventStream::new();
        let mut next_tick: Option<Instant> = None;

        render::draw(out, &self.controller.snapshot()).context("Failed to draw frame")?;

        while !self.should_quit {
            // re-armed only after the previous tick committed, at the current speed
            let deadline = next_tick.unwrap_or_else(Instant::now);

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => self.on_terminal_event(event),
                    Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                    None => self.should_quit = true,
                },

                _ = sleep_until(deadline), if next_tick.is_some() => {
                    self.controller.handle(SessionEvent::Tick);
                    next_tick = None;
                }

                Some(ready) = self.commentary.recv() => {
                    self.controller.deliver(ready);
                }
            }

            next_tick = match (next_tick, self.controller.tick_interval()) {
                (Some(deadline), Some(_)) => Some(deadline),
                (None, Some(interval)) => Some(Instant::now() + interval),
                (_, None) => None,
            };

            render::draw(out, &self.controller.snapshot()).context("Failed to draw frame")?;
        }

        out.flush().context("Failed to flush terminal")?;
        Ok(())
    }

    fn on_terminal_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match map_key(key) {
            KeyCommand::Session(event) => self.controller.handle(event),
            KeyCommand::Quit => self.should_quit = true,
            KeyCommand::None => {}
        }
    }
}

/// Leaves the alternate screen and raw mode. Both steps always run; the
/// first failure is returned.
fn restore_terminal<W: Write>(
    out: &mut W,
    disable_raw_mode: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    let screen =
        execute!(out, Show, LeaveAlternateScreen).context("Failed to leave alternate screen");
    let raw_mode = disable_raw_mode().context("Failed to disable raw mode");
    screen.and(raw_mode)
}
