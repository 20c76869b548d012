//! Terminal drawing of a [`Snapshot`].

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::controller::Snapshot;
use crate::game::{is_beyond_catalog, Collision, Coordinate};
use crate::session::GameStatus;

const HEAD: &str = "O ";
const BODY: &str = "o ";
const FOOD: &str = "* ";
const OBSTACLE: &str = "[]";
const EMPTY: &str = "  ";
const WALL: &str = "#";

pub fn level_label(level: u32) -> String {
    if is_beyond_catalog(level) {
        "MAX".to_string()
    } else {
        level.to_string()
    }
}

pub fn header(snapshot: &Snapshot) -> String {
    format!(
        "LEVEL {}   SCORE {}   BEST {}   TICK {}ms",
        level_label(snapshot.level),
        snapshot.score,
        snapshot.high_score,
        snapshot.speed_ms
    )
}

/// Board rows including the surrounding wall.
pub fn board_rows(snapshot: &Snapshot) -> Vec<String> {
    let size = snapshot.board_size;
    let snake: HashSet<Coordinate> = snapshot.snake.iter().copied().collect();
    let obstacles: HashSet<Coordinate> = snapshot.obstacles.iter().copied().collect();
    let head = snapshot.snake.first().copied();

    let border = WALL.repeat(size as usize * 2 + 2);
    let mut rows = Vec::with_capacity(size as usize + 2);
    rows.push(border.clone());
    for y in 0..size {
        let mut row = String::from(WALL);
        for x in 0..size {
            let cell = Coordinate::new(x, y);
            let glyph = if Some(cell) == head {
                HEAD
            } else if snake.contains(&cell) {
                BODY
            } else if obstacles.contains(&cell) {
                OBSTACLE
            } else if snapshot.food == Some(cell) {
                FOOD
            } else {
                EMPTY
            };
            row.push_str(glyph);
        }
        row.push_str(WALL);
        rows.push(row);
    }
    rows.push(border);
    rows
}

fn collision_label(collision: Option<Collision>) -> &'static str {
    match collision {
        Some(Collision::Wall) => "hit the wall",
        Some(Collision::Obstacle) => "hit an obstacle",
        Some(Collision::SelfCollision) => "bit itself",
        Some(Collision::BoardFull) => "ran out of room",
        None => "",
    }
}

/// Status text shown under the board.
pub fn footer(snapshot: &Snapshot) -> Vec<String> {
    match snapshot.status {
        GameStatus::Idle => vec!["Press Enter to start".to_string()],
        GameStatus::Playing => {
            vec!["Arrows/WASD to steer, Space to pause, R to restart, Q to quit".to_string()]
        }
        GameStatus::Paused => vec!["PAUSED - Space to resume".to_string()],
        GameStatus::GameOver => {
            let comment = if snapshot.commentary_loading {
                "The commentator is thinking...".to_string()
            } else {
                snapshot.commentary.clone().unwrap_or_default()
            };
            vec![
                format!(
                    "GAME OVER - the snake {} with {} points. Enter to play again",
                    collision_label(snapshot.collision),
                    snapshot.score
                ),
                comment,
            ]
        }
    }
}

pub fn draw<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0), Print(header(snapshot)))?;

    let mut line: u16 = 1;
    for row in board_rows(snapshot).into_iter().chain(footer(snapshot)) {
        queue!(out, MoveTo(0, line), Print(row))?;
        line += 1;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(status: GameStatus) -> Snapshot {
        Snapshot {
            board_size: 4,
            snake: vec![Coordinate::new(1, 1), Coordinate::new(1, 2)],
            food: (status != GameStatus::Idle).then_some(Coordinate::new(3, 0)),
            obstacles: &[],
            status,
            score: 2,
            high_score: 9,
            speed_ms: 144,
            level: 1,
            collision: None,
            commentary: None,
            commentary_loading: false,
        }
    }

    #[test]
    fn test_board_rows() {
        let rows = board_rows(&snapshot(GameStatus::Playing));
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], "##########");
        assert_eq!(rows[1], "#      * #");
        assert_eq!(rows[2], "#  O     #");
        assert_eq!(rows[3], "#  o     #");
    }

    #[test]
    fn test_food_hidden_while_idle() {
        let rows = board_rows(&snapshot(GameStatus::Idle));
        assert_eq!(rows[1], "#        #");
    }

    #[test]
    fn test_header_shows_max_past_catalog() {
        let mut snap = snapshot(GameStatus::Playing);
        assert!(header(&snap).starts_with("LEVEL 1 "));
        snap.level = 6;
        assert!(header(&snap).starts_with("LEVEL MAX "));
        assert!(header(&snap).contains("BEST 9"));
    }

    #[test]
    fn test_game_over_footer() {
        let mut snap = snapshot(GameStatus::GameOver);
        snap.collision = Some(Collision::Wall);
        snap.commentary_loading = true;
        let lines = footer(&snap);
        assert!(lines[0].contains("hit the wall"));
        assert_eq!(lines[1], "The commentator is thinking...");

        snap.commentary_loading = false;
        snap.commentary = Some("ouch".to_string());
        assert_eq!(footer(&snap)[1], "ouch");
    }

    #[test]
    fn test_draw_writes_frame() {
        let mut out = Vec::new();
        draw(&mut out, &snapshot(GameStatus::Paused)).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("SCORE 2"));
        assert!(text.contains("PAUSED"));
    }
}
