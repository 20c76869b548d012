use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;
use crate::session::SessionEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Session(SessionEvent),
    Quit,
    None,
}

pub fn map_key(key: KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyCommand::Quit;
    }

    let turn = |direction| KeyCommand::Session(SessionEvent::Turn(direction));
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => turn(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => turn(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => turn(Direction::Right),

        KeyCode::Enter => KeyCommand::Session(SessionEvent::Start),
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            KeyCommand::Session(SessionEvent::Pause)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => KeyCommand::Session(SessionEvent::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyCommand::Quit,

        _ => KeyCommand::None,
    }
}
