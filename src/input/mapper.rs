//! Key to action mapping
//!
//! Context-free: whether an action makes sense on the current cell is the
//! executor's business.

use super::keys::Key;
use crate::game::action::{Action, UNKNOWN_KEY};

pub fn map_key(key: Key) -> Action {
    match key {
        Key::Up => Action::Move { dx: 0, dy: -1 },
        Key::Down => Action::Move { dx: 0, dy: 1 },
        Key::Left => Action::Move { dx: -1, dy: 0 },
        Key::Right => Action::Move { dx: 1, dy: 0 },
        Key::Char(c) => match c.to_ascii_lowercase() {
            'w' => Action::Move { dx: 0, dy: -1 },
            's' => Action::Move { dx: 0, dy: 1 },
            'a' => Action::Move { dx: -1, dy: 0 },
            'd' => Action::Move { dx: 1, dy: 0 },
            'p' => Action::PickUp,
            'h' => Action::Hit,
            'e' => Action::Enter,
            't' => Action::Talk,
            'o' => Action::Open,
            'q' => Action::Quit,
            _ => Action::info(UNKNOWN_KEY),
        },
        _ => Action::info(UNKNOWN_KEY),
    }
}
