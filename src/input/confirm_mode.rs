use crossterm::event::KeyCode;

use crate::app::Action;
use crate::input::Intent;

pub fn handle_delete_key(key: KeyCode) -> Option<Intent> {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Intent::Submit),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Intent::Dispatch(Action::CloseDialog)),
        _ => None,
    }
}

pub fn handle_help_key(key: KeyCode) -> Option<Intent> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Esc => Some(Intent::Dispatch(Action::CloseDialog)),
        _ => None,
    }
}
