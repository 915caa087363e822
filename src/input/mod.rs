pub mod confirm_mode;
pub mod form_mode;
pub mod normal_mode;

use crossterm::event::KeyCode;

use crate::app::{Action, AppState, Mode};

/// What a key press asks the event loop to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Feed the action straight into the reducer.
    Dispatch(Action),
    /// Turn the open dialog into a backend command.
    Submit,
    Reload,
    Quit,
}

pub fn handle_key(key: KeyCode, state: &AppState) -> Option<Intent> {
    match &state.mode {
        Mode::Browse => normal_mode::handle_key(key, state),
        Mode::AddClass(_) | Mode::EditClass { .. } => form_mode::handle_key(key, state),
        Mode::ConfirmDelete(_) => confirm_mode::handle_delete_key(key),
        Mode::Help => confirm_mode::handle_help_key(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarDate;

    fn state() -> AppState {
        let today = CalendarDate::from_ymd(2025, 10, 1).unwrap();
        AppState::new(today, today, vec![])
    }

    #[test]
    fn q_quits_from_browse_mode() {
        assert_eq!(handle_key(KeyCode::Char('q'), &state()), Some(Intent::Quit));
    }

    #[test]
    fn q_is_text_inside_form() {
        let state = crate::app::reduce(state(), Action::OpenAddForm);
        assert_eq!(
            handle_key(KeyCode::Char('q'), &state),
            Some(Intent::Dispatch(Action::FormInput('q')))
        );
    }
}
