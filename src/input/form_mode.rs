use crossterm::event::KeyCode;

use crate::app::{Action, AppState, FormField};
use crate::input::Intent;

/// Keys while the add/edit class dialog is open. The group field is a
/// picker: arrows cycle through the configured groups, typing still works
/// for groups missing from the list.
pub fn handle_key(key: KeyCode, state: &AppState) -> Option<Intent> {
    let form = state.form()?;

    let action = match key {
        KeyCode::Esc => Action::CloseDialog,
        KeyCode::Enter => return Some(Intent::Submit),
        KeyCode::Tab => Action::FormNextField,
        KeyCode::BackTab => Action::FormPreviousField,
        KeyCode::Backspace => Action::FormBackspace,
        KeyCode::Up | KeyCode::Left if form.active_field == FormField::Group => Action::CycleGroup(-1),
        KeyCode::Down | KeyCode::Right if form.active_field == FormField::Group => Action::CycleGroup(1),
        KeyCode::Char(c) => Action::FormInput(c),
        _ => return None,
    };
    Some(Intent::Dispatch(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{reduce, Mode};
    use crate::calendar::CalendarDate;

    fn form_state() -> AppState {
        let today = CalendarDate::from_ymd(2025, 10, 1).unwrap();
        let state = AppState::new(today, today, vec!["Д-Э 301".to_string(), "Д-Э 302".to_string()]);
        reduce(state, Action::OpenAddForm)
    }

    fn type_keys(state: AppState, keys: &[KeyCode]) -> AppState {
        keys.iter().fold(state, |state, key| match handle_key(*key, &state) {
            Some(Intent::Dispatch(action)) => reduce(state, action),
            _ => state,
        })
    }

    #[test]
    fn characters_go_to_active_field() {
        let state = type_keys(form_state(), &[KeyCode::Char('О'), KeyCode::Char('С')]);
        assert_eq!(state.form().unwrap().subject, "ОС");
    }

    #[test]
    fn arrows_pick_group_only_on_group_field() {
        let state = type_keys(form_state(), &[KeyCode::Down]);
        assert_eq!(state.form().unwrap().group, "");

        let state = type_keys(state, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Down]);
        assert_eq!(state.form().unwrap().group, "Д-Э 301");
    }

    #[test]
    fn enter_submits_and_escape_cancels() {
        let state = form_state();
        assert_eq!(handle_key(KeyCode::Enter, &state), Some(Intent::Submit));

        let state = type_keys(state, &[KeyCode::Esc]);
        assert_eq!(state.mode, Mode::Browse);
    }

    #[test]
    fn keys_are_ignored_without_open_form() {
        let today = CalendarDate::from_ymd(2025, 10, 1).unwrap();
        let state = AppState::new(today, today, vec![]);
        assert_eq!(handle_key(KeyCode::Char('a'), &state), None);
    }
}
