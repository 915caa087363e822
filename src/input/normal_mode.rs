use crossterm::event::KeyCode;

use crate::app::{Action, AppState};
use crate::calendar::CalendarDate;
use crate::input::Intent;

pub fn handle_key(key: KeyCode, state: &AppState) -> Option<Intent> {
    let intent = match key {
        KeyCode::Char('h') | KeyCode::Left => dispatch(Action::MoveSelection(-1)),
        KeyCode::Char('l') | KeyCode::Right => dispatch(Action::MoveSelection(1)),
        KeyCode::Char('j') | KeyCode::Down => {
            if has_classes_on_selected_date(state) {
                dispatch(Action::HighlightNext)
            } else {
                dispatch(Action::MoveSelection(7))
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if has_classes_on_selected_date(state) {
                dispatch(Action::HighlightPrevious)
            } else {
                dispatch(Action::MoveSelection(-7))
            }
        }
        KeyCode::Char('J') => dispatch(Action::MoveSelection(7)),
        KeyCode::Char('K') => dispatch(Action::MoveSelection(-7)),
        KeyCode::Char('{') => dispatch(Action::PreviousMonth),
        KeyCode::Char('}') => dispatch(Action::NextMonth),
        KeyCode::Char('g') => dispatch(Action::SelectDate(state.visible_month.first_day()?)),
        KeyCode::Char('G') => dispatch(Action::SelectDate(state.visible_month.last_day()?)),
        KeyCode::Char('t') => dispatch(Action::SelectToday(CalendarDate::today())),
        KeyCode::Char('a') => dispatch(Action::OpenAddForm),
        KeyCode::Char('E') | KeyCode::Enter => dispatch(Action::OpenEditForm(state.highlighted_class()?)),
        KeyCode::Char('x') => dispatch(Action::RequestDelete(state.highlighted_class()?)),
        KeyCode::Char('r') => Intent::Reload,
        KeyCode::Char('?') => dispatch(Action::ShowHelp),
        KeyCode::Char('q') => Intent::Quit,
        KeyCode::Esc => dispatch(Action::DismissNotice),
        _ => return None,
    };
    Some(intent)
}

fn dispatch(action: Action) -> Intent {
    Intent::Dispatch(action)
}

fn has_classes_on_selected_date(state: &AppState) -> bool {
    !state.entries_for_selected_date().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{reduce, ClassRef};
    use crate::calendar::{Schedule, ScheduleEntry, YearMonth};

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    fn state_on(day: CalendarDate) -> AppState {
        AppState::new(date(2025, 9, 1), day, vec![])
    }

    fn press(key: KeyCode, state: AppState) -> AppState {
        match handle_key(key, &state) {
            Some(Intent::Dispatch(action)) => reduce(state, action),
            _ => state,
        }
    }

    fn with_class(state: AppState) -> AppState {
        let mut schedule = Schedule::new();
        let day = state.selected_date.unwrap();
        schedule.push(day, ScheduleEntry {
            id: 5,
            subject: "Физика".to_string(),
            time: "09:00–10:35".to_string(),
            group: "Д-Э 301".to_string(),
            room: None,
            week_num: None,
            parity_str: None,
            day_of_week: None,
            week_parity: None,
        });
        reduce(state, Action::ScheduleLoaded(schedule))
    }

    #[test]
    fn h_key_moves_to_previous_day() {
        let state = press(KeyCode::Char('h'), state_on(date(2025, 10, 1)));
        assert_eq!(state.selected_date, Some(date(2025, 9, 30)));
    }

    #[test]
    fn l_key_moves_to_next_day() {
        let state = press(KeyCode::Char('l'), state_on(date(2025, 10, 1)));
        assert_eq!(state.selected_date, Some(date(2025, 10, 2)));
    }

    #[test]
    fn j_key_moves_down_one_week_when_no_classes() {
        let state = press(KeyCode::Char('j'), state_on(date(2025, 10, 1)));
        assert_eq!(state.selected_date, Some(date(2025, 10, 8)));
    }

    #[test]
    fn j_key_walks_class_list_when_day_has_classes() {
        let state = with_class(state_on(date(2025, 10, 1)));

        let intent = handle_key(KeyCode::Char('j'), &state);

        assert_eq!(intent, Some(Intent::Dispatch(Action::HighlightNext)));
    }

    #[test]
    fn braces_change_visible_month() {
        let state = press(KeyCode::Char('}'), state_on(date(2025, 10, 1)));
        assert_eq!(state.visible_month, YearMonth::new(2025, 11).unwrap());

        let state = press(KeyCode::Char('{'), state);
        let state = press(KeyCode::Char('{'), state);
        assert_eq!(state.visible_month, YearMonth::new(2025, 9).unwrap());
    }

    #[test]
    fn shift_g_selects_last_day_of_visible_month() {
        let state = press(KeyCode::Char('}'), state_on(date(2025, 10, 15)));
        let state = press(KeyCode::Char('G'), state);
        assert_eq!(state.selected_date, Some(date(2025, 11, 30)));
    }

    #[test]
    fn edit_key_targets_highlighted_class() {
        let state = with_class(state_on(date(2025, 10, 1)));

        let intent = handle_key(KeyCode::Char('E'), &state);

        assert_eq!(
            intent,
            Some(Intent::Dispatch(Action::OpenEditForm(ClassRef {
                date_key: "2025-10-01".to_string(),
                id: 5,
            })))
        );
    }

    #[test]
    fn delete_key_without_classes_does_nothing() {
        assert_eq!(handle_key(KeyCode::Char('x'), &state_on(date(2025, 10, 1))), None);
    }

    #[test]
    fn q_quits_and_r_reloads() {
        let state = state_on(date(2025, 10, 1));
        assert_eq!(handle_key(KeyCode::Char('q'), &state), Some(Intent::Quit));
        assert_eq!(handle_key(KeyCode::Char('r'), &state), Some(Intent::Reload));
    }
}
