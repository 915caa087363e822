use crate::app::{AppState, ClassRef};
use crate::calendar::{CalendarDate, Schedule};
use crate::ui::labels::{day_heading, short_date};

pub const NO_CLASSES_ON_DATE: &str = "На выбранную дату занятий нет";
pub const NO_CLASSES_TODAY: &str = "Сегодня занятий нет";
pub const LOAD_FAILED: &str = "Не удалось загрузить расписание";

#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: CalendarDate,
    pub heading: String,
    pub classes: Vec<ClassItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassItem {
    pub target: ClassRef,
    pub subject: String,
    pub time: String,
    pub group: String,
    pub room: Option<String>,
    pub is_highlighted: bool,
}

impl DayLayout {
    pub fn empty_message(&self) -> Option<&'static str> {
        self.classes.is_empty().then_some(NO_CLASSES_ON_DATE)
    }
}

/// Class list for the selected date, or `None` when nothing is selected.
pub fn calculate_layout(state: &AppState) -> Option<DayLayout> {
    let date = state.selected_date?;
    let key = date.key();

    let classes = state
        .entries_for_selected_date()
        .iter()
        .enumerate()
        .map(|(idx, entry)| ClassItem {
            target: ClassRef { date_key: key.clone(), id: entry.id },
            subject: or_dash(&entry.subject).to_string(),
            time: or_dash(&entry.time).to_string(),
            group: or_dash(&entry.group).to_string(),
            room: entry.room.clone(),
            is_highlighted: idx == state.highlighted_entry,
        })
        .collect();

    Some(DayLayout {
        date,
        heading: day_heading(date, state.semester_start),
        classes,
    })
}

/// Plain-text lesson list for one day, as printed by the `--today` mode.
pub fn agenda_text(date: CalendarDate, schedule: &Schedule) -> String {
    let mut lines = vec![short_date(date), String::new()];

    let entries = schedule.entries_on(date);
    if entries.is_empty() {
        lines.push(NO_CLASSES_TODAY.to_string());
    }

    for entry in entries {
        let mut line = format!(
            "{:<13} {}  [{}]",
            or_dash(&entry.time),
            or_dash(&entry.subject),
            or_dash(&entry.group)
        );
        if let Some(room) = &entry.room
            && !room.is_empty()
        {
            line.push_str(&format!(" ауд. {}", room));
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "—" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{reduce, Action};
    use crate::calendar::ScheduleEntry;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    fn entry(id: i64, subject: &str, room: Option<&str>) -> ScheduleEntry {
        ScheduleEntry {
            id,
            subject: subject.to_string(),
            time: "09:00–10:35".to_string(),
            group: "Д-Э 301".to_string(),
            room: room.map(str::to_string),
            week_num: None,
            parity_str: None,
            day_of_week: None,
            week_parity: None,
        }
    }

    fn state_with_classes() -> AppState {
        let mut schedule = Schedule::new();
        schedule.push(date(2025, 10, 1), entry(1, "Физика", Some("214")));
        schedule.push(date(2025, 10, 1), entry(2, "Химия", None));
        let state = AppState::new(date(2025, 9, 1), date(2025, 10, 1), vec![]);
        reduce(state, Action::ScheduleLoaded(schedule))
    }

    #[test]
    fn layout_lists_classes_with_typed_targets() {
        let layout = calculate_layout(&state_with_classes()).unwrap();

        assert_eq!(layout.heading, "Занятия на ср, 01.10 (неделя 5, нечётная):");
        assert_eq!(layout.classes.len(), 2);
        assert_eq!(layout.classes[1].target, ClassRef { date_key: "2025-10-01".to_string(), id: 2 });
        assert!(layout.classes[0].is_highlighted);
        assert!(!layout.classes[1].is_highlighted);
        assert_eq!(layout.empty_message(), None);
    }

    #[test]
    fn empty_day_shows_message() {
        let state = reduce(state_with_classes(), Action::SelectDate(date(2025, 10, 2)));

        let layout = calculate_layout(&state).unwrap();

        assert!(layout.classes.is_empty());
        assert_eq!(layout.empty_message(), Some(NO_CLASSES_ON_DATE));
    }

    #[test]
    fn no_selection_has_no_layout() {
        let mut state = state_with_classes();
        state.selected_date = None;
        assert!(calculate_layout(&state).is_none());
    }

    #[test]
    fn agenda_lists_lessons_under_short_date() {
        let state = state_with_classes();

        let text = agenda_text(date(2025, 10, 1), &state.schedule);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ср, 01.10");
        assert!(lines[2].contains("Физика"));
        assert!(lines[2].ends_with("ауд. 214"));
        assert!(lines[3].contains("Химия"));
    }

    #[test]
    fn agenda_for_free_day_says_so() {
        let text = agenda_text(date(2025, 10, 2), &Schedule::new());
        assert!(text.ends_with(NO_CLASSES_TODAY));
    }

    #[test]
    fn partial_entry_is_shown_with_dashes() {
        let mut schedule = Schedule::new();
        let mut partial = entry(5, "", None);
        partial.time = String::new();
        partial.group = String::new();
        schedule.push(date(2025, 10, 1), partial);

        let text = agenda_text(date(2025, 10, 1), &schedule);
        let line = text.lines().nth(2).unwrap();
        assert_eq!(line, format!("{:<13} —  [—]", "—"));

        let state = reduce(
            AppState::new(date(2025, 9, 1), date(2025, 10, 1), vec![]),
            Action::ScheduleLoaded(schedule),
        );
        let layout = calculate_layout(&state).unwrap();
        assert_eq!(layout.classes[0].subject, "—");
        assert_eq!(layout.classes[0].group, "—");
    }
}
