//! Russian display strings used by the calendar views.

use crate::calendar::{week_info, CalendarDate, YearMonth};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

const MONTH_NAMES: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь",
    "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
];

const SHORT_WEEKDAYS: [&str; 7] = ["пн", "вт", "ср", "чт", "пт", "сб", "вс"];

/// Noun form for a number of classes: "занятие", "занятия" or "занятий".
///
/// Only 1 and 2..=4 get the singular and paucal forms; 11..=14 and every
/// other count fall through to the genitive plural.
pub fn class_count_label(count: usize) -> &'static str {
    if count == 1 {
        "занятие"
    } else if (2..=4).contains(&count) {
        "занятия"
    } else {
        "занятий"
    }
}

pub fn month_title(month: YearMonth) -> String {
    let name = MONTH_NAMES
        .get(month.month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    format!("{} {}", name, month.year)
}

/// `ср, 26.11` for 26 November 2025.
pub fn short_date(date: CalendarDate) -> String {
    let weekday = SHORT_WEEKDAYS[(date.iso_day_of_week() - 1) as usize];
    format!("{}, {:02}.{:02}", weekday, date.day(), date.month())
}

/// `Занятия на ср, 01.10 (неделя 5, нечётная):`
pub fn day_heading(date: CalendarDate, semester_start: CalendarDate) -> String {
    let info = week_info(date, semester_start);
    format!(
        "Занятия на {} (неделя {}, {}):",
        short_date(date),
        info.week_number,
        info.parity.label()
    )
}
