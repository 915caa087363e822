use crate::app::AppState;
use crate::calendar::{week_info, CalendarDate, Parity, Schedule, YearMonth};

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: CalendarDate,
    pub in_current_month: bool,
    pub week_parity: Parity,
    pub is_selected: bool,
    pub event_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Cells in rows of seven, Monday first. The last row is not padded.
    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }

    pub fn leading_days(&self) -> usize {
        self.cells.iter().take_while(|c| !c.in_current_month).count()
    }
}

/// Cells needed to draw `month` of `year` as a Monday-first grid: the tail of
/// the previous month up to the first Monday, then every day of the month.
pub fn build_month_grid(
    year: i32,
    month: u32,
    selected: Option<CalendarDate>,
    semester_start: CalendarDate,
    events: &Schedule,
) -> MonthGrid {
    let empty = || MonthGrid { year, month, cells: Vec::new() };

    let Some(year_month) = YearMonth::new(year, month) else {
        return empty();
    };
    let (Some(first_day), Some(last_day)) = (year_month.first_day(), year_month.last_day()) else {
        return empty();
    };

    let selected_key = selected.map(|d| d.key());
    let make_cell = |date: CalendarDate, in_current_month: bool| {
        let key = date.key();
        CalendarCell {
            date,
            in_current_month,
            week_parity: week_info(date, semester_start).parity,
            is_selected: selected_key.as_deref() == Some(key.as_str()),
            event_count: events.count_for_key(&key),
        }
    };

    let leading_offset = (first_day.iso_day_of_week() as i64 - 1).rem_euclid(7);
    let mut cells = Vec::with_capacity(leading_offset as usize + last_day.day() as usize);

    for back in (1..=leading_offset).rev() {
        if let Some(date) = first_day.add_days(-back) {
            cells.push(make_cell(date, false));
        }
    }

    let mut current = first_day;
    while current <= last_day {
        cells.push(make_cell(current, true));
        let Some(next) = current.succ() else { break };
        current = next;
    }

    MonthGrid { year, month, cells }
}

pub fn calculate_layout(state: &AppState) -> MonthGrid {
    build_month_grid(
        state.visible_month.year,
        state.visible_month.month,
        state.selected_date,
        state.semester_start,
        &state.schedule,
    )
}
