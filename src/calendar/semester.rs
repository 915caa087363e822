use std::collections::HashMap;

use chrono::{Datelike, Weekday};

use crate::calendar::date::CalendarDate;
use crate::calendar::entry::{EntryId, Schedule, ScheduleEntry, TimeRange};
use crate::calendar::week::Parity;

/// A weekly recurring class: taught on `day_of_week` in weeks of `parity`.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateRow {
    pub id: EntryId,
    pub day_of_week: u32,
    pub parity: Parity,
    pub time: TimeRange,
    pub subject: String,
    pub group: String,
    pub room: Option<String>,
}

/// Expands a weekly template into dated entries for every day in
/// `start..=end`. Week 1 begins at `start`; the counter advances on each
/// Monday after it.
pub fn expand_template(template: &[TemplateRow], start: CalendarDate, end: CalendarDate) -> Schedule {
    let mut schedule = Schedule::new();
    if template.is_empty() {
        return schedule;
    }

    let mut grouped: HashMap<(u32, Parity), Vec<&TemplateRow>> = HashMap::new();
    for row in template {
        grouped.entry((row.day_of_week, row.parity)).or_default().push(row);
    }

    let mut current = start;
    let mut week_num: i64 = 1;

    while current <= end {
        let parity = Parity::of_week(week_num);

        for row in grouped.get(&(current.iso_day_of_week(), parity)).into_iter().flatten() {
            schedule.push(current, ScheduleEntry {
                id: row.id,
                subject: row.subject.clone(),
                time: row.time.display(),
                group: row.group.clone(),
                room: Some(row.room.clone().unwrap_or_else(|| "—".to_string())),
                week_num: Some(week_num),
                parity_str: Some(parity.label().to_string()),
                day_of_week: Some(row.day_of_week),
                week_parity: Some(row.parity),
            });
        }

        let Some(next) = current.succ() else { break };
        current = next;
        if current.naive().weekday() == Weekday::Mon {
            week_num += 1;
        }
    }

    tracing::debug!("Expanded {} template rows into {} entries", template.len(), schedule.total_entries());
    schedule
}
