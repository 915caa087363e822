use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::NaiveTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::date::CalendarDate;
use crate::calendar::week::Parity;

pub type EntryId = i64;

/// One class on one date, as returned by `GET /api/teacher/schedule`.
/// Missing text fields come back empty rather than failing the whole fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireEntry")]
pub struct ScheduleEntry {
    pub id: EntryId,
    pub subject: String,
    /// Display range such as `09:00–10:35`.
    pub time: String,
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_num: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parity_str: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_parity: Option<Parity>,
}

/// Entry as the backend sends it. The schedule view says `group` and
/// `subject`, the admin views say `group_name` and `name`.
#[derive(Deserialize)]
struct WireEntry {
    id: EntryId,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    group_name: Option<String>,
    #[serde(default)]
    room: Option<String>,
    #[serde(default)]
    week_num: Option<i64>,
    #[serde(default)]
    parity_str: Option<String>,
    #[serde(default)]
    day_of_week: Option<u32>,
    #[serde(default)]
    week_parity: Option<Parity>,
}

impl From<WireEntry> for ScheduleEntry {
    fn from(wire: WireEntry) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Self {
            id: wire.id,
            subject: non_empty(wire.subject).or(wire.name).unwrap_or_default(),
            time: wire.time.unwrap_or_default(),
            group: non_empty(wire.group).or(wire.group_name).unwrap_or_default(),
            room: wire.room,
            week_num: wire.week_num,
            parity_str: wire.parity_str,
            day_of_week: wire.day_of_week,
            week_parity: wire.week_parity,
        }
    }
}

/// Classes keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    by_date: HashMap<String, Vec<ScheduleEntry>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries_for_key(&self, key: &str) -> &[ScheduleEntry] {
        self.by_date.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn entries_on(&self, date: CalendarDate) -> &[ScheduleEntry] {
        self.entries_for_key(&date.key())
    }

    pub fn count_for_key(&self, key: &str) -> usize {
        self.entries_for_key(key).len()
    }

    pub fn find(&self, key: &str, id: EntryId) -> Option<&ScheduleEntry> {
        self.entries_for_key(key).iter().find(|e| e.id == id)
    }

    pub fn push(&mut self, date: CalendarDate, entry: ScheduleEntry) {
        self.by_date.entry(date.key()).or_default().push(entry);
    }

    pub fn total_entries(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_entries() == 0
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TimeRangeError {
    #[error("Формат времени: 9:00–10:35")]
    MissingSeparator,
    #[error("Некорректное время: {0}")]
    InvalidTime(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// Accepts `9:00–10:35`, `09:00-10:35` and the same with spaces around
    /// the separator. Extra segments after the second are ignored.
    pub fn parse(input: &str) -> Result<Self, TimeRangeError> {
        static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();
        let separator = SEPARATOR_RE.get_or_init(|| {
            Regex::new(r"[–\-]").expect("invalid time separator regex")
        });

        let parts: Vec<&str> = separator.split(input).map(str::trim).collect();
        if parts.len() < 2 {
            return Err(TimeRangeError::MissingSeparator);
        }

        Ok(Self {
            start: parse_clock(parts[0])?,
            end: parse_clock(parts[1])?,
        })
    }

    /// `HH:MM:SS` pair as the backend stores it.
    pub fn wire_times(&self) -> (String, String) {
        (
            self.start.format("%H:%M:%S").to_string(),
            self.end.format("%H:%M:%S").to_string(),
        )
    }

    pub fn display(&self) -> String {
        format!("{}–{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

fn parse_clock(text: &str) -> Result<NaiveTime, TimeRangeError> {
    let invalid = || TimeRangeError::InvalidTime(text.to_string());

    let (hours, minutes) = text.split_once(':').ok_or_else(invalid)?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours = hours.parse::<u32>().map_err(|_| invalid())?;
    let minutes = minutes.parse::<u32>().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}

/// Body of `POST /api/teacher/schedule`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClassRequest {
    pub day_of_week: u32,
    pub week_parity: Parity,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    pub group_name: String,
}

/// Body of `PUT /api/teacher/schedule/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateClassRequest {
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub group_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_en_dash_range_with_single_digit_hour() {
        let range = TimeRange::parse("9:00–10:35").unwrap();
        assert_eq!(range, TimeRange { start: time(9, 0), end: time(10, 35) });
    }

    #[test]
    fn parses_hyphen_range_with_spaces() {
        let range = TimeRange::parse(" 13:45 - 15:20 ").unwrap();
        assert_eq!(range.wire_times(), ("13:45:00".to_string(), "15:20:00".to_string()));
    }

    #[test]
    fn range_without_separator_is_rejected() {
        assert_eq!(TimeRange::parse("9:00"), Err(TimeRangeError::MissingSeparator));
    }

    #[test]
    fn range_with_garbage_time_is_rejected() {
        assert_eq!(
            TimeRange::parse("9–10:35"),
            Err(TimeRangeError::InvalidTime("9".to_string()))
        );
        assert_eq!(
            TimeRange::parse("25:00–26:00"),
            Err(TimeRangeError::InvalidTime("25:00".to_string()))
        );
    }

    #[test]
    fn display_uses_en_dash() {
        let range = TimeRange::parse("9:00-10:35").unwrap();
        assert_eq!(range.display(), "09:00–10:35");
    }

    #[test]
    fn entry_accepts_both_group_field_names() {
        let with_group = r#"{"id": 1, "subject": "Физика", "time": "09:00–10:35", "group": "Д-Э 301"}"#;
        let with_group_name = r#"{"id": 2, "name": "Химия", "time": "10:45–12:20", "group_name": "Д-Э 302"}"#;

        let a: ScheduleEntry = serde_json::from_str(with_group).unwrap();
        let b: ScheduleEntry = serde_json::from_str(with_group_name).unwrap();

        assert_eq!(a.group, "Д-Э 301");
        assert_eq!(b.group, "Д-Э 302");
        assert_eq!(b.subject, "Химия");
    }

    #[test]
    fn schedule_deserializes_from_date_keyed_object() {
        let json = r#"{
            "2025-10-01": [
                {"id": 7, "subject": "Физика", "time": "09:00–10:35", "group": "Д-Э 301",
                 "room": "214", "week_num": 5, "parity_str": "нечётная"}
            ]
        }"#;

        let schedule: Schedule = serde_json::from_str(json).unwrap();

        assert_eq!(schedule.count_for_key("2025-10-01"), 1);
        assert_eq!(schedule.count_for_key("2025-10-02"), 0);
        let entry = schedule.find("2025-10-01", 7).unwrap();
        assert_eq!(entry.room.as_deref(), Some("214"));
        assert_eq!(entry.week_num, Some(5));
    }

    #[test]
    fn incomplete_entry_does_not_fail_the_schedule() {
        let json = r#"{
            "2025-10-01": [
                {"id": 1, "subject": "Физика", "time": "09:00–10:35", "group": "Д-Э 301"}
            ],
            "2025-10-02": [
                {"id": 2, "time": "10:45–12:20"}
            ]
        }"#;

        let schedule: Schedule = serde_json::from_str(json).unwrap();

        assert_eq!(schedule.total_entries(), 2);
        let partial = schedule.find("2025-10-02", 2).unwrap();
        assert_eq!(partial.group, "");
        assert_eq!(partial.subject, "");
        assert_eq!(partial.time, "10:45–12:20");
    }

    #[test]
    fn entry_with_both_group_names_prefers_group() {
        let json = r#"{"id": 3, "subject": "Химия", "time": "09:00–10:35",
                       "group": "Д-Э 303", "group_name": "Д-Э 309"}"#;

        let entry: ScheduleEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.group, "Д-Э 303");
    }

    #[test]
    fn empty_group_falls_back_to_group_name() {
        let json = r#"{"id": 4, "subject": "Химия", "time": "09:00–10:35",
                       "group": "", "group_name": "Д-Э 304"}"#;

        let entry: ScheduleEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.group, "Д-Э 304");
    }

    #[test]
    fn new_class_request_serializes_parity_as_number() {
        let request = NewClassRequest {
            day_of_week: 3,
            week_parity: Parity::Odd,
            start_time: "09:00:00".to_string(),
            end_time: "10:35:00".to_string(),
            subject: "Физика".to_string(),
            group_name: "Д-Э 301".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["week_parity"], serde_json::json!(1));
        assert_eq!(value["group_name"], serde_json::json!("Д-Э 301"));
    }
}
