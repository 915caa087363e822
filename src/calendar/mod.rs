pub mod date;
pub mod entry;
pub mod semester;
pub mod week;

pub use date::{date_key, iso_day_of_week, CalendarDate, DateKeyError, YearMonth};
pub use entry::{
    EntryId, NewClassRequest, Schedule, ScheduleEntry, TimeRange, TimeRangeError, UpdateClassRequest,
};
pub use semester::{expand_template, TemplateRow};
pub use week::{week_info, Parity, WeekInfo};
