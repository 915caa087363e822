pub mod app;
pub mod calendar;
pub mod input;
pub mod storage;
pub mod sync;
pub mod ui;

pub use app::{reduce, submit, Action, AppState, ClassRef, Command, Mode, SyncStatus};
pub use calendar::{date_key, iso_day_of_week, week_info, CalendarDate, Parity, Schedule, ScheduleEntry, WeekInfo};
pub use ui::labels::class_count_label;
pub use ui::month_view::{build_month_grid, CalendarCell, MonthGrid};
