mod calendar_views;
mod dialogs;
mod presentation;
mod sample_schedule;
mod session;

pub use session::run_tui;
