pub mod day_view;
pub mod labels;
pub mod month_view;
pub mod theme;
