pub mod schedule_api;
pub mod sync_engine;
