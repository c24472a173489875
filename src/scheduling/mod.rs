pub mod price_scheduler;
pub mod schedule_state;
pub mod types;
