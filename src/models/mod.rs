pub mod day_row;
pub mod event;
pub mod event_kind;
pub mod user;
pub mod work_hours;
