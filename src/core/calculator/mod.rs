pub mod aggregate;
pub mod daily;
pub mod day_groups;
pub mod months;
