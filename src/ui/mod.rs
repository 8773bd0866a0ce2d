pub mod chart;
pub mod messages;
