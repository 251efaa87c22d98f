pub mod alert;
pub mod chart;
pub mod dashboard;
pub mod ui_state;
pub mod user;
pub mod waste;
