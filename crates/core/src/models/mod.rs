pub mod chart;
pub mod dashboard;
pub mod goal;
pub mod notification;
pub mod settings;
pub mod transaction;
