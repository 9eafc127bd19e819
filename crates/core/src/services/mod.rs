pub mod chart_service;
pub mod formatting;
pub mod validation;
