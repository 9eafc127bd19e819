pub mod document;
pub mod service;

pub use document::{Document, NotificationNode};
pub use service::NotificationService;
