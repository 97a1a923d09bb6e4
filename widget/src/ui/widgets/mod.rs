//! # Reusable Widgets

pub mod account_summary;
pub mod forms;
pub mod layouts;
pub mod notifications;
pub mod token_selector;

pub use notifications::NotificationManager;
