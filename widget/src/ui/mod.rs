//! # User Interface
//!
//! egui rendering for the buy widget.
//!
//! - **[`theme`]**: color palette and egui visuals
//! - **[`widgets`]**: account summary, token selector, form controls, toasts
//! - **[`screens`]**: the buy form itself

pub mod screens;
pub mod theme;
pub mod widgets;

pub use theme::Theme;
