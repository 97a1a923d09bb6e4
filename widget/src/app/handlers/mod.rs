//! # Event Handlers
//!
//! Synchronous handlers for user actions on the buy form.

pub mod buy;
