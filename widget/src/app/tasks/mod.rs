//! # Async Tasks
//!
//! Quote-refresh rule and the order-fill sequence.

pub mod fill;
pub mod quote;
