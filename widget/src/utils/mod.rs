//! # Utility Functions
//!
//! - **[`runtime`]**: process-wide Tokio runtime for the egui host
//! - **[`units`]**: decimal amount parsing into base units
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: address and amount display helpers

pub mod runtime;
pub mod units;
