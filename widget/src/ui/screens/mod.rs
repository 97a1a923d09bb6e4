//! # Screens

pub mod buy;
