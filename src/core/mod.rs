//! Core types and constants for the coverage planner

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
