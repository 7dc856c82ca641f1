//! # dose-core
//! Foundation types and traits for dose tracking.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
