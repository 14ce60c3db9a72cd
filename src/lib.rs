//! Screenstat - weekday vs weekend phone usage statistics
//!
//! Loads a small CSV of daily usage records, computes descriptive
//! statistics per day-type, runs a Welch unequal-variances t-test, and
//! renders three summary charts. One sequential pipeline, one process,
//! everything in memory.

pub mod cli;
pub mod error;
pub mod loader;
pub mod plot;
pub mod report;
pub mod stats;

pub use error::UsageError;
pub use loader::{Category, Record};
pub use stats::{SummaryStats, WelchTest};
