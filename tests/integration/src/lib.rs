//! Test support for the badge engine
//!
//! In-memory repository adapters that honour the same uniqueness and
//! atomicity contract as the PostgreSQL ones, and fixtures built on them.

pub mod fixtures;

pub use fixtures::{gold_badge_names, TestWorld};
pub use memory::MemoryStore;
