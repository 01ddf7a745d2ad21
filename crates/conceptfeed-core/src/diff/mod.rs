//! Functional-equivalence comparison between two validated snapshots.

pub mod functional;

pub use functional::is_functionally_changed;
