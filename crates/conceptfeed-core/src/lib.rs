//! conceptfeed core - validated concept-snapshot aggregates and
//! functional-change detection
//!
//! This crate provides the in-memory kernel that sits between the feed's
//! persistence collaborator and the notification collaborator:
//! - Multi-locale string and format-preserving temporal value types
//! - Invariant-checked builders for every catalogue entity and the
//!   concept-snapshot root aggregate
//! - The functional-equivalence comparator that decides whether a new
//!   snapshot version differs in tracked content from the stored one
//! - The tolerant reconstruction contract for raw per-subject attribute
//!   tuples (silent drop of children without Dutch tracked content, hard
//!   failure on missing structural fields)
//!
//! All types are immutable value objects; construction and comparison are
//! synchronous, pure, and safe to run concurrently per snapshot.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod reconstruct;
pub mod rules;

// Re-export commonly used types
pub use diff::is_functionally_changed;
pub use errors::{InvariantError, Result};
pub use model::{
    ConceptSnapshot, Cost, Evidence, FinancialAdvantage, FormatPreservedDate, LanguageString,
    LegalResource, Procedure, Requirement, ValidationMode, Website,
};
