//! Core types shared across conceptfeed facilities
//!
//! This crate provides foundational types used by the aggregate model,
//! the comparator, and the reconstruction boundary:
//!
//! - **Iri**: resource identifier newtype with local-name extraction
//! - **Language**: the six tracked locale tags of the source feed

pub mod iri;
pub mod language;

pub use iri::Iri;
pub use language::Language;
