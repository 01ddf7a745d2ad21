pub mod codelists;
pub mod concept_snapshot;
pub mod cost;
pub mod evidence;
pub mod financial_advantage;
pub mod format_preserved_date;
pub mod language_string;
pub mod legal_resource;
pub mod procedure;
pub mod requirement;
pub mod website;

pub use codelists::{
    CompetentAuthorityLevel, ConceptTag, ExecutingAuthorityLevel, ProductType, PublicationMedium,
    TargetAudience, Theme, YourEuropeCategory,
};
pub use concept_snapshot::{ConceptSnapshot, ConceptSnapshotBuilder};
pub use cost::{Cost, CostBuilder};
pub use evidence::{Evidence, EvidenceBuilder};
pub use financial_advantage::{FinancialAdvantage, FinancialAdvantageBuilder};
pub use format_preserved_date::FormatPreservedDate;
pub use language_string::LanguageString;
pub use legal_resource::{LegalResource, LegalResourceBuilder};
pub use procedure::{Procedure, ProcedureBuilder};
pub use requirement::{Requirement, RequirementBuilder};
pub use website::{Website, WebsiteBuilder};

/// Selects which invariant set a builder enforces
///
/// The same entity shapes are reachable from three aggregate roots.
/// Title and description are mandatory wherever an entity hangs under a
/// concept or concept snapshot; a live service instance relaxes them
/// (an instance may still be mid-authoring).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Concept,
    ConceptSnapshot,
    Instance,
}

impl ValidationMode {
    /// Whether title and description are mandatory in this mode
    pub fn requires_text_fields(&self) -> bool {
        !matches!(self, ValidationMode::Instance)
    }
}
