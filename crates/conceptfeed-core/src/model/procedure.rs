use conceptfeed_core_types::Iri;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{LanguageString, ValidationMode, Website};
use crate::rules::invariants;

/// How the service is applied for
///
/// Owns an ordered collection of [`Website`]s with the same unique-order
/// invariant as the snapshot-level collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    id: Iri,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
    order: u32,
    websites: Vec<Website>,
}

impl Procedure {
    pub fn builder() -> ProcedureBuilder {
        ProcedureBuilder::default()
    }

    pub fn id(&self) -> &Iri {
        &self.id
    }

    pub fn title(&self) -> Option<&LanguageString> {
        self.title.as_ref()
    }

    pub fn description(&self) -> Option<&LanguageString> {
        self.description.as_ref()
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn websites(&self) -> &[Website] {
        &self.websites
    }
}

/// Accumulates procedure attributes; invariants run at [`ProcedureBuilder::build`]
#[derive(Debug, Default)]
pub struct ProcedureBuilder {
    id: Option<Iri>,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
    order: Option<u32>,
    websites: Vec<Website>,
}

impl ProcedureBuilder {
    pub fn id(mut self, id: Iri) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: LanguageString) -> Self {
        self.title = Some(title);
        self
    }

    pub fn description(mut self, description: LanguageString) -> Self {
        self.description = Some(description);
        self
    }

    pub fn order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Replace the nested website collection (already-validated children)
    pub fn websites(mut self, websites: Vec<Website>) -> Self {
        self.websites = websites;
        self
    }

    /// Validate and freeze: identifier, then required text fields, then
    /// scalar requirements, then the nested collection invariant
    pub fn build(self, mode: ValidationMode) -> Result<Procedure> {
        let id = invariants::required(self.id, "procedure > id")?;
        if mode.requires_text_fields() {
            invariants::required(self.title.as_ref(), "procedure > title")?;
            invariants::required(self.description.as_ref(), "procedure > description")?;
        }
        let order = invariants::required(self.order, "procedure > order")?;
        invariants::unique_by(&self.websites, Website::order, "procedure > websites > order")?;
        Ok(Procedure {
            id,
            title: self.title,
            description: self.description,
            order,
            websites: self.websites,
        })
    }
}
