use conceptfeed_core_types::Iri;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{Evidence, LanguageString, ValidationMode};
use crate::rules::invariants;

/// Condition that must be met to use the service
///
/// Owns at most one [`Evidence`] describing the supporting document for
/// the condition. Ownership is strictly compositional: the evidence is
/// never shared with another requirement or aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    id: Iri,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
    order: u32,
    evidence: Option<Evidence>,
}

impl Requirement {
    pub fn builder() -> RequirementBuilder {
        RequirementBuilder::default()
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

    pub fn evidence(&self) -> Option<&Evidence> {
        self.evidence.as_ref()
    }
}

/// Accumulates requirement attributes; invariants run at [`RequirementBuilder::build`]
#[derive(Debug, Default)]
pub struct RequirementBuilder {
    id: Option<Iri>,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
    order: Option<u32>,
    evidence: Option<Evidence>,
}

impl RequirementBuilder {
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

    /// Attach an already-validated evidence child
    pub fn evidence(mut self, evidence: Evidence) -> Self {
        self.evidence = Some(evidence);
        self
    }

    /// Validate and freeze: identifier, then required text fields, then
    /// scalar requirements; the nested evidence was validated at its own
    /// build.
    pub fn build(self, mode: ValidationMode) -> Result<Requirement> {
        let id = invariants::required(self.id, "requirement > id")?;
        if mode.requires_text_fields() {
            invariants::required(self.title.as_ref(), "requirement > title")?;
            invariants::required(self.description.as_ref(), "requirement > description")?;
        }
        let order = invariants::required(self.order, "requirement > order")?;
        Ok(Requirement {
            id,
            title: self.title,
            description: self.description,
            order,
            evidence: self.evidence,
        })
    }
}
