use conceptfeed_core_types::Iri;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{LanguageString, ValidationMode};
use crate::rules::invariants;

/// Supporting document description attached to a requirement
///
/// Zero-or-one per requirement; carries no `order` because it is not a
/// collection member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    id: Iri,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
}

impl Evidence {
    pub fn builder() -> EvidenceBuilder {
        EvidenceBuilder::default()
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
}

/// Accumulates evidence attributes; invariants run at [`EvidenceBuilder::build`]
#[derive(Debug, Default)]
pub struct EvidenceBuilder {
    id: Option<Iri>,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
}

impl EvidenceBuilder {
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

    /// Validate and freeze: identifier first, then required text fields
    pub fn build(self, mode: ValidationMode) -> Result<Evidence> {
        let id = invariants::required(self.id, "evidence > id")?;
        if mode.requires_text_fields() {
            invariants::required(self.title.as_ref(), "evidence > title")?;
            invariants::required(self.description.as_ref(), "evidence > description")?;
        }
        Ok(Evidence {
            id,
            title: self.title,
            description: self.description,
        })
    }
}
