use conceptfeed_core_types::Iri;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{LanguageString, ValidationMode};
use crate::rules::invariants;

/// Reference to legislation underpinning the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalResource {
    id: Iri,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
    url: Option<String>,
    order: u32,
}

impl LegalResource {
    pub fn builder() -> LegalResourceBuilder {
        LegalResourceBuilder::default()
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

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn order(&self) -> u32 {
        self.order
    }
}

/// Accumulates attributes; invariants run at [`LegalResourceBuilder::build`]
#[derive(Debug, Default)]
pub struct LegalResourceBuilder {
    id: Option<Iri>,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
    url: Option<String>,
    order: Option<u32>,
}

impl LegalResourceBuilder {
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

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn build(self, mode: ValidationMode) -> Result<LegalResource> {
        let id = invariants::required(self.id, "legal resource > id")?;
        if mode.requires_text_fields() {
            invariants::required(self.title.as_ref(), "legal resource > title")?;
            invariants::required(self.description.as_ref(), "legal resource > description")?;
        }
        invariants::not_blank(self.url.as_deref(), "legal resource > url")?;
        let order = invariants::required(self.order, "legal resource > order")?;
        Ok(LegalResource {
            id,
            title: self.title,
            description: self.description,
            url: self.url,
            order,
        })
    }
}
