use conceptfeed_core_types::Iri;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{LanguageString, ValidationMode};
use crate::rules::invariants;

/// Link to an external web page about the service
///
/// Appears both directly under a snapshot and nested under a procedure.
/// The 1-based `order` positions it within its owning collection and is
/// the pairing key for change detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    id: Iri,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
    url: Option<String>,
    order: u32,
}

impl Website {
    pub fn builder() -> WebsiteBuilder {
        WebsiteBuilder::default()
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

/// Accumulates website attributes; invariants run at [`WebsiteBuilder::build`]
#[derive(Debug, Default)]
pub struct WebsiteBuilder {
    id: Option<Iri>,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
    url: Option<String>,
    order: Option<u32>,
}

impl WebsiteBuilder {
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

    /// Validate and freeze: identifier, then required text fields, then
    /// scalar requirements
    pub fn build(self, mode: ValidationMode) -> Result<Website> {
        let id = invariants::required(self.id, "website > id")?;
        if mode.requires_text_fields() {
            invariants::required(self.title.as_ref(), "website > title")?;
            invariants::required(self.description.as_ref(), "website > description")?;
        }
        invariants::not_blank(self.url.as_deref(), "website > url")?;
        let order = invariants::required(self.order, "website > order")?;
        Ok(Website {
            id,
            title: self.title,
            description: self.description,
            url: self.url,
            order,
        })
    }
}
