use conceptfeed_core_types::Iri;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{LanguageString, ValidationMode};
use crate::rules::invariants;

/// Financial benefit the service grants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialAdvantage {
    id: Iri,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
    order: u32,
}

impl FinancialAdvantage {
    pub fn builder() -> FinancialAdvantageBuilder {
        FinancialAdvantageBuilder::default()
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
}

/// Accumulates attributes; invariants run at [`FinancialAdvantageBuilder::build`]
#[derive(Debug, Default)]
pub struct FinancialAdvantageBuilder {
    id: Option<Iri>,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
    order: Option<u32>,
}

impl FinancialAdvantageBuilder {
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

    pub fn build(self, mode: ValidationMode) -> Result<FinancialAdvantage> {
        let id = invariants::required(self.id, "financial advantage > id")?;
        if mode.requires_text_fields() {
            invariants::required(self.title.as_ref(), "financial advantage > title")?;
            invariants::required(self.description.as_ref(), "financial advantage > description")?;
        }
        let order = invariants::required(self.order, "financial advantage > order")?;
        Ok(FinancialAdvantage {
            id,
            title: self.title,
            description: self.description,
            order,
        })
    }
}
