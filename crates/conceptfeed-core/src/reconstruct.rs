//! Tolerant reconstruction of nested children from raw attribute tuples.
//!
//! The persistence collaborator delivers one group of
//! `(predicate, optional-language-tag, value)` tuples per subject. This
//! module is the agreed contract for turning such a group into a nested
//! child of a snapshot:
//!
//! - a child whose title or description carries no Dutch (`nl`) value has
//!   no usable tracked content and is **dropped silently** from its
//!   parent's collection (logged, never an error), even when text exists
//!   in an untracked locale such as German or French;
//! - a child with admissible content but a missing structural field
//!   (identifier, `order`) is a **hard failure** that aborts
//!   reconstruction of the whole aggregate.
//!
//! Reconstructed children then pass through the same strict builders as
//! any other construction path (`ValidationMode::ConceptSnapshot`).

use conceptfeed_core_types::{Iri, Language};
use tracing::{debug, warn};

use crate::errors::{InvariantError, Result};
use crate::model::{
    Cost, Evidence, FinancialAdvantage, LanguageString, LegalResource, Procedure, Requirement,
    ValidationMode, Website,
};

/// Predicates of the tracked child attributes
pub mod predicates {
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    pub const ORDER: &str = "http://www.w3.org/ns/shacl#order";
    pub const URL: &str = "http://schema.org/url";
}

/// One raw attribute tuple of a subject
#[derive(Debug, Clone)]
pub struct RawTuple {
    pub predicate: String,
    pub language: Option<String>,
    pub value: String,
}

/// All raw tuples of one subject, as delivered by the persistence layer
#[derive(Debug, Clone)]
pub struct RawSubjectGroup {
    subject: Iri,
    tuples: Vec<RawTuple>,
}

impl RawSubjectGroup {
    pub fn new(subject: Iri) -> Self {
        Self {
            subject,
            tuples: Vec::new(),
        }
    }

    pub fn subject(&self) -> &Iri {
        &self.subject
    }

    /// Add one tuple; language is the raw feed tag, if any
    pub fn push(
        &mut self,
        predicate: impl Into<String>,
        language: Option<&str>,
        value: impl Into<String>,
    ) {
        self.tuples.push(RawTuple {
            predicate: predicate.into(),
            language: language.map(str::to_string),
            value: value.into(),
        });
    }

    fn tuples_of<'a, 'b>(
        &'a self,
        predicate: &'b str,
    ) -> impl Iterator<Item = &'a RawTuple> + use<'a, 'b> {
        self.tuples
            .iter()
            .filter(move |tuple| tuple.predicate == predicate)
    }

    /// Assemble the tracked locale slots of a textual predicate
    ///
    /// Untracked language tags are ignored here; `None` means no tracked
    /// slot had a value at all.
    pub fn language_string(&self, predicate: &str) -> Option<LanguageString> {
        let slot = |language: Language| {
            self.tuples_of(predicate)
                .find(|tuple| tuple.language.as_deref() == Some(language.tag()))
                .map(|tuple| tuple.value.clone())
        };
        let value = LanguageString::of(
            slot(Language::En),
            slot(Language::Nl),
            slot(Language::NlFormal),
            slot(Language::NlInformal),
            slot(Language::NlGeneratedFormal),
            slot(Language::NlGeneratedInformal),
        );
        if value.defined_languages().is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Whether the predicate has text only reachable through an untracked
    /// locale tag (the distinction between "absent" and "present in an
    /// untracked locale", which the drop policy reports differently)
    pub fn has_untracked_language(&self, predicate: &str) -> bool {
        self.tuples_of(predicate).any(|tuple| {
            tuple
                .language
                .as_deref()
                .is_some_and(|tag| Language::from_tag(tag).is_none())
        })
    }

    /// First untagged value of a predicate
    pub fn scalar(&self, predicate: &str) -> Option<&str> {
        self.tuples_of(predicate)
            .find(|tuple| tuple.language.is_none())
            .map(|tuple| tuple.value.as_str())
    }

    /// The 1-based `order`, mandatory for ordered-collection members
    fn order(&self, collection: &str) -> Result<u32> {
        let field = format!("{} > order", collection);
        let raw = self
            .scalar(predicates::ORDER)
            .ok_or(InvariantError::MissingValue {
                field: field.clone(),
            })?;
        raw.parse().map_err(|_| InvariantError::InvalidValue {
            field,
            value: raw.to_string(),
        })
    }
}

/// Why a child was silently dropped
enum Drop {
    NoTitle,
    NoDescription,
}

/// Apply the silent-drop policy to a child group
///
/// Returns the reconstructed title and description when the child has
/// usable tracked content, or the drop reason when it does not.
fn tracked_content(
    group: &RawSubjectGroup,
) -> std::result::Result<(LanguageString, LanguageString), Drop> {
    let title = match group.language_string(predicates::TITLE) {
        Some(value) if value.nl().is_some() => value,
        _ => return Err(Drop::NoTitle),
    };
    let description = match group.language_string(predicates::DESCRIPTION) {
        Some(value) if value.nl().is_some() => value,
        _ => return Err(Drop::NoDescription),
    };
    Ok((title, description))
}

fn log_drop(group: &RawSubjectGroup, collection: &str, reason: &Drop) {
    let (field, predicate) = match reason {
        Drop::NoTitle => ("title", predicates::TITLE),
        Drop::NoDescription => ("description", predicates::DESCRIPTION),
    };
    if group.has_untracked_language(predicate) {
        warn!(
            subject = %group.subject(),
            collection,
            field,
            "dropping child: field authored only in untracked locales"
        );
    } else {
        debug!(
            subject = %group.subject(),
            collection,
            field,
            "dropping child: no tracked content for field"
        );
    }
}

/// Reconstruct a collection, filtering silently dropped children
///
/// The first hard failure aborts the whole collection (and with it the
/// aggregate being reconstructed).
pub fn children<T, F>(groups: &[RawSubjectGroup], reconstruct: F) -> Result<Vec<T>>
where
    F: Fn(&RawSubjectGroup) -> Result<Option<T>>,
{
    let mut items = Vec::new();
    for group in groups {
        if let Some(item) = reconstruct(group)? {
            items.push(item);
        }
    }
    Ok(items)
}

pub fn website(group: &RawSubjectGroup, collection: &str) -> Result<Option<Website>> {
    let (title, description) = match tracked_content(group) {
        Ok(content) => content,
        Err(reason) => {
            log_drop(group, collection, &reason);
            return Ok(None);
        }
    };
    let order = group.order(collection)?;
    let mut builder = Website::builder()
        .id(group.subject().clone())
        .title(title)
        .description(description)
        .order(order);
    if let Some(url) = group.scalar(predicates::URL) {
        builder = builder.url(url);
    }
    builder.build(ValidationMode::ConceptSnapshot).map(Some)
}

pub fn evidence(group: &RawSubjectGroup) -> Result<Option<Evidence>> {
    let (title, description) = match tracked_content(group) {
        Ok(content) => content,
        Err(reason) => {
            log_drop(group, "evidence", &reason);
            return Ok(None);
        }
    };
    Evidence::builder()
        .id(group.subject().clone())
        .title(title)
        .description(description)
        .build(ValidationMode::ConceptSnapshot)
        .map(Some)
}

pub fn requirement(
    group: &RawSubjectGroup,
    evidence_group: Option<&RawSubjectGroup>,
) -> Result<Option<Requirement>> {
    let (title, description) = match tracked_content(group) {
        Ok(content) => content,
        Err(reason) => {
            log_drop(group, "requirements", &reason);
            return Ok(None);
        }
    };
    let order = group.order("requirements")?;
    let mut builder = Requirement::builder()
        .id(group.subject().clone())
        .title(title)
        .description(description)
        .order(order);
    if let Some(evidence) = evidence_group.map(evidence).transpose()?.flatten() {
        builder = builder.evidence(evidence);
    }
    builder.build(ValidationMode::ConceptSnapshot).map(Some)
}

pub fn procedure(
    group: &RawSubjectGroup,
    website_groups: &[RawSubjectGroup],
) -> Result<Option<Procedure>> {
    let (title, description) = match tracked_content(group) {
        Ok(content) => content,
        Err(reason) => {
            log_drop(group, "procedures", &reason);
            return Ok(None);
        }
    };
    let order = group.order("procedures")?;
    let websites = children(website_groups, |child| {
        website(child, "procedure > websites")
    })?;
    Procedure::builder()
        .id(group.subject().clone())
        .title(title)
        .description(description)
        .order(order)
        .websites(websites)
        .build(ValidationMode::ConceptSnapshot)
        .map(Some)
}

pub fn cost(group: &RawSubjectGroup) -> Result<Option<Cost>> {
    let (title, description) = match tracked_content(group) {
        Ok(content) => content,
        Err(reason) => {
            log_drop(group, "costs", &reason);
            return Ok(None);
        }
    };
    let order = group.order("costs")?;
    Cost::builder()
        .id(group.subject().clone())
        .title(title)
        .description(description)
        .order(order)
        .build(ValidationMode::ConceptSnapshot)
        .map(Some)
}

pub fn financial_advantage(group: &RawSubjectGroup) -> Result<Option<FinancialAdvantage>> {
    let (title, description) = match tracked_content(group) {
        Ok(content) => content,
        Err(reason) => {
            log_drop(group, "financial advantages", &reason);
            return Ok(None);
        }
    };
    let order = group.order("financial advantages")?;
    FinancialAdvantage::builder()
        .id(group.subject().clone())
        .title(title)
        .description(description)
        .order(order)
        .build(ValidationMode::ConceptSnapshot)
        .map(Some)
}

pub fn legal_resource(group: &RawSubjectGroup) -> Result<Option<LegalResource>> {
    let (title, description) = match tracked_content(group) {
        Ok(content) => content,
        Err(reason) => {
            log_drop(group, "legal resources", &reason);
            return Ok(None);
        }
    };
    let order = group.order("legal resources")?;
    let mut builder = LegalResource::builder()
        .id(group.subject().clone())
        .title(title)
        .description(description)
        .order(order);
    if let Some(url) = group.scalar(predicates::URL) {
        builder = builder.url(url);
    }
    builder.build(ValidationMode::ConceptSnapshot).map(Some)
}
