use conceptfeed_core_types::{Iri, Language};
use serde::{Deserialize, Serialize};

use crate::errors::{InvariantError, Result};
use crate::model::{
    CompetentAuthorityLevel, ConceptTag, Cost, ExecutingAuthorityLevel, FinancialAdvantage,
    FormatPreservedDate, LanguageString, LegalResource, Procedure, ProductType, PublicationMedium,
    Requirement, TargetAudience, Theme, Website, YourEuropeCategory,
};
use crate::rules::invariants;

/// One immutable published version of a concept
///
/// Built once, fully, from a complete input; a changed snapshot is always
/// a brand-new instance compared against the stored one by the functional
/// comparator, never a patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptSnapshot {
    id: Iri,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
    additional_description: Option<LanguageString>,
    exception: Option<LanguageString>,
    regulation: Option<LanguageString>,
    start_date: Option<FormatPreservedDate>,
    end_date: Option<FormatPreservedDate>,
    product_type: Option<ProductType>,
    target_audiences: Vec<TargetAudience>,
    themes: Vec<Theme>,
    competent_authority_levels: Vec<CompetentAuthorityLevel>,
    competent_authorities: Vec<Iri>,
    executing_authority_levels: Vec<ExecutingAuthorityLevel>,
    executing_authorities: Vec<Iri>,
    publication_media: Vec<PublicationMedium>,
    your_europe_categories: Vec<YourEuropeCategory>,
    keywords: Vec<LanguageString>,
    requirements: Vec<Requirement>,
    procedures: Vec<Procedure>,
    websites: Vec<Website>,
    costs: Vec<Cost>,
    financial_advantages: Vec<FinancialAdvantage>,
    legal_resources: Vec<LegalResource>,
    is_version_of: Iri,
    date_created: FormatPreservedDate,
    date_modified: FormatPreservedDate,
    generated_at_time: FormatPreservedDate,
    product_id: String,
    concept_tags: Vec<ConceptTag>,
    is_archived: bool,
}

impl ConceptSnapshot {
    pub fn builder() -> ConceptSnapshotBuilder {
        ConceptSnapshotBuilder::default()
    }

    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// Short identifier derived from the snapshot's IRI
    pub fn identifier(&self) -> Option<&str> {
        self.id.local_name()
    }

    pub fn title(&self) -> Option<&LanguageString> {
        self.title.as_ref()
    }

    pub fn description(&self) -> Option<&LanguageString> {
        self.description.as_ref()
    }

    pub fn additional_description(&self) -> Option<&LanguageString> {
        self.additional_description.as_ref()
    }

    pub fn exception(&self) -> Option<&LanguageString> {
        self.exception.as_ref()
    }

    pub fn regulation(&self) -> Option<&LanguageString> {
        self.regulation.as_ref()
    }

    pub fn start_date(&self) -> Option<&FormatPreservedDate> {
        self.start_date.as_ref()
    }

    pub fn end_date(&self) -> Option<&FormatPreservedDate> {
        self.end_date.as_ref()
    }

    pub fn product_type(&self) -> Option<ProductType> {
        self.product_type
    }

    pub fn target_audiences(&self) -> &[TargetAudience] {
        &self.target_audiences
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn competent_authority_levels(&self) -> &[CompetentAuthorityLevel] {
        &self.competent_authority_levels
    }

    pub fn competent_authorities(&self) -> &[Iri] {
        &self.competent_authorities
    }

    pub fn executing_authority_levels(&self) -> &[ExecutingAuthorityLevel] {
        &self.executing_authority_levels
    }

    pub fn executing_authorities(&self) -> &[Iri] {
        &self.executing_authorities
    }

    pub fn publication_media(&self) -> &[PublicationMedium] {
        &self.publication_media
    }

    pub fn your_europe_categories(&self) -> &[YourEuropeCategory] {
        &self.your_europe_categories
    }

    /// Keywords, sorted by the six-slot total order at build time
    pub fn keywords(&self) -> &[LanguageString] {
        &self.keywords
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn procedures(&self) -> &[Procedure] {
        &self.procedures
    }

    pub fn websites(&self) -> &[Website] {
        &self.websites
    }

    pub fn costs(&self) -> &[Cost] {
        &self.costs
    }

    pub fn financial_advantages(&self) -> &[FinancialAdvantage] {
        &self.financial_advantages
    }

    pub fn legal_resources(&self) -> &[LegalResource] {
        &self.legal_resources
    }

    /// The concept this snapshot is a version of
    pub fn is_version_of(&self) -> &Iri {
        &self.is_version_of
    }

    pub fn date_created(&self) -> &FormatPreservedDate {
        &self.date_created
    }

    pub fn date_modified(&self) -> &FormatPreservedDate {
        &self.date_modified
    }

    pub fn generated_at_time(&self) -> &FormatPreservedDate {
        &self.generated_at_time
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn concept_tags(&self) -> &[ConceptTag] {
        &self.concept_tags
    }

    pub fn is_archived(&self) -> bool {
        self.is_archived
    }
}

/// Accumulates snapshot attributes; the full invariant set runs at
/// [`ConceptSnapshotBuilder::build`]
///
/// Validation order is fixed: identifier, then required text fields
/// (title and description must carry a Dutch value), then scalar
/// requirements, then collection invariants (`"<collection> > order"`
/// for the six ordered child collections), with nested children having
/// been validated depth-first at their own builds.
#[derive(Debug, Default)]
pub struct ConceptSnapshotBuilder {
    id: Option<Iri>,
    title: Option<LanguageString>,
    description: Option<LanguageString>,
    additional_description: Option<LanguageString>,
    exception: Option<LanguageString>,
    regulation: Option<LanguageString>,
    start_date: Option<FormatPreservedDate>,
    end_date: Option<FormatPreservedDate>,
    product_type: Option<ProductType>,
    target_audiences: Vec<TargetAudience>,
    themes: Vec<Theme>,
    competent_authority_levels: Vec<CompetentAuthorityLevel>,
    competent_authorities: Vec<Iri>,
    executing_authority_levels: Vec<ExecutingAuthorityLevel>,
    executing_authorities: Vec<Iri>,
    publication_media: Vec<PublicationMedium>,
    your_europe_categories: Vec<YourEuropeCategory>,
    keywords: Vec<LanguageString>,
    requirements: Vec<Requirement>,
    procedures: Vec<Procedure>,
    websites: Vec<Website>,
    costs: Vec<Cost>,
    financial_advantages: Vec<FinancialAdvantage>,
    legal_resources: Vec<LegalResource>,
    is_version_of: Option<Iri>,
    date_created: Option<FormatPreservedDate>,
    date_modified: Option<FormatPreservedDate>,
    generated_at_time: Option<FormatPreservedDate>,
    product_id: Option<String>,
    concept_tags: Vec<ConceptTag>,
    is_archived: Option<bool>,
}

impl ConceptSnapshotBuilder {
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

    pub fn additional_description(mut self, value: LanguageString) -> Self {
        self.additional_description = Some(value);
        self
    }

    pub fn exception(mut self, value: LanguageString) -> Self {
        self.exception = Some(value);
        self
    }

    pub fn regulation(mut self, value: LanguageString) -> Self {
        self.regulation = Some(value);
        self
    }

    pub fn start_date(mut self, value: FormatPreservedDate) -> Self {
        self.start_date = Some(value);
        self
    }

    pub fn end_date(mut self, value: FormatPreservedDate) -> Self {
        self.end_date = Some(value);
        self
    }

    pub fn product_type(mut self, value: ProductType) -> Self {
        self.product_type = Some(value);
        self
    }

    pub fn target_audiences(mut self, values: Vec<TargetAudience>) -> Self {
        self.target_audiences = values;
        self
    }

    pub fn themes(mut self, values: Vec<Theme>) -> Self {
        self.themes = values;
        self
    }

    pub fn competent_authority_levels(mut self, values: Vec<CompetentAuthorityLevel>) -> Self {
        self.competent_authority_levels = values;
        self
    }

    pub fn competent_authorities(mut self, values: Vec<Iri>) -> Self {
        self.competent_authorities = values;
        self
    }

    pub fn executing_authority_levels(mut self, values: Vec<ExecutingAuthorityLevel>) -> Self {
        self.executing_authority_levels = values;
        self
    }

    pub fn executing_authorities(mut self, values: Vec<Iri>) -> Self {
        self.executing_authorities = values;
        self
    }

    pub fn publication_media(mut self, values: Vec<PublicationMedium>) -> Self {
        self.publication_media = values;
        self
    }

    pub fn your_europe_categories(mut self, values: Vec<YourEuropeCategory>) -> Self {
        self.your_europe_categories = values;
        self
    }

    pub fn keywords(mut self, values: Vec<LanguageString>) -> Self {
        self.keywords = values;
        self
    }

    pub fn requirements(mut self, values: Vec<Requirement>) -> Self {
        self.requirements = values;
        self
    }

    pub fn procedures(mut self, values: Vec<Procedure>) -> Self {
        self.procedures = values;
        self
    }

    pub fn websites(mut self, values: Vec<Website>) -> Self {
        self.websites = values;
        self
    }

    pub fn costs(mut self, values: Vec<Cost>) -> Self {
        self.costs = values;
        self
    }

    pub fn financial_advantages(mut self, values: Vec<FinancialAdvantage>) -> Self {
        self.financial_advantages = values;
        self
    }

    pub fn legal_resources(mut self, values: Vec<LegalResource>) -> Self {
        self.legal_resources = values;
        self
    }

    pub fn is_version_of(mut self, value: Iri) -> Self {
        self.is_version_of = Some(value);
        self
    }

    pub fn date_created(mut self, value: FormatPreservedDate) -> Self {
        self.date_created = Some(value);
        self
    }

    pub fn date_modified(mut self, value: FormatPreservedDate) -> Self {
        self.date_modified = Some(value);
        self
    }

    pub fn generated_at_time(mut self, value: FormatPreservedDate) -> Self {
        self.generated_at_time = Some(value);
        self
    }

    pub fn product_id(mut self, value: impl Into<String>) -> Self {
        self.product_id = Some(value.into());
        self
    }

    pub fn concept_tags(mut self, values: Vec<ConceptTag>) -> Self {
        self.concept_tags = values;
        self
    }

    pub fn is_archived(mut self, value: bool) -> Self {
        self.is_archived = Some(value);
        self
    }

    /// Validate and freeze the aggregate; all-or-nothing
    pub fn build(self) -> Result<ConceptSnapshot> {
        let id = invariants::required(self.id, "id")?;

        let title = invariants::required(self.title, "title")?;
        required_dutch(&title, "title")?;
        let description = invariants::required(self.description, "description")?;
        required_dutch(&description, "description")?;

        let is_version_of = invariants::required(self.is_version_of, "is version of")?;
        let date_created = invariants::required(self.date_created, "date created")?;
        let date_modified = invariants::required(self.date_modified, "date modified")?;
        let generated_at_time = invariants::required(self.generated_at_time, "generated at time")?;
        let product_id = invariants::required(self.product_id, "product id")?;
        invariants::not_blank(Some(&product_id), "product id")?;
        let is_archived = invariants::required(self.is_archived, "is archived")?;

        invariants::no_duplicates(&self.target_audiences, "target audiences")?;
        invariants::no_duplicates(&self.themes, "themes")?;
        invariants::no_duplicates(
            &self.competent_authority_levels,
            "competent authority levels",
        )?;
        invariants::no_duplicates(&self.competent_authorities, "competent authorities")?;
        invariants::no_duplicates(
            &self.executing_authority_levels,
            "executing authority levels",
        )?;
        invariants::no_duplicates(&self.executing_authorities, "executing authorities")?;
        invariants::no_duplicates(&self.publication_media, "publication media")?;
        invariants::no_duplicates(&self.your_europe_categories, "your europe categories")?;
        invariants::no_duplicates(&self.keywords, "keywords")?;
        invariants::no_duplicates(&self.concept_tags, "concept tags")?;

        invariants::unique_by(&self.requirements, Requirement::order, "requirements > order")?;
        invariants::unique_by(&self.procedures, Procedure::order, "procedures > order")?;
        invariants::unique_by(&self.websites, Website::order, "websites > order")?;
        invariants::unique_by(&self.costs, Cost::order, "costs > order")?;
        invariants::unique_by(
            &self.financial_advantages,
            FinancialAdvantage::order,
            "financial advantages > order",
        )?;
        invariants::unique_by(
            &self.legal_resources,
            LegalResource::order,
            "legal resources > order",
        )?;

        let mut keywords = self.keywords;
        keywords.sort_by(|a, b| a.compare(b));

        Ok(ConceptSnapshot {
            id,
            title: Some(title),
            description: Some(description),
            additional_description: self.additional_description,
            exception: self.exception,
            regulation: self.regulation,
            start_date: self.start_date,
            end_date: self.end_date,
            product_type: self.product_type,
            target_audiences: self.target_audiences,
            themes: self.themes,
            competent_authority_levels: self.competent_authority_levels,
            competent_authorities: self.competent_authorities,
            executing_authority_levels: self.executing_authority_levels,
            executing_authorities: self.executing_authorities,
            publication_media: self.publication_media,
            your_europe_categories: self.your_europe_categories,
            keywords,
            requirements: self.requirements,
            procedures: self.procedures,
            websites: self.websites,
            costs: self.costs,
            financial_advantages: self.financial_advantages,
            legal_resources: self.legal_resources,
            is_version_of,
            date_created,
            date_modified,
            generated_at_time,
            product_id,
            concept_tags: self.concept_tags,
            is_archived,
        })
    }
}

/// Title and description of a snapshot must carry a Dutch value
fn required_dutch(value: &LanguageString, field: &str) -> Result<()> {
    if value.nl().is_none() {
        return Err(InvariantError::MissingLanguage {
            field: field.to_string(),
            language: Language::Nl.tag().to_string(),
        });
    }
    Ok(())
}
