//! Shared fixtures for the integration tests.
//!
//! Every helper builds deterministic content, so calling one twice
//! yields two fresh instances with identical logical content.

#![allow(dead_code)]

use conceptfeed_core::model::{
    CompetentAuthorityLevel, ConceptSnapshot, ConceptSnapshotBuilder, ConceptTag, Cost, Evidence,
    ExecutingAuthorityLevel, FinancialAdvantage, FormatPreservedDate, LanguageString,
    LegalResource, Procedure, ProductType, PublicationMedium, Requirement, TargetAudience, Theme,
    ValidationMode, Website, YourEuropeCategory,
};
use conceptfeed_core_types::Iri;

pub fn iri(kind: &str, local: &str) -> Iri {
    Iri::new(format!("https://example.com/id/{}/{}", kind, local))
}

pub fn nl(text: &str) -> LanguageString {
    LanguageString::of_nl(text)
}

pub fn date(text: &str) -> FormatPreservedDate {
    FormatPreservedDate::of(text).unwrap()
}

pub fn evidence(local: &str, title: &str) -> Evidence {
    Evidence::builder()
        .id(iri("evidence", local))
        .title(nl(title))
        .description(nl("bewijs omschrijving"))
        .build(ValidationMode::ConceptSnapshot)
        .unwrap()
}

pub fn requirement(order: u32, title: &str) -> Requirement {
    Requirement::builder()
        .id(iri("requirement", &order.to_string()))
        .title(nl(title))
        .description(nl("voorwaarde omschrijving"))
        .order(order)
        .build(ValidationMode::ConceptSnapshot)
        .unwrap()
}

pub fn requirement_with_evidence(order: u32, title: &str, evidence_title: &str) -> Requirement {
    Requirement::builder()
        .id(iri("requirement", &order.to_string()))
        .title(nl(title))
        .description(nl("voorwaarde omschrijving"))
        .order(order)
        .evidence(evidence(&order.to_string(), evidence_title))
        .build(ValidationMode::ConceptSnapshot)
        .unwrap()
}

pub fn website(order: u32, title: &str, url: &str) -> Website {
    Website::builder()
        .id(iri("website", &order.to_string()))
        .title(nl(title))
        .description(nl("website omschrijving"))
        .url(url)
        .order(order)
        .build(ValidationMode::ConceptSnapshot)
        .unwrap()
}

pub fn procedure(order: u32, title: &str, websites: Vec<Website>) -> Procedure {
    Procedure::builder()
        .id(iri("procedure", &order.to_string()))
        .title(nl(title))
        .description(nl("procedure omschrijving"))
        .order(order)
        .websites(websites)
        .build(ValidationMode::ConceptSnapshot)
        .unwrap()
}

pub fn cost(order: u32, title: &str) -> Cost {
    Cost::builder()
        .id(iri("cost", &order.to_string()))
        .title(nl(title))
        .description(nl("kost omschrijving"))
        .order(order)
        .build(ValidationMode::ConceptSnapshot)
        .unwrap()
}

pub fn financial_advantage(order: u32, title: &str) -> FinancialAdvantage {
    FinancialAdvantage::builder()
        .id(iri("financial-advantage", &order.to_string()))
        .title(nl(title))
        .description(nl("voordeel omschrijving"))
        .order(order)
        .build(ValidationMode::ConceptSnapshot)
        .unwrap()
}

pub fn legal_resource(order: u32, title: &str) -> LegalResource {
    LegalResource::builder()
        .id(iri("legal-resource", &order.to_string()))
        .title(nl(title))
        .description(nl("regelgeving omschrijving"))
        .url("https://codex.vlaanderen.be/doc/123")
        .order(order)
        .build(ValidationMode::ConceptSnapshot)
        .unwrap()
}

/// A fully populated snapshot builder with deterministic content
pub fn full_snapshot_builder() -> ConceptSnapshotBuilder {
    full_snapshot_builder_without_end_date().end_date(date("2026-12-31T23:59:59Z"))
}

/// Same fixture, but with the end date left unset
pub fn full_snapshot_builder_without_end_date() -> ConceptSnapshotBuilder {
    ConceptSnapshot::builder()
        .id(iri("concept-snapshot", "400"))
        .title(nl("Akte van aangifte van een verwaarloosde woning"))
        .description(nl("De aangifte van een verwaarloosde woning."))
        .additional_description(nl("Bijkomende toelichting."))
        .exception(nl("Uitzonderingen."))
        .regulation(nl("Regelgeving."))
        .start_date(date("2024-01-01T00:00:00Z"))
        .product_type(ProductType::Toelating)
        .target_audiences(vec![TargetAudience::Burger, TargetAudience::Onderneming])
        .themes(vec![Theme::BouwenWonen])
        .competent_authority_levels(vec![CompetentAuthorityLevel::Lokaal])
        .competent_authorities(vec![iri("bestuurseenheid", "gent")])
        .executing_authority_levels(vec![ExecutingAuthorityLevel::Lokaal])
        .executing_authorities(vec![iri("bestuurseenheid", "gent")])
        .publication_media(vec![PublicationMedium::YourEurope])
        .your_europe_categories(vec![YourEuropeCategory::VerblijfVerhuizing])
        .keywords(vec![nl("woning"), nl("verwaarlozing")])
        .requirements(vec![requirement(1, "Eigenaar zijn")])
        .procedures(vec![procedure(
            1,
            "Aanvraag indienen",
            vec![website(1, "Loket", "https://loket.example.com")],
        )])
        .websites(vec![website(1, "Meer info", "https://info.example.com")])
        .costs(vec![cost(1, "Registratiekost")])
        .financial_advantages(vec![financial_advantage(1, "Premie")])
        .legal_resources(vec![legal_resource(1, "Vlaamse Codex Wonen")])
        .is_version_of(iri("concept", "400"))
        .date_created(date("2024-01-01T08:00:00Z"))
        .date_modified(date("2024-01-15T08:00:00Z"))
        .generated_at_time(date("2024-01-15T08:00:01Z"))
        .product_id("1502")
        .concept_tags(vec![ConceptTag::YourEuropeVerplicht])
        .is_archived(false)
}

pub fn full_snapshot() -> ConceptSnapshot {
    full_snapshot_builder().build().unwrap()
}
