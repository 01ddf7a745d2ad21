//! Structural diff over tracked content.
//!
//! The entry point is [`is_functionally_changed`], which decides whether
//! a candidate snapshot differs from the previously stored one in any
//! field that matters for downstream republishing. Cosmetic differences
//! (timestamp formatting, untracked locale variants, element positions
//! inside unordered sets) never count as a change.
//!
//! Uniform rules, applied bottom-up per entity type:
//! - one side absent and the other present is always a change; both
//!   absent never is
//! - scalars compare with strict equality
//! - temporal values compare as instants, not as text
//! - unordered sets change when their symmetric difference is non-empty
//! - ordered child collections pair elements by their `order` value and
//!   recurse into the paired elements' tracked fields; the `order` value
//!   itself is only the pairing key
//!
//! The comparator is pure and total over validated aggregates, and its
//! result does not depend on collection iteration order.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::model::{
    ConceptSnapshot, Cost, Evidence, FinancialAdvantage, FormatPreservedDate, LanguageString,
    LegalResource, Procedure, Requirement, Website,
};

/// Whether `candidate` differs from `previous` in tracked content
///
/// Not tracked: `is_version_of`, the lifecycle timestamps, and the
/// archived flag — all versioning metadata that changes with every
/// snapshot or is handled by a separate archive flow.
pub fn is_functionally_changed(previous: &ConceptSnapshot, candidate: &ConceptSnapshot) -> bool {
    text_changed(previous.title(), candidate.title())
        || text_changed(previous.description(), candidate.description())
        || text_changed(
            previous.additional_description(),
            candidate.additional_description(),
        )
        || text_changed(previous.exception(), candidate.exception())
        || text_changed(previous.regulation(), candidate.regulation())
        || date_changed(previous.start_date(), candidate.start_date())
        || date_changed(previous.end_date(), candidate.end_date())
        || previous.product_type() != candidate.product_type()
        || set_changed(previous.target_audiences(), candidate.target_audiences())
        || set_changed(previous.themes(), candidate.themes())
        || set_changed(
            previous.competent_authority_levels(),
            candidate.competent_authority_levels(),
        )
        || set_changed(
            previous.competent_authorities(),
            candidate.competent_authorities(),
        )
        || set_changed(
            previous.executing_authority_levels(),
            candidate.executing_authority_levels(),
        )
        || set_changed(
            previous.executing_authorities(),
            candidate.executing_authorities(),
        )
        || set_changed(previous.publication_media(), candidate.publication_media())
        || set_changed(
            previous.your_europe_categories(),
            candidate.your_europe_categories(),
        )
        || keywords_changed(previous.keywords(), candidate.keywords())
        || set_changed(previous.concept_tags(), candidate.concept_tags())
        || ordered_changed(
            previous.requirements(),
            candidate.requirements(),
            Requirement::order,
            requirement_changed,
        )
        || ordered_changed(
            previous.procedures(),
            candidate.procedures(),
            Procedure::order,
            procedure_changed,
        )
        || ordered_changed(
            previous.websites(),
            candidate.websites(),
            Website::order,
            website_changed,
        )
        || ordered_changed(previous.costs(), candidate.costs(), Cost::order, cost_changed)
        || ordered_changed(
            previous.financial_advantages(),
            candidate.financial_advantages(),
            FinancialAdvantage::order,
            financial_advantage_changed,
        )
        || ordered_changed(
            previous.legal_resources(),
            candidate.legal_resources(),
            LegalResource::order,
            legal_resource_changed,
        )
        || previous.product_id() != candidate.product_id()
}

/// Multi-locale text under the narrow (en/nl) equality, absence-symmetric
fn text_changed(a: Option<&LanguageString>, b: Option<&LanguageString>) -> bool {
    match (a, b) {
        (None, None) => false,
        (Some(a), Some(b)) => !a.tracked_eq(b),
        _ => true,
    }
}

/// Temporal values under semantic instant equality, absence-symmetric
fn date_changed(a: Option<&FormatPreservedDate>, b: Option<&FormatPreservedDate>) -> bool {
    match (a, b) {
        (None, None) => false,
        (Some(a), Some(b)) => !a.same_instant(b),
        _ => true,
    }
}

/// Unordered membership comparison: non-empty symmetric difference
///
/// Validated collections carry no duplicates, so equal length plus
/// one-way containment implies set equality.
fn set_changed<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() != b.len() || a.iter().any(|item| !b.contains(item))
}

/// Keyword sets: unordered membership under the narrow text equality
fn keywords_changed(a: &[LanguageString], b: &[LanguageString]) -> bool {
    let covered = |from: &[LanguageString], into: &[LanguageString]| {
        from.iter()
            .all(|keyword| into.iter().any(|other| keyword.tracked_eq(other)))
    };
    !(covered(a, b) && covered(b, a))
}

/// Ordered child collections, paired by `order` value
///
/// For every order slot present on either side: present on one side only
/// is a change; present on both recurses into the paired elements. An
/// element's content moving to a different order slot therefore registers
/// as a change even when the collection's membership is unchanged.
fn ordered_changed<T>(
    a: &[T],
    b: &[T],
    order: impl Fn(&T) -> u32,
    changed: impl Fn(&T, &T) -> bool,
) -> bool {
    let a_by_order: BTreeMap<u32, &T> = a.iter().map(|item| (order(item), item)).collect();
    let b_by_order: BTreeMap<u32, &T> = b.iter().map(|item| (order(item), item)).collect();
    let orders: BTreeSet<u32> = a_by_order.keys().chain(b_by_order.keys()).copied().collect();
    orders.into_iter().any(|slot| {
        match (a_by_order.get(&slot), b_by_order.get(&slot)) {
            (Some(a_item), Some(b_item)) => changed(a_item, b_item),
            _ => true,
        }
    })
}

fn requirement_changed(a: &Requirement, b: &Requirement) -> bool {
    text_changed(a.title(), b.title())
        || text_changed(a.description(), b.description())
        || evidence_changed(a.evidence(), b.evidence())
}

fn evidence_changed(a: Option<&Evidence>, b: Option<&Evidence>) -> bool {
    match (a, b) {
        (None, None) => false,
        (Some(a), Some(b)) => {
            text_changed(a.title(), b.title()) || text_changed(a.description(), b.description())
        }
        _ => true,
    }
}

fn procedure_changed(a: &Procedure, b: &Procedure) -> bool {
    text_changed(a.title(), b.title())
        || text_changed(a.description(), b.description())
        || ordered_changed(a.websites(), b.websites(), Website::order, website_changed)
}

fn website_changed(a: &Website, b: &Website) -> bool {
    text_changed(a.title(), b.title())
        || text_changed(a.description(), b.description())
        || a.url() != b.url()
}

fn cost_changed(a: &Cost, b: &Cost) -> bool {
    text_changed(a.title(), b.title()) || text_changed(a.description(), b.description())
}

fn financial_advantage_changed(a: &FinancialAdvantage, b: &FinancialAdvantage) -> bool {
    text_changed(a.title(), b.title()) || text_changed(a.description(), b.description())
}

fn legal_resource_changed(a: &LegalResource, b: &LegalResource) -> bool {
    text_changed(a.title(), b.title())
        || text_changed(a.description(), b.description())
        || a.url() != b.url()
}
