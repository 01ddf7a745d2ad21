//! Functional-equivalence scenarios for whole aggregates.

mod common;

use common::*;
use conceptfeed_core::is_functionally_changed;
use conceptfeed_core::model::{LanguageString, ProductType, TargetAudience, Theme};

#[test]
fn test_freshly_built_identical_aggregates_are_not_changed() {
    // Two distinct instances, identical logical content
    let previous = full_snapshot();
    let candidate = full_snapshot();
    assert!(!is_functionally_changed(&previous, &candidate));
}

#[test]
fn test_adding_a_formal_dutch_title_variant_is_not_a_change() {
    let previous = full_snapshot_builder()
        .title(nl("X"))
        .build()
        .unwrap();
    let candidate = full_snapshot_builder()
        .title(LanguageString::of(
            None,
            Some("X".into()),
            Some("Y".into()),
            None,
            None,
            None,
        ))
        .build()
        .unwrap();
    assert!(!is_functionally_changed(&previous, &candidate));
}

#[test]
fn test_changing_the_dutch_title_is_a_change() {
    let previous = full_snapshot_builder().title(nl("X")).build().unwrap();
    let candidate = full_snapshot_builder().title(nl("Z")).build().unwrap();
    assert!(is_functionally_changed(&previous, &candidate));
}

#[test]
fn test_adding_a_keyword_is_a_change() {
    let previous = full_snapshot_builder()
        .keywords(vec![nl("abc")])
        .build()
        .unwrap();
    let candidate = full_snapshot_builder()
        .keywords(vec![nl("abc"), nl("def")])
        .build()
        .unwrap();
    assert!(is_functionally_changed(&previous, &candidate));
}

#[test]
fn test_date_formatting_variants_are_not_a_change() {
    let previous = full_snapshot_builder()
        .start_date(date("2024-01-01T00:00:00Z"))
        .build()
        .unwrap();
    let candidate = full_snapshot_builder()
        .start_date(date("2024-01-01T00:00:00.000Z"))
        .build()
        .unwrap();
    assert!(!is_functionally_changed(&previous, &candidate));
}

#[test]
fn test_removing_a_date_is_a_change() {
    let previous = full_snapshot();
    let candidate = full_snapshot_builder_without_end_date().build().unwrap();
    assert!(is_functionally_changed(&previous, &candidate));
    assert!(is_functionally_changed(&candidate, &previous));
}

#[test]
fn test_permuting_unordered_membership_is_not_a_change() {
    let previous = full_snapshot_builder()
        .target_audiences(vec![TargetAudience::Burger, TargetAudience::Onderneming])
        .themes(vec![Theme::BouwenWonen, Theme::MilieuEnergie])
        .build()
        .unwrap();
    let candidate = full_snapshot_builder()
        .target_audiences(vec![TargetAudience::Onderneming, TargetAudience::Burger])
        .themes(vec![Theme::MilieuEnergie, Theme::BouwenWonen])
        .build()
        .unwrap();
    assert!(!is_functionally_changed(&previous, &candidate));
}

#[test]
fn test_changing_membership_is_a_change() {
    let previous = full_snapshot_builder()
        .target_audiences(vec![TargetAudience::Burger])
        .build()
        .unwrap();
    let candidate = full_snapshot_builder()
        .target_audiences(vec![TargetAudience::Vereniging])
        .build()
        .unwrap();
    assert!(is_functionally_changed(&previous, &candidate));
}

#[test]
fn test_product_type_change_is_a_change() {
    let previous = full_snapshot_builder()
        .product_type(ProductType::Toelating)
        .build()
        .unwrap();
    let candidate = full_snapshot_builder()
        .product_type(ProductType::Bewijs)
        .build()
        .unwrap();
    assert!(is_functionally_changed(&previous, &candidate));
}

#[test]
fn test_requirement_content_swapped_across_orders_is_a_change() {
    let previous = full_snapshot_builder()
        .requirements(vec![requirement(1, "R1"), requirement(2, "R2")])
        .build()
        .unwrap();
    let candidate = full_snapshot_builder()
        .requirements(vec![requirement(1, "R2"), requirement(2, "R1")])
        .build()
        .unwrap();
    assert!(is_functionally_changed(&previous, &candidate));
}

#[test]
fn test_requirement_array_position_is_irrelevant_when_orders_match() {
    let previous = full_snapshot_builder()
        .requirements(vec![requirement(1, "R1"), requirement(2, "R2")])
        .build()
        .unwrap();
    let candidate = full_snapshot_builder()
        .requirements(vec![requirement(2, "R2"), requirement(1, "R1")])
        .build()
        .unwrap();
    assert!(!is_functionally_changed(&previous, &candidate));
}

#[test]
fn test_moving_requirement_content_to_a_new_order_slot_is_a_change() {
    // Same single requirement content, now at order 2 with a different
    // requirement occupying order 1
    let previous = full_snapshot_builder()
        .requirements(vec![requirement(1, "R1")])
        .build()
        .unwrap();
    let candidate = full_snapshot_builder()
        .requirements(vec![requirement(1, "other"), requirement(2, "R1")])
        .build()
        .unwrap();
    assert!(is_functionally_changed(&previous, &candidate));
}

#[test]
fn test_nested_website_change_under_procedure_is_a_change() {
    let previous = full_snapshot_builder()
        .procedures(vec![procedure(
            1,
            "Aanvraag",
            vec![website(1, "Loket", "https://loket.example.com")],
        )])
        .build()
        .unwrap();
    let candidate = full_snapshot_builder()
        .procedures(vec![procedure(
            1,
            "Aanvraag",
            vec![website(1, "Loket", "https://ander-loket.example.com")],
        )])
        .build()
        .unwrap();
    assert!(is_functionally_changed(&previous, &candidate));
}

#[test]
fn test_evidence_presence_is_absence_symmetric() {
    let previous = full_snapshot_builder()
        .requirements(vec![requirement(1, "R1")])
        .build()
        .unwrap();
    let candidate = full_snapshot_builder()
        .requirements(vec![requirement_with_evidence(1, "R1", "bewijsstuk")])
        .build()
        .unwrap();
    assert!(is_functionally_changed(&previous, &candidate));
    assert!(is_functionally_changed(&candidate, &previous));
}

#[test]
fn test_lifecycle_timestamps_are_not_tracked() {
    let previous = full_snapshot();
    let candidate = full_snapshot_builder()
        .date_modified(date("2025-06-01T12:00:00Z"))
        .generated_at_time(date("2025-06-01T12:00:01Z"))
        .build()
        .unwrap();
    assert!(!is_functionally_changed(&previous, &candidate));
}

#[test]
fn test_archived_flag_is_not_tracked() {
    let previous = full_snapshot();
    let candidate = full_snapshot_builder().is_archived(true).build().unwrap();
    assert!(!is_functionally_changed(&previous, &candidate));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn optional_text() -> impl Strategy<Value = Option<String>> {
        proptest::option::of("[a-z ]{0,12}")
    }

    proptest! {
        // Mutating only formal/informal/generated slots never flips the
        // narrow comparison result.
        #[test]
        fn prop_untracked_slots_never_affect_the_decision(
            formal in optional_text(),
            informal in optional_text(),
            generated_formal in optional_text(),
            generated_informal in optional_text(),
        ) {
            let previous = full_snapshot_builder().title(nl("titel")).build().unwrap();
            let candidate = full_snapshot_builder()
                .title(LanguageString::of(
                    None,
                    Some("titel".into()),
                    formal,
                    informal,
                    generated_formal,
                    generated_informal,
                ))
                .build()
                .unwrap();
            prop_assert!(!is_functionally_changed(&previous, &candidate));
        }

        // The comparator is reflexive over freshly rebuilt aggregates
        // whatever the keyword membership.
        #[test]
        fn prop_identical_keyword_sets_never_change(words in proptest::collection::btree_set("[a-z]{1,8}", 0..6)) {
            let keywords: Vec<_> = words.iter().map(|word| nl(word)).collect();
            let previous = full_snapshot_builder().keywords(keywords.clone()).build().unwrap();
            let candidate = full_snapshot_builder().keywords(keywords).build().unwrap();
            prop_assert!(!is_functionally_changed(&previous, &candidate));
        }
    }
}
