//! Multi-locale string value type

use std::cmp::Ordering;

use conceptfeed_core_types::Language;
use serde::{Deserialize, Serialize};

use crate::errors::{InvariantError, Result};

/// An immutable textual value with up to six locale variants
///
/// Slot order (en, nl, nl-formal, nl-informal, nl-generated-formal,
/// nl-generated-informal) is fixed and drives the deterministic total
/// ordering used to sort keyword sets. Absence of a slot is distinct
/// from a present-but-empty slot.
///
/// The "at least one slot populated" invariant is intentionally not
/// enforced: upstream data still contains fully empty values and
/// re-enabling the check would reject currently accepted feed content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageString {
    en: Option<String>,
    nl: Option<String>,
    nl_formal: Option<String>,
    nl_informal: Option<String>,
    nl_generated_formal: Option<String>,
    nl_generated_informal: Option<String>,
}

impl LanguageString {
    /// Construct from the six optional slots, in slot order
    pub fn of(
        en: Option<String>,
        nl: Option<String>,
        nl_formal: Option<String>,
        nl_informal: Option<String>,
        nl_generated_formal: Option<String>,
        nl_generated_informal: Option<String>,
    ) -> Self {
        Self {
            en,
            nl,
            nl_formal,
            nl_informal,
            nl_generated_formal,
            nl_generated_informal,
        }
    }

    /// Convenience constructor for a value with only the `nl` slot
    pub fn of_nl(nl: impl Into<String>) -> Self {
        Self::of(None, Some(nl.into()), None, None, None, None)
    }

    pub fn en(&self) -> Option<&str> {
        self.en.as_deref()
    }

    pub fn nl(&self) -> Option<&str> {
        self.nl.as_deref()
    }

    pub fn nl_formal(&self) -> Option<&str> {
        self.nl_formal.as_deref()
    }

    pub fn nl_informal(&self) -> Option<&str> {
        self.nl_informal.as_deref()
    }

    pub fn nl_generated_formal(&self) -> Option<&str> {
        self.nl_generated_formal.as_deref()
    }

    pub fn nl_generated_informal(&self) -> Option<&str> {
        self.nl_generated_informal.as_deref()
    }

    /// The value of the given language slot
    pub fn get(&self, language: Language) -> Option<&str> {
        match language {
            Language::En => self.en(),
            Language::Nl => self.nl(),
            Language::NlFormal => self.nl_formal(),
            Language::NlInformal => self.nl_informal(),
            Language::NlGeneratedFormal => self.nl_generated_formal(),
            Language::NlGeneratedInformal => self.nl_generated_informal(),
        }
    }

    /// Languages whose slot is populated, in slot order
    pub fn defined_languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|language| self.get(*language).is_some())
            .collect()
    }

    /// Languages whose slot is populated with non-whitespace text, in slot order
    pub fn not_blank_languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|language| {
                self.get(*language)
                    .is_some_and(|value| !value.trim().is_empty())
            })
            .collect()
    }

    /// Demote the formal Dutch variant into the informal slot
    ///
    /// Returns a new value with `nl_informal` taking the `nl_formal` text
    /// (an already-set informal slot is kept, an absent formal slot
    /// changes nothing). Fails when more than one of {nl, nl-formal,
    /// nl-informal} is populated, because the demotion target would be
    /// ambiguous.
    pub fn transform_to_informal(&self, field: &str) -> Result<LanguageString> {
        let dutch_variants = [&self.nl, &self.nl_formal, &self.nl_informal]
            .into_iter()
            .filter(|slot| slot.is_some())
            .count();
        if dutch_variants > 1 {
            return Err(InvariantError::ConflictingLanguageVariants {
                field: field.to_string(),
            });
        }
        Ok(Self {
            en: self.en.clone(),
            nl: self.nl.clone(),
            nl_formal: None,
            nl_informal: self.nl_informal.clone().or_else(|| self.nl_formal.clone()),
            nl_generated_formal: self.nl_generated_formal.clone(),
            nl_generated_informal: self.nl_generated_informal.clone(),
        })
    }

    /// Deterministic total order over all six slots, in slot order
    ///
    /// Absent slots compare as the empty string, so a value cannot change
    /// its sort position by swapping absence for emptiness. Used to sort
    /// keyword sets; deliberately not an `Ord` impl because this order
    /// identifies absent and empty slots while `Eq` does not.
    pub fn compare(&self, other: &LanguageString) -> Ordering {
        Language::ALL
            .into_iter()
            .map(|language| {
                self.get(language)
                    .unwrap_or("")
                    .cmp(other.get(language).unwrap_or(""))
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Narrow equality over the tracked slots only (en, nl)
    ///
    /// The formal/informal/generated slots are deliberately ignored: a
    /// value that changes only there is not a functional change.
    pub fn tracked_eq(&self, other: &LanguageString) -> bool {
        self.en == other.en && self.nl == other.nl
    }
}
