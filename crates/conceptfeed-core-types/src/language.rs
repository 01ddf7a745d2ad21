//! Tracked locale tags
//!
//! The feed publishes textual content in up to six locale variants. Only
//! these six tags are tracked; anything else (de, fr, ...) is untracked
//! and filtered out by the persistence collaborator, except where the
//! tolerant reconstruction policy needs to know such content existed.

use serde::{Deserialize, Serialize};

/// One of the six tracked locale variants of a textual field
///
/// Declaration order is the canonical slot order used for the
/// deterministic total ordering of multi-locale strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    /// English (`en`)
    En,
    /// Dutch (`nl`)
    Nl,
    /// Dutch, formal register (`nl-be-x-formal`)
    NlFormal,
    /// Dutch, informal register (`nl-be-x-informal`)
    NlInformal,
    /// Dutch, machine-generated formal register (`nl-be-x-generated-formal`)
    NlGeneratedFormal,
    /// Dutch, machine-generated informal register (`nl-be-x-generated-informal`)
    NlGeneratedInformal,
}

impl Language {
    /// All tracked languages in canonical slot order
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Nl,
        Language::NlFormal,
        Language::NlInformal,
        Language::NlGeneratedFormal,
        Language::NlGeneratedInformal,
    ];

    /// The BCP-47 tag as it appears on feed triples
    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
            Language::NlFormal => "nl-be-x-formal",
            Language::NlInformal => "nl-be-x-informal",
            Language::NlGeneratedFormal => "nl-be-x-generated-formal",
            Language::NlGeneratedInformal => "nl-be-x-generated-informal",
        }
    }

    /// Map a feed language tag to a tracked language, if it is one
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag {
            "en" => Some(Language::En),
            "nl" => Some(Language::Nl),
            "nl-be-x-formal" => Some(Language::NlFormal),
            "nl-be-x-informal" => Some(Language::NlInformal),
            "nl-be-x-generated-formal" => Some(Language::NlGeneratedFormal),
            "nl-be-x-generated-informal" => Some(Language::NlGeneratedInformal),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
