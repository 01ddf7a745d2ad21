use thiserror::Error;

/// Result type alias using InvariantError
pub type Result<T> = std::result::Result<T, InvariantError>;

/// Invariant violations raised while building an entity or aggregate
///
/// Every variant carries the qualified name of the offending field
/// (e.g. `"title"`, `"costs > order"`), so the message alone identifies
/// where in the aggregate the violation sits. Construction is
/// all-or-nothing: the first violation aborts the whole build and no
/// partially valid aggregate is ever observable. The core never catches
/// or downgrades these errors; the surrounding batch decides whether to
/// skip, log, or abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A required value is absent
    #[error("{field}: required value is missing")]
    MissingValue { field: String },

    /// A value is present but whitespace-only
    #[error("{field}: value must not be blank")]
    Blank { field: String },

    /// A collection contains two elements that are equal under its
    /// defined equality
    #[error("{field}: collection contains duplicate values")]
    DuplicateValue { field: String },

    /// Two elements of an ordered collection share the same key
    #[error("{field}: duplicate key {key}")]
    DuplicateKey { field: String, key: String },

    /// A structural value is present but cannot be interpreted
    /// (e.g. a non-integer `order`)
    #[error("{field}: invalid value '{value}'")]
    InvalidValue { field: String, value: String },

    /// A required locale variant is absent from a multi-locale string
    #[error("{field}: no value for language {language}")]
    MissingLanguage { field: String, language: String },

    /// More than one Dutch-family variant is populated where at most one
    /// is allowed, so the transformation target is ambiguous
    #[error("{field}: more than one Dutch language variant present")]
    ConflictingLanguageVariants { field: String },
}

impl InvariantError {
    /// The qualified field name the violation refers to
    pub fn field(&self) -> &str {
        match self {
            InvariantError::MissingValue { field }
            | InvariantError::Blank { field }
            | InvariantError::DuplicateValue { field }
            | InvariantError::DuplicateKey { field, .. }
            | InvariantError::InvalidValue { field, .. }
            | InvariantError::MissingLanguage { field, .. }
            | InvariantError::ConflictingLanguageVariants { field } => field,
        }
    }
}
