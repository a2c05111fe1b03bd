use std::borrow::Cow;

use thiserror::Error;

/// Top-level error type returned by record construction and introspection.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Validation failed for one or more fields.
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    /// The resolved mapping could not be turned into the target record type.
    ///
    /// This is the pass-through failure mode for a field that resolved to
    /// nothing and carries no declared default: the target type's own
    /// deserialization semantics decide whether that is fatal.
    #[error("failed to construct record: {0}")]
    Construct(#[source] serde_json::Error),

    /// A live record instance could not be serialized into a value snapshot.
    #[error("failed to snapshot record instance: {0}")]
    Snapshot(#[source] serde_json::Error),

    /// `Reflection::invoke` was asked for a method the context does not expose.
    #[error("record `{record}` has no invokable method `{method}`")]
    UnknownMethod { record: String, method: String },

    /// Catch-all for contract violations that carry only a message.
    #[error("{message}")]
    Other { message: Cow<'static, str> },
}

/// Collection of validation issues encountered while checking a record.
#[derive(Debug, Error)]
#[error("validation errors: {issues:?}")]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        Self {
            issues: issues.into_iter().collect(),
        }
    }

    /// Convenience helper for constructing a single-field validation error.
    pub fn single(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new([ValidationIssue::new(field, code, message)])
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Detailed validation failure for a single field.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias for fallible validation outcomes.
pub type ValidationResult<T> = Result<T, ValidationError>;
