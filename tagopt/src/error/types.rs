//! Primary error enum for tag compilation, registration, and parsing.

use thiserror::Error;

use super::ErrorKind;
use crate::value::{Mismatch, ValueKind};

/// Result alias used by every fallible operation in the crate.
pub type TagOptResult<T> = Result<T, TagOptError>;

/// Errors that can occur while compiling tags or parsing arguments.
///
/// None of these terminate the process; mapping them to exit codes is left
/// to the caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TagOptError {
    /// The tag text does not follow the clause grammar.
    #[error("invalid tag format {tag:?}: {reason}")]
    InvalidTagFormat {
        /// Tag text as written on the field.
        tag: String,
        /// What the grammar rejected.
        reason: &'static str,
    },

    /// A clause used a key outside the recognised set.
    #[error("invalid tag option <{key}>")]
    UnknownTagKey {
        /// Key as written in the tag.
        key: String,
    },

    /// `short`, `long`, or `name` was given without a value.
    #[error("<{key}> cannot be empty")]
    EmptyValue {
        /// Canonical name of the key.
        key: &'static str,
    },

    /// The tagged field's type has no matching write target.
    #[error("unsupported destination type {type_name}")]
    UnsupportedDestinationType {
        /// Rust type name of the field.
        type_name: &'static str,
    },

    /// Raw text did not coerce to the declared kind.
    #[error("{subject} {source}")]
    TypeMismatch {
        /// What was being coerced, e.g. `arg<-p/--port>` or `<default>`.
        subject: String,
        /// Expected kind and offending text.
        source: Mismatch,
    },

    /// The write target's storage disagrees with the option kind.
    #[error("arg<{option}> result target is not {expected}")]
    ResultTypeMismatch {
        /// Display form of the option.
        option: String,
        /// Storage the option kind requires.
        expected: ValueKind,
    },

    /// A long option that no registration knows about.
    #[error("unrecognized arg {argument}")]
    UnrecognizedArgument {
        /// The token as it appeared on the command line.
        argument: String,
    },

    /// A required option was never supplied.
    #[error("missing argument: {option}")]
    MissingRequiredArgument {
        /// Flags and value name of the first missing option.
        option: String,
    },

    /// A tag failure raised while registering a named struct field.
    #[error("parse tag of [{field}] failed: {source}")]
    Field {
        /// Name of the struct field carrying the tag.
        field: String,
        /// Failure reported for the tag.
        source: Box<Self>,
    },
}

impl TagOptError {
    /// Returns the kind of failure, looking through field context.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagopt::{ErrorKind, TagOptError};
    ///
    /// let err = TagOptError::Field {
    ///     field: "conf".into(),
    ///     source: Box::new(TagOptError::EmptyValue { key: "short" }),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::EmptyValue);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTagFormat { .. } => ErrorKind::InvalidTagFormat,
            Self::UnknownTagKey { .. } => ErrorKind::UnknownTagKey,
            Self::EmptyValue { .. } => ErrorKind::EmptyValue,
            Self::UnsupportedDestinationType { .. } => ErrorKind::UnsupportedDestinationType,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::ResultTypeMismatch { .. } => ErrorKind::ResultTypeMismatch,
            Self::UnrecognizedArgument { .. } => ErrorKind::UnrecognizedArgument,
            Self::MissingRequiredArgument { .. } => ErrorKind::MissingRequiredArgument,
            Self::Field { source, .. } => source.kind(),
        }
    }

    pub(crate) fn mismatch(subject: impl Into<String>, source: Mismatch) -> Self {
        Self::TypeMismatch {
            subject: subject.into(),
            source,
        }
    }
}
