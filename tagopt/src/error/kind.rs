//! Field-free discriminant of [`super::TagOptError`].

use std::fmt;

/// Category of a [`super::TagOptError`], convenient for matching in callers
/// and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Tag text does not follow the clause grammar.
    InvalidTagFormat,
    /// Tag clause key is not recognised.
    UnknownTagKey,
    /// A naming key was given an empty value.
    EmptyValue,
    /// Field type cannot back an option.
    UnsupportedDestinationType,
    /// Raw text does not coerce to the declared kind.
    TypeMismatch,
    /// Write target storage disagrees with the option kind.
    ResultTypeMismatch,
    /// Unknown long option on the command line.
    UnrecognizedArgument,
    /// Required option absent from the command line.
    MissingRequiredArgument,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidTagFormat => "invalid tag format",
            Self::UnknownTagKey => "unknown tag key",
            Self::EmptyValue => "empty value",
            Self::UnsupportedDestinationType => "unsupported destination type",
            Self::TypeMismatch => "type mismatch",
            Self::ResultTypeMismatch => "result type mismatch",
            Self::UnrecognizedArgument => "unrecognized argument",
            Self::MissingRequiredArgument => "missing required argument",
        };
        f.write_str(label)
    }
}
