//! Coercion of raw command-line text into typed values.
//!
//! Every option kind funnels its raw token through [`coerce`]. Lists never
//! narrow their items: the raw text is kept as-is.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Character that marks a token as an option rather than a value.
pub const OPTION_PREFIX: char = '-';

/// Prefix of a long option (`--conf`).
pub const LONG_PREFIX: &str = "--";

/// Separator between an option and its inline value (`--conf=x.yml`).
pub const INLINE_SEPARATOR: char = '=';

const FALSE_WORDS: [&str; 5] = ["0", "false", "f", "no", "n"];
const TRUE_WORDS: [&str; 6] = ["1", "true", "t", "yes", "y", ""];

/// Storage shape of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Signed 64-bit integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Boolean.
    Bool,
    /// Text.
    String,
    /// Ordered list of text.
    List,
}

impl ValueKind {
    /// Short lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::String => "string",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed value produced by coercion or read back from a destination.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Text value.
    Str(String),
    /// List of text values.
    List(Vec<String>),
}

impl Value {
    /// Returns the storage shape of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
            Self::Str(_) => ValueKind::String,
            Self::List(_) => ValueKind::List,
        }
    }
}

/// Lists render as `[a b c]`; everything else uses its natural form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
            Self::List(items) => write!(f, "[{}]", items.join(" ")),
        }
    }
}

/// Raw text that does not coerce to the requested kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("require {expected}, got <{value}>")]
pub struct Mismatch {
    /// Kind the text was coerced towards.
    pub expected: ValueKind,
    /// The offending text.
    pub value: String,
}

impl Mismatch {
    fn new(expected: ValueKind, value: &str) -> Self {
        Self {
            expected,
            value: value.to_owned(),
        }
    }
}

/// Coerces `raw` into a boolean.
///
/// Matching is case-insensitive. `0`, `false`, `f`, `no`, and `n` are false;
/// `1`, `true`, `t`, `yes`, `y`, and the empty string are true, so a flag
/// given without a value reads as set.
///
/// # Errors
///
/// Returns a [`Mismatch`] for any other text.
///
/// # Examples
///
/// ```
/// use tagopt::value::coerce_bool;
///
/// assert_eq!(coerce_bool("No"), Ok(false));
/// assert_eq!(coerce_bool(""), Ok(true));
/// assert!(coerce_bool("maybe").is_err());
/// ```
pub fn coerce_bool(raw: &str) -> Result<bool, Mismatch> {
    let lowered = raw.to_lowercase();
    if FALSE_WORDS.contains(&lowered.as_str()) {
        Ok(false)
    } else if TRUE_WORDS.contains(&lowered.as_str()) {
        Ok(true)
    } else {
        Err(Mismatch::new(ValueKind::Bool, raw))
    }
}

/// Coerces `raw` into a base-10 signed integer.
///
/// # Errors
///
/// Returns a [`Mismatch`] when the text is not an integer.
pub fn coerce_int(raw: &str) -> Result<i64, Mismatch> {
    raw.parse().map_err(|_| Mismatch::new(ValueKind::Int, raw))
}

/// Coerces `raw` into a 64-bit float.
///
/// # Errors
///
/// Returns a [`Mismatch`] when the text is not a float literal.
pub fn coerce_float(raw: &str) -> Result<f64, Mismatch> {
    raw.parse().map_err(|_| Mismatch::new(ValueKind::Float, raw))
}

/// Coerces `raw` into a value of `kind`.
///
/// Strings always succeed. Lists wrap the raw text as a single item; the
/// parser appends list items one occurrence at a time.
///
/// # Errors
///
/// Returns a [`Mismatch`] when integer, float, or boolean coercion fails.
pub fn coerce(kind: ValueKind, raw: &str) -> Result<Value, Mismatch> {
    Ok(match kind {
        ValueKind::Int => Value::Int(coerce_int(raw)?),
        ValueKind::Float => Value::Float(coerce_float(raw)?),
        ValueKind::Bool => Value::Bool(coerce_bool(raw)?),
        ValueKind::String => Value::Str(raw.to_owned()),
        ValueKind::List => Value::List(vec![raw.to_owned()]),
    })
}
