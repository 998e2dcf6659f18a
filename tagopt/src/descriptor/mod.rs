//! Option descriptors: registered metadata paired with a write target.

use serde::Serialize;

use crate::error::{TagOptError, TagOptResult};
use crate::target::Destination;
use crate::value::{self, LONG_PREFIX, OPTION_PREFIX, Value, ValueKind};

/// Declared type of an option.
///
/// The kind is fixed when the option is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// `-n 3`
    Int,
    /// `-v`, `-v=false`
    Bool,
    /// `--ratio 0.5`
    Float,
    /// `--conf x.yml`
    String,
    /// Repeated `-v a -v b`, one item per occurrence.
    Array,
    /// One positional value.
    BareString,
    /// Every positional value left over.
    BareArray,
}

impl OptionKind {
    /// Storage the kind writes to.
    #[must_use]
    pub const fn value_kind(self) -> ValueKind {
        match self {
            Self::Int => ValueKind::Int,
            Self::Bool => ValueKind::Bool,
            Self::Float => ValueKind::Float,
            Self::String | Self::BareString => ValueKind::String,
            Self::Array | Self::BareArray => ValueKind::List,
        }
    }

    /// Kind of a named option backed by `storage`.
    #[must_use]
    pub const fn for_storage(storage: ValueKind) -> Self {
        match storage {
            ValueKind::Int => Self::Int,
            ValueKind::Bool => Self::Bool,
            ValueKind::Float => Self::Float,
            ValueKind::String => Self::String,
            ValueKind::List => Self::Array,
        }
    }

    /// Whether the option is filled from positional values.
    #[must_use]
    pub const fn is_bare(self) -> bool {
        matches!(self, Self::BareString | Self::BareArray)
    }

    const fn placeholder(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Bool => "true/false",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::BareString | Self::BareArray => "<unknown>",
        }
    }
}

/// Metadata describing one option, independent of where its value lives.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    /// Short identifier, matched as `-x`.
    pub short: Option<String>,
    /// Long identifier, matched as `--xxx`.
    pub long: Option<String>,
    /// Display name of the value in usage text.
    pub name: Option<String>,
    /// Free-text description.
    pub help: String,
    /// Whether parsing fails when the option is absent.
    pub required: bool,
    /// Default value; never read for required options.
    pub default: Option<Value>,
    /// Declared type.
    pub kind: OptionKind,
}

impl OptionSpec {
    /// Creates an unnamed, optional spec of `kind`.
    #[must_use]
    pub const fn new(kind: OptionKind) -> Self {
        Self {
            short: None,
            long: None,
            name: None,
            help: String::new(),
            required: false,
            default: None,
            kind,
        }
    }

    /// Flag form such as `-c/--conf`; empty for positional options.
    #[must_use]
    pub fn flags(&self) -> String {
        match (&self.short, &self.long) {
            (Some(short), Some(long)) => format!("{OPTION_PREFIX}{short}/{LONG_PREFIX}{long}"),
            (Some(short), None) => format!("{OPTION_PREFIX}{short}"),
            (None, Some(long)) => format!("{LONG_PREFIX}{long}"),
            (None, None) => String::new(),
        }
    }

    /// Display name, falling back to a placeholder derived from the kind.
    #[must_use]
    pub fn value_name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.kind.placeholder())
    }

    /// Flags followed by the value name, e.g. `-c/--conf conf_file`.
    #[must_use]
    pub fn arg_value(&self) -> String {
        let flags = self.flags();
        if flags.is_empty() {
            self.value_name().to_owned()
        } else {
            format!("{flags} {}", self.value_name())
        }
    }

    /// Short label used in diagnostics: the flags, or the value name for
    /// positional options.
    #[must_use]
    pub fn label(&self) -> String {
        let flags = self.flags();
        if flags.is_empty() {
            self.value_name().to_owned()
        } else {
            flags
        }
    }

    pub(crate) fn result_mismatch(&self) -> TagOptError {
        TagOptError::ResultTypeMismatch {
            option: self.label(),
            expected: self.kind.value_kind(),
        }
    }
}

/// One registered option: its [`OptionSpec`], where its value is written,
/// and whether the command line supplied it.
#[derive(Debug)]
pub struct OptionDescriptor<'a> {
    spec: OptionSpec,
    target: Destination<'a>,
    is_set: bool,
}

impl<'a> OptionDescriptor<'a> {
    /// Pairs `spec` with `target`.
    ///
    /// The pairing is not validated here; a target whose storage disagrees
    /// with `spec.kind` surfaces as [`TagOptError::ResultTypeMismatch`] on
    /// the first write.
    #[must_use]
    pub const fn new(spec: OptionSpec, target: Destination<'a>) -> Self {
        Self {
            spec,
            target,
            is_set: false,
        }
    }

    /// Registered metadata.
    #[must_use]
    pub const fn spec(&self) -> &OptionSpec {
        &self.spec
    }

    /// Declared kind.
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        self.spec.kind
    }

    /// Whether a value has been written by parsing.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.is_set
    }

    /// Value currently held by the target.
    #[must_use]
    pub fn current(&self) -> Value {
        self.target.current()
    }

    /// Coerces `raw` according to the option kind and writes it.
    ///
    /// Array kinds append one item per call; the first call clears the list
    /// of any default it held. A boolean receiving text that
    /// starts with `-` reads as `true`.
    ///
    /// # Errors
    ///
    /// Returns [`TagOptError::TypeMismatch`] when `raw` does not coerce and
    /// [`TagOptError::ResultTypeMismatch`] when the target cannot hold the
    /// kind. The option stays unset on failure.
    pub fn parse(&mut self, raw: &str) -> TagOptResult<()> {
        if matches!(self.spec.kind, OptionKind::Array | OptionKind::BareArray) {
            // The first occurrence replaces whatever default the list held.
            if !self.is_set {
                self.target
                    .set_scalar(Value::List(Vec::new()))
                    .map_err(|_| self.spec.result_mismatch())?;
            }
            self.target
                .append(raw.to_owned())
                .map_err(|_| self.spec.result_mismatch())?;
        } else {
            let coerced = self.coerce(raw)?;
            self.target
                .set_scalar(coerced)
                .map_err(|_| self.spec.result_mismatch())?;
        }
        self.is_set = true;
        Ok(())
    }

    /// Replaces list storage wholesale and marks the option set.
    pub(crate) fn assign_list(&mut self, values: Vec<String>) -> TagOptResult<()> {
        self.target
            .set_scalar(Value::List(values))
            .map_err(|_| self.spec.result_mismatch())?;
        self.is_set = true;
        Ok(())
    }

    fn coerce(&self, raw: &str) -> TagOptResult<Value> {
        let storage = self.spec.kind.value_kind();
        if storage == ValueKind::Bool && raw.starts_with(OPTION_PREFIX) {
            return Ok(Value::Bool(true));
        }
        value::coerce(storage, raw)
            .map_err(|source| TagOptError::mismatch(format!("arg<{}>", self.spec.label()), source))
    }
}
