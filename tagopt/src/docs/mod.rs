//! Machine-readable usage metadata.
//!
//! [`UsageDocs`] mirrors what [`Registry::usage`] renders, as plain data for
//! external tooling such as shell completion or manual page generators.

use serde::Serialize;

use crate::descriptor::{OptionDescriptor, OptionKind};
use crate::registry::Registry;

/// Current metadata schema version.
pub const USAGE_DOCS_VERSION: &str = "1.0";

/// Usage metadata for one registry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UsageDocs {
    /// Schema version, see [`USAGE_DOCS_VERSION`].
    pub version: String,
    /// Options in registration order.
    pub options: Vec<OptionDoc>,
}

/// Metadata describing one option.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OptionDoc {
    /// Short identifier without the `-`.
    pub short: Option<String>,
    /// Long identifier without the `--`.
    pub long: Option<String>,
    /// Value name shown in usage text.
    pub value_name: String,
    /// Declared kind.
    pub kind: OptionKind,
    /// Free-text description.
    pub help: String,
    /// Whether the option must be supplied.
    pub required: bool,
    /// Rendered default; absent for required options.
    pub default: Option<String>,
}

impl OptionDoc {
    fn describe(descriptor: &OptionDescriptor<'_>) -> Self {
        let spec = descriptor.spec();
        Self {
            short: spec.short.clone(),
            long: spec.long.clone(),
            value_name: spec.value_name().to_owned(),
            kind: spec.kind,
            help: spec.help.clone(),
            required: spec.required,
            default: (!spec.required)
                .then(|| spec.default.as_ref().map(ToString::to_string))
                .flatten(),
        }
    }
}

impl UsageDocs {
    /// Renders the metadata as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer failure, which does not occur for metadata
    /// built by [`Registry::docs`].
    #[cfg(feature = "serde_json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Registry<'_> {
    /// Collects usage metadata for the registered options.
    #[must_use]
    pub fn docs(&self) -> UsageDocs {
        UsageDocs {
            version: USAGE_DOCS_VERSION.to_owned(),
            options: self.options().iter().map(OptionDoc::describe).collect(),
        }
    }
}
