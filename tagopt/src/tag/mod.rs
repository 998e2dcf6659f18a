//! Compiler for the declarative tag mini-language.
//!
//! Tags describe one option in a single string attached to a struct field:
//!
//! ```text
//! short:'c'; long:'conf'; default:'x.yml'; required
//! ```
//!
//! Recognised keys are case-insensitive and each has a one-letter alias:
//! `short`/`s`, `long`/`l`, `name`/`n`, `default`/`d`, `help`/`h`, and
//! `required`/`r`. Clauses apply left to right, so a repeated key overwrites
//! the earlier value.

mod grammar;

use crate::descriptor::{OptionKind, OptionSpec};
use crate::error::{TagOptError, TagOptResult};
use crate::value::{self, ValueKind};

use grammar::Clause;

/// Compiles `tag` into an [`OptionSpec`] for a destination of `storage`.
///
/// The `default` clause is coerced with the destination's kind immediately;
/// `required` follows the boolean rules of [`value::coerce_bool`], so a bare
/// `required` flag reads as true.
///
/// # Errors
///
/// - [`TagOptError::InvalidTagFormat`] when the text does not follow the
///   clause grammar or names neither `short` nor `long`;
/// - [`TagOptError::UnknownTagKey`] for keys outside the recognised set;
/// - [`TagOptError::EmptyValue`] for an empty `short`, `long`, or `name`;
/// - [`TagOptError::TypeMismatch`] when `default` or `required` does not
///   coerce.
///
/// # Examples
///
/// ```
/// use tagopt::{OptionKind, ValueKind, Value, compile_tag};
///
/// let spec = compile_tag(ValueKind::String, "short:'c';long:'conf';default:'x.yml'")?;
/// assert_eq!(spec.short.as_deref(), Some("c"));
/// assert_eq!(spec.long.as_deref(), Some("conf"));
/// assert_eq!(spec.default, Some(Value::Str("x.yml".into())));
/// assert_eq!(spec.kind, OptionKind::String);
/// assert!(!spec.required);
/// # Ok::<(), tagopt::TagOptError>(())
/// ```
pub fn compile_tag(storage: ValueKind, tag: &str) -> TagOptResult<OptionSpec> {
    let mut spec = OptionSpec::new(OptionKind::for_storage(storage));
    for clause in grammar::clauses(tag)? {
        apply_clause(&mut spec, clause)?;
    }
    if spec.short.is_none() && spec.long.is_none() {
        return Err(TagOptError::InvalidTagFormat {
            tag: tag.to_owned(),
            reason: "tag names neither short nor long",
        });
    }
    tracing::debug!(
        short = spec.short.as_deref(),
        long = spec.long.as_deref(),
        kind = ?spec.kind,
        "compiled option tag"
    );
    Ok(spec)
}

fn apply_clause(spec: &mut OptionSpec, clause: Clause<'_>) -> TagOptResult<()> {
    let Clause { key, value: text } = clause;
    match key.to_ascii_lowercase().as_str() {
        "s" | "short" => spec.short = Some(non_empty("short", text)?),
        "l" | "long" => spec.long = Some(non_empty("long", text)?),
        "n" | "name" => spec.name = Some(non_empty("name", text)?),
        "h" | "help" => text.clone_into(&mut spec.help),
        "d" | "default" => {
            let coerced = value::coerce(spec.kind.value_kind(), text)
                .map_err(|source| TagOptError::mismatch("<default>", source))?;
            spec.default = Some(coerced);
        }
        "r" | "required" => {
            spec.required = value::coerce_bool(text)
                .map_err(|source| TagOptError::mismatch("<required>", source))?;
        }
        _ => {
            return Err(TagOptError::UnknownTagKey {
                key: key.to_owned(),
            });
        }
    }
    Ok(())
}

fn non_empty(key: &'static str, text: &str) -> TagOptResult<String> {
    if text.is_empty() {
        Err(TagOptError::EmptyValue { key })
    } else {
        Ok(text.to_owned())
    }
}
