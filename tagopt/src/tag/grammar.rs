//! Clause tokenizer for tag expressions.
//!
//! A tag is a `;`-separated list of clauses. Each clause takes one of three
//! shapes:
//!
//! - `key`: a flag, whose value is empty;
//! - `key: value`: an unquoted value running to the next `;`, trimmed;
//! - `key: 'value'`: a quoted value kept verbatim, so it may contain `;`
//!   and `:`.
//!
//! A single trailing `;` is accepted. Anything else left over rejects the
//! whole tag.

use crate::error::{TagOptError, TagOptResult};

const CLAUSE_SEPARATOR: char = ';';
const KEY_SEPARATOR: char = ':';
const QUOTE: char = '\'';

/// One `key[: value]` pair borrowed from the tag text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Clause<'t> {
    pub key: &'t str,
    pub value: &'t str,
}

/// Splits `tag` into clauses in document order.
pub(crate) fn clauses(tag: &str) -> TagOptResult<Vec<Clause<'_>>> {
    let mut out = Vec::new();
    let mut rest = tag;
    loop {
        let (clause, tail) = next_clause(rest).map_err(|reason| TagOptError::InvalidTagFormat {
            tag: tag.to_owned(),
            reason,
        })?;
        out.push(clause);
        match tail {
            Some(more) if !more.trim().is_empty() => rest = more,
            _ => return Ok(out),
        }
    }
}

/// Reads one clause, returning the text after its `;` when there is one.
fn next_clause(input: &str) -> Result<(Clause<'_>, Option<&str>), &'static str> {
    let key_end = input
        .find([KEY_SEPARATOR, CLAUSE_SEPARATOR])
        .unwrap_or(input.len());
    let (raw_key, rest) = input.split_at(key_end);
    let key = raw_key.trim();
    if key.is_empty() {
        return Err("clause has no key");
    }
    if key.contains([QUOTE, '"']) {
        return Err("quotes are not allowed in keys");
    }

    let Some(raw_value) = rest.strip_prefix(KEY_SEPARATOR) else {
        // `key;` or a bare `key` at the end.
        let tail = rest.strip_prefix(CLAUSE_SEPARATOR);
        return Ok((Clause { key, value: "" }, tail));
    };

    if let Some(quoted) = raw_value.trim_start().strip_prefix(QUOTE) {
        let (value, after) = quoted
            .split_once(QUOTE)
            .ok_or("unterminated quoted value")?;
        let after_quote = after.trim_start();
        if after_quote.is_empty() {
            return Ok((Clause { key, value }, None));
        }
        let tail = after_quote
            .strip_prefix(CLAUSE_SEPARATOR)
            .ok_or("unexpected text after quoted value")?;
        return Ok((Clause { key, value }, Some(tail)));
    }

    Ok(match raw_value.split_once(CLAUSE_SEPARATOR) {
        Some((value, tail)) => (
            Clause {
                key,
                value: value.trim(),
            },
            Some(tail),
        ),
        None => (
            Clause {
                key,
                value: raw_value.trim(),
            },
            None,
        ),
    })
}
