//! The token parser.
//!
//! A single pass over the argument list resolves `-x`, `--xxx`, `-x=value`,
//! `--xxx=value`, `-x value`, and `--xxx value` against the registry and
//! collects everything else as positional values. Positional values then go
//! to bare strings in registration order, with the rest landing in bare
//! arrays, and finally the first required option left unset fails the parse.
//!
//! Unknown long options are errors. Unknown short options are dropped
//! without complaint, together with the value token that follows them.

use std::collections::VecDeque;

use crate::descriptor::OptionKind;
use crate::error::{TagOptError, TagOptResult};
use crate::registry::Registry;
use crate::value::{INLINE_SEPARATOR, LONG_PREFIX, OPTION_PREFIX};

impl Registry<'_> {
    /// Parses `args`, writing every matched option through its target.
    ///
    /// `args` excludes the program name.
    ///
    /// # Errors
    ///
    /// - [`TagOptError::UnrecognizedArgument`] for an unknown long option;
    /// - [`TagOptError::TypeMismatch`] when a value does not coerce;
    /// - [`TagOptError::MissingRequiredArgument`] naming the first required
    ///   option, in registration order, that was not supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagopt::Registry;
    ///
    /// let mut registry = Registry::new();
    /// let volumes = registry.array("v", "volume", "volume", "Volumes");
    /// registry.parse(["-v", "v1", "-v=v2", "--volume=v3", "--volume", "v4"])?;
    /// assert_eq!(volumes.get(), ["v1", "v2", "v3", "v4"]);
    /// # Ok::<(), tagopt::TagOptError>(())
    /// ```
    pub fn parse<I, S>(&mut self, args: I) -> TagOptResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bares = Vec::new();
        let mut pending: Option<String> = None;
        for arg in args {
            let token = arg.as_ref();
            tracing::trace!(token, pending = pending.as_deref(), "consuming argument");
            if let Some(key) = pending.take() {
                if !(token.starts_with(OPTION_PREFIX) && self.takes_no_value(&key)) {
                    self.resolve(&key, token)?;
                    continue;
                }
                // A flag directly followed by another option reads as set;
                // the option token is handled on its own below.
                self.resolve(&key, "")?;
            }
            pending = self.classify(token, &mut bares)?;
        }
        if let Some(key) = pending {
            self.resolve(&key, "")?;
        }
        self.distribute(bares)?;
        self.check_required()
    }

    /// Parses `args` with a `-h/--help` flag registered, reporting whether
    /// help was asked for.
    ///
    /// A help request wins over a failed parse, so `--help` works even when
    /// required options are missing.
    ///
    /// # Errors
    ///
    /// Returns the parse failure when help was not requested.
    pub fn parse_with_help<I, S>(&mut self, args: I) -> TagOptResult<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let help = self.bool("h", "help", "", "Show this message", false);
        let outcome = self.parse(args);
        let requested = help.get();
        match outcome {
            Err(err) if !requested => Err(err),
            _ => Ok(requested),
        }
    }

    /// [`parse_with_help`](Self::parse_with_help) over the process
    /// arguments, skipping the program name.
    ///
    /// # Errors
    ///
    /// Returns the parse failure when help was not requested.
    pub fn parse_env(&mut self) -> TagOptResult<bool> {
        self.parse_with_help(std::env::args().skip(1))
    }

    /// Handles a token while no option is waiting for a value. Returns the
    /// option token when it needs the next token as its value.
    fn classify(&mut self, token: &str, bares: &mut Vec<String>) -> TagOptResult<Option<String>> {
        if !token.starts_with(OPTION_PREFIX) {
            bares.push(token.to_owned());
            return Ok(None);
        }
        if let Some((key, inline)) = token.split_once(INLINE_SEPARATOR) {
            self.resolve(key, inline)?;
            return Ok(None);
        }
        Ok(Some(token.to_owned()))
    }

    fn takes_no_value(&self, key: &str) -> bool {
        let descriptor = match key.strip_prefix(LONG_PREFIX) {
            Some(long) => self.lookup_long(long),
            None => key
                .strip_prefix(OPTION_PREFIX)
                .and_then(|short| self.lookup_short(short)),
        };
        descriptor.is_some_and(|d| d.kind() == OptionKind::Bool)
    }

    fn resolve(&mut self, key: &str, value: &str) -> TagOptResult<()> {
        if let Some(long) = key.strip_prefix(LONG_PREFIX) {
            let descriptor = self
                .long_mut(long)
                .ok_or_else(|| TagOptError::UnrecognizedArgument {
                    argument: key.to_owned(),
                })?;
            return descriptor.parse(value);
        }
        let short = key.strip_prefix(OPTION_PREFIX).unwrap_or(key);
        self.short_mut(short).map_or_else(
            || {
                tracing::debug!(option = key, "ignoring unrecognised short option");
                Ok(())
            },
            |descriptor| descriptor.parse(value),
        )
    }

    /// Hands positional values to bare strings in registration order, then
    /// the remainder to bare arrays.
    fn distribute(&mut self, bares: Vec<String>) -> TagOptResult<()> {
        let mut remaining = VecDeque::from(bares);
        for descriptor in self.options_mut() {
            if descriptor.kind() != OptionKind::BareString {
                continue;
            }
            if let Some(value) = remaining.pop_front() {
                descriptor.parse(&value)?;
            }
        }
        for descriptor in self.options_mut() {
            if descriptor.kind() == OptionKind::BareArray {
                descriptor.assign_list(remaining.drain(..).collect())?;
            }
        }
        if !remaining.is_empty() {
            tracing::debug!(count = remaining.len(), "discarding unclaimed positional values");
        }
        Ok(())
    }

    fn check_required(&self) -> TagOptResult<()> {
        self.options()
            .iter()
            .find(|d| d.spec().required && !d.is_set())
            .map_or(Ok(()), |missing| {
                Err(TagOptError::MissingRequiredArgument {
                    option: missing.spec().arg_value(),
                })
            })
    }
}
