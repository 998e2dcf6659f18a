//! The table of registered options.
//!
//! A [`Registry`] is created empty, filled by registration calls, consumed by
//! a parse pass, and can be [`reset`](Registry::reset) for reuse. Options are
//! indexed by short and by long identifier; the registration order is kept
//! because it decides usage order and the order positional values are handed
//! out.

mod constructors;

use std::any::Any;
use std::collections::HashMap;

use crate::descriptor::OptionDescriptor;
use crate::error::{TagOptError, TagOptResult};
use crate::tag::compile_tag;
use crate::target::Destination;

/// Registered options for one parse.
///
/// The lifetime `'a` bounds struct fields registered through
/// [`register_tagged`](Self::register_tagged); registries built only from the
/// typed constructors can use any lifetime.
#[derive(Debug, Default)]
pub struct Registry<'a> {
    options: Vec<OptionDescriptor<'a>>,
    shorts: HashMap<String, usize>,
    longs: HashMap<String, usize>,
}

impl<'a> Registry<'a> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `descriptor`.
    ///
    /// A later registration under an existing short or long identifier
    /// shadows the earlier one for lookups. Both stay in the ordered list.
    pub fn register(&mut self, descriptor: OptionDescriptor<'a>) {
        let index = self.options.len();
        let spec = descriptor.spec();
        tracing::debug!(
            short = spec.short.as_deref(),
            long = spec.long.as_deref(),
            kind = ?spec.kind,
            required = spec.required,
            "registering option"
        );
        if let Some(short) = &spec.short {
            self.shorts.insert(short.clone(), index);
        }
        if let Some(long) = &spec.long {
            self.longs.insert(long.clone(), index);
        }
        self.options.push(descriptor);
    }

    /// Compiles `tag` and registers an option writing into `target`.
    ///
    /// A `default` clause is written into `target` straight away; without
    /// one, the field's current value is recorded as the default. Neither
    /// marks the option as set. Required options record no default and
    /// leave `target` untouched.
    ///
    /// # Errors
    ///
    /// Returns the tag failure wrapped in [`TagOptError::Field`] naming
    /// `field`. Unsupported field types fail before the tag is read.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagopt::Registry;
    ///
    /// let mut port = 0_i64;
    /// {
    ///     let mut registry = Registry::new();
    ///     registry.register_tagged("port", &mut port, "short:p;long:port;default:8080")?;
    ///     registry.parse(["-p", "9090"])?;
    /// }
    /// assert_eq!(port, 9090);
    /// # Ok::<(), tagopt::TagOptError>(())
    /// ```
    pub fn register_tagged<T: Any>(
        &mut self,
        field: &str,
        target: &'a mut T,
        tag: &str,
    ) -> TagOptResult<()> {
        self.add_tagged(target, tag)
            .map_err(|source| TagOptError::Field {
                field: field.to_owned(),
                source: Box::new(source),
            })
    }

    fn add_tagged<T: Any>(&mut self, target: &'a mut T, tag: &str) -> TagOptResult<()> {
        let mut destination = Destination::detect(target)?;
        let mut spec = compile_tag(destination.kind(), tag)?;
        if spec.required {
            // Required options never fall back, so the field is left as is.
            spec.default = None;
        } else {
            let default = spec.default.take().unwrap_or_else(|| destination.current());
            destination
                .set_scalar(default.clone())
                .map_err(|_| spec.result_mismatch())?;
            spec.default = Some(default);
        }
        self.register(OptionDescriptor::new(spec, destination));
        Ok(())
    }

    /// Clears every registration.
    pub fn reset(&mut self) {
        self.options.clear();
        self.shorts.clear();
        self.longs.clear();
    }

    /// Looks up an option by short identifier, without the `-`.
    #[must_use]
    pub fn lookup_short(&self, short: &str) -> Option<&OptionDescriptor<'a>> {
        self.shorts.get(short).and_then(|&i| self.options.get(i))
    }

    /// Looks up an option by long identifier, without the `--`.
    #[must_use]
    pub fn lookup_long(&self, long: &str) -> Option<&OptionDescriptor<'a>> {
        self.longs.get(long).and_then(|&i| self.options.get(i))
    }

    pub(crate) fn short_mut(&mut self, short: &str) -> Option<&mut OptionDescriptor<'a>> {
        self.shorts
            .get(short)
            .copied()
            .and_then(|i| self.options.get_mut(i))
    }

    pub(crate) fn long_mut(&mut self, long: &str) -> Option<&mut OptionDescriptor<'a>> {
        self.longs
            .get(long)
            .copied()
            .and_then(|i| self.options.get_mut(i))
    }

    /// Whether the option registered under `name` (long first, then short)
    /// was supplied by the last parse.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.lookup_long(name)
            .or_else(|| self.lookup_short(name))
            .is_some_and(OptionDescriptor::is_set)
    }

    /// Registered options in registration order.
    #[must_use]
    pub fn options(&self) -> &[OptionDescriptor<'a>] {
        &self.options
    }

    pub(crate) fn options_mut(&mut self) -> &mut [OptionDescriptor<'a>] {
        &mut self.options
    }

    /// Number of registered options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests;
