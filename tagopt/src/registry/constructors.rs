//! Typed registration helpers.
//!
//! Each helper takes `(short, long, name, help[, default])`, where an empty
//! string means "not given", and returns a [`Handle`] to the backing value.
//! The `must_*` variants have no default and mark the option required.

use super::Registry;
use crate::descriptor::{OptionDescriptor, OptionKind, OptionSpec};
use crate::target::{Destination, Handle, Slot};

/// Names and help shared by every helper.
struct Labels<'l> {
    short: &'l str,
    long: &'l str,
    name: &'l str,
    help: &'l str,
}

impl<'l> Labels<'l> {
    const fn new(short: &'l str, long: &'l str, name: &'l str, help: &'l str) -> Self {
        Self {
            short,
            long,
            name,
            help,
        }
    }
}

fn given(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_owned())
}

impl<'a> Registry<'a> {
    fn add<T>(
        &mut self,
        kind: OptionKind,
        labels: &Labels<'_>,
        initial: T,
        required: bool,
        wrap: fn(Slot<'a, T>) -> Destination<'a>,
    ) -> Handle<T> {
        let handle = Handle::new(initial);
        let target = wrap(handle.slot());
        let spec = OptionSpec {
            short: given(labels.short),
            long: given(labels.long),
            name: given(labels.name),
            help: labels.help.to_owned(),
            required,
            default: (!required).then(|| target.current()),
            kind,
        };
        self.register(OptionDescriptor::new(spec, target));
        handle
    }

    /// Registers an optional string option.
    pub fn string(
        &mut self,
        short: &str,
        long: &str,
        name: &str,
        help: &str,
        default: &str,
    ) -> Handle<String> {
        let labels = Labels::new(short, long, name, help);
        self.add(
            OptionKind::String,
            &labels,
            default.to_owned(),
            false,
            Destination::Str,
        )
    }

    /// Registers a required string option.
    pub fn must_string(
        &mut self,
        short: &str,
        long: &str,
        name: &str,
        help: &str,
    ) -> Handle<String> {
        let labels = Labels::new(short, long, name, help);
        self.add(
            OptionKind::String,
            &labels,
            String::new(),
            true,
            Destination::Str,
        )
    }

    /// Registers an optional integer option.
    pub fn int(
        &mut self,
        short: &str,
        long: &str,
        name: &str,
        help: &str,
        default: i64,
    ) -> Handle<i64> {
        let labels = Labels::new(short, long, name, help);
        self.add(OptionKind::Int, &labels, default, false, Destination::Int)
    }

    /// Registers a required integer option.
    pub fn must_int(&mut self, short: &str, long: &str, name: &str, help: &str) -> Handle<i64> {
        let labels = Labels::new(short, long, name, help);
        self.add(OptionKind::Int, &labels, 0, true, Destination::Int)
    }

    /// Registers an optional boolean option.
    ///
    /// `-v` alone, `-v=yes`, and `-v true` all set it.
    pub fn bool(
        &mut self,
        short: &str,
        long: &str,
        name: &str,
        help: &str,
        default: bool,
    ) -> Handle<bool> {
        let labels = Labels::new(short, long, name, help);
        self.add(OptionKind::Bool, &labels, default, false, Destination::Bool)
    }

    /// Registers a required boolean option.
    pub fn must_bool(&mut self, short: &str, long: &str, name: &str, help: &str) -> Handle<bool> {
        let labels = Labels::new(short, long, name, help);
        self.add(OptionKind::Bool, &labels, false, true, Destination::Bool)
    }

    /// Registers an optional float option.
    pub fn float(
        &mut self,
        short: &str,
        long: &str,
        name: &str,
        help: &str,
        default: f64,
    ) -> Handle<f64> {
        let labels = Labels::new(short, long, name, help);
        self.add(
            OptionKind::Float,
            &labels,
            default,
            false,
            Destination::Float,
        )
    }

    /// Registers a required float option.
    pub fn must_float(&mut self, short: &str, long: &str, name: &str, help: &str) -> Handle<f64> {
        let labels = Labels::new(short, long, name, help);
        self.add(OptionKind::Float, &labels, 0.0, true, Destination::Float)
    }

    /// Registers a repeatable option collecting one item per occurrence.
    pub fn array(
        &mut self,
        short: &str,
        long: &str,
        name: &str,
        help: &str,
    ) -> Handle<Vec<String>> {
        let labels = Labels::new(short, long, name, help);
        self.add(
            OptionKind::Array,
            &labels,
            Vec::new(),
            false,
            Destination::List,
        )
    }

    /// Registers a required positional value.
    ///
    /// Positional options take values in registration order, one each.
    pub fn bare_string(&mut self, name: &str, help: &str) -> Handle<String> {
        let labels = Labels::new("", "", name, help);
        self.add(
            OptionKind::BareString,
            &labels,
            String::new(),
            true,
            Destination::Str,
        )
    }

    /// Registers a collector for every positional value left over.
    ///
    /// Bare strings are served first wherever they were registered, so
    /// this only ever receives the remainder.
    pub fn bare_array(&mut self, name: &str, help: &str) -> Handle<Vec<String>> {
        let labels = Labels::new("", "", name, help);
        self.add(
            OptionKind::BareArray,
            &labels,
            Vec::new(),
            false,
            Destination::List,
        )
    }
}
