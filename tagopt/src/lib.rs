//! Declarative command-line option parsing.
//!
//! Options are registered on a [`Registry`], either one at a time through the
//! typed constructors or from a struct whose fields carry tag expressions
//! such as `short:'c';long:'conf';default:'x.yml'`. A single
//! [`Registry::parse`] pass then writes every supplied value straight into
//! its destination.
//!
//! ```
//! use tagopt::Registry;
//!
//! let mut registry = Registry::new();
//! let conf = registry.string("c", "conf", "conf_file", "Config File", "conf.yaml");
//! let verbose = registry.bool("v", "verbose", "", "Verbose output", false);
//! let command = registry.bare_string("command", "Command To Execute");
//! registry.parse(["-v", "--conf=prod.yaml", "start"])?;
//! assert_eq!(conf.get(), "prod.yaml");
//! assert!(verbose.get());
//! assert_eq!(command.get(), "start");
//! # Ok::<(), tagopt::TagOptError>(())
//! ```
//!
//! The same options declared on a struct:
//!
//! ```
//! use tagopt::TagOpt;
//!
//! #[derive(Default, TagOpt)]
//! struct Args {
//!     #[tagopt("short:'c';long:'conf';name:conf_file;default:'conf.yaml'")]
//!     conf: String,
//!     #[tagopt("s:v;l:verbose")]
//!     verbose: bool,
//! }
//!
//! let mut args = Args::default();
//! args.parse_args(["-v"])?;
//! assert_eq!(args.conf, "conf.yaml");
//! assert!(args.verbose);
//! # Ok::<(), tagopt::TagOptError>(())
//! ```

pub use tagopt_macros::TagOpt;

mod descriptor;
pub mod docs;
mod error;
mod parser;
mod registry;
mod tag;
mod target;
mod usage;
pub mod value;

pub use descriptor::{OptionDescriptor, OptionKind, OptionSpec};
pub use docs::{OptionDoc, USAGE_DOCS_VERSION, UsageDocs};
pub use error::{ErrorKind, TagOptError, TagOptResult};
pub use registry::Registry;
pub use tag::compile_tag;
pub use target::{Destination, Handle, Slot};
pub use value::{Mismatch, Value, ValueKind};

/// Trait implemented for structs whose fields declare command-line options.
///
/// Usually derived; the derive registers every field carrying a
/// `#[tagopt("...")]` tag expression and skips the rest.
pub trait TagOpt {
    /// Registers the tagged fields of `self` on `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`TagOptError::Field`] naming the first field whose tag does
    /// not compile or whose type cannot hold a parsed value.
    fn register<'a>(&'a mut self, registry: &mut Registry<'a>) -> TagOptResult<()>;

    /// Parses `args` (without the program name) into the tagged fields.
    ///
    /// # Errors
    ///
    /// Returns registration failures and any [`Registry::parse`] failure.
    fn parse_args<I, S>(&mut self, args: I) -> TagOptResult<()>
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Registry::new();
        self.register(&mut registry)?;
        registry.parse(args)
    }
}
