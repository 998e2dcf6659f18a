//! Error types produced while registering options and parsing arguments.

mod kind;
mod types;

pub use kind::ErrorKind;
pub use types::{TagOptError, TagOptResult};
