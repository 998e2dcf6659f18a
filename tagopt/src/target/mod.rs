//! Write targets: the places parsed values are stored.
//!
//! A [`Destination`] is a closed set of storage variants, one per value kind.
//! Each variant wraps a [`Slot`], which is either a shared [`Handle`] handed
//! out by the imperative registration API or a borrowed struct field used by
//! tag-driven registration. The parser only ever sets a scalar or appends to
//! a list; it never needs to know which kind of slot sits underneath.

use std::any::{Any, type_name};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::error::{TagOptError, TagOptResult};
use crate::value::{Value, ValueKind};

/// Shared ownership handle returned by the imperative registration API.
///
/// The handle is readable straight away and holds the default until a parse
/// overwrites it in place.
///
/// # Examples
///
/// ```
/// use tagopt::Registry;
///
/// let mut registry = Registry::new();
/// let conf = registry.string("c", "conf", "", "Config file", "conf.yml");
/// assert_eq!(conf.get(), "conf.yml");
/// registry.parse(["--conf=prod.yml"])?;
/// assert_eq!(conf.get(), "prod.yml");
/// # Ok::<(), tagopt::TagOptError>(())
/// ```
#[derive(Debug, Default)]
pub struct Handle<T>(Rc<RefCell<T>>);

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Handle<T> {
    pub(crate) fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Borrows the current value without cloning it.
    #[must_use]
    pub fn read(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Creates a slot writing through this handle.
    #[must_use]
    pub fn slot<'a>(&self) -> Slot<'a, T> {
        Slot::Shared(Rc::clone(&self.0))
    }
}

impl<T: Clone> Handle<T> {
    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

/// Storage behind one destination.
#[derive(Debug)]
pub enum Slot<'a, T> {
    /// Value shared with a [`Handle`].
    Shared(Rc<RefCell<T>>),
    /// Value living in a borrowed struct field.
    Field(&'a mut T),
}

impl<T> Slot<'_, T> {
    fn replace(&mut self, value: T) {
        match self {
            Self::Shared(cell) => *cell.borrow_mut() = value,
            Self::Field(field) => **field = value,
        }
    }

    fn update(&mut self, f: impl FnOnce(&mut T)) {
        match self {
            Self::Shared(cell) => f(&mut cell.borrow_mut()),
            Self::Field(field) => f(&mut **field),
        }
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self {
            Self::Shared(cell) => f(&cell.borrow()),
            Self::Field(field) => f(&**field),
        }
    }
}

/// The place an option's value is written.
#[derive(Debug)]
pub enum Destination<'a> {
    /// Integer storage.
    Int(Slot<'a, i64>),
    /// Floating point storage.
    Float(Slot<'a, f64>),
    /// Boolean storage.
    Bool(Slot<'a, bool>),
    /// Text storage.
    Str(Slot<'a, String>),
    /// List-of-text storage.
    List(Slot<'a, Vec<String>>),
}

impl<'a> Destination<'a> {
    /// Discovers the storage kind of `field` at run time.
    ///
    /// Supported field types are `bool`, `i64`, `f64`, `String`, and
    /// `Vec<String>`.
    ///
    /// # Errors
    ///
    /// Returns [`TagOptError::UnsupportedDestinationType`] for any other type.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagopt::{Destination, ErrorKind, ValueKind};
    ///
    /// let mut port = 8080_i64;
    /// let destination = Destination::detect(&mut port)?;
    /// assert_eq!(destination.kind(), ValueKind::Int);
    ///
    /// let mut port = 8080_u16;
    /// let err = Destination::detect(&mut port).err();
    /// assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::UnsupportedDestinationType));
    /// # Ok::<(), tagopt::TagOptError>(())
    /// ```
    pub fn detect<T: Any>(field: &'a mut T) -> TagOptResult<Self> {
        let any: &'a mut dyn Any = field;
        let detected = if any.is::<bool>() {
            any.downcast_mut::<bool>().map(|f| Self::Bool(Slot::Field(f)))
        } else if any.is::<i64>() {
            any.downcast_mut::<i64>().map(|f| Self::Int(Slot::Field(f)))
        } else if any.is::<f64>() {
            any.downcast_mut::<f64>().map(|f| Self::Float(Slot::Field(f)))
        } else if any.is::<String>() {
            any.downcast_mut::<String>().map(|f| Self::Str(Slot::Field(f)))
        } else if any.is::<Vec<String>>() {
            any.downcast_mut::<Vec<String>>().map(|f| Self::List(Slot::Field(f)))
        } else {
            None
        };
        detected.ok_or_else(|| TagOptError::UnsupportedDestinationType {
            type_name: type_name::<T>(),
        })
    }

    /// Storage kind of this destination.
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

    /// Reads the value currently stored.
    #[must_use]
    pub fn current(&self) -> Value {
        match self {
            Self::Int(slot) => Value::Int(slot.inspect(|v| *v)),
            Self::Float(slot) => Value::Float(slot.inspect(|v| *v)),
            Self::Bool(slot) => Value::Bool(slot.inspect(|v| *v)),
            Self::Str(slot) => Value::Str(slot.inspect(Clone::clone)),
            Self::List(slot) => Value::List(slot.inspect(Clone::clone)),
        }
    }

    /// Overwrites the stored value.
    ///
    /// # Errors
    ///
    /// Returns this destination's own kind when `value` has a different one;
    /// nothing is written in that case.
    pub fn set_scalar(&mut self, value: Value) -> Result<(), ValueKind> {
        match (self, value) {
            (Self::Int(slot), Value::Int(v)) => slot.replace(v),
            (Self::Float(slot), Value::Float(v)) => slot.replace(v),
            (Self::Bool(slot), Value::Bool(v)) => slot.replace(v),
            (Self::Str(slot), Value::Str(v)) => slot.replace(v),
            (Self::List(slot), Value::List(v)) => slot.replace(v),
            (other, _) => return Err(other.kind()),
        }
        Ok(())
    }

    /// Appends one item to list storage.
    ///
    /// # Errors
    ///
    /// Returns this destination's own kind when it is not a list.
    pub fn append(&mut self, item: String) -> Result<(), ValueKind> {
        match self {
            Self::List(slot) => {
                slot.update(|items| items.push(item));
                Ok(())
            }
            other => Err(other.kind()),
        }
    }
}
