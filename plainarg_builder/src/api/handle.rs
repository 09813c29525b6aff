use std::marker::PhantomData;
use thiserror::Error;

/// The storage behind a single declared parameter.
///
/// Slots are owned by the parser; the parse loop writes to them by index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[doc(hidden)]
pub enum Slot {
    /// A flag.
    Switch(bool),
    /// A value with a default.
    Text(String),
    /// A value without a default.
    MaybeText(Option<String>),
    /// A variadic value.
    Texts(Vec<String>),
}

impl Slot {
    /// Set a switch slot.
    pub(crate) fn switch_on(&mut self) {
        match self {
            Slot::Switch(value) => *value = true,
            _ => unreachable!("internal error - only a switch may be switched on"),
        }
    }

    /// Write a value onto a value slot.
    /// Scalar slots are overwritten, while collection slots are extended.
    pub(crate) fn capture(&mut self, token: &str) {
        match self {
            Slot::Switch(_) => unreachable!("internal error - must not capture on a switch"),
            Slot::Text(value) => *value = token.to_string(),
            Slot::MaybeText(value) => {
                value.replace(token.to_string());
            }
            Slot::Texts(values) => values.push(token.to_string()),
        }
    }
}

/// Behaviour to view a [`Slot`] as its explicit type.
///
/// We use this so a [`Handle<T>`] can hand back a `&T` without the parser having to know about `T`.
#[doc(hidden)]
pub trait SlotValue: Sized {
    /// View the slot as `Self`, if it holds the matching variant.
    fn view(slot: &Slot) -> Option<&Self>;
}

impl SlotValue for bool {
    fn view(slot: &Slot) -> Option<&Self> {
        match slot {
            Slot::Switch(value) => Some(value),
            _ => None,
        }
    }
}

impl SlotValue for String {
    fn view(slot: &Slot) -> Option<&Self> {
        match slot {
            Slot::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl SlotValue for Option<String> {
    fn view(slot: &Slot) -> Option<&Self> {
        match slot {
            Slot::MaybeText(value) => Some(value),
            _ => None,
        }
    }
}

impl SlotValue for Vec<String> {
    fn view(slot: &Slot) -> Option<&Self> {
        match slot {
            Slot::Texts(values) => Some(values),
            _ => None,
        }
    }
}

/// A read-only binding to a declared parameter.
///
/// Handles are issued by the declaration methods of [`CommandLineParser`](crate::CommandLineParser).
/// The value behind a handle is only available from the [`Bindings`] of a completed parse.
///
/// ### Example
/// ```
/// # use plainarg_builder as plainarg;
/// use plainarg::{CommandLineParser, Outcome};
///
/// let mut clp = CommandLineParser::new("program");
/// let verbose = clp.flag("verbose", Some('v'), "Be loud.").unwrap();
/// let parser = clp.build();
///
/// match parser.parse_tokens(vec!["-v"].as_slice()) {
///     Outcome::Parsed(bindings) => assert!(*bindings.get(&verbose)),
///     _ => unreachable!(),
/// }
/// ```
pub struct Handle<T> {
    registry: usize,
    index: usize,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub(crate) fn new(registry: usize, index: usize) -> Self {
        Self {
            registry,
            index,
            _phantom: PhantomData,
        }
    }
}

// Handles are plain keys, so we don't want `T: Clone`/`T: Copy` bounds from the derives.
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Handle[{t}, {registry}, {index}]",
            t = std::any::type_name::<T>(),
            registry = self.registry,
            index = self.index,
        )
    }
}

/// Error when reading a [`Handle`] incorrectly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// The handle was issued by a different `CommandLineParser`.
    #[error("Usage error: handle {index} does not belong to this parser.")]
    ForeignHandle {
        /// The slot index of the offending handle.
        index: usize,
    },
}

/// The parameter values of a completed parse.
///
/// Only produced by a successful [`GeneralParser::parse_tokens`](crate::GeneralParser::parse_tokens) or [`GeneralParser::parse`](crate::GeneralParser::parse).
#[derive(Debug, PartialEq, Eq)]
pub struct Bindings {
    registry: usize,
    slots: Vec<Slot>,
}

impl Bindings {
    pub(crate) fn new(registry: usize, slots: Vec<Slot>) -> Self {
        Self { registry, slots }
    }

    #[cfg(test)]
    pub(crate) fn into_slots(self) -> Vec<Slot> {
        self.slots
    }

    /// Get the value of a parameter, or an error if the handle belongs to another parser.
    pub fn try_get<T: SlotValue>(&self, handle: &Handle<T>) -> Result<&T, UsageError> {
        if handle.registry != self.registry {
            return Err(UsageError::ForeignHandle {
                index: handle.index,
            });
        }

        match self.slots.get(handle.index) {
            Some(slot) => match T::view(slot) {
                Some(value) => Ok(value),
                None => unreachable!("internal error - handle type must match its slot"),
            },
            None => unreachable!("internal error - handle index must have a slot"),
        }
    }

    /// Get the value of a parameter.
    ///
    /// Panics if the handle was issued by a different parser; see [`Bindings::try_get`].
    pub fn get<T: SlotValue>(&self, handle: &Handle<T>) -> &T {
        match self.try_get(handle) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
