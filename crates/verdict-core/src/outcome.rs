// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The value-or-error monad.
//
// An `Outcome<V, E>` holds exactly one of a success value or a failure value.
// There is no empty state: every outcome is built with a definite alternative
// and only changes alternative through `emplace_*`, assignment or conversion.

use crate::storage::TaggedSlot;

/// Holds either a value of type `V` or an error of type `E`.
///
/// `V` may be `()` for "success with no payload".
#[derive(Debug, Clone, Copy, Hash)]
#[must_use = "this `Outcome` may hold an error which should be handled"]
pub enum Outcome<V, E> {
    Value(V),
    Error(E),
}

/// Construction tags.
///
/// `V` and `E` may be the same type, so the tag decides which side an argument
/// lands on: `Outcome::<String, String>::new(tag::ERROR, msg)`.
pub mod tag {
    use super::Outcome;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Value;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Error;

    pub const VALUE: Value = Value;
    pub const ERROR: Error = Error;

    /// A tag that knows which alternative of `Outcome<V, E>` it builds.
    pub trait Alternative<V, E> {
        type Arg;

        fn build(self, arg: Self::Arg) -> Outcome<V, E>;
    }

    impl<V, E> Alternative<V, E> for Value {
        type Arg = V;

        fn build(self, arg: V) -> Outcome<V, E> {
            Outcome::Value(arg)
        }
    }

    impl<V, E> Alternative<V, E> for Error {
        type Arg = E;

        fn build(self, arg: E) -> Outcome<V, E> {
            Outcome::Error(arg)
        }
    }
}

/// Abort on an accessor whose precondition does not hold.
#[cold]
#[track_caller]
fn contract_violation(accessor: &str, held: &str) -> ! {
    panic!("contract violation: `{accessor}` called on an outcome holding {held}")
}

impl<V, E> Outcome<V, E> {
    /// Build the alternative named by `tag`.
    pub fn new<T: tag::Alternative<V, E>>(tag: T, arg: T::Arg) -> Self {
        tag.build(arg)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// True iff a value is held.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Borrow the value.
    ///
    /// # Panics
    ///
    /// Panics if an error is held. That is a caller defect, not a
    /// recoverable failure.
    #[track_caller]
    pub fn value(&self) -> &V {
        match self {
            Self::Value(value) => value,
            Self::Error(_) => contract_violation("value", "an error"),
        }
    }

    /// # Panics
    ///
    /// Panics if an error is held.
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut V {
        match self {
            Self::Value(value) => value,
            Self::Error(_) => contract_violation("value_mut", "an error"),
        }
    }

    /// # Panics
    ///
    /// Panics if an error is held.
    #[track_caller]
    pub fn into_value(self) -> V {
        match self {
            Self::Value(value) => value,
            Self::Error(_) => contract_violation("into_value", "an error"),
        }
    }

    /// Borrow the error.
    ///
    /// # Panics
    ///
    /// Panics if a value is held.
    #[track_caller]
    pub fn error(&self) -> &E {
        match self {
            Self::Error(error) => error,
            Self::Value(_) => contract_violation("error", "a value"),
        }
    }

    /// # Panics
    ///
    /// Panics if a value is held.
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut E {
        match self {
            Self::Error(error) => error,
            Self::Value(_) => contract_violation("error_mut", "a value"),
        }
    }

    /// # Panics
    ///
    /// Panics if a value is held.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Self::Error(error) => error,
            Self::Value(_) => contract_violation("into_error", "a value"),
        }
    }

    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Value(value) => Outcome::Value(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    pub fn as_mut(&mut self) -> Outcome<&mut V, &mut E> {
        match self {
            Self::Value(value) => Outcome::Value(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// The value, discarding any error.
    pub fn ok(self) -> Option<V> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// The error, discarding any value.
    pub fn err(self) -> Option<E> {
        match self {
            Self::Value(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Replace the current occupant with a value.
    pub fn emplace_value(&mut self, value: V) -> &mut Self {
        *self = Self::Value(value);
        self
    }

    /// Replace the current occupant with an error.
    pub fn emplace_error(&mut self, error: E) -> &mut Self {
        *self = Self::Error(error);
        self
    }

    pub fn into_result(self) -> Result<V, E> {
        self.into()
    }

    /// Move into the fixed-layout representation.
    pub fn into_slot(self) -> TaggedSlot<V, E> {
        TaggedSlot::from(self)
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        match outcome {
            Outcome::Value(value) => Ok(value),
            Outcome::Error(error) => Err(error),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl<V, E> Sealed for super::Outcome<V, E> {}
}

/// Implemented only by `Outcome`; lets generic code name the value and error
/// types of "some outcome".
pub trait IsOutcome: sealed::Sealed {
    type Value;
    type Error;

    fn into_outcome(self) -> Outcome<Self::Value, Self::Error>;
}

impl<V, E> IsOutcome for Outcome<V, E> {
    type Value = V;
    type Error = E;

    fn into_outcome(self) -> Outcome<V, E> {
        self
    }
}

impl<O: IsOutcome, E> Outcome<O, E>
where
    E: Into<O::Error>,
{
    /// Collapse a nested outcome, converting the outer error.
    pub fn flatten(self) -> Outcome<O::Value, O::Error> {
        match self {
            Self::Value(inner) => inner.into_outcome(),
            Self::Error(error) => Outcome::Error(error.into()),
        }
    }
}
