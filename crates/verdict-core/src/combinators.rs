// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Monadic chaining and equality.
//
// `and_then` never runs its continuation on an error, `or_else` never runs
// its continuation on a value. Chains built from these propagate failure
// without a branch at each step.
//
// The consuming forms move the live member into the continuation. The
// `_ref`/`_mut` forms borrow it and clone the side that passes through.

use crate::outcome::Outcome;

impl<V, E> Outcome<V, E> {
    /// Run `f` on the value and return its outcome; pass an error through.
    pub fn and_then<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Outcome<V2, E>,
    {
        match self {
            Self::Value(value) => f(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// As [`Outcome::and_then`], converting a passed-through error into the
    /// continuation's error type.
    pub fn and_then_into<V2, E2, F>(self, f: F) -> Outcome<V2, E2>
    where
        F: FnOnce(V) -> Outcome<V2, E2>,
        E: Into<E2>,
    {
        match self {
            Self::Value(value) => f(value),
            Self::Error(error) => Outcome::Error(error.into()),
        }
    }

    pub fn and_then_ref<V2, F>(&self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(&V) -> Outcome<V2, E>,
        E: Clone,
    {
        match self {
            Self::Value(value) => f(value),
            Self::Error(error) => Outcome::Error(error.clone()),
        }
    }

    pub fn and_then_mut<V2, F>(&mut self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(&mut V) -> Outcome<V2, E>,
        E: Clone,
    {
        match self {
            Self::Value(value) => f(value),
            Self::Error(error) => Outcome::Error(error.clone()),
        }
    }

    /// Run `f` on the error and return its outcome; pass a value through.
    pub fn or_else<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> Outcome<V, E2>,
    {
        match self {
            Self::Value(value) => Outcome::Value(value),
            Self::Error(error) => f(error),
        }
    }

    /// As [`Outcome::or_else`], converting a passed-through value into the
    /// continuation's value type.
    pub fn or_else_into<V2, E2, F>(self, f: F) -> Outcome<V2, E2>
    where
        F: FnOnce(E) -> Outcome<V2, E2>,
        V: Into<V2>,
    {
        match self {
            Self::Value(value) => Outcome::Value(value.into()),
            Self::Error(error) => f(error),
        }
    }

    pub fn or_else_ref<E2, F>(&self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(&E) -> Outcome<V, E2>,
        V: Clone,
    {
        match self {
            Self::Value(value) => Outcome::Value(value.clone()),
            Self::Error(error) => f(error),
        }
    }

    pub fn or_else_mut<E2, F>(&mut self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(&mut E) -> Outcome<V, E2>,
        V: Clone,
    {
        match self {
            Self::Value(value) => Outcome::Value(value.clone()),
            Self::Error(error) => f(error),
        }
    }
}

/// Two outcomes are equal when both hold values that compare equal or both
/// hold errors that compare equal. A value never equals an error.
impl<V, E, V2, E2> PartialEq<Outcome<V2, E2>> for Outcome<V, E>
where
    V: PartialEq<V2>,
    E: PartialEq<E2>,
{
    fn eq(&self, other: &Outcome<V2, E2>) -> bool {
        match (self, other) {
            (Self::Value(lhs), Outcome::Value(rhs)) => lhs == rhs,
            (Self::Error(lhs), Outcome::Error(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl<V: Eq, E: Eq> Eq for Outcome<V, E> {}
