// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Conversion and assignment between differently typed outcomes.
//
// `Outcome<V, E>` accepts an `Outcome<V2, E2>` whenever `V2: Into<V>` and
// `E2: Into<E>`. A blanket `From` impl would overlap the reflexive
// `From<T> for T`, so the conversions are named methods.

use crate::outcome::Outcome;

impl<V, E> Outcome<V, E> {
    /// Convert both sides, keeping the discriminant.
    pub fn convert<V2, E2>(self) -> Outcome<V2, E2>
    where
        V: Into<V2>,
        E: Into<E2>,
    {
        match self {
            Self::Value(value) => Outcome::Value(value.into()),
            Self::Error(error) => Outcome::Error(error.into()),
        }
    }

    /// Convert a copy of the live member, leaving `self` untouched.
    pub fn convert_ref<V2, E2>(&self) -> Outcome<V2, E2>
    where
        V: Clone + Into<V2>,
        E: Clone + Into<E2>,
    {
        match self {
            Self::Value(value) => Outcome::Value(value.clone().into()),
            Self::Error(error) => Outcome::Error(error.clone().into()),
        }
    }

    /// Replace the current occupant with the converted member of `other`.
    pub fn assign_from<V2, E2>(&mut self, other: Outcome<V2, E2>) -> &mut Self
    where
        V2: Into<V>,
        E2: Into<E>,
    {
        *self = other.convert();
        self
    }

    /// As [`Outcome::assign_from`], cloning the member out of `other`.
    pub fn assign_from_ref<V2, E2>(&mut self, other: &Outcome<V2, E2>) -> &mut Self
    where
        V2: Clone + Into<V>,
        E2: Clone + Into<E>,
    {
        *self = other.convert_ref();
        self
    }

    pub fn map_value<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> V2,
    {
        match self {
            Self::Value(value) => Outcome::Value(f(value)),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    pub fn map_error<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Value(value) => Outcome::Value(value),
            Self::Error(error) => Outcome::Error(f(error)),
        }
    }
}
