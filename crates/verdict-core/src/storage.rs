// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fixed-layout tagged storage for "one of V or E".
//
// `Outcome` is a native enum and is what callers normally hold. `TaggedSlot`
// exists for boundaries that need a known layout (C ABI, SDK callbacks): a
// one-byte tag followed by a union sized and aligned for the larger member.

use std::fmt;
use std::mem::ManuallyDrop;

use crate::outcome::Outcome;

/// Raw storage for either a `V` or an `E`.
///
/// Sized to `max(size_of::<V>(), size_of::<E>())` and aligned to the stricter
/// of the two. With `V = ()` the value side has no backing bytes. Nothing here
/// ever constructs or destroys a member; the owning [`TaggedSlot`] does.
#[repr(C)]
pub union Payload<V, E> {
    value: ManuallyDrop<V>,
    error: ManuallyDrop<E>,
}

/// Discriminant recording which member of a [`Payload`] is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    Value = 0,
    Error = 1,
}

/// A tag plus a payload, with `#[repr(C)]` layout.
///
/// Exactly one member is live from construction until drop.
#[repr(C)]
pub struct TaggedSlot<V, E> {
    tag: Tag,
    payload: Payload<V, E>,
}

impl<V, E> TaggedSlot<V, E> {
    pub fn from_value(value: V) -> Self {
        Self {
            tag: Tag::Value,
            payload: Payload {
                value: ManuallyDrop::new(value),
            },
        }
    }

    pub fn from_error(error: E) -> Self {
        Self {
            tag: Tag::Error,
            payload: Payload {
                error: ManuallyDrop::new(error),
            },
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_error(&self) -> bool {
        self.tag == Tag::Error
    }

    /// Borrow the live member.
    pub fn as_outcome(&self) -> Outcome<&V, &E> {
        match self.tag {
            // SAFETY: the tag names `value` as the live member.
            Tag::Value => Outcome::Value(unsafe { &*self.payload.value }),
            // SAFETY: the tag names `error` as the live member.
            Tag::Error => Outcome::Error(unsafe { &*self.payload.error }),
        }
    }

    /// Mutably borrow the live member.
    pub fn as_outcome_mut(&mut self) -> Outcome<&mut V, &mut E> {
        match self.tag {
            // SAFETY: the tag names `value` as the live member.
            Tag::Value => Outcome::Value(unsafe { &mut *self.payload.value }),
            // SAFETY: the tag names `error` as the live member.
            Tag::Error => Outcome::Error(unsafe { &mut *self.payload.error }),
        }
    }

    pub fn value(&self) -> Option<&V> {
        self.as_outcome().ok()
    }

    pub fn error(&self) -> Option<&E> {
        self.as_outcome().err()
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.as_outcome_mut().ok()
    }

    pub fn error_mut(&mut self) -> Option<&mut E> {
        self.as_outcome_mut().err()
    }

    /// Move the live member out into a native [`Outcome`].
    pub fn into_outcome(self) -> Outcome<V, E> {
        // The slot's own destructor must not run once the member has moved.
        let mut this = ManuallyDrop::new(self);
        match this.tag {
            // SAFETY: `value` is live and `this` is never dropped, so the member
            // is taken exactly once.
            Tag::Value => Outcome::Value(unsafe { ManuallyDrop::take(&mut this.payload.value) }),
            // SAFETY: as above, for `error`.
            Tag::Error => Outcome::Error(unsafe { ManuallyDrop::take(&mut this.payload.error) }),
        }
    }
}

impl<V, E> Drop for TaggedSlot<V, E> {
    fn drop(&mut self) {
        match self.tag {
            // SAFETY: `value` is live and is dropped exactly once here.
            Tag::Value => unsafe { ManuallyDrop::drop(&mut self.payload.value) },
            // SAFETY: `error` is live and is dropped exactly once here.
            Tag::Error => unsafe { ManuallyDrop::drop(&mut self.payload.error) },
        }
    }
}

impl<V: Clone, E: Clone> Clone for TaggedSlot<V, E> {
    fn clone(&self) -> Self {
        match self.as_outcome() {
            Outcome::Value(value) => Self::from_value(value.clone()),
            Outcome::Error(error) => Self::from_error(error.clone()),
        }
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for TaggedSlot<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedSlot")
            .field("tag", &self.tag)
            .field("payload", &self.as_outcome())
            .finish()
    }
}

impl<V, E> From<Outcome<V, E>> for TaggedSlot<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        match outcome {
            Outcome::Value(value) => Self::from_value(value),
            Outcome::Error(error) => Self::from_error(error),
        }
    }
}

impl<V, E> From<TaggedSlot<V, E>> for Outcome<V, E> {
    fn from(slot: TaggedSlot<V, E>) -> Self {
        slot.into_outcome()
    }
}
