// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Adapters from "object or failure indicator" APIs to `Outcome`.
//
// Many calls return an object that may be null or otherwise invalid instead
// of reporting failure directly. These handlers put the branch in one place.
// They never allocate or free.

use std::ptr::NonNull;

use tracing::debug;

use crate::error::AllocationFailed;
use crate::exception::{Captured, ExcOutcome};
use crate::outcome::Outcome;

/// Turns some input into an outcome.
pub trait ObtainHandler<Input> {
    type Output;

    fn handle(&self, input: Input) -> Self::Output;
}

/// Invoke `callable` and forward what it returns to `handler`.
pub fn invoke_and_handle<H, I, F>(handler: &H, callable: F) -> H::Output
where
    H: ObtainHandler<I>,
    F: FnOnce() -> I,
{
    handler.handle(callable())
}

/// Keeps an object if a validity predicate holds, otherwise yields an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectObtainHandler;

impl ObjectObtainHandler {
    pub fn obtain<O, P, E>(&self, object: O, is_valid: P, error: E) -> Outcome<O, E>
    where
        P: FnOnce(&O) -> bool,
    {
        if is_valid(&object) {
            Outcome::Value(object)
        } else {
            Outcome::Error(error)
        }
    }
}

impl<O, P, E> ObtainHandler<(O, P, E)> for ObjectObtainHandler
where
    P: FnOnce(&O) -> bool,
{
    type Output = Outcome<O, E>;

    fn handle(&self, (object, is_valid, error): (O, P, E)) -> Outcome<O, E> {
        self.obtain(object, is_valid, error)
    }
}

/// A pointer-like value that may be null.
pub trait Nullable {
    type NonNull;

    fn into_non_null(self) -> Option<Self::NonNull>;
}

impl<T> Nullable for Option<T> {
    type NonNull = T;

    fn into_non_null(self) -> Option<T> {
        self
    }
}

impl<T> Nullable for *mut T {
    type NonNull = NonNull<T>;

    fn into_non_null(self) -> Option<NonNull<T>> {
        NonNull::new(self)
    }
}

impl<T> Nullable for *const T {
    type NonNull = NonNull<T>;

    fn into_non_null(self) -> Option<NonNull<T>> {
        NonNull::new(self.cast_mut())
    }
}

/// Maps a null allocation to a captured [`AllocationFailed`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocationHandler;

impl AllocationHandler {
    pub fn obtain<P: Nullable>(&self, pointer: P) -> ExcOutcome<P::NonNull> {
        match pointer.into_non_null() {
            Some(non_null) => Outcome::Value(non_null),
            None => {
                debug!("allocation returned null");
                Outcome::Error(Captured::new(AllocationFailed))
            }
        }
    }
}

impl<P: Nullable> ObtainHandler<P> for AllocationHandler {
    type Output = ExcOutcome<P::NonNull>;

    fn handle(&self, pointer: P) -> Self::Output {
        self.obtain(pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::alloc::{Layout, alloc, dealloc};

    use crate::error::InvalidState;

    #[derive(Debug, PartialEq)]
    struct Document {
        pages: usize,
    }

    #[test]
    fn invalid_object_yields_the_supplied_error() {
        let outcome = ObjectObtainHandler.obtain(
            None::<Document>,
            Option::is_some,
            InvalidState::new("document not loaded"),
        );
        assert_eq!(outcome.error().message(), "document not loaded");
    }

    #[test]
    fn valid_object_passes_through_unchanged() {
        let outcome = ObjectObtainHandler.obtain(
            Document { pages: 3 },
            |doc| doc.pages > 0,
            InvalidState::new("empty document"),
        );
        assert_eq!(outcome.into_value(), Document { pages: 3 });
    }

    #[test]
    fn null_pointer_is_allocation_failure() {
        let outcome = AllocationHandler.obtain(std::ptr::null_mut::<u64>());
        assert!(outcome.error().is::<AllocationFailed>());

        let outcome = AllocationHandler.obtain(None::<Box<u8>>);
        assert!(outcome.is_error());
    }

    #[test]
    fn live_allocation_is_a_value() {
        let layout = Layout::new::<u64>();
        // SAFETY: `layout` has non-zero size.
        let raw = unsafe { alloc(layout) };
        let outcome = AllocationHandler.obtain(raw);
        assert!(outcome.is_value());
        // SAFETY: `raw` came from `alloc` with this layout and is non-null.
        unsafe { dealloc(outcome.into_value().as_ptr(), layout) };
    }

    #[test]
    fn invoke_and_handle_forwards_the_return_value() {
        let loaded = invoke_and_handle(&AllocationHandler, || Some(Box::new(5u8)));
        assert_eq!(**loaded.value(), 5);

        let checked = invoke_and_handle(&ObjectObtainHandler, || {
            (Document { pages: 0 }, |doc: &Document| doc.pages > 0, "no pages available")
        });
        assert_eq!(*checked.error(), "no pages available");
    }
}
