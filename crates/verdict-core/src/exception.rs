// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Captured exceptions: a shared, type-erased handle to a failure object.
//
// Legacy code reports failure by unwinding (`throw`, or an ordinary panic).
// `Captured::catch` stops the unwind at the boundary and turns it into an
// `Outcome<T, Captured>`; `Captured::rethrow` resumes it later. Matching
// against a concrete type walks the `Exception::base` chain, so a handler
// for a base failure also accepts its specialisations.

use std::any::{Any, type_name};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::debug;

use crate::error::Panicked;
use crate::outcome::Outcome;

/// A failure object that can live inside a [`Captured`] handle.
pub trait Exception: std::error::Error + Send + Sync + 'static {
    /// `self` as `Any`, for downcasting. Implement as `{ self }`.
    fn as_any(&self) -> &dyn Any;

    /// The failure this one specialises, if any.
    ///
    /// A derived failure embeds its base and returns it here. Dispatch tries
    /// the object itself first, then each base in turn.
    fn base(&self) -> Option<&dyn Exception> {
        None
    }
}

/// Shared handle to a captured failure object.
///
/// Cloning shares the object; the last handle to drop releases it. The count
/// is atomic, so handles may be cloned and dropped on any thread.
#[derive(Clone)]
pub struct Captured(Arc<dyn Exception>);

/// An outcome whose error side is a captured exception.
pub type ExcOutcome<V> = Outcome<V, Captured>;

impl Captured {
    pub fn new<T: Exception>(exception: T) -> Self {
        Self(Arc::new(exception))
    }

    /// View the captured object as `T`, looking through its base chain.
    pub fn view<T: Exception>(&self) -> Option<&T> {
        let mut current: Option<&dyn Exception> = Some(&*self.0);
        while let Some(exception) = current {
            if let Some(found) = exception.as_any().downcast_ref::<T>() {
                return Some(found);
            }
            current = exception.base();
        }
        None
    }

    pub fn is<T: Exception>(&self) -> bool {
        self.view::<T>().is_some()
    }

    /// The captured object itself.
    pub fn exception(&self) -> &dyn Exception {
        &*self.0
    }

    /// True when both handles share one captured object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to the captured object.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// Run `f`, turning an unwind into a captured error.
    ///
    /// An unwind started by [`throw`] or [`Captured::rethrow`] yields the
    /// original handle. Any other panic payload becomes [`Panicked`].
    pub fn catch<T, F>(f: F) -> ExcOutcome<T>
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Outcome::Value(value),
            Err(payload) => Outcome::Error(Self::from_payload(payload)),
        }
    }

    /// Resume unwinding with this handle as the payload.
    ///
    /// Does not invoke the panic hook.
    pub fn rethrow(self) -> ! {
        debug!(exception = %self, "rethrowing captured exception");
        panic::resume_unwind(Box::new(self))
    }

    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Captured>() {
            Ok(captured) => return *captured,
            Err(other) => other,
        };
        let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
            (*message).to_owned()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "panic with a non-string payload".to_owned()
        };
        debug!(%message, "captured panic from unwinding code");
        Self::new(Panicked::new(message))
    }
}

/// Raise `exception` by unwinding. Pair with [`Captured::catch`].
pub fn throw<T: Exception>(exception: T) -> ! {
    debug!(exception_type = type_name::<T>(), "throwing exception");
    Captured::new(exception).rethrow()
}

impl<T: Exception> From<T> for Captured {
    fn from(exception: T) -> Self {
        Self::new(exception)
    }
}

impl fmt::Debug for Captured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Captured").field(&self.0).finish()
    }
}

impl fmt::Display for Captured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl std::error::Error for Captured {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

/// Handles compare by identity of the captured object.
impl PartialEq for Captured {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Captured {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvalidArgument, InvalidArgumentType, NotSupported};

    #[test]
    fn view_matches_the_concrete_type() {
        let captured = Captured::new(NotSupported::default());
        assert!(captured.is::<NotSupported>());
        assert!(!captured.is::<InvalidArgument>());
        assert_eq!(captured.to_string(), "Operation is not supported");
    }

    #[test]
    fn view_looks_through_the_base_chain() {
        let captured = Captured::new(InvalidArgumentType::new("expected a page index"));
        let base = captured.view::<InvalidArgument>();
        assert_eq!(base.map(|e| e.message()), Some("expected a page index"));
        assert!(captured.is::<InvalidArgumentType>());
    }

    #[test]
    fn clones_share_one_object() {
        let first = Captured::new(NotSupported::default());
        let second = first.clone();
        assert!(first.ptr_eq(&second));
        assert_eq!(first, second);
        assert_eq!(first.handle_count(), 2);
        drop(second);
        assert_eq!(first.handle_count(), 1);

        let other = Captured::new(NotSupported::default());
        assert_ne!(first, other);
    }

    #[test]
    fn handles_cross_threads() {
        let captured = Captured::new(InvalidArgument::default());
        std::thread::scope(|scope| {
            for _ in 0..4 {
                let handle = captured.clone();
                scope.spawn(move || {
                    assert!(handle.is::<InvalidArgument>());
                });
            }
        });
        assert_eq!(captured.handle_count(), 1);
    }

    #[test]
    fn catch_passes_values_through() {
        let outcome = Captured::catch(|| 6 * 7);
        assert_eq!(*outcome.value(), 42);
    }

    #[test]
    fn catch_recovers_a_thrown_exception() {
        let outcome: ExcOutcome<u32> = Captured::catch(|| throw(NotSupported::new("odp export")));
        let captured = outcome.into_error();
        assert_eq!(captured.view::<NotSupported>().map(|e| e.message()), Some("odp export"));
    }

    #[test]
    fn rethrow_preserves_identity() {
        let original = Captured::new(InvalidArgument::default());
        let thrown = original.clone();
        let outcome: ExcOutcome<()> = Captured::catch(move || thrown.rethrow());
        assert!(outcome.error().ptr_eq(&original));
    }

    #[test]
    fn catch_wraps_foreign_panics() {
        let outcome: ExcOutcome<()> = Captured::catch(|| panic!("page {} missing", 3));
        let captured = outcome.into_error();
        let panicked = captured.view::<Panicked>().map(|p| p.message().to_owned());
        assert_eq!(panicked.as_deref(), Some("page 3 missing"));
    }
}
