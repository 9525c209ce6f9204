// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Typed dispatch over captured exceptions.
//
// `handle` tests one captured exception against one type. `Handler` chains
// such tests with first-match-wins semantics, like a sequence of catch
// blocks. The chain does not rank by specificity: order handlers from the
// most specific failure to the least, or a base handler will shadow its
// specialisations.
//
// A chain that finds no match leaves the exception captured. The terminal
// operations decide what happens next: `finish` hands the handle back,
// `finish_or_rethrow` resumes the unwind, `conclude` follows the configured
// `UnhandledPolicy`.

use std::any::type_name;

use tracing::{debug, trace};

use crate::config::{DispatchConfig, UnhandledPolicy};
use crate::exception::{Captured, Exception};

/// Invoke `f` if the captured exception is, or specialises, `T`.
///
/// Returns whether `f` ran. A miss never invokes anything and never lets the
/// exception escape. `T` may be named (`handle::<NotSupported, _>(..)`) or
/// inferred from the parameter type of `f`.
pub fn handle<T, F>(captured: &Captured, f: F) -> bool
where
    T: Exception,
    F: FnOnce(&T),
{
    match captured.view::<T>() {
        Some(exception) => {
            trace!(target_type = type_name::<T>(), "captured exception matched");
            f(exception);
            true
        }
        None => false,
    }
}

/// A chain of typed handlers over one captured exception.
#[derive(Debug, Clone)]
#[must_use = "a handler chain should end with `finish`, `finish_or_rethrow` or `conclude`"]
pub struct Handler {
    captured: Captured,
    handled: bool,
    policy: UnhandledPolicy,
    trace_matches: bool,
}

impl Handler {
    pub fn new(captured: Captured) -> Self {
        Self::configured(captured, &DispatchConfig::default())
    }

    pub fn configured(captured: Captured, config: &DispatchConfig) -> Self {
        Self {
            captured,
            handled: false,
            policy: config.on_unhandled,
            trace_matches: config.trace_matches,
        }
    }

    /// Try `f` for type `T` unless an earlier handler already matched.
    pub fn handle<T, F>(mut self, f: F) -> Self
    where
        T: Exception,
        F: FnOnce(&T),
    {
        if self.handled {
            return self;
        }
        self.handled = handle(&self.captured, f);
        if self.trace_matches {
            trace!(
                target_type = type_name::<T>(),
                matched = self.handled,
                "handler attempt"
            );
        }
        self
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    pub fn captured(&self) -> &Captured {
        &self.captured
    }

    pub fn into_captured(self) -> Captured {
        self.captured
    }

    /// `Ok` if a handler matched, otherwise the still-captured exception.
    pub fn finish(self) -> Result<(), Captured> {
        if self.handled {
            Ok(())
        } else {
            debug!(exception = %self.captured, "no handler matched");
            Err(self.captured)
        }
    }

    /// Resume unwinding if no handler matched.
    pub fn finish_or_rethrow(self) {
        if let Err(captured) = self.finish() {
            captured.rethrow();
        }
    }

    /// Apply the configured [`UnhandledPolicy`].
    ///
    /// With `Rethrow` this returns `Ok(())` or unwinds; with `Keep` it is
    /// [`Handler::finish`].
    pub fn conclude(self) -> Result<(), Captured> {
        match self.policy {
            UnhandledPolicy::Keep => self.finish(),
            UnhandledPolicy::Rethrow => {
                self.finish_or_rethrow();
                Ok(())
            }
        }
    }
}
