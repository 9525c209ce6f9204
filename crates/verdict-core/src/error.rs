// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Standard failure kinds and the crate's own error type.
//
// The failure kinds are error payloads for callers: they travel inside an
// `Outcome` directly, or inside a `Captured` handle when raised by unwinding
// code. Calling the wrong accessor on an `Outcome` is not in this taxonomy;
// it is a caller defect and panics.

use std::any::Any;
use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

use crate::exception::Exception;

// ---------------------------------------------------------------------------
// Failure kinds
// ---------------------------------------------------------------------------

/// The operation is not possible in the object's current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidState {
    message: String,
}

impl InvalidState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidArgument {
    message: String,
}

impl InvalidArgument {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for InvalidArgument {
    fn default() -> Self {
        Self::new("Invalid argument has been passed to function")
    }
}

/// An argument of a type the operation cannot work with.
///
/// Specialises [`InvalidArgument`]: dispatch for `InvalidArgument` also
/// accepts this kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{base}")]
pub struct InvalidArgumentType {
    base: InvalidArgument,
}

impl InvalidArgumentType {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            base: InvalidArgument::new(message),
        }
    }

    pub fn message(&self) -> &str {
        self.base.message()
    }
}

impl Default for InvalidArgumentType {
    fn default() -> Self {
        Self::new("Argument of invalid type has been passed to function")
    }
}

/// The operation has no implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NotSupported {
    message: String,
}

impl NotSupported {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for NotSupported {
    fn default() -> Self {
        Self::new("Operation is not supported")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Interrupted {
    message: String,
}

impl Interrupted {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Interrupted {
    fn default() -> Self {
        Self::new("Operation has been interrupted")
    }
}

/// A failure carrying a machine-readable code next to its message.
///
/// SDK bindings use this to report a numeric status code and the vendor's
/// text for it as one object. `B` is the failure kind the code specialises;
/// with the default `()` the coded failure stands alone. With a kind such as
/// [`InvalidArgument`], dispatch for that kind also accepts the coded failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Coded<C, B = ()> {
    code: C,
    message: String,
    base: B,
}

impl<C> Coded<C> {
    pub fn new(code: C, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            base: (),
        }
    }
}

impl<C, B: fmt::Display> Coded<C, B> {
    /// Attach `code` to an existing failure of kind `B`, keeping its message.
    pub fn with_base(code: C, base: B) -> Self {
        Self {
            code,
            message: base.to_string(),
            base,
        }
    }
}

impl<C, B> Coded<C, B> {
    pub fn code(&self) -> &C {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The specialised failure kind.
    pub fn base_kind(&self) -> &B {
        &self.base
    }
}

/// What a [`Coded`] failure may specialise: `()` for nothing, or any exception.
pub trait CodedBase {
    fn as_exception(&self) -> Option<&dyn Exception>;
}

impl CodedBase for () {
    fn as_exception(&self) -> Option<&dyn Exception> {
        None
    }
}

impl<T: Exception> CodedBase for T {
    fn as_exception(&self) -> Option<&dyn Exception> {
        Some(self)
    }
}

/// A pointer-returning allocation came back null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("memory allocation failed")]
pub struct AllocationFailed;

impl From<TryReserveError> for AllocationFailed {
    fn from(_: TryReserveError) -> Self {
        Self
    }
}

/// A panic caught at an unwind boundary that was not raised with `throw`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("panicked: {message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The closed set of domain failures.
///
/// Prefer this over [`crate::Captured`] when the failing code is under your
/// control: matching on it is exhaustive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error(transparent)]
    InvalidState(#[from] InvalidState),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error(transparent)]
    InvalidArgumentType(#[from] InvalidArgumentType),

    #[error(transparent)]
    NotSupported(#[from] NotSupported),

    #[error(transparent)]
    Interrupted(#[from] Interrupted),

    #[error(transparent)]
    Coded(#[from] Coded<i64>),
}

// ---------------------------------------------------------------------------
// Exception impls
// ---------------------------------------------------------------------------

impl Exception for InvalidState {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Exception for InvalidArgument {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Exception for InvalidArgumentType {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn base(&self) -> Option<&dyn Exception> {
        Some(&self.base)
    }
}

impl Exception for NotSupported {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Exception for Interrupted {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<C, B> Exception for Coded<C, B>
where
    C: fmt::Debug + Send + Sync + 'static,
    B: CodedBase + fmt::Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn base(&self) -> Option<&dyn Exception> {
        self.base.as_exception()
    }
}

impl Exception for AllocationFailed {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Exception for Panicked {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Dispatch sees through the enum to the wrapped failure.
impl Exception for DomainError {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn base(&self) -> Option<&dyn Exception> {
        match self {
            Self::InvalidState(inner) => Some(inner),
            Self::InvalidArgument(inner) => Some(inner),
            Self::InvalidArgumentType(inner) => Some(inner),
            Self::NotSupported(inner) => Some(inner),
            Self::Interrupted(inner) => Some(inner),
            Self::Coded(inner) => Some(inner),
        }
    }
}

// ---------------------------------------------------------------------------
// Crate errors
// ---------------------------------------------------------------------------

/// Errors from the crate's own fallible operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CoreError>;
