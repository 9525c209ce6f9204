// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// verdict-core: value-or-error monad and exception bridging.
//
// `Outcome<V, E>` holds exactly one of a value or an error and chains with
// `and_then` / `or_else`. `Captured` carries a failure raised by unwinding
// code into an outcome, and `Handler` dispatches it by type. The crate does
// no I/O and installs no tracing subscriber.

mod combinators;
pub mod config;
mod convert;
pub mod dispatch;
pub mod error;
pub mod exception;
pub mod interrupt;
pub mod obtain;
pub mod outcome;
pub mod report;
pub mod storage;

pub use config::{DispatchConfig, UnhandledPolicy};
pub use dispatch::{Handler, handle};
pub use error::{
    AllocationFailed, Coded, CodedBase, CoreError, DomainError, InvalidArgument, InvalidArgumentType,
    InvalidState, Interrupted, NotSupported, Panicked,
};
pub use exception::{Captured, ExcOutcome, Exception, throw};
pub use interrupt::{AtomicInterruptor, Interruptible};
pub use obtain::{AllocationHandler, Nullable, ObjectObtainHandler, ObtainHandler, invoke_and_handle};
pub use outcome::{IsOutcome, Outcome, tag};
pub use report::{ErrorReport, FailureKind, describe, describe_domain};
pub use storage::{Tag, TaggedSlot};
