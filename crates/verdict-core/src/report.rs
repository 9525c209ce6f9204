// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Flat, serialisable reports of terminal failures.
//
// A caller at the edge of the program (a CLI, a service handler) turns the
// failure it ended up with into an `ErrorReport` and prints or ships it. The
// core builds the report; it never prints it.

use serde::{Deserialize, Serialize};

use crate::dispatch::Handler;
use crate::error::{
    AllocationFailed, Coded, DomainError, InvalidArgument, InvalidArgumentType, InvalidState,
    Interrupted, NotSupported, Panicked,
};
use crate::exception::Captured;

/// Which failure kind a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidState,
    InvalidArgument,
    InvalidArgumentType,
    NotSupported,
    Interrupted,
    Coded,
    AllocationFailed,
    Panicked,
    /// An exception type this module does not know.
    Unknown,
}

/// A failure reduced to kind, optional code and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: FailureKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code: Option<i64>,
    pub message: String,
}

impl ErrorReport {
    fn new(kind: FailureKind, message: impl ToString) -> Self {
        Self {
            kind,
            code: None,
            message: message.to_string(),
        }
    }

    fn coded(code: i64, message: &str) -> Self {
        Self {
            kind: FailureKind::Coded,
            code: Some(code),
            message: message.to_owned(),
        }
    }
}

/// Describe a closed-set domain failure.
pub fn describe_domain(err: &DomainError) -> ErrorReport {
    match err {
        DomainError::InvalidState(e) => ErrorReport::new(FailureKind::InvalidState, e),
        DomainError::InvalidArgument(e) => ErrorReport::new(FailureKind::InvalidArgument, e),
        DomainError::InvalidArgumentType(e) => {
            ErrorReport::new(FailureKind::InvalidArgumentType, e)
        }
        DomainError::NotSupported(e) => ErrorReport::new(FailureKind::NotSupported, e),
        DomainError::Interrupted(e) => ErrorReport::new(FailureKind::Interrupted, e),
        DomainError::Coded(e) => ErrorReport::coded(*e.code(), e.message()),
    }
}

/// Describe a captured exception.
///
/// Handlers run most specific first, so an `InvalidArgumentType` is reported
/// as such rather than as its `InvalidArgument` base.
pub fn describe(captured: &Captured) -> ErrorReport {
    let mut report = None;
    let chain = Handler::new(captured.clone())
        .handle(|e: &InvalidArgumentType| {
            report = Some(ErrorReport::new(FailureKind::InvalidArgumentType, e))
        })
        .handle(|e: &InvalidArgument| {
            report = Some(ErrorReport::new(FailureKind::InvalidArgument, e))
        })
        .handle(|e: &InvalidState| report = Some(ErrorReport::new(FailureKind::InvalidState, e)))
        .handle(|e: &NotSupported| report = Some(ErrorReport::new(FailureKind::NotSupported, e)))
        .handle(|e: &Interrupted| report = Some(ErrorReport::new(FailureKind::Interrupted, e)))
        .handle(|e: &Coded<i64>| report = Some(ErrorReport::coded(*e.code(), e.message())))
        .handle(|e: &Coded<i32>| {
            report = Some(ErrorReport::coded(i64::from(*e.code()), e.message()))
        })
        .handle(|e: &AllocationFailed| {
            report = Some(ErrorReport::new(FailureKind::AllocationFailed, e))
        })
        .handle(|e: &Panicked| report = Some(ErrorReport::new(FailureKind::Panicked, e.message())));

    match (chain.finish(), report) {
        (Ok(()), Some(report)) => report,
        _ => ErrorReport::new(FailureKind::Unknown, captured),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    use crate::exception::{Exception, throw};

    #[derive(Debug, Error)]
    #[error("Invalid format of image")]
    struct InvalidImageFormat;

    impl Exception for InvalidImageFormat {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    #[test]
    fn specific_kind_wins_over_base() {
        let report = describe(&Captured::new(InvalidArgumentType::default()));
        assert_eq!(report.kind, FailureKind::InvalidArgumentType);
        assert_eq!(report.message, "Argument of invalid type has been passed to function");
    }

    #[test]
    fn coded_failures_keep_their_code() {
        let report = describe(&Captured::new(Coded::new(-1832i32, "Leadtools error: code: -1832")));
        assert_eq!(report.kind, FailureKind::Coded);
        assert_eq!(report.code, Some(-1832));
    }

    #[test]
    fn wrapped_domain_errors_report_the_inner_kind() {
        let err = DomainError::from(InvalidState::new("license not set"));
        assert_eq!(describe(&Captured::new(err.clone())), describe_domain(&err));
    }

    #[test]
    fn foreign_exceptions_are_unknown() {
        let report = describe(&Captured::new(InvalidImageFormat));
        assert_eq!(report.kind, FailureKind::Unknown);
        assert_eq!(report.message, "Invalid format of image");
    }

    #[test]
    fn thrown_failures_are_described_after_catch() {
        let outcome = Captured::catch(|| -> u32 { throw(NotSupported::new("odp thumbnails")) });
        let report = describe(outcome.error());
        assert_eq!(report.kind, FailureKind::NotSupported);
        assert_eq!(report.message, "odp thumbnails");
    }

    #[test]
    fn serialises_with_snake_case_kind() {
        let report = describe_domain(&DomainError::from(Coded::new(7i64, "status 7")));
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["kind"], "coded");
        assert_eq!(json["code"], 7);

        let report = describe_domain(&DomainError::from(Interrupted::default()));
        let json = serde_json::to_value(&report).expect("serialize");
        assert!(json.get("code").is_none());
    }
}
