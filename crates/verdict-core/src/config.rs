// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dispatch configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What a handler chain does when no handler matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnhandledPolicy {
    /// Hand the captured exception back to the caller.
    #[default]
    Keep,
    /// Resume unwinding with the captured exception.
    Rethrow,
}

/// Settings applied to [`crate::Handler`] chains built with
/// [`crate::Handler::configured`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Policy for chains that end without a match.
    pub on_unhandled: UnhandledPolicy,
    /// Emit a trace event for every handler attempt, hit or miss.
    pub trace_matches: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            on_unhandled: UnhandledPolicy::Keep,
            trace_matches: false,
        }
    }
}

impl DispatchConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn defaults_keep_unhandled_exceptions() {
        let config = DispatchConfig::default();
        assert_eq!(config.on_unhandled, UnhandledPolicy::Keep);
        assert!(!config.trace_matches);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = DispatchConfig::from_json(r#"{ "on_unhandled": "rethrow" }"#)
            .expect("valid config");
        assert_eq!(config.on_unhandled, UnhandledPolicy::Rethrow);
        assert!(!config.trace_matches);
    }

    #[test]
    fn unknown_policy_is_a_config_error() {
        let err = DispatchConfig::from_json(r#"{ "on_unhandled": "swallow" }"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn round_trips_through_json() {
        let config = DispatchConfig {
            on_unhandled: UnhandledPolicy::Rethrow,
            trace_matches: true,
        };
        let json = serde_json::to_string(&config).expect("serialize");
        assert_eq!(DispatchConfig::from_json(&json).expect("parse"), config);
    }
}
