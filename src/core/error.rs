//! # Errors
//!
//! None of these are recoverable by repeating the same call. The caller
//! supplies corrected input or starts a fresh session.

use thiserror::Error;

use super::Step;

/// Errors from questionnaire transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AffinityError {
    /// Operation invoked at the wrong step (caller sequencing defect)
    #[error("{operation} requires step {expected}, session is at step {actual}")]
    InvalidStep {
        operation: &'static str,
        expected: Step,
        actual: Step,
    },

    #[error("unknown city: {0:?}")]
    UnknownCity(String),

    #[error("invalid batting style: {0:?} (expected \"balanced\" or \"aggressive\")")]
    InvalidStyle(String),

    /// Session reports the result step but carries no team
    #[error("session is at the result step without an assigned team")]
    Incomplete,

    /// Restored session whose fields no transition could have produced
    #[error("corrupt session: {0}")]
    CorruptSession(String),
}

impl AffinityError {
    /// Whether the flow should be restarted rather than re-prompted
    pub fn requires_restart(&self) -> bool {
        matches!(
            self,
            AffinityError::InvalidStep { .. }
                | AffinityError::Incomplete
                | AffinityError::CorruptSession(_)
        )
    }
}

pub type AffinityResult<T> = Result<T, AffinityError>;

/// Errors loading or validating `AffinityConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
