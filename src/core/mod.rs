//! # Core
//!
//! Pure domain types. No I/O, no randomness, no collaborators.
//!
//! - `TeamCode`, `Style`, `Step` - the vocabulary of the questionnaire
//! - `TeamCatalog` - static city/team/trait tables
//! - `QuestionnaireSession` - the state threaded through the four steps
//! - `AffinityConfig` - point values and the assignment threshold
//! - `AffinityError` - the engine's error taxonomy

pub mod catalog;
pub mod config;
pub mod error;
pub mod session;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use catalog::TeamCatalog;
pub use config::AffinityConfig;
pub use error::{AffinityError, AffinityResult, ConfigError};
pub use session::QuestionnaireSession;

// ============================================================================
// TEAM CODE
// ============================================================================

/// Short identifier for a team (e.g. "CSK")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamCode(String);

impl TeamCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl PartialEq<&str> for TeamCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// BATTING STYLE
// ============================================================================

/// Batting style a team is known for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Balanced,
    Aggressive,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Balanced, Style::Aggressive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Balanced => "balanced",
            Style::Aggressive => "aggressive",
        }
    }

    /// Exact, case-sensitive match on the two accepted labels
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "balanced" => Some(Style::Balanced),
            "aggressive" => Some(Style::Aggressive),
            _ => None,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// STEP
// ============================================================================

/// Questionnaire step. Strictly forward: City -> Color -> Style -> Result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    City = 1,
    Color = 2,
    Style = 3,
    Result = 4,
}

impl Step {
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// The step after this one; `Result` is terminal
    pub fn next(&self) -> Option<Step> {
        match self {
            Step::City => Some(Step::Color),
            Step::Color => Some(Step::Style),
            Step::Style => Some(Step::Result),
            Step::Result => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::City => "city",
            Step::Color => "color",
            Step::Style => "style",
            Step::Result => "result",
        };
        write!(f, "{} ({})", self.ordinal(), name)
    }
}
