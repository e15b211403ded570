//! # Questionnaire Session
//!
//! The explicit state of one questionnaire run. Serializable so a host can
//! park it between requests; only the engine advances it.

use serde::{Deserialize, Serialize};

use super::{Step, Style, TeamCode};

/// One user's pass through the questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireSession {
    pub(crate) step: Step,
    pub(crate) city: Option<String>,
    pub(crate) color: Option<String>,
    pub(crate) style: Option<Style>,
    pub(crate) score: i32,
    pub(crate) assigned_team: Option<TeamCode>,
}

impl QuestionnaireSession {
    /// Fresh session at step 1 with a zero score
    pub fn new() -> Self {
        Self {
            step: Step::City,
            city: None,
            color: None,
            style: None,
            score: 0,
            assigned_team: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn style(&self) -> Option<Style> {
        self.style
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn assigned_team(&self) -> Option<&TeamCode> {
        self.assigned_team.as_ref()
    }

    /// At the terminal step
    pub fn is_complete(&self) -> bool {
        self.step == Step::Result
    }
}

impl Default for QuestionnaireSession {
    fn default() -> Self {
        Self::new()
    }
}
