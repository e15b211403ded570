//! # Affinity Engine
//!
//! The four-step questionnaire as pure transitions.
//!
//! Each `submit_*` takes the current session by reference and returns the
//! advanced copy, so a rejected call never touches the caller's session.
//! The engine does no I/O; `finalize` only produces the `Assignment` the
//! host hands to its `TeamDirectory`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::adapters::random::ThreadRandom;
use crate::core::{
    AffinityConfig, AffinityError, AffinityResult, ConfigError, QuestionnaireSession, Step, Style,
    TeamCatalog, TeamCode,
};
use crate::ports::Randomness;

/// Result of a completed questionnaire, ready for the team directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub username: String,
    pub team: TeamCode,
}

/// The team-affinity scoring engine
pub struct AffinityEngine {
    /// City/team/trait tables
    catalog: TeamCatalog,

    /// Point values and threshold
    config: AffinityConfig,

    /// Source for the random fallback
    rng: Box<dyn Randomness>,
}

impl AffinityEngine {
    /// Engine with default scoring and the thread-local generator
    pub fn new(catalog: TeamCatalog) -> Self {
        Self {
            catalog,
            config: AffinityConfig::default(),
            rng: Box::new(ThreadRandom),
        }
    }

    /// Create with custom config and randomness.
    /// Fails if the config has a negative credit or reward.
    pub fn with_adapters(
        catalog: TeamCatalog,
        config: AffinityConfig,
        rng: Box<dyn Randomness>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            rng,
        })
    }

    pub fn catalog(&self) -> &TeamCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &AffinityConfig {
        &self.config
    }

    /// Begin a questionnaire
    pub fn start(&self) -> QuestionnaireSession {
        QuestionnaireSession::new()
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    /// Step 1 -> 2. Score is set (not added) to the city credit.
    pub fn submit_city(
        &self,
        session: &QuestionnaireSession,
        city: &str,
    ) -> AffinityResult<QuestionnaireSession> {
        require_step(session, Step::City, "submit_city")?;

        if !self.catalog.contains_city(city) {
            warn!(city, "rejected unknown city");
            return Err(AffinityError::UnknownCity(city.to_string()));
        }

        let mut next = session.clone();
        next.city = Some(city.to_string());
        next.score = self.config.city_credit;
        next.step = Step::Color;

        debug!(city, score = next.score, "city accepted");
        Ok(next)
    }

    /// Step 2 -> 3. Any color string is accepted.
    pub fn submit_color(
        &self,
        session: &QuestionnaireSession,
        color: &str,
    ) -> AffinityResult<QuestionnaireSession> {
        require_step(session, Step::Color, "submit_color")?;

        let target = self.target_team(session)?;
        let matched = color == self.catalog.preferred_color(target);
        let delta = if matched {
            self.config.color_reward
        } else {
            -self.config.color_reward
        };

        let mut next = session.clone();
        next.color = Some(color.to_string());
        next.score = apply(session.score, delta)?;
        next.step = Step::Style;

        debug!(color, matched, score = next.score, "color accepted");
        Ok(next)
    }

    /// Step 3 -> 4. Scores the style and resolves the team.
    ///
    /// `score > threshold` assigns the city's team; anything else draws
    /// uniformly from every team in the catalog, the city's team included.
    pub fn submit_style(
        &mut self,
        session: &QuestionnaireSession,
        style: &str,
    ) -> AffinityResult<QuestionnaireSession> {
        require_step(session, Step::Style, "submit_style")?;

        let style = Style::parse(style).ok_or_else(|| {
            warn!(style, "rejected batting style");
            AffinityError::InvalidStyle(style.to_string())
        })?;

        let target = self.target_team(session)?.clone();
        let matched = style == self.catalog.preferred_style(&target);
        let delta = if matched {
            self.config.style_reward
        } else {
            -self.config.style_reward
        };
        let score = apply(session.score, delta)?;

        let deterministic = self.config.qualifies(score);
        let team = if deterministic {
            target
        } else {
            self.draw_team().unwrap_or(target)
        };

        info!(
            team = %team,
            score,
            deterministic,
            "team resolved"
        );

        let mut next = session.clone();
        next.style = Some(style);
        next.score = score;
        next.assigned_team = Some(team);
        next.step = Step::Result;
        Ok(next)
    }

    /// Hand off the result. Idempotent: no scoring happens here.
    pub fn finalize(
        &self,
        session: &QuestionnaireSession,
        username: &str,
    ) -> AffinityResult<Assignment> {
        require_step(session, Step::Result, "finalize")?;

        let team = session.assigned_team.clone().ok_or(AffinityError::Incomplete)?;

        Ok(Assignment {
            username: username.to_string(),
            team,
        })
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    /// Team implied by the session's city
    fn target_team(&self, session: &QuestionnaireSession) -> AffinityResult<&TeamCode> {
        let city = session.city.as_deref().unwrap_or_default();
        self.catalog
            .team_for_city(city)
            .ok_or_else(|| AffinityError::UnknownCity(city.to_string()))
    }

    fn draw_team(&mut self) -> Option<TeamCode> {
        let teams = self.catalog.team_codes();
        if teams.is_empty() {
            return None;
        }
        // an out-of-contract pick still lands inside the pool
        let idx = self.rng.pick(teams.len()) % teams.len();
        teams.get(idx).cloned()
    }
}

/// Add a reward to a (possibly deserialized) score
fn apply(score: i32, delta: i32) -> AffinityResult<i32> {
    score.checked_add(delta).ok_or_else(|| {
        warn!(score, delta, "score out of range");
        AffinityError::CorruptSession(format!("score {} cannot absorb {}", score, delta))
    })
}

fn require_step(
    session: &QuestionnaireSession,
    expected: Step,
    operation: &'static str,
) -> AffinityResult<()> {
    if session.step == expected {
        return Ok(());
    }
    warn!(operation, expected = %expected, actual = %session.step, "out-of-order transition");
    Err(AffinityError::InvalidStep {
        operation,
        expected,
        actual: session.step,
    })
}
