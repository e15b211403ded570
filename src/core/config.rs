//! # Configuration
//!
//! Point values and the assignment threshold.
//!
//! The defaults bound the score to `[0, 6]` and require `score > 1` for a
//! deterministic assignment: two mismatches fall through to the random
//! draw, one mismatch does not.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

pub const DEFAULT_CITY_CREDIT: i32 = 3;
pub const DEFAULT_COLOR_REWARD: i32 = 2;
pub const DEFAULT_STYLE_REWARD: i32 = 1;
pub const DEFAULT_THRESHOLD: i32 = 1;

/// Scoring configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffinityConfig {
    /// Flat score set when the city is accepted
    pub city_credit: i32,
    /// Added on a color match, subtracted on a mismatch
    pub color_reward: i32,
    /// Added on a style match, subtracted on a mismatch
    pub style_reward: i32,
    /// Deterministic assignment requires `score > threshold`
    pub threshold: i32,
}

impl Default for AffinityConfig {
    fn default() -> Self {
        Self {
            city_credit: DEFAULT_CITY_CREDIT,
            color_reward: DEFAULT_COLOR_REWARD,
            style_reward: DEFAULT_STYLE_REWARD,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl AffinityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML; missing keys take their defaults
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_city_credit(mut self, credit: i32) -> Self {
        self.city_credit = credit;
        self
    }

    pub fn with_color_reward(mut self, reward: i32) -> Self {
        self.color_reward = reward;
        self
    }

    pub fn with_style_reward(mut self, reward: i32) -> Self {
        self.style_reward = reward;
        self
    }

    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Credit and rewards must be non-negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("city_credit", self.city_credit),
            ("color_reward", self.color_reward),
            ("style_reward", self.style_reward),
        ] {
            if value < 0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Whether a final score earns the city-implied team
    pub fn qualifies(&self, score: i32) -> bool {
        score > self.threshold
    }

    /// Inclusive range of reachable final scores
    pub fn score_bounds(&self) -> (i32, i32) {
        let swing = self.color_reward + self.style_reward;
        (self.city_credit - swing, self.city_credit + swing)
    }
}
