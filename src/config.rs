//! Gameplay tunables.
//!
//! Defaults are the reference values for a 360x640 logical screen. A JSON
//! file at `~/.lane-runner/config.json` may override any subset of them.

use crate::runner::{HitboxConfig, ProjectorConfig, RunnerDifficulty};
use crate::utils::persistence::load_json_or_default;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.json";

/// Most lanes a road can be split into.
pub const MAX_LANES: usize = 9;

/// Reference logical resolution all screen-space values are expressed in.
pub const REFERENCE_WIDTH: f64 = 360.0;
pub const REFERENCE_HEIGHT: f64 = 640.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub lane_count: usize,
    pub spawn_interval_ms: f64,
    /// Depth units per second.
    pub speed: f64,
    pub score_rate_per_ms: f64,
    pub coin_bonus: f64,
    /// Probability that a spawn wave also carries a coin.
    pub coin_chance: f64,
    /// Minimum swipe distance in reference screen units.
    pub swipe_threshold: f64,
    pub player_depth: f64,
    pub despawn_depth: f64,
    pub projector: ProjectorConfig,
    pub hitbox: HitboxConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        let projector = ProjectorConfig::default();
        Self {
            lane_count: 3,
            spawn_interval_ms: 1200.0,
            speed: 240.0,
            score_rate_per_ms: 0.01,
            coin_bonus: 10.0,
            coin_chance: 0.5,
            swipe_threshold: 50.0,
            player_depth: 550.0,
            despawn_depth: projector.d_max + 100.0,
            projector,
            hitbox: HitboxConfig::default(),
        }
    }
}

impl RunnerConfig {
    /// Reference config with the difficulty's pace applied.
    pub fn for_difficulty(difficulty: RunnerDifficulty) -> Self {
        Self::default().with_difficulty(difficulty)
    }

    pub fn with_difficulty(mut self, difficulty: RunnerDifficulty) -> Self {
        self.speed = difficulty.speed();
        self.spawn_interval_ms = difficulty.spawn_interval_ms();
        self
    }

    /// Load overrides from the user's config file, falling back to defaults.
    pub fn load() -> Self {
        load_json_or_default(CONFIG_FILE)
    }

    pub fn validate(&self) -> Result<(), String> {
        let finite_positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(format!("{} must be a positive number (got {})", name, v))
            }
        };

        if self.lane_count == 0 || self.lane_count > MAX_LANES {
            return Err(format!(
                "lane_count must be between 1 and {} (got {})",
                MAX_LANES, self.lane_count
            ));
        }
        finite_positive("spawn_interval_ms", self.spawn_interval_ms)?;
        finite_positive("speed", self.speed)?;
        finite_positive("projector.d_max", self.projector.d_max)?;
        finite_positive("projector.scale_at_horizon", self.projector.scale_at_horizon)?;
        finite_positive("hitbox.base_size", self.hitbox.base_size)?;
        finite_positive("despawn_depth", self.despawn_depth)?;

        if !(0.0..=1.0).contains(&self.coin_chance) {
            return Err(format!(
                "coin_chance must be between 0 and 1 (got {})",
                self.coin_chance
            ));
        }
        if self.score_rate_per_ms < 0.0 || self.coin_bonus < 0.0 {
            return Err("score rate and coin bonus cannot be negative".to_string());
        }
        if self.swipe_threshold < 0.0 {
            return Err("swipe_threshold cannot be negative".to_string());
        }
        if self.player_depth <= 0.0 || self.player_depth >= self.despawn_depth {
            return Err(format!(
                "player_depth ({}) must be positive and below despawn_depth ({})",
                self.player_depth, self.despawn_depth
            ));
        }
        if self.despawn_depth <= self.projector.d_max {
            return Err(format!(
                "despawn_depth ({}) must be beyond projector.d_max ({})",
                self.despawn_depth, self.projector.d_max
            ));
        }
        if self.projector.scale_at_horizon >= self.projector.scale_at_near {
            return Err("scale_at_horizon must be smaller than scale_at_near".to_string());
        }
        Ok(())
    }
}
