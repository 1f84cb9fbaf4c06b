//! Simulation configuration.

use crate::runner::RunnerDifficulty;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated runs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Fixed tick length in milliseconds
    pub tick_ms: f64,

    /// A run that survives this long is stopped and counted as capped
    pub max_ms_per_run: f64,

    pub difficulty: RunnerDifficulty,

    /// How far ahead the autopilot reacts, in milliseconds of travel
    pub reaction_ms: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 500,
            seed: None,
            tick_ms: 16.0,
            max_ms_per_run: 300_000.0,
            difficulty: RunnerDifficulty::Novice,
            reaction_ms: 600.0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small, seeded config for quick checks
    pub fn quick(difficulty: RunnerDifficulty) -> Self {
        Self {
            num_runs: 50,
            seed: Some(42),
            max_ms_per_run: 60_000.0,
            difficulty,
            ..Default::default()
        }
    }
}
