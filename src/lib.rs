//! Lane Runner - lane-switching endless runner.
//!
//! This module exposes the game logic for testing and for the binaries.

pub mod build_info;
pub mod config;
pub mod records;
pub mod runner;
pub mod simulator;
pub mod utils;

pub use config::RunnerConfig;
pub use runner::{
    process_input, restart, tick_session, Entity, EntityKind, FrameSnapshot, GameSession,
    GameState, Gesture, RunEvent, RunnerDifficulty, RunnerInput,
};

/// Host loop poll interval in milliseconds.
pub const INPUT_POLL_MS: u64 = 16;

/// Largest `dt` the host feeds into one tick, so a stalled terminal does
/// not teleport obstacles through the player.
pub const MAX_FRAME_DT_MS: f64 = 100.0;
