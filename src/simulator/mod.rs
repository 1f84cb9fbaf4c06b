//! Headless simulator for balance checks.
//!
//! Plays many runs with a simple autopilot to compare difficulty presets:
//! - How long a reasonable player survives
//! - Score and coin pickup distribution
//!
//! The simulator drives `GameSession` through `tick_session`, exactly as the
//! terminal host does, so results match real gameplay behavior.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::choose_swipe;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
