//! Terminal rendering for the lane runner host.

pub mod game_common;
pub mod runner_scene;
