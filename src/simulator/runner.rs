//! Simulation runner driving real `GameSession`s with the autopilot.

use super::autopilot::choose_swipe;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::config::RunnerConfig;
use crate::runner::{process_input, tick_session, GameSession, RunEvent, RunnerInput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let runner_config = RunnerConfig::for_difficulty(config.difficulty);
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let stats = simulate_single_run(&runner_config, config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Score {}, Survived {:.1}s, Coins {}{}",
                run_idx + 1,
                config.num_runs,
                stats.final_score,
                stats.survival_ms / 1000.0,
                stats.coins,
                if stats.capped { " (capped)" } else { "" }
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(config.difficulty, all_runs)
}

/// Play one life until game over or the time cap.
pub fn simulate_single_run<R: Rng>(
    runner_config: &RunnerConfig,
    config: &SimConfig,
    rng: &mut R,
) -> RunStats {
    let mut session = GameSession::new(runner_config.clone());
    let mut swipes = 0u32;

    while session.elapsed_ms < config.max_ms_per_run {
        if let Some(gesture) = choose_swipe(&session, config.reaction_ms) {
            process_input(&mut session, RunnerInput::Swipe(gesture));
            swipes += 1;
        }
        let events = tick_session(&mut session, config.tick_ms, rng);
        if events
            .iter()
            .any(|e| matches!(e, RunEvent::GameOver { .. }))
        {
            break;
        }
    }

    RunStats {
        final_score: session.display_score(),
        survival_ms: session.elapsed_ms,
        coins: session.coins_collected,
        swipes,
        capped: session.is_running(),
    }
}
