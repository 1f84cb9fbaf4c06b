//! Lane runner game logic: input processing, per-tick update, game over and
//! restart.

use super::collision::check_collisions;
use super::lanes::Gesture;
use super::motion::advance;
use super::types::{EntityId, EntityKind, GameSession, GameState, Player};
use log::{debug, info};
use rand::Rng;

/// UI-agnostic input for the runner. Hosts translate pointer or key events
/// into these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunnerInput {
    /// Pointer pressed at `(x, y)` in reference screen units.
    GestureStart { x: f64, y: f64 },
    /// Pointer released at `(x, y)`.
    GestureEnd { x: f64, y: f64 },
    /// A gesture the host already measured (keyboard shortcuts).
    Swipe(Gesture),
}

/// Things that happened during a tick, for hosts that want sound or effects.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    LaneChanged {
        from: usize,
        to: usize,
    },
    Spawned {
        id: EntityId,
        kind: EntityKind,
        lane: usize,
    },
    Despawned {
        ids: Vec<EntityId>,
    },
    CoinCollected {
        id: EntityId,
        bonus: f64,
    },
    GameOver {
        final_score: u64,
        hit_by: Option<EntityId>,
    },
    Restarted,
}

/// Record pointer input. A completed gesture is queued and takes effect at
/// the next tick; only the most recent one is kept.
pub fn process_input(session: &mut GameSession, input: RunnerInput) {
    match input {
        RunnerInput::GestureStart { x, y } => session.gestures.begin(x, y),
        RunnerInput::GestureEnd { x, y } => {
            let gesture = session.gestures.end(x, y);
            session.pending_gesture = Some(gesture);
        }
        RunnerInput::Swipe(gesture) => {
            session.gestures.clear();
            session.pending_gesture = Some(Gesture::new(gesture.dx, gesture.dy));
        }
    }
}

/// Upper bound on motion sub-steps in one tick.
const MAX_MOTION_SUBSTEPS: usize = 4096;

/// Number of motion steps for a tick of `dt_ms`. One step never moves an
/// entity further than the smallest sprite footprint at the horizon.
fn motion_substeps(session: &GameSession, dt_ms: f64) -> usize {
    let config = &session.config;
    let travel = config.speed * dt_ms / 1000.0;
    let max_step = config.hitbox.base_size * config.projector.scale_at_horizon;
    if !(travel.is_finite() && travel > 0.0) || !(max_step.is_finite() && max_step > 0.0) {
        return 1;
    }
    ((travel / max_step).ceil() as usize).clamp(1, MAX_MOTION_SUBSTEPS)
}

fn sanitize_dt(dt_ms: f64) -> f64 {
    if dt_ms.is_finite() && dt_ms > 0.0 {
        dt_ms
    } else {
        0.0
    }
}

/// Advance the session by `dt_ms` milliseconds.
///
/// While running: apply the queued gesture, spawn, score, then move, despawn
/// and collide in sub-steps, in that order. While game over nothing moves;
/// a queued gesture restarts the run instead.
pub fn tick_session<R: Rng>(session: &mut GameSession, dt_ms: f64, rng: &mut R) -> Vec<RunEvent> {
    let mut events = Vec::new();

    if session.state == GameState::GameOver {
        if session.pending_gesture.take().is_some() && restart(session) {
            events.push(RunEvent::Restarted);
        }
        return events;
    }

    let dt_ms = sanitize_dt(dt_ms);
    let config = &session.config;

    // 1. Queued gesture
    if let Some(gesture) = session.pending_gesture.take() {
        let from = session.player.lane;
        let to = session
            .lanes
            .apply_gesture(from, gesture, config.swipe_threshold);
        if to != from {
            session.player.lane = to;
            events.push(RunEvent::LaneChanged { from, to });
        }
    }

    // 2. Clock and background scroll
    session.elapsed_ms += dt_ms;
    session.scroll_offset += config.speed * dt_ms / 1000.0;

    // 3. Spawn wave
    session.spawner.accumulate(dt_ms);
    let wave = session.spawner.try_spawn(
        config.spawn_interval_ms,
        session.lanes.lane_count(),
        config.coin_chance,
        rng,
    );
    for entity in wave {
        events.push(RunEvent::Spawned {
            id: entity.id,
            kind: entity.kind,
            lane: entity.lane,
        });
        session.entities.push(entity);
    }

    // 4. Time-based score
    session.score += dt_ms * config.score_rate_per_ms;

    // 5-6. Motion, despawn and collisions, in sub-steps short enough that
    // nothing crosses the player's hitbox between two checks
    let steps = motion_substeps(session, dt_ms);
    let step_ms = dt_ms / steps as f64;
    let mut removed = Vec::new();
    let mut hit = None;
    for _ in 0..steps {
        let config = &session.config;
        removed.extend(advance(
            &mut session.entities,
            step_ms,
            config.speed,
            config.despawn_depth,
        ));

        let report = check_collisions(
            &session.player,
            &session.entities,
            &session.projector,
            &config.hitbox,
            config.coin_bonus,
        );
        if !report.consumed.is_empty() {
            session.entities.retain(|e| !report.consumed.contains(&e.id));
            session.score += report.score_delta;
            session.coins_collected += report.consumed.len() as u32;
            let bonus = session.config.coin_bonus;
            events.extend(
                report
                    .consumed
                    .iter()
                    .map(|&id| RunEvent::CoinCollected { id, bonus }),
            );
        }
        if report.game_over {
            hit = Some(report.hit_by);
            break;
        }
    }
    if !removed.is_empty() {
        debug!("despawned {:?}", removed);
        events.push(RunEvent::Despawned { ids: removed });
    }
    if let Some(hit_by) = hit {
        let final_score = enter_game_over(session);
        events.push(RunEvent::GameOver {
            final_score,
            hit_by,
        });
    }

    events
}

/// Running -> GameOver. Returns the truncated final score.
fn enter_game_over(session: &mut GameSession) -> u64 {
    let final_score = session.display_score();
    session.state = GameState::GameOver;
    session.player.alive = false;
    session.final_score = Some(final_score);
    session.new_best = final_score > session.best_score;
    session.best_score = session.best_score.max(final_score);
    session.games_played += 1;
    info!(
        "game over: score {} after {:.0}ms, {} coins",
        final_score, session.elapsed_ms, session.coins_collected
    );
    final_score
}

/// GameOver -> Running. Clears the road and puts the player back in the
/// middle lane with a zero score. Does nothing while running.
pub fn restart(session: &mut GameSession) -> bool {
    if session.state != GameState::GameOver {
        return false;
    }
    session.entities.clear();
    session.player = Player::new(session.lanes.middle_lane(), session.config.player_depth);
    session.score = 0.0;
    session.spawner.reset();
    session.pending_gesture = None;
    session.gestures.clear();
    session.scroll_offset = 0.0;
    session.elapsed_ms = 0.0;
    session.coins_collected = 0;
    session.final_score = None;
    session.new_best = false;
    session.state = GameState::Running;
    info!("restart (best {})", session.best_score);
    true
}
