//! Obstacle-dodging policy used by the simulator.

use crate::runner::{EntityKind, GameSession, Gesture};

/// Distance to the closest obstacle still ahead of (or overlapping) the
/// player in `lane`, within `lookahead` depth units.
fn threat_distance(session: &GameSession, lane: usize, lookahead: f64) -> Option<f64> {
    let player_depth = session.player.depth;
    // Slightly behind the player still counts; its hitbox has not cleared yet
    let tail = session.config.hitbox.base_size;
    session
        .entities
        .iter()
        .filter(|e| e.kind == EntityKind::Obstacle && e.lane == lane)
        .map(|e| player_depth - e.depth)
        .filter(|&gap| gap <= lookahead && gap >= -tail)
        .fold(None, |closest: Option<f64>, gap| {
            Some(closest.map_or(gap, |c| c.min(gap)))
        })
}

/// Swipe the autopilot would make this tick, if any.
///
/// Stays put while the current lane is clear. Otherwise steps one lane
/// toward whichever neighbour is clear, or failing that whichever neighbour
/// has its threat further away.
pub fn choose_swipe(session: &GameSession, reaction_ms: f64) -> Option<Gesture> {
    if !session.is_running() {
        return None;
    }
    let lookahead = session.config.speed * reaction_ms / 1000.0;
    let current = session.player.lane;
    let here = threat_distance(session, current, lookahead)?;

    let lane_count = session.lanes.lane_count();
    let mut best: Option<(usize, f64)> = None;
    for neighbour in [current.checked_sub(1), Some(current + 1)]
        .into_iter()
        .flatten()
        .filter(|&l| l < lane_count)
    {
        let distance = threat_distance(session, neighbour, lookahead).unwrap_or(f64::INFINITY);
        if distance > here && best.map_or(true, |(_, d)| distance > d) {
            best = Some((neighbour, distance));
        }
    }

    let (target, _) = best?;
    let magnitude = session.config.swipe_threshold * 2.0 + 1.0;
    let dx = if target < current { -magnitude } else { magnitude };
    Some(Gesture::new(dx, 0.0))
}
