//! Moves live entities toward the player and drops the ones that passed.

use super::types::{Entity, EntityId};

/// Advance every entity by `speed * dt` and remove those beyond
/// `despawn_depth`. `speed` is in depth units per second, `dt_ms` in
/// milliseconds. Returns the ids that were removed.
pub fn advance(
    entities: &mut Vec<Entity>,
    dt_ms: f64,
    speed: f64,
    despawn_depth: f64,
) -> Vec<EntityId> {
    let step = speed * (dt_ms / 1000.0);
    for entity in entities.iter_mut() {
        entity.depth += step;
    }

    let mut removed = Vec::new();
    entities.retain(|e| {
        if e.depth > despawn_depth {
            removed.push(e.id);
            false
        } else {
            true
        }
    });
    removed
}
