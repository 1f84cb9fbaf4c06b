//! Timed spawning of obstacles and coins at the horizon.

use super::types::{Entity, EntityId, EntityKind};
use log::debug;
use rand::Rng;

/// Spawn timer plus the id counter for new entities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spawner {
    /// Milliseconds since the last spawn wave.
    pub elapsed_ms: f64,
    next_id: EntityId,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulate(&mut self, dt_ms: f64) {
        self.elapsed_ms += dt_ms;
    }

    /// Reset the timer. Ids keep counting so nothing is ever reused.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }

    fn next_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fire a wave once more than `interval_ms` has elapsed.
    ///
    /// A wave always holds one obstacle in a random lane. Independently,
    /// with probability `coin_chance`, it also holds a coin in its own random
    /// lane, which may be the obstacle's lane.
    pub fn try_spawn<R: Rng>(
        &mut self,
        interval_ms: f64,
        lane_count: usize,
        coin_chance: f64,
        rng: &mut R,
    ) -> Vec<Entity> {
        if self.elapsed_ms <= interval_ms {
            return Vec::new();
        }
        self.elapsed_ms = 0.0;

        let lane_count = lane_count.max(1);
        let mut wave = Vec::with_capacity(2);

        let obstacle_lane = rng.gen_range(0..lane_count);
        wave.push(Entity::new(self.next_id(), EntityKind::Obstacle, obstacle_lane));

        // Non-finite chances spawn no coin
        let coin_chance = if coin_chance.is_finite() {
            coin_chance.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if rng.gen_bool(coin_chance) {
            let coin_lane = rng.gen_range(0..lane_count);
            wave.push(Entity::new(self.next_id(), EntityKind::Coin, coin_lane));
        }

        debug!("spawn wave: {:?}", wave);
        wave
    }
}
