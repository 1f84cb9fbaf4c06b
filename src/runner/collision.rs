//! Player/entity overlap tests and their scoring consequences.

use super::projection::{Projected, Projector};
use super::types::{Entity, EntityId, EntityKind, Player};
use serde::{Deserialize, Serialize};

/// Sprite footprints used for overlap, in reference screen units before the
/// projected scale is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitboxConfig {
    /// Full side of an unscaled sprite.
    pub base_size: f64,
    pub player_factor: f64,
    pub obstacle_factor: f64,
    pub coin_factor: f64,
}

impl Default for HitboxConfig {
    fn default() -> Self {
        Self {
            base_size: 48.0,
            player_factor: 1.2,
            obstacle_factor: 1.0,
            coin_factor: 0.7,
        }
    }
}

impl HitboxConfig {
    fn kind_factor(&self, kind: EntityKind) -> f64 {
        match kind {
            EntityKind::Obstacle => self.obstacle_factor,
            EntityKind::Coin => self.coin_factor,
        }
    }

    pub fn player_half_extent(&self, scale: f64) -> f64 {
        0.5 * self.base_size * self.player_factor * scale
    }

    pub fn entity_half_extent(&self, kind: EntityKind, scale: f64) -> f64 {
        0.5 * self.base_size * self.kind_factor(kind) * scale
    }
}

/// Outcome of one collision pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub game_over: bool,
    pub score_delta: f64,
    /// Coins picked up this pass.
    pub consumed: Vec<EntityId>,
    /// First obstacle that hit the player, if any.
    pub hit_by: Option<EntityId>,
}

fn boxes_overlap(a: Projected, a_half: f64, b: Projected, b_half: f64) -> bool {
    (a.x - b.x).abs() <= a_half + b_half && (a.y - b.y).abs() <= a_half + b_half
}

/// Does `entity` overlap the player? Lanes must match, then the projected
/// boxes, each sized by its own scale, must intersect.
pub fn overlaps(
    player: &Player,
    entity: &Entity,
    projector: &Projector,
    hitbox: &HitboxConfig,
) -> bool {
    if entity.lane != player.lane {
        return false;
    }
    let p = projector.project(player.lane, player.depth);
    let e = projector.project(entity.lane, entity.depth);
    boxes_overlap(
        p,
        hitbox.player_half_extent(p.scale),
        e,
        hitbox.entity_half_extent(entity.kind, e.scale),
    )
}

/// Fresh pass over the current entity positions. Any obstacle overlap ends
/// the run; every overlapping coin is consumed and pays `coin_bonus`, even
/// in the pass that ends the run.
pub fn check_collisions(
    player: &Player,
    entities: &[Entity],
    projector: &Projector,
    hitbox: &HitboxConfig,
    coin_bonus: f64,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    if !player.alive {
        return report;
    }

    for entity in entities {
        if !overlaps(player, entity, projector, hitbox) {
            continue;
        }
        match entity.kind {
            EntityKind::Obstacle => {
                if !report.game_over {
                    report.game_over = true;
                    report.hit_by = Some(entity.id);
                }
            }
            EntityKind::Coin => {
                report.consumed.push(entity.id);
                report.score_delta += coin_bonus;
            }
        }
    }
    report
}
