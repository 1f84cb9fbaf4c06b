//! Read-only view of a session for the render host, score display and
//! game-over overlay.

use super::projection::Projected;
use super::types::{EntityId, EntityKind, GameSession};

#[derive(Debug, Clone, PartialEq)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub lane: usize,
    pub at: Projected,
}

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub player: Projected,
    pub player_lane: usize,
    /// Far to near, so hosts can paint in order.
    pub entities: Vec<EntityView>,
    pub score: u64,
    pub game_over_visible: bool,
    /// Set only while the overlay is visible.
    pub final_score: Option<u64>,
    pub best_score: u64,
    /// The final score beat the previous best. Only set while game over.
    pub new_best: bool,
    pub scroll_offset: f64,
}

impl FrameSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        let projector = &session.projector;

        let mut entities: Vec<EntityView> = session
            .entities
            .iter()
            .map(|e| EntityView {
                id: e.id,
                kind: e.kind,
                lane: e.lane,
                at: projector.project(e.lane, e.depth),
            })
            .collect();
        entities.sort_by(|a, b| a.at.y.total_cmp(&b.at.y));

        let game_over_visible = session.is_game_over();
        Self {
            player: projector.project(session.player.lane, session.player.depth),
            player_lane: session.player.lane,
            entities,
            score: session.display_score(),
            game_over_visible,
            final_score: if game_over_visible {
                session.final_score
            } else {
                None
            },
            best_score: session.best_score,
            new_best: game_over_visible && session.new_best,
            scroll_offset: session.scroll_offset,
        }
    }
}
