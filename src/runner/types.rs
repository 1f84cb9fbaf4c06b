//! Lane runner data structures.

use super::lanes::{Gesture, GestureTracker, LaneController};
use super::projection::Projector;
use super::spawner::Spawner;
use crate::config::RunnerConfig;
use serde::{Deserialize, Serialize};

/// Difficulty presets. Novice plays at the reference pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunnerDifficulty {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

difficulty_enum_impl!(RunnerDifficulty);

impl RunnerDifficulty {
    /// Entity speed in depth units per second.
    pub fn speed(&self) -> f64 {
        match self {
            Self::Novice => 240.0,
            Self::Apprentice => 300.0,
            Self::Journeyman => 360.0,
            Self::Master => 440.0,
        }
    }

    /// Milliseconds between spawn waves.
    pub fn spawn_interval_ms(&self) -> f64 {
        match self {
            Self::Novice => 1200.0,
            Self::Apprentice => 1000.0,
            Self::Journeyman => 850.0,
            Self::Master => 700.0,
        }
    }
}

/// Identifier handed out by the spawner. Never reused within a session.
pub type EntityId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Obstacle,
    Coin,
}

/// Something travelling down the road toward the player.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub lane: usize,
    /// 0 at the horizon, grows as the entity approaches.
    pub depth: f64,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, lane: usize) -> Self {
        Self {
            id,
            kind,
            lane,
            depth: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub lane: usize,
    /// Fixed near-plane depth the player runs at.
    pub depth: f64,
    pub alive: bool,
}

impl Player {
    pub fn new(lane: usize, depth: f64) -> Self {
        Self {
            lane,
            depth,
            alive: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Running,
    GameOver,
}

/// Everything one run of the game owns. The host keeps exactly one of these
/// and passes it by `&mut` into the logic functions each tick.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: RunnerConfig,
    pub projector: Projector,
    pub lanes: LaneController,
    pub player: Player,
    /// Live obstacles and coins, in spawn order.
    pub entities: Vec<Entity>,
    pub score: f64,
    pub state: GameState,
    pub spawner: Spawner,

    // -- Input --
    pub gestures: GestureTracker,
    /// Most recent completed gesture, consumed at the next tick.
    pub pending_gesture: Option<Gesture>,

    // -- Presentation helpers --
    /// Background scroll distance in depth units. Frozen while game over.
    pub scroll_offset: f64,
    /// Running time of the current life in milliseconds.
    pub elapsed_ms: f64,
    pub coins_collected: u32,
    /// Truncated score at the moment of the last game over.
    pub final_score: Option<u64>,
    /// Best truncated score seen by this session (seeded from records).
    pub best_score: u64,
    /// The last game over beat the previous best score.
    pub new_best: bool,
    pub games_played: u32,
}

impl GameSession {
    pub fn new(config: RunnerConfig) -> Self {
        let lanes = LaneController::new(config.lane_count);
        let projector = Projector::new(config.projector, lanes.lane_count());
        let player = Player::new(lanes.middle_lane(), config.player_depth);
        Self {
            config,
            projector,
            lanes,
            player,
            entities: Vec::new(),
            score: 0.0,
            state: GameState::Running,
            spawner: Spawner::new(),
            gestures: GestureTracker::default(),
            pending_gesture: None,
            scroll_offset: 0.0,
            elapsed_ms: 0.0,
            coins_collected: 0,
            final_score: None,
            best_score: 0,
            new_best: false,
            games_played: 0,
        }
    }

    /// Seed the best score from persisted records.
    pub fn with_best_score(mut self, best_score: u64) -> Self {
        self.best_score = best_score;
        self
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Score as shown to the player: truncated toward zero.
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).trunc() as u64
    }

    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }
}
