//! Pseudo-3D road projection.
//!
//! The track is a trapezoid: narrow at the horizon (`depth = 0`) and full
//! width at the bottom of the play area (`depth = d_max`). Everything is
//! linear in `t = depth / d_max`, which is enough to sell the illusion of a
//! road converging toward a vanishing point.

use serde::{Deserialize, Serialize};

/// Shape of the projected road, in reference screen units (360x640).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorConfig {
    /// Depth of the near edge of the visible play area.
    pub d_max: f64,
    /// Screen y of `depth = 0`.
    pub horizon_y: f64,
    /// Screen y of `depth = d_max`.
    pub near_y: f64,
    pub horizon_left: f64,
    pub horizon_right: f64,
    pub near_left: f64,
    pub near_right: f64,
    pub scale_at_horizon: f64,
    pub scale_at_near: f64,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            d_max: 640.0,
            horizon_y: 160.0,
            near_y: 640.0,
            horizon_left: 140.0,
            horizon_right: 220.0,
            // Three lanes at full width land on x = 90 / 180 / 270
            near_left: 0.0,
            near_right: 360.0,
            scale_at_horizon: 0.25,
            scale_at_near: 1.0,
        }
    }
}

/// Screen placement of a lane/depth pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Maps `(lane, depth)` to screen space. Stateless; copy it freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    config: ProjectorConfig,
    lane_count: usize,
}

impl Projector {
    pub fn new(config: ProjectorConfig, lane_count: usize) -> Self {
        Self {
            config,
            lane_count: lane_count.max(1),
        }
    }

    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    /// Normalized depth, clamped to `[0, 1]`.
    pub fn depth_fraction(&self, depth: f64) -> f64 {
        if self.config.d_max <= 0.0 || !depth.is_finite() {
            return if depth > 0.0 { 1.0 } else { 0.0 };
        }
        (depth / self.config.d_max).clamp(0.0, 1.0)
    }

    /// Left and right track edges at the given depth.
    pub fn edges(&self, depth: f64) -> (f64, f64) {
        let t = self.depth_fraction(depth);
        (
            lerp(self.config.horizon_left, self.config.near_left, t),
            lerp(self.config.horizon_right, self.config.near_right, t),
        )
    }

    /// Horizontal fraction of lane `i`: `(i + 1) / (lane_count + 1)`.
    /// Lanes sit evenly inside the track and never touch an edge.
    pub fn lane_fraction(&self, lane: usize) -> f64 {
        let lane = lane.min(self.lane_count - 1);
        (lane + 1) as f64 / (self.lane_count + 1) as f64
    }

    /// Screen x of an arbitrary fraction across the track at `depth`.
    /// Used by hosts to draw lane boundaries.
    pub fn x_at_fraction(&self, fraction: f64, depth: f64) -> f64 {
        let (left, right) = self.edges(depth);
        left + (right - left) * fraction
    }

    pub fn y_at(&self, depth: f64) -> f64 {
        lerp(
            self.config.horizon_y,
            self.config.near_y,
            self.depth_fraction(depth),
        )
    }

    /// Inverse of [`Projector::y_at`] for screen rows on the road. Rows above
    /// the horizon give `None`; rows below the near edge clamp to `d_max`.
    pub fn depth_at_y(&self, y: f64) -> Option<f64> {
        let span = self.config.near_y - self.config.horizon_y;
        if span <= 0.0 || y < self.config.horizon_y {
            return None;
        }
        let t = ((y - self.config.horizon_y) / span).min(1.0);
        Some(t * self.config.d_max)
    }

    pub fn scale_at(&self, depth: f64) -> f64 {
        lerp(
            self.config.scale_at_horizon,
            self.config.scale_at_near,
            self.depth_fraction(depth),
        )
    }

    pub fn project(&self, lane: usize, depth: f64) -> Projected {
        Projected {
            x: self.x_at_fraction(self.lane_fraction(lane), depth),
            y: self.y_at(depth),
            scale: self.scale_at(depth),
        }
    }
}
