//! Lane changes driven by swipe gestures.

use log::debug;

/// A completed pointer gesture: end position minus start position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gesture {
    pub dx: f64,
    pub dy: f64,
}

impl Gesture {
    pub fn new(dx: f64, dy: f64) -> Self {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            dx: finite(dx),
            dy: finite(dy),
        }
    }

    pub fn classify(&self, threshold: f64) -> GestureKind {
        if self.dx.abs() > self.dy.abs() {
            if self.dx < -threshold {
                GestureKind::SwipeLeft
            } else if self.dx > threshold {
                GestureKind::SwipeRight
            } else {
                GestureKind::Tap
            }
        } else if self.dy < -threshold {
            GestureKind::SwipeUp
        } else if self.dy > threshold {
            GestureKind::SwipeDown
        } else {
            GestureKind::Tap
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    SwipeLeft,
    SwipeRight,
    // No mechanic is bound to vertical swipes yet.
    SwipeUp,
    SwipeDown,
    Tap,
}

/// Pairs pointer-down with pointer-up. Only the latest pair matters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureTracker {
    start: Option<(f64, f64)>,
}

impl GestureTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Close the gesture. An end without a start is a zero-length gesture.
    pub fn end(&mut self, x: f64, y: f64) -> Gesture {
        match self.start.take() {
            Some((sx, sy)) => Gesture::new(x - sx, y - sy),
            None => Gesture::default(),
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.start.is_some()
    }

    pub fn clear(&mut self) {
        self.start = None;
    }
}

/// Knows how many lanes exist and how gestures move between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneController {
    lane_count: usize,
}

impl LaneController {
    /// At least one lane always exists.
    pub fn new(lane_count: usize) -> Self {
        Self {
            lane_count: lane_count.max(1),
        }
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn middle_lane(&self) -> usize {
        self.lane_count / 2
    }

    pub fn clamp(&self, lane: usize) -> usize {
        lane.min(self.lane_count - 1)
    }

    /// Lane after applying `gesture` to `current`. Moves at most one lane and
    /// stops at the outer lanes.
    pub fn apply_gesture(&self, current: usize, gesture: Gesture, threshold: f64) -> usize {
        let current = self.clamp(current);
        let next = match gesture.classify(threshold) {
            GestureKind::SwipeLeft => current.saturating_sub(1),
            GestureKind::SwipeRight => self.clamp(current + 1),
            GestureKind::SwipeUp | GestureKind::SwipeDown | GestureKind::Tap => current,
        };
        if next != current {
            debug!("lane change {} -> {}", current, next);
        }
        next
    }
}
