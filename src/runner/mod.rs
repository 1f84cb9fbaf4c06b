//! Lane runner core.
//!
//! The player swipes between a handful of lanes on a road drawn in fake
//! perspective, dodging obstacles and picking up coins while the score
//! climbs. Everything in here is plain data plus functions over it; drawing,
//! audio and input capture belong to the host.

/// Generate the standard `ALL`, `from_index()`, `from_name()` and `name()`
/// methods for a four-variant difficulty enum.
macro_rules! difficulty_enum_impl {
    ($name:ident) => {
        impl $name {
            pub const ALL: [$name; 4] = [
                $name::Novice,
                $name::Apprentice,
                $name::Journeyman,
                $name::Master,
            ];

            pub fn from_index(index: usize) -> Self {
                Self::ALL.get(index).copied().unwrap_or($name::Novice)
            }

            /// Case-insensitive lookup by name or numeric index.
            pub fn from_name(name: &str) -> Option<Self> {
                if let Ok(index) = name.parse::<usize>() {
                    return Self::ALL.get(index).copied();
                }
                Self::ALL
                    .iter()
                    .copied()
                    .find(|d| d.name().eq_ignore_ascii_case(name))
            }

            pub fn name(&self) -> &'static str {
                match self {
                    Self::Novice => "Novice",
                    Self::Apprentice => "Apprentice",
                    Self::Journeyman => "Journeyman",
                    Self::Master => "Master",
                }
            }
        }
    };
}

pub mod collision;
pub mod lanes;
pub mod logic;
pub mod motion;
pub mod projection;
pub mod snapshot;
pub mod spawner;
pub mod types;

pub use collision::{check_collisions, CollisionReport, HitboxConfig};
pub use lanes::{Gesture, GestureKind, GestureTracker, LaneController};
pub use logic::{process_input, restart, tick_session, RunEvent, RunnerInput};
pub use motion::advance;
pub use projection::{Projected, Projector, ProjectorConfig};
pub use snapshot::{EntityView, FrameSnapshot};
pub use spawner::Spawner;
pub use types::*;
