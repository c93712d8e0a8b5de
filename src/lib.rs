//! Flap Sim - simulation core for a side-scrolling flap-to-avoid arcade game
//!
//! Core modules:
//! - `sim`: Simulation engine (physics, world scrolling, collisions, scoring)
//! - `clock`: Frame clock turning monotonic instants into tick deltas
//! - `host`: Frame loop binding an engine to a clock
//! - `autopilot`: Simple controller that flies toward the next gap

pub mod autopilot;
pub mod clock;
pub mod host;
pub mod sim;

pub use autopilot::Autopilot;
pub use clock::FrameClock;
pub use host::Host;
pub use sim::{Config, ConfigError, Engine, GameEvent, GamePhase, Snapshot};

/// Game constants that are not part of the tunable configuration
pub mod consts {
    /// Largest delta a frame clock will hand to the engine (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Distance behind the left edge an entity must pass before it is dropped
    pub const DESPAWN_MARGIN: f32 = 40.0;

    /// Max distance between flyer center and gap center for a precise pass
    pub const PRECISION_TOLERANCE: f32 = 12.0;
    /// Pickup reach on each axis
    pub const PICKUP_RADIUS: f32 = 18.0;

    /// Points for clearing an obstacle
    pub const OBSTACLE_POINTS: u64 = 1;
    /// Points for taking a collectible
    pub const COLLECTIBLE_POINTS: u64 = 3;

    /// Obstacles placed ahead of the screen when a run starts
    pub const INITIAL_OBSTACLES: usize = 4;
    /// Amplitude of the opening gap pattern (fraction of height)
    pub const INITIAL_GAP_SWING: f32 = 0.12;

    /// Random gap centers are drawn from [MIN, MAX] * height
    pub const GAP_CENTER_MIN_FRAC: f32 = 0.3;
    pub const GAP_CENTER_MAX_FRAC: f32 = 0.7;
}

/// Returns true if the spans [a_min, a_max] and [b_min, b_max] overlap (touching edges don't count)
#[inline]
pub fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_min < b_max && b_min < a_max
}

/// Returns true if [inner_min, inner_max] lies fully inside [outer_min, outer_max]
#[inline]
pub fn span_contains(outer_min: f32, outer_max: f32, inner_min: f32, inner_max: f32) -> bool {
    inner_min >= outer_min && inner_max <= outer_max
}
