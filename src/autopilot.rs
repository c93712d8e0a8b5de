//! Autopilot - flies toward the next gap
//!
//! Used by the headless demo and for soak testing. It only ever calls
//! `Engine::flap`, the same action a player has.

use crate::sim::Engine;

/// Flap-when-low controller
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// How far below the gap center to aim (a flap rises well above it)
    pub aim_offset: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { aim_offset: 20.0 }
    }
}

impl Autopilot {
    /// Vertical position the flyer should hover around
    pub fn target_y(&self, engine: &Engine) -> f32 {
        let snap = engine.snapshot();
        let hitbox = engine.hitbox();
        let gap_y = snap
            .next_obstacle(hitbox.left(), engine.config().pipe_width)
            .map(|o| o.gap_y)
            .unwrap_or(engine.height() * 0.5);
        gap_y + self.aim_offset
    }

    /// Flap once the flyer sinks below the target while falling
    pub fn should_flap(&self, engine: &Engine) -> bool {
        let snap = engine.snapshot();
        snap.is_running() && snap.flyer_vy >= 0.0 && snap.flyer_y > self.target_y(engine)
    }

    /// Flap if needed; returns whether it did
    pub fn drive(&self, engine: &mut Engine) -> bool {
        let flap = self.should_flap(engine);
        if flap {
            engine.flap();
        }
        flap
    }
}
