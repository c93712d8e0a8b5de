//! Variable-delta simulation tick
//!
//! One call advances physics, scrolls the world, then evaluates collisions
//! and scoring against the resulting positions.

use super::collision::{self, Hitbox};
use super::config::Config;
use super::engine::Engine;
use super::events::GameEvent;
use super::state::{GamePhase, Snapshot};
use super::{physics, world};
use crate::consts::{COLLECTIBLE_POINTS, OBSTACLE_POINTS};

/// Replace unusable deltas with zero
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid tick delta {dt}");
        0.0
    }
}

impl Engine {
    /// Advance the simulation by `dt` seconds.
    ///
    /// Does nothing unless the game is running. Callers should keep `dt`
    /// small (one frame); at most one obstacle spawns per call.
    pub fn tick(&mut self, dt: f32) -> &Snapshot {
        if self.snapshot.phase != GamePhase::Running {
            return &self.snapshot;
        }
        let dt = sanitize_dt(dt);

        self.snapshot.elapsed += dt;
        physics::step(&mut self.snapshot, &self.config, self.height, dt);
        world::step(
            &mut self.snapshot,
            &mut self.spawner,
            &self.config,
            self.width,
            self.height,
            dt,
        );

        let hitbox = self.hitbox();
        if evaluate(&mut self.snapshot, &hitbox, &self.config, &mut self.events) {
            self.snapshot.phase = GamePhase::GameOver;
            let final_score = self.snapshot.score;
            self.events.push(GameEvent::GameOver { final_score });
            log::info!(
                "Game over: score {} after {:.2}s",
                final_score,
                self.snapshot.elapsed
            );
        }

        &self.snapshot
    }
}

/// Check collisions, then award points.
///
/// Returns true on collision, in which case nothing is scored.
pub fn evaluate(
    snap: &mut Snapshot,
    hitbox: &Hitbox,
    config: &Config,
    events: &mut Vec<GameEvent>,
) -> bool {
    let gap_height = snap.gap_height;
    let collided = snap
        .obstacles
        .iter()
        .any(|o| collision::hits_obstacle(hitbox, o, config.pipe_width, gap_height));
    if collided {
        return true;
    }

    for obstacle in snap.obstacles.iter_mut() {
        if obstacle.scored || !collision::has_passed(hitbox, obstacle, config.pipe_width) {
            continue;
        }
        obstacle.scored = true;
        snap.score += OBSTACLE_POINTS;

        let precise = collision::is_precise(hitbox.center.y, obstacle.gap_y);
        snap.streak = if precise { snap.streak + 1 } else { 0 };
        events.push(GameEvent::ObstaclePassed {
            id: obstacle.id,
            precise,
        });
    }

    for collectible in snap.collectibles.iter_mut() {
        if collectible.taken || !collision::within_pickup(hitbox, collectible) {
            continue;
        }
        collectible.taken = true;
        snap.score += COLLECTIBLE_POINTS;
        events.push(GameEvent::CollectibleTaken { id: collectible.id });
    }

    false
}
