//! Obstacle and collectible scrolling, recycling and spawning

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::config::Config;
use super::state::{Collectible, Obstacle, Snapshot};
use crate::consts::*;

/// Seeded source of entity ids and gap placement
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    next_id: u64,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID (never reused)
    pub fn next_entity_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place the opening obstacles ahead of the screen.
    ///
    /// Gap centers follow a fixed sine pattern so every run opens the same way.
    pub fn spawn_initial(&mut self, snap: &mut Snapshot, config: &Config, width: f32, height: f32) {
        let start_x = width + config.spawn_offset;
        for i in 0..INITIAL_OBSTACLES {
            let phase = i as f32 * std::f32::consts::FRAC_PI_2;
            let gap_y = height * (0.5 + INITIAL_GAP_SWING * phase.sin());
            let x = start_x + i as f32 * config.pipe_spacing;
            let id = self.next_entity_id();
            snap.obstacles.push(Obstacle::new(id, x, gap_y));
        }
    }

    /// Append one obstacle once the rightmost one has scrolled on screen.
    ///
    /// Returns true if something was spawned.
    pub fn maybe_spawn(&mut self, snap: &mut Snapshot, config: &Config, width: f32, height: f32) -> bool {
        let spawn_floor = width + config.spawn_offset;
        let x = match snap.rightmost_obstacle() {
            None => spawn_floor,
            Some(last) if last.x < width => (last.x + config.pipe_spacing).max(spawn_floor),
            Some(_) => return false,
        };

        let gap_y = self
            .rng
            .random_range(height * GAP_CENTER_MIN_FRAC..=height * GAP_CENTER_MAX_FRAC);
        let id = self.next_entity_id();
        snap.obstacles.push(Obstacle::new(id, x, gap_y));

        if self.rng.random_bool(config.stamp_chance) {
            let pos = Vec2::new(x + config.pipe_width + config.pipe_spacing * 0.5, gap_y);
            let id = self.next_entity_id();
            snap.collectibles.push(Collectible::new(id, pos));
        }
        true
    }
}

/// Move every entity left by `speed * dt`
pub fn scroll(snap: &mut Snapshot, dt: f32) {
    let dx = snap.speed * dt;
    for obstacle in &mut snap.obstacles {
        obstacle.x -= dx;
    }
    for collectible in &mut snap.collectibles {
        collectible.pos.x -= dx;
    }
}

/// Drop entities that have moved past the despawn margin
pub fn recycle(snap: &mut Snapshot, pipe_width: f32) {
    snap.obstacles
        .retain(|o| o.right(pipe_width) >= -DESPAWN_MARGIN);
    snap.collectibles.retain(|c| c.pos.x >= -DESPAWN_MARGIN);
}

/// Run all world sub-steps for one tick
pub fn step(
    snap: &mut Snapshot,
    spawner: &mut Spawner,
    config: &Config,
    width: f32,
    height: f32,
    dt: f32,
) {
    scroll(snap, dt);
    recycle(snap, config.pipe_width);
    if spawner.maybe_spawn(snap, config, width, height) {
        log::trace!("Spawned obstacle, {} on track", snap.obstacles.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 480.0;
    const H: f32 = 640.0;

    fn empty() -> Snapshot {
        Snapshot::ready(H, 260.0, 240.0)
    }

    #[test]
    fn test_initial_pattern_is_deterministic() {
        let config = Config::default();
        let mut a = empty();
        let mut b = empty();
        Spawner::new(1).spawn_initial(&mut a, &config, W, H);
        Spawner::new(999).spawn_initial(&mut b, &config, W, H);

        assert_eq!(a.obstacles.len(), INITIAL_OBSTACLES);
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.x, ob.x);
            assert_eq!(oa.gap_y, ob.gap_y);
        }
        assert!((a.obstacles[0].gap_y - 320.0).abs() < 1e-3);
        assert!(a.obstacles[1].gap_y > 320.0);
        assert!(a.obstacles[3].gap_y < 320.0);
        // All start off screen, in ascending order
        assert!(a.obstacles.windows(2).all(|w| w[0].x < w[1].x));
        assert!(a.obstacles[0].x > W);
    }

    #[test]
    fn test_spawn_when_empty() {
        let config = Config::default();
        let mut snap = empty();
        let mut spawner = Spawner::new(7);
        assert!(spawner.maybe_spawn(&mut snap, &config, W, H));
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].x, W + config.spawn_offset);
    }

    #[test]
    fn test_no_spawn_while_rightmost_offscreen() {
        let config = Config::default();
        let mut snap = empty();
        snap.obstacles.push(Obstacle::new(1, W + 10.0, 320.0));
        let mut spawner = Spawner::new(7);
        assert!(!spawner.maybe_spawn(&mut snap, &config, W, H));
        assert_eq!(snap.obstacles.len(), 1);
    }

    #[test]
    fn test_spawn_spacing_and_gap_range() {
        let config = Config {
            stamp_chance: 0.0,
            ..Default::default()
        };
        let mut spawner = Spawner::new(3);
        for _ in 0..50 {
            let mut snap = empty();
            snap.obstacles.push(Obstacle::new(1, W - 1.0, 320.0));
            assert!(spawner.maybe_spawn(&mut snap, &config, W, H));
            let new = &snap.obstacles[1];
            assert_eq!(new.x, W - 1.0 + config.pipe_spacing);
            assert!(new.gap_y >= H * GAP_CENTER_MIN_FRAC && new.gap_y <= H * GAP_CENTER_MAX_FRAC);
            assert!(snap.collectibles.is_empty());
        }
    }

    #[test]
    fn test_spawn_floor_wins_over_stale_rightmost() {
        let config = Config::default();
        let mut snap = empty();
        snap.obstacles.push(Obstacle::new(1, -20.0, 320.0));
        Spawner::new(3).maybe_spawn(&mut snap, &config, W, H);
        assert_eq!(snap.obstacles[1].x, W + config.spawn_offset);
    }

    #[test]
    fn test_collectible_follows_obstacle() {
        let config = Config {
            stamp_chance: 1.0,
            ..Default::default()
        };
        let mut snap = empty();
        Spawner::new(5).maybe_spawn(&mut snap, &config, W, H);
        assert_eq!(snap.collectibles.len(), 1);
        let o = &snap.obstacles[0];
        let c = &snap.collectibles[0];
        assert!(c.pos.x > o.right(config.pipe_width));
        assert_eq!(c.pos.y, o.gap_y);
        assert_ne!(c.id, o.id);
    }

    #[test]
    fn test_scroll_and_recycle() {
        let mut snap = empty();
        snap.obstacles.push(Obstacle::new(1, -100.0, 320.0));
        snap.obstacles.push(Obstacle::new(2, 50.0, 320.0));
        snap.collectibles.push(Collectible::new(3, Vec2::new(-30.0, 300.0)));

        scroll(&mut snap, 0.1); // 26 units
        recycle(&mut snap, 72.0);

        // Obstacle 1 right edge at -54 is gone, obstacle 2 stays
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].id, 2);
        assert!((snap.obstacles[0].x - 24.0).abs() < 1e-3);
        // Collectible at -56 is gone
        assert!(snap.collectibles.is_empty());
    }

    #[test]
    fn test_ids_never_reused() {
        let mut spawner = Spawner::new(0);
        let a = spawner.next_entity_id();
        let b = spawner.next_entity_id();
        assert!(b > a);
    }
}
