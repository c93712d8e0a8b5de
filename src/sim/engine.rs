//! Simulation engine: lifecycle control and owned state
//!
//! The engine is the only writer of its [`Snapshot`]. Hosts call the control
//! verbs and [`Engine::tick`] from a single thread and read the snapshot back.

use glam::Vec2;

use super::collision::Hitbox;
use super::config::{Config, ConfigError};
use super::events::{GameEvent, Listeners};
use super::state::{GamePhase, Snapshot};
use super::world::Spawner;

/// The flap game state machine
#[derive(Debug)]
pub struct Engine {
    pub(super) config: Config,
    pub(super) width: f32,
    pub(super) height: f32,
    seed: u64,
    pub(super) snapshot: Snapshot,
    pub(super) spawner: Spawner,
    pub(super) events: Vec<GameEvent>,
    listeners: Listeners,
}

impl Engine {
    /// Create an engine for a visible area of `width` x `height`.
    ///
    /// Uses `config.seed` when present, otherwise a random seed.
    pub fn new(width: f32, height: f32, config: Config) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_seed(width, height, config, seed)
    }

    /// Create an engine with an explicit RNG seed
    pub fn with_seed(width: f32, height: f32, config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "visible area must be positive, got {width}x{height}"
            )));
        }

        log::debug!("Engine created ({width}x{height}, seed {seed})");
        let snapshot = Snapshot::ready(height, config.base_speed, config.initial_gap());
        Ok(Self {
            config,
            width,
            height,
            seed,
            snapshot,
            spawner: Spawner::new(seed),
            events: Vec::new(),
            listeners: Listeners::default(),
        })
    }

    // === Read surface ===

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn phase(&self) -> GamePhase {
        self.snapshot.phase
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Horizontal position of the flyer center
    pub fn flyer_x(&self) -> f32 {
        self.width * self.config.flyer_x_fraction
    }

    /// Current flyer hitbox
    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(
            Vec2::new(self.flyer_x(), self.snapshot.flyer_y),
            self.config.flyer_size,
        )
    }

    // === Control surface ===

    /// Begin a new run from `Ready` or `GameOver`
    pub fn start(&mut self) {
        match self.snapshot.phase {
            GamePhase::Ready | GamePhase::GameOver => {}
            phase => {
                log::debug!("start() ignored in {phase:?}");
                return;
            }
        }

        self.snapshot = self.fresh_snapshot();
        self.spawner
            .spawn_initial(&mut self.snapshot, &self.config, self.width, self.height);
        self.snapshot.phase = GamePhase::Running;
        log::info!("Run started ({} obstacles queued)", self.snapshot.obstacles.len());
    }

    /// Freeze a running game
    pub fn pause(&mut self) {
        if self.snapshot.phase == GamePhase::Running {
            self.snapshot.phase = GamePhase::Paused;
            log::debug!("Paused at {:.2}s", self.snapshot.elapsed);
        }
    }

    /// Continue a paused game
    pub fn resume(&mut self) {
        if self.snapshot.phase == GamePhase::Paused {
            self.snapshot.phase = GamePhase::Running;
            log::debug!("Resumed at {:.2}s", self.snapshot.elapsed);
        }
    }

    /// Return to `Ready` from any phase, discarding the current run
    pub fn reset(&mut self) {
        self.snapshot = self.fresh_snapshot();
        log::debug!("Reset to ready");
    }

    /// Set upward velocity (running only). Repeated flaps don't stack.
    pub fn flap(&mut self) {
        if self.snapshot.phase == GamePhase::Running {
            self.snapshot.flyer_vy = self.config.flap_velocity();
        }
    }

    // === Events ===

    /// Register the game-over callback (receives the final score)
    pub fn on_game_over(&mut self, f: impl FnMut(u64) + 'static) {
        self.listeners.set_game_over(f);
    }

    /// Register the collectible pickup callback
    pub fn on_collectible_pickup(&mut self, f: impl FnMut() + 'static) {
        self.listeners.set_pickup(f);
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hand queued events to the registered listeners
    pub fn dispatch_events(&mut self) {
        let events = std::mem::take(&mut self.events);
        for event in &events {
            self.listeners.notify(event);
        }
    }

    fn fresh_snapshot(&self) -> Snapshot {
        Snapshot::ready(self.height, self.config.base_speed, self.config.initial_gap())
    }

    #[cfg(test)]
    pub(crate) fn snapshot_mut(&mut self) -> &mut Snapshot {
        &mut self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const W: f32 = 480.0;
    const H: f32 = 640.0;

    fn engine() -> Engine {
        Engine::with_seed(W, H, Config::default(), 12345).expect("valid config")
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        let snap = engine.snapshot();
        assert_eq!(snap.phase, GamePhase::Ready);
        assert_eq!(snap.flyer_y, H * 0.5);
        assert!(snap.obstacles.is_empty());
        assert!(snap.collectibles.is_empty());
        assert_eq!(snap.score, 0);
        assert_eq!(snap.streak, 0);
        assert_eq!(snap.elapsed, 0.0);
    }

    #[test]
    fn test_start_prespawns() {
        let mut engine = engine();
        engine.start();
        assert_eq!(engine.phase(), GamePhase::Running);
        assert_eq!(engine.snapshot().obstacles.len(), crate::consts::INITIAL_OBSTACLES);
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut engine = engine();
        engine.start();
        engine.tick(0.1);
        let elapsed = engine.snapshot().elapsed;
        engine.start();
        assert_eq!(engine.snapshot().elapsed, elapsed);
    }

    #[test]
    fn test_pause_resume_transitions() {
        let mut engine = engine();
        // Invalid source states are no-ops
        engine.pause();
        assert_eq!(engine.phase(), GamePhase::Ready);
        engine.resume();
        assert_eq!(engine.phase(), GamePhase::Ready);

        engine.start();
        engine.resume();
        assert_eq!(engine.phase(), GamePhase::Running);
        engine.pause();
        assert_eq!(engine.phase(), GamePhase::Paused);
        engine.pause();
        assert_eq!(engine.phase(), GamePhase::Paused);
        engine.resume();
        assert_eq!(engine.phase(), GamePhase::Running);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut engine = engine();
        engine.start();
        engine.snapshot_mut().flyer_vy = 700.0;
        engine.flap();
        assert_eq!(engine.snapshot().flyer_vy, -520.0);

        engine.snapshot_mut().flyer_vy = -100.0;
        engine.flap();
        engine.flap();
        assert_eq!(engine.snapshot().flyer_vy, -520.0);
    }

    #[test]
    fn test_flap_ignored_outside_running() {
        let mut engine = engine();
        engine.flap();
        assert_eq!(engine.snapshot().flyer_vy, 0.0);

        engine.start();
        engine.pause();
        engine.flap();
        assert_eq!(engine.snapshot().flyer_vy, 0.0);
    }

    #[test]
    fn test_reset_from_every_phase() {
        let initial = engine().snapshot().clone();

        let mut engine = engine();
        engine.reset();
        assert_eq!(engine.snapshot(), &initial);

        engine.start();
        engine.tick(0.05);
        engine.reset();
        assert_eq!(engine.snapshot(), &initial);

        engine.start();
        engine.pause();
        engine.reset();
        assert_eq!(engine.snapshot(), &initial);

        engine.start();
        engine.snapshot_mut().phase = GamePhase::GameOver;
        engine.reset();
        assert_eq!(engine.snapshot(), &initial);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut engine = engine();
        engine.start();
        engine.snapshot_mut().score = 9;
        engine.snapshot_mut().phase = GamePhase::GameOver;
        engine.start();
        assert_eq!(engine.phase(), GamePhase::Running);
        assert_eq!(engine.snapshot().score, 0);
    }

    #[test]
    fn test_ids_unique_across_runs() {
        let mut engine = engine();
        engine.start();
        let first: Vec<u64> = engine.snapshot().obstacles.iter().map(|o| o.id).collect();
        engine.reset();
        engine.start();
        let second: Vec<u64> = engine.snapshot().obstacles.iter().map(|o| o.id).collect();
        assert!(first.iter().all(|id| !second.contains(id)));
    }

    #[test]
    fn test_invalid_area_rejected() {
        assert!(Engine::with_seed(0.0, H, Config::default(), 1).is_err());
        assert!(Engine::with_seed(W, f32::NAN, Config::default(), 1).is_err());
    }

    #[test]
    fn test_dispatch_reaches_listeners() {
        let mut engine = engine();
        let over = Rc::new(Cell::new(None));
        let o = over.clone();
        engine.on_game_over(move |score| o.set(Some(score)));

        engine.events.push(GameEvent::GameOver { final_score: 4 });
        // Nothing delivered until the host dispatches
        assert_eq!(over.get(), None);
        engine.dispatch_events();
        assert_eq!(over.get(), Some(4));
        assert!(engine.drain_events().is_empty());
    }
}
