//! Host frame loop
//!
//! Owns an [`Engine`] and the [`FrameClock`] that drives it. The presentation
//! layer calls [`Host::frame`] from its render callback and draws whatever
//! snapshot comes back.

use std::time::Instant;

use crate::clock::FrameClock;
use crate::sim::{Engine, GamePhase, Snapshot};

#[derive(Debug)]
pub struct Host {
    engine: Engine,
    clock: FrameClock,
}

impl Host {
    pub fn new(engine: Engine) -> Self {
        Self::with_clock(engine, FrameClock::new())
    }

    pub fn with_clock(engine: Engine, clock: FrameClock) -> Self {
        Self { engine, clock }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.engine.snapshot()
    }

    pub fn is_clock_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Start a run and begin delivering frames from `now`
    pub fn start(&mut self, now: Instant) {
        self.engine.start();
        if self.engine.phase() == GamePhase::Running {
            self.clock.start(now);
        }
    }

    /// Advance one frame.
    ///
    /// Returns the new snapshot, or `None` when the clock is stopped. Events
    /// produced by the tick are dispatched after it completes; the clock stops
    /// once the run ends.
    pub fn frame(&mut self, now: Instant) -> Option<&Snapshot> {
        let dt = self.clock.frame(now)?;
        self.engine.tick(dt);
        self.engine.dispatch_events();

        if self.engine.phase() == GamePhase::GameOver {
            self.clock.stop();
        }
        Some(self.engine.snapshot())
    }

    pub fn flap(&mut self) {
        self.engine.flap();
    }

    /// Pause the engine and halt the clock
    pub fn pause(&mut self) {
        self.engine.pause();
        if self.engine.phase() == GamePhase::Paused {
            self.clock.stop();
        }
    }

    /// Resume the engine with a fresh clock reference at `now`
    pub fn resume(&mut self, now: Instant) {
        self.engine.resume();
        if self.engine.phase() == GamePhase::Running {
            self.clock.start(now);
        }
    }

    /// Return to ready and stop the clock
    pub fn reset(&mut self) {
        self.engine.reset();
        self.clock.stop();
    }
}
