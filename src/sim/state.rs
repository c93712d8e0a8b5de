//! Snapshot and entity types
//!
//! Everything the host may read each frame lives in [`Snapshot`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for start; no entities
    #[default]
    Ready,
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
    /// Run ended by a collision
    GameOver,
}

/// A vertical barrier with a passable gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u64,
    /// Left edge
    pub x: f32,
    /// Vertical center of the gap
    pub gap_y: f32,
    /// Set once the flyer has fully passed this obstacle
    pub scored: bool,
}

impl Obstacle {
    pub fn new(id: u64, x: f32, gap_y: f32) -> Self {
        Self {
            id,
            x,
            gap_y,
            scored: false,
        }
    }

    #[inline]
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Top and bottom of the gap band for a given gap height
    #[inline]
    pub fn gap_band(&self, gap_height: f32) -> (f32, f32) {
        let half = gap_height / 2.0;
        (self.gap_y - half, self.gap_y + half)
    }
}

/// A bonus pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u64,
    pub pos: Vec2,
    pub taken: bool,
}

impl Collectible {
    pub fn new(id: u64, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            taken: false,
        }
    }
}

/// Externally visible simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    /// Flyer hitbox center (y grows downward)
    pub flyer_y: f32,
    pub flyer_vy: f32,
    /// Sorted by x, leftmost first
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
    pub score: u64,
    /// Consecutive precise passes
    pub streak: u32,
    /// Simulated seconds in the current run
    pub elapsed: f32,
    /// Current scroll speed
    pub speed: f32,
    /// Current gap height
    pub gap_height: f32,
}

impl Snapshot {
    /// Initial state for a screen of the given height
    pub fn ready(height: f32, speed: f32, gap_height: f32) -> Self {
        Self {
            phase: GamePhase::Ready,
            flyer_y: height * 0.5,
            flyer_vy: 0.0,
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            score: 0,
            streak: 0,
            elapsed: 0.0,
            speed,
            gap_height,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Rightmost obstacle (last in the sequence)
    pub fn rightmost_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }

    /// First obstacle whose right edge is still ahead of `left_edge`
    pub fn next_obstacle(&self, left_edge: f32, pipe_width: f32) -> Option<&Obstacle> {
        self.obstacles
            .iter()
            .find(|o| o.right(pipe_width) >= left_edge)
    }
}
