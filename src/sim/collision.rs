//! Collision geometry for the flyer hitbox
//!
//! The flyer is an axis-aligned square centered on its position. Obstacles
//! are solid columns with a single open band.

use glam::Vec2;

use super::state::{Collectible, Obstacle};
use crate::consts::{PICKUP_RADIUS, PRECISION_TOLERANCE};
use crate::{span_contains, spans_overlap};

/// The flyer's square hitbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub center: Vec2,
    pub half: f32,
}

impl Hitbox {
    pub fn new(center: Vec2, size: f32) -> Self {
        Self {
            center,
            half: size / 2.0,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half
    }
}

/// Whether the hitbox shares any horizontal extent with the obstacle column
pub fn overlaps_column(hitbox: &Hitbox, obstacle: &Obstacle, pipe_width: f32) -> bool {
    spans_overlap(
        hitbox.left(),
        hitbox.right(),
        obstacle.x,
        obstacle.right(pipe_width),
    )
}

/// Whether the hitbox fits entirely inside the obstacle's gap band
pub fn inside_gap(hitbox: &Hitbox, obstacle: &Obstacle, gap_height: f32) -> bool {
    let (top, bottom) = obstacle.gap_band(gap_height);
    span_contains(top, bottom, hitbox.top(), hitbox.bottom())
}

/// Flyer touches the solid part of an obstacle
pub fn hits_obstacle(hitbox: &Hitbox, obstacle: &Obstacle, pipe_width: f32, gap_height: f32) -> bool {
    overlaps_column(hitbox, obstacle, pipe_width) && !inside_gap(hitbox, obstacle, gap_height)
}

/// Obstacle's right edge is behind the flyer's left edge
pub fn has_passed(hitbox: &Hitbox, obstacle: &Obstacle, pipe_width: f32) -> bool {
    obstacle.right(pipe_width) < hitbox.left()
}

/// Flyer center is close enough to the gap center to extend a streak
#[inline]
pub fn is_precise(flyer_y: f32, gap_y: f32) -> bool {
    (flyer_y - gap_y).abs() <= PRECISION_TOLERANCE
}

/// Collectible is within pickup reach on both axes
pub fn within_pickup(hitbox: &Hitbox, collectible: &Collectible) -> bool {
    let d = (hitbox.center - collectible.pos).abs();
    d.x <= PICKUP_RADIUS && d.y <= PICKUP_RADIUS
}
