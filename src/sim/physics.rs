//! Flyer integration and pacing ramps

use super::config::Config;
use super::state::Snapshot;

/// Scroll speed after `dt` seconds of ramping
#[inline]
pub fn ramp_speed(speed: f32, config: &Config, dt: f32) -> f32 {
    (speed + config.speed_ramp * dt).clamp(config.base_speed, config.max_speed)
}

/// Gap height after `dt` seconds of shrinking (unchanged when shrinking is off)
#[inline]
pub fn shrink_gap(gap: f32, config: &Config, dt: f32) -> f32 {
    if config.gap_shrink_rate == 0.0 {
        return gap;
    }
    (gap - config.gap_shrink_rate * dt).clamp(config.min_gap, config.max_gap)
}

/// Apply gravity then velocity to the flyer.
///
/// Position is pinned to `[0, height - floor_padding]`; velocity is left
/// untouched so a pinned flyer leaves the edge as soon as velocity reverses.
pub fn integrate_flyer(snap: &mut Snapshot, config: &Config, height: f32, dt: f32) {
    let terminal = config.terminal_velocity;
    snap.flyer_vy = (snap.flyer_vy + config.gravity * dt).clamp(-terminal, terminal);

    let floor = (height - config.floor_padding).max(0.0);
    snap.flyer_y = (snap.flyer_y + snap.flyer_vy * dt).clamp(0.0, floor);
}

/// Run all physics sub-steps for one tick
pub fn step(snap: &mut Snapshot, config: &Config, height: f32, dt: f32) {
    snap.speed = ramp_speed(snap.speed, config, dt);
    snap.gap_height = shrink_gap(snap.gap_height, config, dt);
    integrate_flyer(snap, config, height, dt);
}
