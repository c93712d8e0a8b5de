//! Frame clock
//!
//! Turns monotonic timestamps from the host's frame callback into tick deltas.
//! A stopped clock yields nothing, and restarting it discards the time spent
//! stopped so the first frame after a resume measures only the time since.

use std::time::Instant;

use crate::consts::MAX_FRAME_DT;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_dt(MAX_FRAME_DT)
    }

    /// Clock that never reports more than `max_dt` seconds per frame
    pub fn with_max_dt(max_dt: f32) -> Self {
        Self { last: None, max_dt }
    }

    /// (Re)start measuring from `now`
    pub fn start(&mut self, now: Instant) {
        self.last = Some(now);
    }

    /// Stop delivering frames until the next `start`
    pub fn stop(&mut self) {
        self.last = None;
    }

    pub fn is_running(&self) -> bool {
        self.last.is_some()
    }

    /// Seconds since the previous frame, or `None` while stopped.
    ///
    /// Timestamps earlier than the previous frame yield 0.
    pub fn frame(&mut self, now: Instant) -> Option<f32> {
        let last = self.last?;
        self.last = Some(now);
        let dt = now.saturating_duration_since(last).as_secs_f32();
        Some(dt.min(self.max_dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_stopped_clock_yields_nothing() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame(Instant::now()), None);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_frame_deltas() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new();
        clock.start(t0);
        let dt = clock.frame(t0 + Duration::from_millis(16)).expect("running");
        assert!((dt - 0.016).abs() < 1e-6);
        let dt = clock.frame(t0 + Duration::from_millis(33)).expect("running");
        assert!((dt - 0.017).abs() < 1e-6);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new();
        clock.start(t0);
        assert_eq!(clock.frame(t0 + Duration::from_secs(3)), Some(MAX_FRAME_DT));
    }

    #[test]
    fn test_restart_discards_stopped_time() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new();
        clock.start(t0);
        clock.stop();
        assert_eq!(clock.frame(t0 + Duration::from_secs(5)), None);

        clock.start(t0 + Duration::from_secs(10));
        let dt = clock
            .frame(t0 + Duration::from_secs(10) + Duration::from_millis(20))
            .expect("running");
        assert!((dt - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_timestamp_is_zero() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new();
        clock.start(t0 + Duration::from_millis(50));
        assert_eq!(clock.frame(t0), Some(0.0));
    }
}
