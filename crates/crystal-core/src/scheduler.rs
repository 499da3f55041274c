use crate::constants::MAX_FRAME_DT_SEC;
use crate::input::InputState;
use instant::Instant;

/// A per-frame animation driver.
///
/// The host calls `advance` exactly once per display refresh with the time
/// since the previous call and a read-only view of the latest input. Drivers
/// keep no timers of their own.
pub trait Animator {
    fn advance(&mut self, dt_sec: f32, input: &InputState);
}

/// Wall-clock frame timer producing clamped frame deltas.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last: Instant,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame: 0,
        }
    }

    /// Seconds since the previous tick, clamped to [0, `MAX_FRAME_DT_SEC`].
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        self.frame += 1;
        clamp_dt(dt.as_secs_f32())
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
pub fn clamp_dt(dt_sec: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_is_clamped() {
        assert_eq!(clamp_dt(5.0), MAX_FRAME_DT_SEC);
        assert_eq!(clamp_dt(-1.0), 0.0);
        assert_eq!(clamp_dt(f32::NAN), 0.0);
        assert_eq!(clamp_dt(0.016), 0.016);
    }

    #[test]
    fn clock_counts_frames() {
        let mut clock = FrameClock::new();
        let dt = clock.tick();
        assert!(dt >= 0.0 && dt <= MAX_FRAME_DT_SEC);
        assert_eq!(clock.frame(), 1);
    }
}
