//! Frame timing
//!
//! Turns a monotonic "seconds since start" reading into per-frame delta time.

/// Derives Δt by subtracting consecutive clock readings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last: f64,
    frames: u64,
}

impl FrameClock {
    /// Clock whose first tick measures from zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock whose first tick measures from `elapsed`.
    pub fn starting_at(elapsed: f64) -> Self {
        Self {
            last: elapsed,
            frames: 0,
        }
    }

    /// Record a reading and return the seconds since the previous one.
    ///
    /// Never negative: a reading older than the last one yields 0.
    pub fn tick(&mut self, elapsed: f64) -> f32 {
        let dt = (elapsed - self.last).max(0.0);
        self.last = self.last.max(elapsed);
        self.frames += 1;
        dt as f32
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Last reading, in seconds since start.
    pub fn elapsed(&self) -> f64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_subtracts_readings() {
        let mut clock = FrameClock::new();
        assert!((clock.tick(0.5) - 0.5).abs() < 1e-6);
        assert!((clock.tick(0.75) - 0.25).abs() < 1e-6);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn test_tick_never_negative() {
        let mut clock = FrameClock::starting_at(10.0);
        assert_eq!(clock.tick(9.0), 0.0);
        assert_eq!(clock.elapsed(), 10.0);
        assert!((clock.tick(10.1) - 0.1).abs() < 1e-5);
    }
}
