use web_time::{Duration, Instant};

/// Frame timing with delta time, FPS calculation and optional frame limiting
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Longest step [`tick`](Self::tick) reports, in seconds (0 = no cap)
    max_delta: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
            max_delta: 0.0,
        }
    }

    /// Cap the step returned by [`tick`](Self::tick) at `max_delta`
    /// seconds. Zero or negative disables the cap.
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta.max(0.0);
        self
    }

    /// Returns true if enough time has passed since the last frame to
    /// render again.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Mark the start of a new frame and return the seconds elapsed since
    /// the previous one. Uncapped unless a maximum step was configured.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed.as_secs_f32())
    }

    /// Fold one frame time into the FPS average and return the step.
    fn record(&mut self, frame_time: f32) -> f32 {
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        if self.max_delta > 0.0 {
            frame_time.min(self.max_delta)
        } else {
            frame_time
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        assert!(FrameTiming::new(0).should_render());
    }

    #[test]
    fn limited_waits_for_frame_budget() {
        let timing = FrameTiming::new(1);
        // One frame per second: the budget cannot have elapsed yet
        assert!(!timing.should_render());
    }

    #[test]
    fn tick_reports_small_positive_delta() {
        let mut timing = FrameTiming::new(0);
        let dt = timing.tick();
        assert!((0.0..1.0).contains(&dt));
    }

    #[test]
    fn long_stalls_pass_through_by_default() {
        let mut timing = FrameTiming::new(0);
        assert_eq!(timing.record(3.0), 3.0);
        assert_eq!(timing.record(0.016), 0.016);
    }

    #[test]
    fn configured_cap_limits_long_stalls() {
        let mut timing = FrameTiming::new(0).with_max_delta(0.25);
        assert_eq!(timing.record(3.0), 0.25);
        assert_eq!(timing.record(0.016), 0.016);
    }

    #[test]
    fn stalled_tick_reports_wall_clock_time() {
        let mut timing = FrameTiming::new(0);
        let _ = timing.tick();
        std::thread::sleep(Duration::from_millis(300));
        assert!(timing.tick() >= 0.3);
    }

    #[test]
    fn fps_converges_toward_frame_rate() {
        let mut timing = FrameTiming::new(0);
        for _ in 0..400 {
            let _ = timing.record(1.0 / 30.0);
        }
        assert!((timing.fps() - 30.0).abs() < 0.5);
    }
}
