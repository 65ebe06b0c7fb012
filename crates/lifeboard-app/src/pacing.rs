use std::time::{Duration, Instant};

/// Fixed-rate tick clock for the event loop
pub struct FramePacer {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        let target_frametime = Duration::from_secs_f64(1. / fps.max(1) as f64);
        Self {
            target_frametime,
            frame_timer: Instant::now(),
            frametime_smoothed: target_frametime.as_secs_f64(),
        }
    }

    /// Smoothed ticks per second actually achieved
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// When the next tick is due
    pub fn deadline(&self) -> Instant {
        self.frame_timer + self.target_frametime
    }

    /// Start a new tick if the previous one has run its course
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> bool {
        let frametime = now.saturating_duration_since(self.frame_timer);
        if frametime < self.target_frametime {
            return false;
        }
        self.frametime_smoothed += (frametime.as_secs_f64() - self.frametime_smoothed) * 0.1;
        self.frame_timer = now;
        true
    }
}
