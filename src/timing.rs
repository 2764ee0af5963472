use std::time::{Duration, Instant};

/// Fixed-rate frame pacing
///
/// `tick()` sleeps until the next frame boundary. If the loop falls more
/// than a frame behind, the schedule restarts from now instead of trying to
/// catch up with a burst of zero-length frames.
pub struct FrameClock {
    frame: Duration,
    next_frame: Instant,
}

impl FrameClock {
    pub fn new(tick_rate: u32) -> Self {
        let frame = Duration::from_secs(1) / tick_rate.max(1);
        FrameClock {
            frame,
            next_frame: Instant::now() + frame,
        }
    }

    /// Blocks until the next frame boundary
    pub fn tick(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next_frame.checked_duration_since(now) {
            std::thread::sleep(remaining);
            self.next_frame += self.frame;
        } else {
            self.next_frame = now + self.frame;
        }
    }
}
