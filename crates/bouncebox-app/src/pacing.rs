//! Best-effort frame rate cap.
//!
//! The pacer does not try to catch up: the next deadline is always one period
//! after the *start* of the latest frame, so a late frame delays every
//! following frame instead of triggering a burst.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    next: Option<Instant>,
    frame_index: u64,
}

impl FramePacer {
    /// A pacer targeting `frame_rate` frames per second. Zero is treated as one.
    pub fn new(frame_rate: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / frame_rate.max(1),
            next: None,
            frame_index: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Deadline of the next frame, `None` before the first frame.
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Number of frames started so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Whether a new frame may start at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next.is_none_or(|next| now >= next)
    }

    /// Record the start of a frame at `now` and schedule the next one.
    pub fn begin_frame(&mut self, now: Instant) {
        self.next = Some(now + self.period);
        self.frame_index = self.frame_index.wrapping_add(1);
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(60)
    }
}
