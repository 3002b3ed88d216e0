use std::time::Duration;

use super::ticker::{Animation, Frame};

/// Default length of a count-up.
pub const COUNTER_DURATION: Duration = Duration::from_millis(1000);

/// Counts from zero up to a target with ease-out-quart easing.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    duration: Duration,
    started_at: Option<Duration>,
    value: u64,
}

impl CounterAnimation {
    /// Counts up to `target` over [`COUNTER_DURATION`].
    pub fn new(target: u64) -> Self {
        Self::with_duration(target, COUNTER_DURATION)
    }

    /// Counts up to `target` over `duration`.
    pub fn with_duration(target: u64, duration: Duration) -> Self {
        Self { target, duration, started_at: None, value: 0 }
    }

    /// The value to display for the most recent frame.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The final value.
    pub fn target(&self) -> u64 {
        self.target
    }
}

fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

impl Animation for CounterAnimation {
    fn tick(&mut self, now: Duration) -> Frame {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(started_at);

        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };

        if progress >= 1.0 {
            self.value = self.target;
            return Frame::Finished;
        }

        self.value = (self.target as f64 * ease_out_quart(progress)).floor() as u64;
        Frame::Continue
    }
}
