use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Result of advancing an animation by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Keep stepping.
    Continue,
    /// Done; the ticker stops.
    Finished,
}

/// Anything that advances once per display frame.
pub trait Animation {
    /// Advance to `now`, measured from an arbitrary fixed origin.
    fn tick(&mut self, now: Duration) -> Frame;
}

/// Steps an [`Animation`] while running.
///
/// The caller supplies the timestamp of every frame, so tests can step the
/// animation deterministically. [`drive`] feeds it from a real clock.
#[derive(Debug)]
pub struct Ticker<A> {
    animation: A,
    running: bool,
    frames: u64,
}

impl<A: Animation> Ticker<A> {
    /// A stopped ticker.
    pub fn new(animation: A) -> Self {
        Self { animation, running: false, frames: 0 }
    }

    /// Starts stepping on the next frame.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops stepping.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether [`Ticker::step`] will advance the animation.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of frames stepped since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one frame if started. Stops itself once the animation finishes.
    pub fn step(&mut self, now: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.frames += 1;
        if self.animation.tick(now) == Frame::Finished {
            self.running = false;
        }
        true
    }

    /// The animation being driven.
    pub fn animation(&self) -> &A {
        &self.animation
    }

    /// Mutable access to the animation being driven.
    pub fn animation_mut(&mut self) -> &mut A {
        &mut self.animation
    }
}

/// Steps `ticker` every `frame` until it stops or `cancel` fires.
pub async fn drive<A: Animation>(
    ticker: &mut Ticker<A>,
    frame: Duration,
    cancel: CancellationToken,
) {
    let origin = Instant::now();
    let mut interval = tokio::time::interval(frame);

    while ticker.is_running() {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Animation cancelled after {} frames", ticker.frames());
                ticker.stop();
            }
            _ = interval.tick() => {
                ticker.step(origin.elapsed());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Finishes after a fixed number of frames.
    struct Countdown(u32);

    impl Animation for Countdown {
        fn tick(&mut self, _now: Duration) -> Frame {
            self.0 = self.0.saturating_sub(1);
            if self.0 == 0 { Frame::Finished } else { Frame::Continue }
        }
    }

    // Never finishes.
    struct Forever;

    impl Animation for Forever {
        fn tick(&mut self, _now: Duration) -> Frame {
            Frame::Continue
        }
    }

    #[test]
    fn test_step_requires_start() {
        let mut ticker = Ticker::new(Countdown(3));

        assert!(!ticker.step(Duration::ZERO));
        assert_eq!(ticker.frames(), 0);
    }

    #[test]
    fn test_stops_when_finished() {
        let mut ticker = Ticker::new(Countdown(2));
        ticker.start();

        assert!(ticker.step(Duration::from_millis(16)));
        assert!(ticker.is_running());
        assert!(ticker.step(Duration::from_millis(32)));
        assert!(!ticker.is_running());
        assert!(!ticker.step(Duration::from_millis(48)));
        assert_eq!(ticker.frames(), 2);
    }

    #[test]
    fn test_explicit_stop() {
        let mut ticker = Ticker::new(Forever);
        ticker.start();
        ticker.step(Duration::ZERO);
        ticker.stop();

        assert!(!ticker.step(Duration::from_millis(16)));
        assert_eq!(ticker.frames(), 1);
    }

    #[tokio::test]
    async fn test_drive_runs_until_finished() {
        let mut ticker = Ticker::new(Countdown(3));
        ticker.start();

        drive(&mut ticker, Duration::from_millis(1), CancellationToken::new()).await;

        assert!(!ticker.is_running());
        assert_eq!(ticker.frames(), 3);
    }

    #[tokio::test]
    async fn test_drive_stops_on_cancel() {
        let mut ticker = Ticker::new(Forever);
        ticker.start();
        let cancel = CancellationToken::new();
        cancel.cancel();

        drive(&mut ticker, Duration::from_millis(1), cancel).await;

        assert!(!ticker.is_running());
    }
}
