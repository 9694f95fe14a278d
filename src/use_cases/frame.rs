// Frame timing: host display refresh when available, fixed timer otherwise.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior};

#[derive(Debug)]
pub enum FrameError {
    /// The fallback timer needs a non-zero period.
    ZeroInterval,
}

enum FrameSource {
    // One message per display refresh, pushed by the host.
    Display(mpsc::Receiver<()>),
    Timer(Interval),
}

/// Yields once per frame and reports the time since the previous frame.
pub struct FrameClock {
    source: FrameSource,
    last_frame: Option<Instant>,
}

impl FrameClock {
    /// Uses the host refresh signal when one is provided, else falls back to a
    /// timer firing every `fallback_interval`.
    pub fn detect(
        display: Option<mpsc::Receiver<()>>,
        fallback_interval: Duration,
    ) -> Result<Self, FrameError> {
        let source = match display {
            Some(rx) => FrameSource::Display(rx),
            None => {
                if fallback_interval.is_zero() {
                    return Err(FrameError::ZeroInterval);
                }
                let mut interval = tokio::time::interval(fallback_interval);
                // A late timer frame should not trigger a burst of catch-up frames.
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                FrameSource::Timer(interval)
            }
        };

        Ok(Self {
            source,
            last_frame: None,
        })
    }

    pub fn uses_display(&self) -> bool {
        matches!(self.source, FrameSource::Display(_))
    }

    /// Waits for the next frame. Returns `None` once the host stops sending
    /// display refreshes.
    pub async fn next_frame(&mut self) -> Option<Duration> {
        match &mut self.source {
            FrameSource::Display(rx) => rx.recv().await?,
            FrameSource::Timer(interval) => {
                interval.tick().await;
            }
        }

        let now = Instant::now();
        let delta = self
            .last_frame
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.last_frame = Some(now);
        Some(delta)
    }
}
