use std::time::{Duration, Instant};

/// Session-wide deadline. Armed once, never reset between questions.
/// A duration too large for the clock leaves the countdown unbounded.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    expires_at: Option<Instant>,
}

impl Countdown {
    pub fn start(duration: Duration) -> Self {
        Countdown {
            expires_at: Instant::now().checked_add(duration),
        }
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    pub fn time_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|t| t.saturating_duration_since(Instant::now()))
    }
}
