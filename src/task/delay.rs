use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Default upper bound for simulated latency.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(2000);

/// Source of simulated latency for the fake tasks.
pub trait DelaySource: Send + Sync {
    fn next_delay(&self) -> Duration;
}

/// Uniformly random delay in `[0, max)`.
#[derive(Debug, Clone)]
pub struct RandomDelay {
    pub max: Duration,
}

impl Default for RandomDelay {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_DELAY,
        }
    }
}

impl RandomDelay {
    pub fn new(max: Duration) -> Self {
        Self { max }
    }
}

impl DelaySource for RandomDelay {
    fn next_delay(&self) -> Duration {
        let max_ms = u64::try_from(self.max.as_millis()).unwrap_or(u64::MAX);
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::rng().random_range(0..max_ms))
    }
}

/// The same delay every time.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn zero() -> Self {
        Self(Duration::ZERO)
    }

    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

impl DelaySource for FixedDelay {
    fn next_delay(&self) -> Duration {
        self.0
    }
}

/// Cycles through a fixed list of delays, one per draw.
#[derive(Debug, Default)]
pub struct SequenceDelay {
    delays: Vec<Duration>,
    cursor: AtomicUsize,
}

impl SequenceDelay {
    pub fn new(delays: Vec<Duration>) -> Self {
        Self {
            delays,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn from_millis(delays: &[u64]) -> Self {
        Self::new(delays.iter().copied().map(Duration::from_millis).collect())
    }
}

impl DelaySource for SequenceDelay {
    fn next_delay(&self) -> Duration {
        if self.delays.is_empty() {
            return Duration::ZERO;
        }
        let i = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.delays[i % self.delays.len()]
    }
}
