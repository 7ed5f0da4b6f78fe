//! Simulated network round-trip timing.

use rand::Rng;
use std::time::Duration;

/// Artificial latency applied before a response is delivered. The
/// delay always elapses; there is no cancellation or timeout path.
#[derive(Debug, Clone, Copy)]
pub struct LatencyProfile {
    /// Applied to every regular operation
    pub request: Duration,

    /// Applied to assistant replies, which resolve noticeably slower
    /// than regular operations
    pub assistant: Duration,

    /// Upper bound of a uniform random extra delay
    pub jitter: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            request: Duration::from_millis(500),
            assistant: Duration::from_millis(1_500),
            jitter: Duration::ZERO,
        }
    }
}

impl LatencyProfile {
    /// Zero delay everywhere. Intended for tests.
    pub fn instant() -> Self {
        Self {
            request: Duration::ZERO,
            assistant: Duration::ZERO,
            jitter: Duration::ZERO,
        }
    }

    pub fn with_jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    /// Reads `FINLINK_REQUEST_LATENCY_MS` and
    /// `FINLINK_ASSISTANT_LATENCY_MS`, falling back to the defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            request: env_millis("FINLINK_REQUEST_LATENCY_MS").unwrap_or(defaults.request),
            assistant: env_millis("FINLINK_ASSISTANT_LATENCY_MS").unwrap_or(defaults.assistant),
            jitter: Duration::ZERO,
        }
    }

    pub(crate) async fn request_delay(&self) {
        sleep_with_jitter(self.request, self.jitter).await;
    }

    pub(crate) async fn assistant_delay(&self) {
        sleep_with_jitter(self.assistant, self.jitter).await;
    }
}

fn env_millis(name: &str) -> Option<Duration> {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .map(Duration::from_millis)
}

async fn sleep_with_jitter(base: Duration, jitter: Duration) {
    let extra = if jitter.is_zero() {
        Duration::ZERO
    } else {
        let bound = jitter.as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(0..=bound))
    };
    tokio::time::sleep(base + extra).await;
}
