//! Pauses before browser interactions.
//!
//! The login surface rejects input that arrives at machine speed, so each
//! interaction waits a random, bounded time first. Tests switch this off
//! with [`DelayStrategy::None`].

use std::time::Duration;

use rand::Rng;

pub const HUMAN_DELAY_MIN: Duration = Duration::from_secs(2);
pub const HUMAN_DELAY_MAX: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelayStrategy {
    /// No waiting at all.
    None,
    /// Uniformly random delay in `min..=max`.
    Humanized { min: Duration, max: Duration },
}

impl DelayStrategy {
    pub fn humanized() -> Self {
        DelayStrategy::Humanized {
            min: HUMAN_DELAY_MIN,
            max: HUMAN_DELAY_MAX,
        }
    }

    pub fn next_delay(&self) -> Duration {
        match self {
            DelayStrategy::None => Duration::ZERO,
            DelayStrategy::Humanized { min, max } if max <= min => *min,
            DelayStrategy::Humanized { min, max } => rand::thread_rng().gen_range(*min..=*max),
        }
    }

    pub async fn pause(&self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
