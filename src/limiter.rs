// src/limiter.rs
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

/// Confirmed-transfer counter with a hard ceiling and a mandatory cooldown.
///
/// Owned by the driver and threaded through the run loop; nothing else
/// mutates it. The counter only moves on confirmed transfers and resets to
/// zero exactly once per cooldown. Neither the counter nor an in-progress
/// cooldown survives a restart.
#[derive(Debug)]
pub struct TransferLimiter {
    confirmed: u32,
    ceiling: u32,
    cooldown: Duration,
}

impl TransferLimiter {
    pub fn new(ceiling: u32, cooldown: Duration) -> Self {
        Self {
            confirmed: 0,
            ceiling,
            cooldown,
        }
    }

    /// Called before every transfer attempt, including the first. Suspends
    /// the whole process for the cooldown once the ceiling is reached, then
    /// resets the counter.
    pub async fn gate(&mut self) {
        if self.confirmed >= self.ceiling {
            warn!(
                ceiling = self.ceiling,
                cooldown_secs = self.cooldown.as_secs(),
                "transfer ceiling reached, pausing"
            );
            sleep(self.cooldown).await;
            self.confirmed = 0;
            info!("cooldown complete, counter reset");
        }
    }

    pub fn record_confirmed(&mut self) {
        self.confirmed += 1;
    }

    pub fn confirmed(&self) -> u32 {
        self.confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn gate_is_free_below_the_ceiling() {
        let mut limiter = TransferLimiter::new(3, Duration::from_secs(86_400));
        limiter.record_confirmed();
        limiter.record_confirmed();

        let before = Instant::now();
        limiter.gate().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
        assert_eq!(limiter.confirmed(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn gate_pauses_and_resets_at_the_ceiling() {
        let cooldown = Duration::from_secs(86_400);
        let mut limiter = TransferLimiter::new(2, cooldown);
        limiter.record_confirmed();
        limiter.record_confirmed();
        assert_eq!(limiter.confirmed(), 2);

        let before = Instant::now();
        limiter.gate().await;
        assert_eq!(before.elapsed(), cooldown);
        assert_eq!(limiter.confirmed(), 0);

        // The next gate is free again.
        let before = Instant::now();
        limiter.gate().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }
}
