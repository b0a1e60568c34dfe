// src/pacing.rs
use std::time::Duration;

use alloy::primitives::utils::parse_ether;
use rand::Rng;

use crate::config::DisperserConfig;
use crate::error::{DisperserError, DisperserResult};
use crate::types::TransferAmount;

/// Randomized amount and delay selection for the transfer loop.
#[derive(Debug, Clone)]
pub struct PacingPolicy {
    amount_range: (f64, f64),
    delay_range_ms: (u64, u64),
}

impl PacingPolicy {
    pub fn new(config: &DisperserConfig) -> Self {
        Self {
            amount_range: config.amount_range,
            delay_range_ms: config.delay_range_ms,
        }
    }

    /// Uniform draw over the amount range, rounded to 5 decimal places before
    /// conversion to wei.
    pub fn draw_amount(&self, rng: &mut impl Rng) -> DisperserResult<TransferAmount> {
        let drawn = rng.gen_range(self.amount_range.0..=self.amount_range.1);
        let tea = (drawn * 100_000.0).round() / 100_000.0;
        let wei = parse_ether(&format!("{tea:.5}")).map_err(|e| {
            DisperserError::InvalidConfiguration(format!("amount {tea} not convertible to wei: {e}"))
        })?;
        Ok(TransferAmount { tea, wei })
    }

    /// Uniform integer draw over the delay range, in milliseconds.
    pub fn draw_delay(&self, rng: &mut impl Rng) -> Duration {
        Duration::from_millis(rng.gen_range(self.delay_range_ms.0..=self.delay_range_ms.1))
    }
}
