// src/lib.rs
pub mod chain;
pub mod config;
pub mod error;
pub mod limiter;
pub mod pacing;
pub mod pool;
pub mod prompt;
pub mod recipients;
pub mod types;

use chrono::Utc;
use tokio::time::sleep;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::chain::ChainClient;
use crate::config::DisperserConfig;
use crate::error::{DisperserError, DisperserResult};
use crate::limiter::TransferLimiter;
use crate::pacing::PacingPolicy;
use crate::pool::WalletPool;
use crate::types::{RunSummary, TransferOutcome, TransferRecord, TxLane};

/// The distribution driver - one transfer at a time, paced and rate-limited.
pub struct Disperser<C: ChainClient> {
    client: C,
    pool: WalletPool,
    limiter: TransferLimiter,
    pacing: PacingPolicy,
    config: DisperserConfig,
}

impl<C: ChainClient> Disperser<C> {
    pub fn new(client: C, pool: WalletPool, config: DisperserConfig) -> DisperserResult<Self> {
        if pool.is_empty() {
            return Err(DisperserError::NoFundingKeys);
        }
        let limiter = TransferLimiter::new(config.tx_ceiling, config.cooldown);
        let pacing = PacingPolicy::new(&config);

        Ok(Self {
            client,
            pool,
            limiter,
            pacing,
            config,
        })
    }

    /// Run a distribution over the first `count` entries of the pre-shuffled
    /// recipient list.
    ///
    /// Transfers go out strictly sequentially in list order. Malformed
    /// addresses are skipped; failed transfers are logged and paced exactly
    /// like successful ones, never retried. If at least one transfer
    /// confirmed, every validated recipient of the run is written to the
    /// sent-address log, whether its own transfer succeeded or not.
    pub async fn run(&mut self, recipients: &[String], count: usize) -> DisperserResult<RunSummary> {
        let selected = recipients::select(recipients, count);
        let total = selected.len();
        info!(total, "starting distribution run");

        let mut records: Vec<TransferRecord> = Vec::with_capacity(total);
        let mut validated: Vec<String> = Vec::new();
        let mut skipped = 0usize;

        for raw in selected {
            self.limiter.gate().await;

            let to = match recipients::parse_address(raw) {
                Ok(addr) => addr,
                Err(err) => {
                    warn!(address = %raw, %err, "skipping malformed recipient");
                    skipped += 1;
                    continue;
                }
            };
            validated.push(raw.clone());

            let (wallet_idx, from) = self.pool.pick(&mut rand::thread_rng());
            let amount = self.pacing.draw_amount(&mut rand::thread_rng())?;
            let delay = self.pacing.draw_delay(&mut rand::thread_rng());
            let wallet_no = wallet_idx + 1;
            let seq = self.limiter.confirmed() as usize + 1;
            let lane = TxLane::from_confirmed(self.limiter.confirmed());
            let submitted_at = Utc::now();
            let started = std::time::Instant::now();

            let (tx_hash, outcome) = match self.client.submit_transfer(from, to, amount.wei).await {
                Ok(hash) => {
                    info!(
                        %lane, seq, total, wallet = wallet_no,
                        amount = %format!("{:.5}", amount.tea), tx = %hash,
                        "transfer accepted, awaiting confirmation"
                    );
                    match self.client.await_confirmation(hash).await {
                        Ok(()) => {
                            self.limiter.record_confirmed();
                            info!(
                                %lane, done = self.limiter.confirmed(), total,
                                wallet = wallet_no, delay_ms = delay.as_millis() as u64,
                                "transfer confirmed, pausing before the next"
                            );
                            (Some(hash), TransferOutcome::Confirmed)
                        }
                        Err(err) => {
                            error!(%lane, seq, total, wallet = wallet_no, %err, "confirmation failed");
                            (Some(hash), TransferOutcome::Failed(err.to_string()))
                        }
                    }
                }
                Err(err) => {
                    error!(%lane, seq, total, wallet = wallet_no, %err, "submission failed");
                    (None, TransferOutcome::Failed(err.to_string()))
                }
            };

            records.push(TransferRecord {
                id: Uuid::new_v4(),
                seq,
                total,
                wallet_no,
                recipient: to,
                amount,
                lane,
                tx_hash,
                outcome,
                submitted_at,
                duration_ms: started.elapsed().as_millis() as u64,
            });

            // Failures pace the loop exactly like successes.
            sleep(delay).await;
        }

        let confirmed = records
            .iter()
            .filter(|r| r.outcome.is_confirmed())
            .count();
        let failed = records.len() - confirmed;

        let mut sent_log_written = false;
        if confirmed > 0 {
            recipients::write_sent_log(&self.config.sent_file, &validated)?;
            sent_log_written = true;
            info!(
                path = %self.config.sent_file.display(),
                addresses = validated.len(),
                "sent-address log written"
            );
        }

        Ok(RunSummary {
            requested: count,
            selected: total,
            attempted: records.len(),
            confirmed,
            failed,
            skipped,
            sent_log_written,
            records,
        })
    }

    /// Confirmed transfers since startup or the last cooldown reset.
    pub fn confirmed(&self) -> u32 {
        self.limiter.confirmed()
    }
}
