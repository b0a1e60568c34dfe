// src/types.rs
use std::fmt;

use alloy::primitives::{Address, TxHash, U256};
use serde::Serialize;
use uuid::Uuid;

/// A randomized transfer amount, in token units and in wei.
///
/// `tea` is the post-rounding value (5 decimal places); `wei` is that exact
/// value scaled to the smallest unit, so the two never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransferAmount {
    pub tea: f64,
    pub wei: U256,
}

/// Cosmetic "tx 1"/"tx 2" tag derived from counter parity.
///
/// Carried on records and log lines only; nothing branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TxLane {
    One,
    Two,
}

impl TxLane {
    pub fn from_confirmed(confirmed: u32) -> Self {
        if confirmed % 2 == 0 {
            TxLane::One
        } else {
            TxLane::Two
        }
    }
}

impl fmt::Display for TxLane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxLane::One => write!(f, "tx 1"),
            TxLane::Two => write!(f, "tx 2"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TransferOutcome {
    Confirmed,
    Failed(String),
}

impl TransferOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, TransferOutcome::Confirmed)
    }
}

/// One attempted transfer, as reported in the run summary.
#[derive(Debug, Clone, Serialize)]
pub struct TransferRecord {
    pub id: Uuid,
    /// Sequence number at submit time (confirmed count + 1).
    pub seq: usize,
    /// Total transfers requested for this run.
    pub total: usize,
    /// 1-based number of the funding wallet used.
    pub wallet_no: usize,
    pub recipient: Address,
    pub amount: TransferAmount,
    pub lane: TxLane,
    /// Set once the network accepted the submission.
    pub tx_hash: Option<TxHash>,
    pub outcome: TransferOutcome,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub duration_ms: u64,
}

/// What a distribution run did, returned by `Disperser::run`.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// The operator-requested count.
    pub requested: usize,
    /// Addresses actually selected (min of requested and list length).
    pub selected: usize,
    pub attempted: usize,
    pub confirmed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub sent_log_written: bool,
    pub records: Vec<TransferRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_alternates_with_counter_parity() {
        assert_eq!(TxLane::from_confirmed(0), TxLane::One);
        assert_eq!(TxLane::from_confirmed(1), TxLane::Two);
        assert_eq!(TxLane::from_confirmed(2), TxLane::One);
        assert_eq!(TxLane::from_confirmed(199), TxLane::Two);
    }

    #[test]
    fn lane_display_matches_source_labels() {
        assert_eq!(TxLane::One.to_string(), "tx 1");
        assert_eq!(TxLane::Two.to_string(), "tx 2");
    }
}
