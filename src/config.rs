// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

use zeroize::Zeroizing;

use crate::error::{DisperserError, DisperserResult};

/// Public Tea Sepolia endpoint used when no override is given.
pub const DEFAULT_RPC_URL: &str = "https://tea-sepolia.g.alchemy.com/public";

/// Environment slots searched for funding keys, in order.
pub const FUNDING_KEY_SLOTS: [&str; 3] = ["PRIVATE_KEY_1", "PRIVATE_KEY_2", "PRIVATE_KEY_3"];

/// Runtime knobs for a distribution run.
#[derive(Debug, Clone)]
pub struct DisperserConfig {
    pub rpc_url: String,
    /// Where the validated recipients of a completed run are written.
    pub sent_file: PathBuf,
    /// Transfer amount bounds in token units, inclusive.
    pub amount_range: (f64, f64),
    /// Post-transfer pause bounds in milliseconds, inclusive.
    pub delay_range_ms: (u64, u64),
    /// Confirmed transfers allowed before the cooldown kicks in.
    pub tx_ceiling: u32,
    pub cooldown: Duration,
    /// Receipt polling interval while awaiting confirmation.
    pub confirmation_poll: Duration,
}

impl Default for DisperserConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            sent_file: PathBuf::from("sent_addresses.txt"),
            amount_range: (0.05, 0.2),
            delay_range_ms: (10_000, 20_000),
            tx_ceiling: 200,
            cooldown: Duration::from_secs(24 * 60 * 60),
            confirmation_poll: Duration::from_secs(2),
        }
    }
}

/// Read funding keys from the process environment.
///
/// Blank slots are skipped; at least one usable key is required.
pub fn funding_keys_from_env() -> DisperserResult<Vec<Zeroizing<String>>> {
    funding_keys(|slot| std::env::var(slot).ok())
}

/// Slot scan behind `funding_keys_from_env`, generic over the reader so tests
/// never touch the real environment.
pub(crate) fn funding_keys(
    lookup: impl Fn(&str) -> Option<String>,
) -> DisperserResult<Vec<Zeroizing<String>>> {
    let mut keys = Vec::new();

    for slot in FUNDING_KEY_SLOTS {
        let Some(raw) = lookup(slot) else { continue };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        validate_key_material(slot, trimmed)?;
        keys.push(Zeroizing::new(trimmed.to_string()));
    }

    if keys.is_empty() {
        return Err(DisperserError::NoFundingKeys);
    }
    Ok(keys)
}

/// Reject key material that cannot be a secp256k1 private key before it ever
/// reaches a signer.
fn validate_key_material(slot: &str, key: &str) -> DisperserResult<()> {
    let hex_part = key.strip_prefix("0x").unwrap_or(key);
    let bytes = hex::decode(hex_part).map_err(|e| DisperserError::InvalidFundingKey {
        slot: slot.to_string(),
        reason: e.to_string(),
    })?;
    if bytes.len() != 32 {
        return Err(DisperserError::InvalidFundingKey {
            slot: slot.to_string(),
            reason: format!("expected 32 bytes of key material, got {}", bytes.len()),
        });
    }
    Ok(())
}
