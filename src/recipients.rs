// src/recipients.rs
use std::fs;
use std::path::Path;
use std::str::FromStr;

use alloy::primitives::Address;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{DisperserError, DisperserResult};

/// Load the recipient list: one address per line, surrounding whitespace
/// trimmed, blank lines dropped. Unreadable or empty files are fatal.
pub fn load(path: &Path) -> DisperserResult<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|source| DisperserError::AddressFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let addresses: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if addresses.is_empty() {
        return Err(DisperserError::EmptyAddressList {
            path: path.to_path_buf(),
        });
    }
    Ok(addresses)
}

/// Unbiased in-place permutation (rand's Fisher-Yates).
pub fn shuffle(addresses: &mut [String], rng: &mut impl Rng) {
    addresses.shuffle(rng);
}

/// The first `count` entries of the pre-shuffled list. Ordering is already
/// randomized upstream, so this is not re-randomized per call.
pub fn select(addresses: &[String], count: usize) -> &[String] {
    &addresses[..count.min(addresses.len())]
}

/// Syntactic validation of a recipient address.
pub fn parse_address(raw: &str) -> DisperserResult<Address> {
    Address::from_str(raw).map_err(|_| DisperserError::InvalidRecipient(raw.to_string()))
}

/// Overwrite the sent-address log with the validated recipients of this run,
/// one per line.
pub fn write_sent_log(path: &Path, sent: &[String]) -> std::io::Result<()> {
    fs::write(path, sent.join("\n"))
}
