// src/pool.rs
use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use rand::Rng;
use zeroize::Zeroizing;

use crate::error::{DisperserError, DisperserResult};

/// The funding wallet pool: one signer per configured key, built once at
/// startup and immutable afterwards.
///
/// The signers themselves live inside the returned `EthereumWallet` (the
/// provider signs with whichever one matches the transaction's `from`); the
/// pool keeps the index-aligned addresses for random selection and logging.
#[derive(Debug, Clone)]
pub struct WalletPool {
    addresses: Vec<Address>,
}

impl WalletPool {
    /// Build the pool from raw key material.
    pub fn from_keys(keys: &[Zeroizing<String>]) -> DisperserResult<(Self, EthereumWallet)> {
        let mut addresses = Vec::with_capacity(keys.len());
        let mut wallet: Option<EthereumWallet> = None;

        for (i, key) in keys.iter().enumerate() {
            let signer: PrivateKeySigner =
                key.as_str()
                    .parse()
                    .map_err(|e: alloy::signers::local::LocalSignerError| {
                        // Blank env slots were filtered upstream, so the index
                        // here no longer maps back to a slot name.
                        DisperserError::InvalidFundingKey {
                            slot: format!("funding key #{}", i + 1),
                            reason: e.to_string(),
                        }
                    })?;
            addresses.push(signer.address());
            match wallet {
                None => wallet = Some(EthereumWallet::new(signer)),
                Some(ref mut w) => w.register_signer(signer),
            }
        }

        let wallet = wallet.ok_or(DisperserError::NoFundingKeys)?;
        Ok((Self { addresses }, wallet))
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Pick a funding wallet uniformly at random. Selection is independent
    /// across calls; the same wallet may come up consecutively.
    pub fn pick(&self, rng: &mut impl Rng) -> (usize, Address) {
        let idx = rng.gen_range(0..self.addresses.len());
        (idx, self.addresses[idx])
    }

    pub fn address(&self, index: usize) -> Option<Address> {
        self.addresses.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // Well-known local development keys (anvil defaults), safe to embed.
    const KEY_A: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const KEY_B: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    fn test_keys() -> Vec<Zeroizing<String>> {
        vec![
            Zeroizing::new(KEY_A.to_string()),
            Zeroizing::new(KEY_B.to_string()),
        ]
    }

    #[test]
    fn builds_index_aligned_addresses() {
        let (pool, _wallet) = WalletPool::from_keys(&test_keys()).unwrap();
        assert_eq!(pool.len(), 2);
        assert_ne!(pool.address(0), pool.address(1));
        assert_eq!(pool.address(2), None);
    }

    #[test]
    fn empty_pool_is_rejected() {
        let err = WalletPool::from_keys(&[]).unwrap_err();
        assert!(matches!(err, DisperserError::NoFundingKeys));
    }

    #[test]
    fn bad_key_names_its_slot() {
        let keys = vec![
            Zeroizing::new(KEY_A.to_string()),
            // 32 bytes of zeros pass the hex check but not the curve.
            Zeroizing::new(format!("0x{}", "00".repeat(32))),
        ];
        match WalletPool::from_keys(&keys).unwrap_err() {
            DisperserError::InvalidFundingKey { slot, .. } => assert_eq!(slot, "funding key #2"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn pick_reaches_every_wallet() {
        let (pool, _wallet) = WalletPool::from_keys(&test_keys()).unwrap();
        let mut rng = rand::thread_rng();
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let (idx, addr) = pool.pick(&mut rng);
            assert_eq!(pool.address(idx), Some(addr));
            seen.insert(idx);
        }
        assert_eq!(seen, HashSet::from([0, 1]));
    }
}
