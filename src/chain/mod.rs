// src/chain/mod.rs
pub mod rpc;

pub use rpc::RpcChainClient;

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::error::DisperserError;

/// The transaction-submission contract the driver runs against.
///
/// Submission and confirmation are split so the driver can report the hash as
/// soon as the network accepts the transfer, and so the loop is testable with
/// a scripted implementation.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Submit a native-token transfer. Resolves with the transaction hash on
    /// network acceptance; fails synchronously if the submission is rejected.
    async fn submit_transfer(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<TxHash, DisperserError>;

    /// Resolve once the transaction is durably included, or fail if it was
    /// reverted or dropped. Carries no deadline of its own.
    async fn await_confirmation(&self, hash: TxHash) -> Result<(), DisperserError>;
}
