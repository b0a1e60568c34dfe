// src/chain/rpc.rs
use std::time::Duration;

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

use super::ChainClient;
use crate::error::{DisperserError, DisperserResult};

/// `ChainClient` over a JSON-RPC endpoint.
///
/// One provider carries the whole wallet pool: the wallet filler signs each
/// transaction with the registered signer matching its `from` address.
pub struct RpcChainClient {
    provider: DynProvider,
    poll_interval: Duration,
}

impl RpcChainClient {
    pub async fn connect(
        rpc_url: &str,
        wallet: EthereumWallet,
        poll_interval: Duration,
    ) -> DisperserResult<Self> {
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(rpc_url)
            .await
            .map_err(|e| DisperserError::Rpc(format!("failed to connect to {rpc_url}: {e}")))?
            .erased();

        Ok(Self {
            provider,
            poll_interval,
        })
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn submit_transfer(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<TxHash, DisperserError> {
        let tx = TransactionRequest::default()
            .with_from(from)
            .with_to(to)
            .with_value(amount);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| DisperserError::Submission(e.to_string()))?;

        Ok(*pending.tx_hash())
    }

    async fn await_confirmation(&self, hash: TxHash) -> Result<(), DisperserError> {
        // No overall deadline: a stalled network blocks the run rather than
        // abandoning an in-flight transfer.
        loop {
            match self.provider.get_transaction_receipt(hash).await {
                Ok(Some(receipt)) => {
                    return if receipt.status() {
                        Ok(())
                    } else {
                        Err(DisperserError::Confirmation {
                            hash,
                            reason: "transaction reverted".to_string(),
                        })
                    };
                }
                Ok(None) => {
                    debug!(%hash, "receipt not available yet");
                    sleep(self.poll_interval).await;
                }
                Err(e) => return Err(DisperserError::Rpc(e.to_string())),
            }
        }
    }
}
