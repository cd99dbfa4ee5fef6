use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::Transaction,
};
use tracing::debug;

use crate::errors::RpcError;

/// The subset of the JSON-RPC API needed to check an endpoint and create a
/// tree.
#[async_trait]
pub trait TreeRpc: Send + Sync + Debug + 'static {
    fn url(&self) -> String;

    async fn get_slot(&self) -> Result<u64, RpcError>;

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, RpcError>;

    async fn get_minimum_balance_for_rent_exemption(&self, size: usize) -> Result<u64, RpcError>;

    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError>;

    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, RpcError>;
}

#[async_trait]
impl<T: TreeRpc> TreeRpc for Arc<T> {
    fn url(&self) -> String {
        self.as_ref().url()
    }

    async fn get_slot(&self) -> Result<u64, RpcError> {
        self.as_ref().get_slot().await
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, RpcError> {
        self.as_ref().get_balance(pubkey).await
    }

    async fn get_minimum_balance_for_rent_exemption(&self, size: usize) -> Result<u64, RpcError> {
        self.as_ref()
            .get_minimum_balance_for_rent_exemption(size)
            .await
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError> {
        self.as_ref().get_latest_blockhash().await
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, RpcError> {
        self.as_ref().send_and_confirm_transaction(transaction).await
    }
}

pub struct SolanaTreeRpc {
    pub client: RpcClient,
}

impl Debug for SolanaTreeRpc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolanaTreeRpc {{ client: {:?} }}", self.client.url())
    }
}

impl SolanaTreeRpc {
    pub fn new<U: ToString>(url: U, commitment_config: Option<CommitmentConfig>) -> Self {
        let commitment_config = commitment_config.unwrap_or(CommitmentConfig::confirmed());
        let client = RpcClient::new_with_commitment(url.to_string(), commitment_config);
        Self { client }
    }
}

#[async_trait]
impl TreeRpc for SolanaTreeRpc {
    fn url(&self) -> String {
        self.client.url()
    }

    async fn get_slot(&self) -> Result<u64, RpcError> {
        let slot = self.client.get_slot().await?;
        debug!("{} is at slot {}", self.client.url(), slot);
        Ok(slot)
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, RpcError> {
        Ok(self.client.get_balance(pubkey).await?)
    }

    async fn get_minimum_balance_for_rent_exemption(&self, size: usize) -> Result<u64, RpcError> {
        Ok(self
            .client
            .get_minimum_balance_for_rent_exemption(size)
            .await?)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError> {
        Ok(self.client.get_latest_blockhash().await?)
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, RpcError> {
        Ok(self
            .client
            .send_and_confirm_transaction(transaction)
            .await?)
    }
}
