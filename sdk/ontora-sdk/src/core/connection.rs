use crate::core::config::ClientConfig;
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::error::Error;

/// Ledger transport. Results are surfaced verbatim; retries, fee estimation
/// and confirmation policy belong to the implementation, not the client.
#[async_trait]
pub trait SolConnection: Send + Sync {
    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>>;
    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> Result<Option<Account>, Box<dyn Error + Send + Sync>>;
    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>>;
}

/// JSON-RPC transport backed by the nonblocking Solana RPC client.
pub struct RpcConnection {
    client: RpcClient,
}

impl RpcConnection {
    pub fn new(config: &ClientConfig) -> Self {
        let client = RpcClient::new_with_commitment(
            config.rpc_url.clone(),
            config.commitment.to_commitment_config(),
        );
        Self { client }
    }

    pub fn url(&self) -> String {
        self.client.url()
    }
}

#[async_trait]
impl SolConnection for RpcConnection {
    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>> {
        Ok(self.client.send_and_confirm_transaction(tx).await?)
    }

    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> Result<Option<Account>, Box<dyn Error + Send + Sync>> {
        let response = self
            .client
            .get_account_with_commitment(pubkey, self.client.commitment())
            .await?;
        Ok(response.value)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>> {
        Ok(self.client.get_latest_blockhash().await?)
    }
}
