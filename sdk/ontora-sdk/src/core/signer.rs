use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::Transaction;
use std::sync::atomic::{AtomicBool, Ordering};

/// A wallet the client can connect to and ask for signatures.
/// This allows the SDK to work with:
/// 1. Local Keypairs (Backend/CLI)
/// 2. Wallet Adapters (Frontend - the adapter owns the key and approval UI)
///
/// The client only relies on the connected flag and the public key; provider
/// internals stay opaque.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Display name, used for logging and by name-based selection.
    fn name(&self) -> &str;

    /// Whether the provider can currently be connected to (e.g. extension installed).
    fn is_available(&self) -> bool {
        true
    }

    /// Request a connection. Returns the wallet's public key, or the
    /// provider's rejection reason.
    async fn connect(&self) -> Result<Pubkey, String>;

    async fn disconnect(&self) -> Result<(), String>;

    /// Public key while connected.
    fn pubkey(&self) -> Option<Pubkey>;

    fn is_connected(&self) -> bool;

    /// Add the wallet's fee-payer signature to a transaction whose recent
    /// blockhash is already set. Existing co-signer signatures must be kept.
    async fn sign_transaction(&self, tx: Transaction) -> Result<Transaction, String>;
}

/// In-process wallet backed by a local keypair.
pub struct KeypairWallet {
    name: String,
    keypair: Keypair,
    connected: AtomicBool,
}

impl KeypairWallet {
    pub fn new(keypair: Keypair) -> Self {
        Self::with_name("keypair", keypair)
    }

    pub fn with_name(name: impl Into<String>, keypair: Keypair) -> Self {
        Self {
            name: name.into(),
            keypair,
            connected: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl WalletProvider for KeypairWallet {
    fn name(&self) -> &str {
        &self.name
    }

    async fn connect(&self) -> Result<Pubkey, String> {
        self.connected.store(true, Ordering::SeqCst);
        Ok(self.keypair.pubkey())
    }

    async fn disconnect(&self) -> Result<(), String> {
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn pubkey(&self) -> Option<Pubkey> {
        self.is_connected().then(|| self.keypair.pubkey())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn sign_transaction(&self, mut tx: Transaction) -> Result<Transaction, String> {
        if !self.is_connected() {
            return Err(format!("{} is not connected", self.name));
        }
        let blockhash = tx.message.recent_blockhash;
        tx.try_partial_sign(&[&self.keypair], blockhash)
            .map_err(|e| e.to_string())?;
        Ok(tx)
    }
}
