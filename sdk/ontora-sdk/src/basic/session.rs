use crate::core::signer::WalletProvider;
use solana_sdk::pubkey::Pubkey;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Disconnected,
    Connected,
}

/// An active wallet connection. Owned by exactly one [`crate::ChainClient`].
#[derive(Clone)]
pub struct Session {
    wallet: Pubkey,
    provider: Arc<dyn WalletProvider>,
}

impl Session {
    pub(crate) fn new(wallet: Pubkey, provider: Arc<dyn WalletProvider>) -> Self {
        Self { wallet, provider }
    }

    /// Public key captured at connect time
    pub fn wallet(&self) -> Pubkey {
        self.wallet
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub(crate) fn provider(&self) -> &Arc<dyn WalletProvider> {
        &self.provider
    }

    pub(crate) fn is_live(&self) -> bool {
        self.provider.is_connected()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("wallet", &self.wallet)
            .field("provider", &self.provider.name())
            .finish()
    }
}

/// Chooses which of the available wallet providers to connect to.
///
/// Receives only providers reporting `is_available() == true`, in registration
/// order, and returns an index into that slice.
pub trait ProviderSelector: Send + Sync {
    fn select(&self, available: &[Arc<dyn WalletProvider>]) -> Option<usize>;
}

/// Picks the first available provider.
///
/// Placeholder policy: it does not reflect user intent when several wallets
/// are installed. Frontends should supply their own selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl ProviderSelector for FirstAvailable {
    fn select(&self, available: &[Arc<dyn WalletProvider>]) -> Option<usize> {
        if available.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}

/// Picks the provider whose name matches, case-insensitively.
#[derive(Debug, Clone)]
pub struct ByName(pub String);

impl ProviderSelector for ByName {
    fn select(&self, available: &[Arc<dyn WalletProvider>]) -> Option<usize> {
        available
            .iter()
            .position(|p| p.name().eq_ignore_ascii_case(&self.0))
    }
}
