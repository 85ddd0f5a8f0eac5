use ontora_state::StateError;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// SDK-specific error types for Ontora operations
#[derive(Debug, Error)]
pub enum OntoraSdkError {
    /// No wallet provider, provider rejected the request, or provider failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Operation attempted without a connected wallet
    #[error("Wallet not connected")]
    NotConnected,

    /// Malformed, missing or non-positive input; raised before any network call
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Transaction was rejected by the program or the transport failed while submitting
    #[error("Transaction failed: {0}")]
    Submission(String),

    /// Account not found on-chain
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    /// Account exists but does not decode as the expected schema
    #[error("Invalid account data: {0}")]
    InvalidAccountData(String),

    /// Read query failed at the transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Instruction or account encoding error
    #[error("State encoding error: {0}")]
    State(#[from] StateError),
}

/// Coarse error category for callers that only need to pick a corrective action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    NotConnected,
    InvalidInput,
    OnChainFailure,
    NotFound,
}

impl OntoraSdkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Connection(_) => ErrorKind::Connection,
            Self::NotConnected => ErrorKind::NotConnected,
            Self::Validation(_) | Self::Config(_) | Self::State(_) => ErrorKind::InvalidInput,
            Self::Submission(_) | Self::Transport(_) | Self::InvalidAccountData(_) => {
                ErrorKind::OnChainFailure
            },
            Self::AccountNotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, OntoraSdkError>;
