use thiserror::Error;

/// Errors raised while encoding or decoding Ontora account and instruction data.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Account data too small: expected at least {expected} bytes, got {actual}")]
    AccountDataTooSmall { expected: usize, actual: usize },

    #[error("Discriminator mismatch: data is not a {0} account")]
    DiscriminatorMismatch(&'static str),

    #[error("Unknown instruction discriminator")]
    UnknownInstruction,

    #[error("Serialization error: {0}")]
    Serialization(#[from] std::io::Error),
}
