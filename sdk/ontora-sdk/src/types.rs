use crate::error::{OntoraSdkError, Result};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use std::fmt;
use std::str::FromStr;

/// Operations exposed by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    RegisterUser,
    Stake,
    ClaimRewards,
    CreateProposal,
    Vote,
    FetchStakeState,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::RegisterUser => "register_user",
            Operation::Stake => "stake",
            Operation::ClaimRewards => "claim_rewards",
            Operation::CreateProposal => "create_proposal",
            Operation::Vote => "vote",
            Operation::FetchStakeState => "fetch_stake_state",
        };
        f.write_str(name)
    }
}

/// Outcome of a submitted transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResult {
    /// Fee payer signature, used as the transaction identifier
    pub signature: Signature,

    /// Address of the account created with a one-time keypair, if any
    pub created_account: Option<Pubkey>,
}

impl TransactionResult {
    /// Transaction identifier as a base58 string
    pub fn id(&self) -> String {
        self.signature.to_string()
    }
}

/// Strictly positive amount in the ledger's integer representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedgerAmount(u64);

impl LedgerAmount {
    /// Convert a caller-supplied integer. Zero and negative values are rejected.
    pub fn new(value: i64, field: &str) -> Result<Self> {
        if value <= 0 {
            return Err(OntoraSdkError::Validation(format!(
                "{field} must be greater than zero, got {value}"
            )));
        }
        Ok(Self(value as u64))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for LedgerAmount {
    type Err = OntoraSdkError;

    /// Parse user-entered text. Fractions, signs, and overflow are rejected
    /// instead of being truncated.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value: u64 = trimmed.parse().map_err(|_| {
            OntoraSdkError::Validation(format!(
                "amount must be a positive whole number, got '{trimmed}'"
            ))
        })?;
        if value == 0 {
            return Err(OntoraSdkError::Validation(
                "amount must be greater than zero".to_string(),
            ));
        }
        Ok(Self(value))
    }
}

impl fmt::Display for LedgerAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
