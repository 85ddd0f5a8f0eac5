use crate::core::constants::DEFAULT_RPC_URL;
use crate::error::{OntoraSdkError, Result};
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;
use std::str::FromStr;

pub const RPC_URL_ENV_VAR: &str = "ONTORA_RPC_URL";
pub const COMMITMENT_ENV_VAR: &str = "ONTORA_COMMITMENT";

/// Commitment level used for submission and reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn to_commitment_config(self) -> CommitmentConfig {
        match self {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

impl FromStr for Commitment {
    type Err = OntoraSdkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "processed" => Ok(Commitment::Processed),
            "confirmed" => Ok(Commitment::Confirmed),
            "finalized" => Ok(Commitment::Finalized),
            other => Err(OntoraSdkError::Config(format!(
                "Unknown commitment level '{other}'"
            ))),
        }
    }
}

/// Network settings for [`crate::core::connection::RpcConnection`].
///
/// The program id is not part of the configuration; it is fixed in
/// [`crate::core::constants::PROGRAM_ID`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub commitment: Commitment,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: Commitment::default(),
        }
    }
}

impl ClientConfig {
    /// Build from `ONTORA_RPC_URL` and `ONTORA_COMMITMENT`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(RPC_URL_ENV_VAR) {
            if url.trim().is_empty() {
                return Err(OntoraSdkError::Config(format!(
                    "{RPC_URL_ENV_VAR} is set but empty"
                )));
            }
            config.rpc_url = url;
        }

        if let Some(commitment) = lookup(COMMITMENT_ENV_VAR) {
            config.commitment = commitment.parse()?;
        }

        Ok(config)
    }
}
