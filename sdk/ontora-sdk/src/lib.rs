pub mod advanced;
pub mod basic;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;

pub use crate::basic::client::ChainClient;
pub use crate::basic::session::{ByName, FirstAvailable, ProviderSelector, Session, SessionStatus};
pub use crate::core::config::{ClientConfig, Commitment};
pub use crate::core::connection::{RpcConnection, SolConnection};
pub use crate::core::signer::{KeypairWallet, WalletProvider};
pub use crate::error::{ErrorKind, OntoraSdkError, Result};
pub use crate::types::{LedgerAmount, Operation, TransactionResult};
pub use crate::utils::{
    derive_agent_pda, derive_pda, derive_proposal_pda, derive_rewards_pda, derive_stake_pda,
    derive_vote_pda, fetch_account, fetch_account_data,
};

pub mod state {
    pub use ontora_state::seeds;
    pub use ontora_state::{
        AccountSchema, AgentAccount, OntoraInstruction, ProposalAccount, RewardsAccount,
        StakeAccount, UserAccount, VoteAccount,
    };
}
