//! Account layouts owned by the Ontora program.
//!
//! Each body is borsh-encoded after an 8-byte account discriminator. Anchor
//! allocates accounts with fixed space, so bytes past the encoded body are
//! zero padding and are ignored when decoding.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::discriminator::{account_discriminator, DISCRIMINATOR_LEN};
use crate::error::StateError;

/// Typed schema for a program account.
pub trait AccountSchema: BorshSerialize + BorshDeserialize {
    /// Account type name as declared in the program.
    const NAME: &'static str;

    fn discriminator() -> [u8; DISCRIMINATOR_LEN] {
        account_discriminator(Self::NAME)
    }

    /// Decode raw account data, checking the discriminator first.
    fn decode(data: &[u8]) -> Result<Self, StateError> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(StateError::AccountDataTooSmall {
                expected: DISCRIMINATOR_LEN,
                actual: data.len(),
            });
        }

        let (prefix, mut body) = data.split_at(DISCRIMINATOR_LEN);
        if prefix != Self::discriminator() {
            return Err(StateError::DiscriminatorMismatch(Self::NAME));
        }

        Ok(Self::deserialize(&mut body)?)
    }

    /// Encode into discriminator-prefixed account data.
    fn encode(&self) -> Result<Vec<u8>, StateError> {
        let mut data = Self::discriminator().to_vec();
        self.serialize(&mut data)?;
        Ok(data)
    }
}

/// User profile account, created by `initialize_user` at a one-time address.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct UserAccount {
    /// Wallet that owns this profile
    pub owner: [u8; 32],
    /// Sum of all active stakes
    pub total_staked: u64,
    /// Unix timestamp of registration
    pub created_at: i64,
}

impl AccountSchema for UserAccount {
    const NAME: &'static str = "UserAccount";
}

/// Per-agent aggregate.
///
/// PDA Seeds: ["agent", agent_id]
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AgentAccount {
    pub agent_id: String,
    pub total_staked: u64,
    pub staker_count: u32,
    pub bump: u8,
}

impl AccountSchema for AgentAccount {
    const NAME: &'static str = "AgentAccount";
}

/// A user's stake against one agent.
///
/// PDA Seeds: ["stake", user, agent_id]
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StakeAccount {
    /// Staking wallet
    pub user: [u8; 32],
    /// Agent the stake is placed on
    pub agent_id: String,
    /// Staked amount in base units
    pub amount: u64,
    /// Unix timestamp of the first stake
    pub staked_at: i64,
    /// Unix timestamp of the last reward claim (0 if never claimed)
    pub last_claim_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl AccountSchema for StakeAccount {
    const NAME: &'static str = "StakeAccount";
}

/// PDA Seeds: ["rewards", user]
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RewardsAccount {
    pub user: [u8; 32],
    pub total_claimed: u64,
    pub last_claim_at: i64,
    pub bump: u8,
}

impl AccountSchema for RewardsAccount {
    const NAME: &'static str = "RewardsAccount";
}

/// Governance proposal.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ProposalAccount {
    pub proposer: [u8; 32],
    pub title: String,
    pub description: String,
    pub votes_for: u64,
    pub votes_against: u64,
    pub created_at: i64,
    /// created_at + voting_duration
    pub voting_ends_at: i64,
    pub executed: bool,
}

impl AccountSchema for ProposalAccount {
    const NAME: &'static str = "Proposal";
}

/// A single ballot.
///
/// PDA Seeds: ["vote", voter, proposal_id]
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct VoteAccount {
    pub voter: [u8; 32],
    pub proposal_id: String,
    pub in_favor: bool,
    pub voted_at: i64,
    pub bump: u8,
}

impl AccountSchema for VoteAccount {
    const NAME: &'static str = "Vote";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stake() -> StakeAccount {
        StakeAccount {
            user: [7u8; 32],
            agent_id: "agent-001".to_string(),
            amount: 500,
            staked_at: 1_700_000_000,
            last_claim_at: 0,
            bump: 254,
        }
    }

    #[test]
    fn test_decode_ignores_trailing_padding() {
        let mut data = sample_stake().encode().unwrap();
        data.extend_from_slice(&[0u8; 64]);

        let decoded = StakeAccount::decode(&data).unwrap();
        assert_eq!(decoded, sample_stake());
    }

    #[test]
    fn test_decode_rejects_other_account_type() {
        let rewards = RewardsAccount {
            user: [7u8; 32],
            total_claimed: 10,
            last_claim_at: 0,
            bump: 1,
        };
        let data = rewards.encode().unwrap();

        assert!(matches!(
            StakeAccount::decode(&data),
            Err(StateError::DiscriminatorMismatch("StakeAccount"))
        ));
    }

    #[test]
    fn test_decode_rejects_short_data() {
        let err = StakeAccount::decode(&[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            StateError::AccountDataTooSmall {
                expected: 8,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_decode_rejects_truncated_body() {
        let data = sample_stake().encode().unwrap();
        let truncated = &data[..data.len() - 4];

        assert!(matches!(
            StakeAccount::decode(truncated),
            Err(StateError::Serialization(_))
        ));
    }
}
