//! Ontora Instruction Definitions
//!
//! Wire format: `[discriminator: 8 bytes][borsh args in declaration order]`.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::discriminator::{instruction_discriminator, DISCRIMINATOR_LEN};
use crate::error::StateError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OntoraInstruction {
    /// Register a user profile at a freshly generated address
    ///
    /// Accounts:
    /// 0. `[writable, signer]` User account (one-time keypair)
    /// 1. `[writable, signer]` User (wallet, fee payer)
    /// 2. `[]` System program
    InitializeUser,

    /// Stake tokens against an agent
    ///
    /// Accounts:
    /// 0. `[writable]` Stake account (PDA: ["stake", user, agent_id])
    /// 1. `[writable]` Agent account (PDA: ["agent", agent_id])
    /// 2. `[writable, signer]` User
    /// 3. `[]` System program
    Stake { amount: u64, agent_id: String },

    /// Claim accrued rewards for a stake
    ///
    /// Accounts:
    /// 0. `[writable]` Stake account (PDA: ["stake", user, agent_id])
    /// 1. `[writable]` Rewards account (PDA: ["rewards", user])
    /// 2. `[writable, signer]` User
    /// 3. `[]` System program
    ClaimRewards { agent_id: String },

    /// Create a governance proposal
    ///
    /// Accounts:
    /// 0. `[writable, signer]` Proposal account (one-time keypair)
    /// 1. `[writable, signer]` Proposer
    /// 2. `[]` System program
    CreateProposal {
        title: String,
        description: String,
        /// Voting window in seconds
        voting_duration: u64,
    },

    /// Cast a vote on a proposal
    ///
    /// Accounts:
    /// 0. `[writable]` Proposal account (PDA: ["proposal", proposal_id])
    /// 1. `[writable]` Vote account (PDA: ["vote", voter, proposal_id])
    /// 2. `[writable, signer]` Voter
    /// 3. `[]` System program
    Vote { proposal_id: String, in_favor: bool },
}

impl OntoraInstruction {
    const HANDLERS: [&'static str; 5] = [
        "initialize_user",
        "stake",
        "claim_rewards",
        "create_proposal",
        "vote",
    ];

    /// Handler name in the program, used for the discriminator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InitializeUser => "initialize_user",
            Self::Stake { .. } => "stake",
            Self::ClaimRewards { .. } => "claim_rewards",
            Self::CreateProposal { .. } => "create_proposal",
            Self::Vote { .. } => "vote",
        }
    }

    pub fn pack(&self) -> Result<Vec<u8>, StateError> {
        let mut data = instruction_discriminator(self.name()).to_vec();
        match self {
            Self::InitializeUser => {},
            Self::Stake { amount, agent_id } => {
                amount.serialize(&mut data)?;
                agent_id.serialize(&mut data)?;
            },
            Self::ClaimRewards { agent_id } => {
                agent_id.serialize(&mut data)?;
            },
            Self::CreateProposal {
                title,
                description,
                voting_duration,
            } => {
                title.serialize(&mut data)?;
                description.serialize(&mut data)?;
                voting_duration.serialize(&mut data)?;
            },
            Self::Vote {
                proposal_id,
                in_favor,
            } => {
                proposal_id.serialize(&mut data)?;
                in_favor.serialize(&mut data)?;
            },
        }
        Ok(data)
    }

    pub fn unpack(input: &[u8]) -> Result<Self, StateError> {
        if input.len() < DISCRIMINATOR_LEN {
            return Err(StateError::UnknownInstruction);
        }
        let (prefix, args) = input.split_at(DISCRIMINATOR_LEN);

        let name = Self::HANDLERS
            .iter()
            .find(|name| instruction_discriminator(name) == prefix)
            .ok_or(StateError::UnknownInstruction)?;

        let instruction = match *name {
            "initialize_user" => {
                if !args.is_empty() {
                    return Err(StateError::UnknownInstruction);
                }
                Self::InitializeUser
            },
            "stake" => {
                let (amount, agent_id) = <(u64, String)>::try_from_slice(args)?;
                Self::Stake { amount, agent_id }
            },
            "claim_rewards" => Self::ClaimRewards {
                agent_id: String::try_from_slice(args)?,
            },
            "create_proposal" => {
                let (title, description, voting_duration) =
                    <(String, String, u64)>::try_from_slice(args)?;
                Self::CreateProposal {
                    title,
                    description,
                    voting_duration,
                }
            },
            _ => {
                let (proposal_id, in_favor) = <(String, bool)>::try_from_slice(args)?;
                Self::Vote {
                    proposal_id,
                    in_favor,
                }
            },
        };
        Ok(instruction)
    }
}
