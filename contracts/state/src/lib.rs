//! Ontora State Module
//!
//! On-chain account layouts, PDA seed tags and instruction encoding shared by
//! the Ontora program and its clients. The program is Anchor-based, so every
//! account body and instruction payload is prefixed by an 8-byte discriminator.

pub mod accounts;
pub mod discriminator;
pub mod error;
pub mod instruction;
pub mod seeds;

pub use accounts::{
    AccountSchema, AgentAccount, ProposalAccount, RewardsAccount, StakeAccount, UserAccount,
    VoteAccount,
};
pub use discriminator::{account_discriminator, instruction_discriminator, DISCRIMINATOR_LEN};
pub use error::StateError;
pub use instruction::OntoraInstruction;
