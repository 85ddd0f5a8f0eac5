//! PDA seed tags.
//!
//! Seed layouts:
//! - Agent:    ["agent", agent_id]
//! - Stake:    ["stake", user, agent_id]
//! - Rewards:  ["rewards", user]
//! - Proposal: ["proposal", proposal_id]
//! - Vote:     ["vote", user, proposal_id]

pub const AGENT_SEED: &[u8] = b"agent";
pub const STAKE_SEED: &[u8] = b"stake";
pub const REWARDS_SEED: &[u8] = b"rewards";
pub const PROPOSAL_SEED: &[u8] = b"proposal";
pub const VOTE_SEED: &[u8] = b"vote";

/// Maximum length of a single seed accepted by the runtime.
pub const MAX_SEED_LEN: usize = 32;
