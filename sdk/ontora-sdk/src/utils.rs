use crate::core::connection::SolConnection;
use crate::error::{OntoraSdkError, Result};
use ontora_state::seeds::{
    AGENT_SEED, MAX_SEED_LEN, PROPOSAL_SEED, REWARDS_SEED, STAKE_SEED, VOTE_SEED,
};
use ontora_state::AccountSchema;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

//=============================================================================
// PDA Derivation Helpers
//=============================================================================

/// Derive a program address from an ordered list of seed tags.
///
/// Pure: identical inputs always give the same address and bump.
pub fn derive_pda(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    if let Some(seed) = seeds.iter().find(|s| s.len() > MAX_SEED_LEN) {
        return Err(OntoraSdkError::Validation(format!(
            "Seed of {} bytes exceeds the {MAX_SEED_LEN}-byte limit",
            seed.len()
        )));
    }

    Pubkey::try_find_program_address(seeds, program_id).ok_or_else(|| {
        OntoraSdkError::Validation("No viable bump seed for program address".to_string())
    })
}

/// Derive the Agent PDA: ["agent", agent_id]
pub fn derive_agent_pda(program_id: &Pubkey, agent_id: &str) -> Result<(Pubkey, u8)> {
    derive_pda(&[AGENT_SEED, agent_id.as_bytes()], program_id)
}

/// Derive the Stake PDA: ["stake", user, agent_id]
pub fn derive_stake_pda(
    program_id: &Pubkey,
    user: &Pubkey,
    agent_id: &str,
) -> Result<(Pubkey, u8)> {
    derive_pda(&[STAKE_SEED, user.as_ref(), agent_id.as_bytes()], program_id)
}

/// Derive the Rewards PDA: ["rewards", user]
pub fn derive_rewards_pda(program_id: &Pubkey, user: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_pda(&[REWARDS_SEED, user.as_ref()], program_id)
}

/// Derive the Proposal PDA: ["proposal", proposal_id]
pub fn derive_proposal_pda(program_id: &Pubkey, proposal_id: &str) -> Result<(Pubkey, u8)> {
    derive_pda(&[PROPOSAL_SEED, proposal_id.as_bytes()], program_id)
}

/// Derive the Vote PDA: ["vote", user, proposal_id]
pub fn derive_vote_pda(
    program_id: &Pubkey,
    user: &Pubkey,
    proposal_id: &str,
) -> Result<(Pubkey, u8)> {
    derive_pda(&[VOTE_SEED, user.as_ref(), proposal_id.as_bytes()], program_id)
}

//=============================================================================
// Input Validation
//=============================================================================

/// Identifiers end up as PDA seeds: non-empty and at most 32 bytes.
pub fn validate_identifier(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OntoraSdkError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > MAX_SEED_LEN {
        return Err(OntoraSdkError::Validation(format!(
            "{field} is {} bytes, maximum is {MAX_SEED_LEN}",
            value.len()
        )));
    }
    Ok(())
}

//=============================================================================
// Account Fetching & Decoding
//=============================================================================

/// Fetch raw account data from the blockchain.
///
/// An address holding only lamports (system-owned, no data) was never
/// initialized by the program and is reported as not found.
pub async fn fetch_account_data(
    connection: &(impl SolConnection + ?Sized),
    address: &Pubkey,
) -> Result<Vec<u8>> {
    let account = connection
        .get_account(address)
        .await
        .map_err(|e| OntoraSdkError::Transport(e.to_string()))?
        .filter(|account| !account.data.is_empty() && account.owner != system_program::id())
        .ok_or(OntoraSdkError::AccountNotFound(*address))?;

    Ok(account.data)
}

/// Fetch an account and decode it with its schema
pub async fn fetch_account<T: AccountSchema>(
    connection: &(impl SolConnection + ?Sized),
    address: &Pubkey,
) -> Result<T> {
    let data = fetch_account_data(connection, address).await?;
    T::decode(&data).map_err(|e| {
        OntoraSdkError::InvalidAccountData(format!("{} at {}: {}", T::NAME, address, e))
    })
}
