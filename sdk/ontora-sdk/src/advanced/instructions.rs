use crate::error::Result;
use ontora_state::OntoraInstruction;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

// Raw instruction constructors. Addresses are taken as given; derivation and
// input validation happen in `basic::actions`.

pub fn initialize_user(
    program_id: &Pubkey,
    user_account: &Pubkey,
    user: &Pubkey,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(*user_account, true),
        AccountMeta::new(*user, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: OntoraInstruction::InitializeUser.pack()?,
    })
}

pub fn stake(
    program_id: &Pubkey,
    stake_account: &Pubkey,
    agent_account: &Pubkey,
    user: &Pubkey,
    amount: u64,
    agent_id: &str,
) -> Result<Instruction> {
    let instruction = OntoraInstruction::Stake {
        amount,
        agent_id: agent_id.to_string(),
    };

    let accounts = vec![
        AccountMeta::new(*stake_account, false),
        AccountMeta::new(*agent_account, false),
        AccountMeta::new(*user, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack()?,
    })
}

pub fn claim_rewards(
    program_id: &Pubkey,
    stake_account: &Pubkey,
    rewards_account: &Pubkey,
    user: &Pubkey,
    agent_id: &str,
) -> Result<Instruction> {
    let instruction = OntoraInstruction::ClaimRewards {
        agent_id: agent_id.to_string(),
    };

    let accounts = vec![
        AccountMeta::new(*stake_account, false),
        AccountMeta::new(*rewards_account, false),
        AccountMeta::new(*user, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack()?,
    })
}

pub fn create_proposal(
    program_id: &Pubkey,
    proposal: &Pubkey,
    proposer: &Pubkey,
    title: &str,
    description: &str,
    voting_duration: u64,
) -> Result<Instruction> {
    let instruction = OntoraInstruction::CreateProposal {
        title: title.to_string(),
        description: description.to_string(),
        voting_duration,
    };

    let accounts = vec![
        AccountMeta::new(*proposal, true),
        AccountMeta::new(*proposer, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack()?,
    })
}

pub fn vote(
    program_id: &Pubkey,
    proposal: &Pubkey,
    vote_account: &Pubkey,
    voter: &Pubkey,
    proposal_id: &str,
    in_favor: bool,
) -> Result<Instruction> {
    let instruction = OntoraInstruction::Vote {
        proposal_id: proposal_id.to_string(),
        in_favor,
    };

    let accounts = vec![
        AccountMeta::new(*proposal, false),
        AccountMeta::new(*vote_account, false),
        AccountMeta::new(*voter, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack()?,
    })
}
