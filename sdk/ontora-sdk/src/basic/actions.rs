use crate::advanced::instructions;
use crate::core::connection::SolConnection;
use crate::core::constants::PROGRAM_ID;
use crate::error::{OntoraSdkError, Result};
use crate::types::{LedgerAmount, Operation};
use crate::utils::{
    derive_agent_pda, derive_proposal_pda, derive_rewards_pda, derive_stake_pda,
    derive_vote_pda, validate_identifier,
};
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::Transaction;
use tracing::debug;

/// A transaction ready for the wallet's fee-payer signature.
///
/// The recent blockhash is set and any one-time co-signer has already signed.
#[derive(Debug)]
pub struct PreparedTransaction {
    pub operation: Operation,
    pub transaction: Transaction,
    pub created_account: Option<Pubkey>,
}

async fn prepare(
    connection: &impl SolConnection,
    operation: Operation,
    ix: Instruction,
    payer: &Pubkey,
    one_time_signer: Option<Keypair>,
) -> Result<PreparedTransaction> {
    let recent_blockhash = connection
        .get_latest_blockhash()
        .await
        .map_err(|e| OntoraSdkError::Submission(e.to_string()))?;

    let mut transaction = Transaction::new_unsigned(Message::new(&[ix], Some(payer)));
    transaction.message.recent_blockhash = recent_blockhash;

    let created_account = match one_time_signer {
        Some(keypair) => {
            transaction
                .try_partial_sign(&[&keypair], recent_blockhash)
                .map_err(|e| OntoraSdkError::Submission(e.to_string()))?;
            Some(keypair.pubkey())
        },
        None => None,
    };

    Ok(PreparedTransaction {
        operation,
        transaction,
        created_account,
    })
}

fn required<T: Clone>(value: &Option<T>, what: &str) -> Result<T> {
    value
        .clone()
        .ok_or_else(|| OntoraSdkError::Validation(format!("{what} required")))
}

pub struct RegisterUserBuilder {
    program_id: Pubkey,
    user: Option<Pubkey>,
}

impl RegisterUserBuilder {
    pub fn new() -> Self {
        Self {
            program_id: PROGRAM_ID,
            user: None,
        }
    }

    pub fn with_user(mut self, user: Pubkey) -> Self {
        self.user = Some(user);
        self
    }

    /// Generates a fresh user-account keypair on every call.
    pub async fn build_transaction(
        &self,
        connection: &impl SolConnection,
    ) -> Result<PreparedTransaction> {
        let user = required(&self.user, "User")?;

        let user_account = Keypair::new();
        let ix = instructions::initialize_user(&self.program_id, &user_account.pubkey(), &user)?;

        prepare(
            connection,
            Operation::RegisterUser,
            ix,
            &user,
            Some(user_account),
        )
        .await
    }
}

impl Default for RegisterUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct StakeBuilder {
    program_id: Pubkey,
    user: Option<Pubkey>,
    amount: Option<i64>,
    agent_id: Option<String>,
}

impl StakeBuilder {
    pub fn new() -> Self {
        Self {
            program_id: PROGRAM_ID,
            user: None,
            amount: None,
            agent_id: None,
        }
    }

    pub fn with_user(mut self, user: Pubkey) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_agent(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self
    }

    pub async fn build_transaction(
        &self,
        connection: &impl SolConnection,
    ) -> Result<PreparedTransaction> {
        let user = required(&self.user, "User")?;
        let amount = LedgerAmount::new(required(&self.amount, "Stake amount")?, "stake amount")?;
        let agent_id = required(&self.agent_id, "Agent id")?;
        validate_identifier("agent id", &agent_id)?;

        let (agent_pda, _) = derive_agent_pda(&self.program_id, &agent_id)?;
        let (stake_pda, _) = derive_stake_pda(&self.program_id, &user, &agent_id)?;
        debug!(%agent_pda, %stake_pda, agent_id = %agent_id, "Derived stake accounts");

        let ix = instructions::stake(
            &self.program_id,
            &stake_pda,
            &agent_pda,
            &user,
            amount.get(),
            &agent_id,
        )?;

        prepare(connection, Operation::Stake, ix, &user, None).await
    }
}

impl Default for StakeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ClaimRewardsBuilder {
    program_id: Pubkey,
    user: Option<Pubkey>,
    agent_id: Option<String>,
}

impl ClaimRewardsBuilder {
    pub fn new() -> Self {
        Self {
            program_id: PROGRAM_ID,
            user: None,
            agent_id: None,
        }
    }

    pub fn with_user(mut self, user: Pubkey) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_agent(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self
    }

    pub async fn build_transaction(
        &self,
        connection: &impl SolConnection,
    ) -> Result<PreparedTransaction> {
        let user = required(&self.user, "User")?;
        let agent_id = required(&self.agent_id, "Agent id")?;
        validate_identifier("agent id", &agent_id)?;

        let (stake_pda, _) = derive_stake_pda(&self.program_id, &user, &agent_id)?;
        let (rewards_pda, _) = derive_rewards_pda(&self.program_id, &user)?;
        debug!(%stake_pda, %rewards_pda, agent_id = %agent_id, "Derived reward accounts");

        let ix = instructions::claim_rewards(
            &self.program_id,
            &stake_pda,
            &rewards_pda,
            &user,
            &agent_id,
        )?;

        prepare(connection, Operation::ClaimRewards, ix, &user, None).await
    }
}

impl Default for ClaimRewardsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CreateProposalBuilder {
    program_id: Pubkey,
    proposer: Option<Pubkey>,
    title: Option<String>,
    description: String,
    voting_duration: Option<i64>,
}

impl CreateProposalBuilder {
    pub fn new() -> Self {
        Self {
            program_id: PROGRAM_ID,
            proposer: None,
            title: None,
            description: String::new(),
            voting_duration: None,
        }
    }

    pub fn with_proposer(mut self, proposer: Pubkey) -> Self {
        self.proposer = Some(proposer);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Voting window in seconds.
    pub fn with_voting_duration(mut self, seconds: i64) -> Self {
        self.voting_duration = Some(seconds);
        self
    }

    /// Generates a fresh proposal-account keypair on every call.
    pub async fn build_transaction(
        &self,
        connection: &impl SolConnection,
    ) -> Result<PreparedTransaction> {
        let proposer = required(&self.proposer, "Proposer")?;
        let title = required(&self.title, "Title")?;
        if title.trim().is_empty() {
            return Err(OntoraSdkError::Validation(
                "title must not be empty".to_string(),
            ));
        }
        let voting_duration = LedgerAmount::new(
            required(&self.voting_duration, "Voting duration")?,
            "voting duration",
        )?;

        let proposal = Keypair::new();
        let ix = instructions::create_proposal(
            &self.program_id,
            &proposal.pubkey(),
            &proposer,
            &title,
            &self.description,
            voting_duration.get(),
        )?;

        prepare(
            connection,
            Operation::CreateProposal,
            ix,
            &proposer,
            Some(proposal),
        )
        .await
    }
}

impl Default for CreateProposalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct VoteBuilder {
    program_id: Pubkey,
    voter: Option<Pubkey>,
    proposal_id: Option<String>,
    in_favor: bool,
}

impl VoteBuilder {
    pub fn new() -> Self {
        Self {
            program_id: PROGRAM_ID,
            voter: None,
            proposal_id: None,
            in_favor: true,
        }
    }

    pub fn with_voter(mut self, voter: Pubkey) -> Self {
        self.voter = Some(voter);
        self
    }

    pub fn with_proposal(mut self, proposal_id: impl Into<String>) -> Self {
        self.proposal_id = Some(proposal_id.into());
        self
    }

    pub fn in_favor(mut self, in_favor: bool) -> Self {
        self.in_favor = in_favor;
        self
    }

    pub async fn build_transaction(
        &self,
        connection: &impl SolConnection,
    ) -> Result<PreparedTransaction> {
        let voter = required(&self.voter, "Voter")?;
        let proposal_id = required(&self.proposal_id, "Proposal id")?;
        validate_identifier("proposal id", &proposal_id)?;

        let (proposal_pda, _) = derive_proposal_pda(&self.program_id, &proposal_id)?;
        let (vote_pda, _) = derive_vote_pda(&self.program_id, &voter, &proposal_id)?;
        debug!(%proposal_pda, %vote_pda, proposal_id = %proposal_id, "Derived vote accounts");

        let ix = instructions::vote(
            &self.program_id,
            &proposal_pda,
            &vote_pda,
            &voter,
            &proposal_id,
            self.in_favor,
        )?;

        prepare(connection, Operation::Vote, ix, &voter, None).await
    }
}

impl Default for VoteBuilder {
    fn default() -> Self {
        Self::new()
    }
}
