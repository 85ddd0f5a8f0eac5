#![allow(dead_code)]

use async_trait::async_trait;
use ontora_sdk::core::constants::PROGRAM_ID;
use ontora_sdk::state::{
    AccountSchema, AgentAccount, OntoraInstruction, ProposalAccount, RewardsAccount,
    StakeAccount, UserAccount, VoteAccount,
};
use ontora_sdk::{ChainClient, KeypairWallet, WalletProvider};
use solana_sdk::{
    account::Account,
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use std::collections::HashMap;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

type BoxError = Box<dyn Error + Send + Sync>;

pub const NOW: i64 = 1_700_000_000;
pub const REWARD_PER_CLAIM: u64 = 25;

#[derive(Default)]
struct LedgerState {
    accounts: HashMap<Pubkey, Account>,
    submitted: Vec<Transaction>,
    calls: usize,
    reject_with: Option<String>,
    blockhash_failure: Option<String>,
    read_failure: Option<String>,
}

/// In-memory ledger that plays the Ontora program's effects on submitted
/// transactions. Signatures are verified, so a missing co-signer fails.
pub struct MockLedger {
    state: Mutex<LedgerState>,
    blockhash: Hash,
}

impl MockLedger {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LedgerState::default()),
            blockhash: Hash::new_unique(),
        }
    }

    /// Number of transport calls of any kind.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    pub fn submitted(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().submitted.clone()
    }

    /// Reject every following submission with `reason`.
    pub fn reject_submissions(&self, reason: &str) {
        self.state.lock().unwrap().reject_with = Some(reason.to_string());
    }

    /// Fail every following blockhash request with `reason`.
    pub fn fail_blockhash(&self, reason: &str) {
        self.state.lock().unwrap().blockhash_failure = Some(reason.to_string());
    }

    /// Fail every following account read with `reason`.
    pub fn fail_reads(&self, reason: &str) {
        self.state.lock().unwrap().read_failure = Some(reason.to_string());
    }

    /// Address that only received a lamport transfer: system-owned, no data.
    pub fn insert_lamports_only(&self, address: Pubkey, lamports: u64) {
        let mut state = self.state.lock().unwrap();
        state.accounts.insert(
            address,
            Account {
                lamports,
                ..Account::default()
            },
        );
    }

    pub fn insert_account<T: AccountSchema>(&self, address: Pubkey, value: &T) {
        let mut state = self.state.lock().unwrap();
        state.accounts.insert(address, program_account(value.encode().unwrap()));
    }

    pub fn insert_raw(&self, address: Pubkey, data: Vec<u8>) {
        let mut state = self.state.lock().unwrap();
        state.accounts.insert(address, program_account(data));
    }

    pub fn read<T: AccountSchema>(&self, address: &Pubkey) -> Option<T> {
        let state = self.state.lock().unwrap();
        state
            .accounts
            .get(address)
            .map(|account| T::decode(&account.data).unwrap())
    }
}

fn program_account(data: Vec<u8>) -> Account {
    Account {
        lamports: 1_000_000,
        data,
        owner: PROGRAM_ID,
        executable: false,
        rent_epoch: 0,
    }
}

fn load<T: AccountSchema + Default>(accounts: &HashMap<Pubkey, Account>, key: &Pubkey) -> T {
    accounts
        .get(key)
        .map(|account| T::decode(&account.data).unwrap())
        .unwrap_or_default()
}

fn store<T: AccountSchema>(accounts: &mut HashMap<Pubkey, Account>, key: Pubkey, value: &T) {
    accounts.insert(key, program_account(value.encode().unwrap()));
}

fn apply(
    accounts: &mut HashMap<Pubkey, Account>,
    instruction: OntoraInstruction,
    keys: &[Pubkey],
) -> Result<(), BoxError> {
    match instruction {
        OntoraInstruction::InitializeUser => {
            if accounts.contains_key(&keys[0]) {
                return Err("custom program error: AccountAlreadyInitialized".into());
            }
            let user = UserAccount {
                owner: keys[1].to_bytes(),
                total_staked: 0,
                created_at: NOW,
            };
            store(accounts, keys[0], &user);
        },
        OntoraInstruction::Stake { amount, agent_id } => {
            let mut stake: StakeAccount = load(accounts, &keys[0]);
            let first_stake = stake.amount == 0;
            stake.user = keys[2].to_bytes();
            stake.agent_id = agent_id.clone();
            stake.amount += amount;
            if first_stake {
                stake.staked_at = NOW;
            }
            store(accounts, keys[0], &stake);

            let mut agent: AgentAccount = load(accounts, &keys[1]);
            agent.agent_id = agent_id;
            agent.total_staked += amount;
            if first_stake {
                agent.staker_count += 1;
            }
            store(accounts, keys[1], &agent);
        },
        OntoraInstruction::ClaimRewards { .. } => {
            if !accounts.contains_key(&keys[0]) {
                return Err("custom program error: AccountNotInitialized (stake_account)".into());
            }
            let mut stake: StakeAccount = load(accounts, &keys[0]);
            stake.last_claim_at = NOW;
            store(accounts, keys[0], &stake);

            let mut rewards: RewardsAccount = load(accounts, &keys[1]);
            rewards.user = keys[2].to_bytes();
            rewards.total_claimed += REWARD_PER_CLAIM;
            rewards.last_claim_at = NOW;
            store(accounts, keys[1], &rewards);
        },
        OntoraInstruction::CreateProposal {
            title,
            description,
            voting_duration,
        } => {
            let proposal = ProposalAccount {
                proposer: keys[1].to_bytes(),
                title,
                description,
                created_at: NOW,
                voting_ends_at: NOW + voting_duration as i64,
                ..Default::default()
            };
            store(accounts, keys[0], &proposal);
        },
        OntoraInstruction::Vote {
            proposal_id,
            in_favor,
        } => {
            if !accounts.contains_key(&keys[0]) {
                return Err("custom program error: AccountNotInitialized (proposal)".into());
            }
            if accounts.contains_key(&keys[1]) {
                return Err("custom program error: AlreadyVoted".into());
            }
            let mut proposal: ProposalAccount = load(accounts, &keys[0]);
            if in_favor {
                proposal.votes_for += 1;
            } else {
                proposal.votes_against += 1;
            }
            store(accounts, keys[0], &proposal);

            let vote = VoteAccount {
                voter: keys[2].to_bytes(),
                proposal_id,
                in_favor,
                voted_at: NOW,
                bump: 0,
            };
            store(accounts, keys[1], &vote);
        },
    }
    Ok(())
}

#[async_trait]
impl ontora_sdk::SolConnection for MockLedger {
    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, BoxError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;

        if let Some(reason) = &state.reject_with {
            return Err(reason.clone().into());
        }
        tx.verify()?;

        // Apply against a scratch copy so a failing instruction leaves no trace.
        let mut accounts = state.accounts.clone();
        for compiled in &tx.message.instructions {
            let program = tx.message.account_keys[compiled.program_id_index as usize];
            if program != PROGRAM_ID {
                return Err(format!("unexpected program {program}").into());
            }
            let keys: Vec<Pubkey> = compiled
                .accounts
                .iter()
                .map(|index| tx.message.account_keys[*index as usize])
                .collect();
            let instruction = OntoraInstruction::unpack(&compiled.data)?;
            apply(&mut accounts, instruction, &keys)?;
        }

        state.accounts = accounts;
        state.submitted.push(tx.clone());
        Ok(tx.signatures[0])
    }

    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>, BoxError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if let Some(reason) = &state.read_failure {
            return Err(reason.clone().into());
        }
        Ok(state.accounts.get(pubkey).cloned())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, BoxError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if let Some(reason) = &state.blockhash_failure {
            return Err(reason.clone().into());
        }
        Ok(self.blockhash)
    }
}

/// Provider that is installed but refuses every connection request.
pub struct RejectingWallet;

#[async_trait]
impl WalletProvider for RejectingWallet {
    fn name(&self) -> &str {
        "rejecting"
    }

    async fn connect(&self) -> Result<Pubkey, String> {
        Err("User rejected the request".to_string())
    }

    async fn disconnect(&self) -> Result<(), String> {
        Ok(())
    }

    fn pubkey(&self) -> Option<Pubkey> {
        None
    }

    fn is_connected(&self) -> bool {
        false
    }

    async fn sign_transaction(&self, _tx: Transaction) -> Result<Transaction, String> {
        Err("not connected".to_string())
    }
}

/// Provider that is registered but not installed.
pub struct UnavailableWallet;

#[async_trait]
impl WalletProvider for UnavailableWallet {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn connect(&self) -> Result<Pubkey, String> {
        panic!("unavailable provider must never be asked to connect")
    }

    async fn disconnect(&self) -> Result<(), String> {
        Ok(())
    }

    fn pubkey(&self) -> Option<Pubkey> {
        None
    }

    fn is_connected(&self) -> bool {
        false
    }

    async fn sign_transaction(&self, _tx: Transaction) -> Result<Transaction, String> {
        Err("not installed".to_string())
    }
}

/// Provider that connects normally but fails to disconnect and refuses to sign.
pub struct FaultyWallet {
    keypair: Keypair,
    connected: AtomicBool,
}

impl FaultyWallet {
    pub fn new() -> Self {
        Self {
            keypair: Keypair::new(),
            connected: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl WalletProvider for FaultyWallet {
    fn name(&self) -> &str {
        "faulty"
    }

    async fn connect(&self) -> Result<Pubkey, String> {
        self.connected.store(true, Ordering::SeqCst);
        Ok(self.keypair.pubkey())
    }

    async fn disconnect(&self) -> Result<(), String> {
        Err("extension crashed".to_string())
    }

    fn pubkey(&self) -> Option<Pubkey> {
        self.is_connected().then(|| self.keypair.pubkey())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn sign_transaction(&self, _tx: Transaction) -> Result<Transaction, String> {
        Err("user declined".to_string())
    }
}

pub struct TestContext {
    pub client: ChainClient<MockLedger>,
    pub wallet: Arc<KeypairWallet>,
    pub wallet_key: Pubkey,
}

impl TestContext {
    pub fn new() -> Self {
        let keypair = Keypair::new();
        let wallet_key = keypair.pubkey();
        let wallet = Arc::new(KeypairWallet::with_name("phantom", keypair));
        let client = ChainClient::new(MockLedger::new()).with_provider(wallet.clone());
        Self {
            client,
            wallet,
            wallet_key,
        }
    }

    pub async fn connected() -> anyhow::Result<Self> {
        let mut ctx = Self::new();
        ctx.client.connect().await?;
        Ok(ctx)
    }

    pub fn ledger(&self) -> &MockLedger {
        self.client.connection()
    }
}
