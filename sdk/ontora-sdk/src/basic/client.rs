use crate::basic::actions::{
    ClaimRewardsBuilder, CreateProposalBuilder, PreparedTransaction, RegisterUserBuilder,
    StakeBuilder, VoteBuilder,
};
use crate::basic::session::{FirstAvailable, ProviderSelector, Session, SessionStatus};
use crate::core::connection::SolConnection;
use crate::core::constants::PROGRAM_ID;
use crate::core::signer::WalletProvider;
use crate::error::{OntoraSdkError, Result};
use crate::types::{Operation, TransactionResult};
use crate::utils::{self, validate_identifier};
use ontora_state::{ProposalAccount, RewardsAccount, StakeAccount, VoteAccount};
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client for the Ontora program.
///
/// Owns at most one wallet [`Session`]. `connect`/`disconnect` take `&mut self`,
/// so session changes are serialized by the borrow checker; operations take
/// `&self` and may run concurrently against the same session.
///
/// Every operation requires a connected wallet and fails with
/// [`OntoraSdkError::NotConnected`] otherwise, before any network call.
pub struct ChainClient<C: SolConnection> {
    connection: C,
    providers: Vec<Arc<dyn WalletProvider>>,
    selector: Box<dyn ProviderSelector>,
    session: Option<Session>,
}

impl<C: SolConnection> ChainClient<C> {
    pub fn new(connection: C) -> Self {
        Self {
            connection,
            providers: Vec::new(),
            selector: Box::new(FirstAvailable),
            session: None,
        }
    }

    /// Register a wallet provider. Registration order is the order the
    /// selector sees.
    pub fn with_provider(mut self, provider: Arc<dyn WalletProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn with_selector(mut self, selector: impl ProviderSelector + 'static) -> Self {
        self.selector = Box::new(selector);
        self
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn program_id(&self) -> Pubkey {
        PROGRAM_ID
    }

    //=========================================================================
    // Session lifecycle
    //=========================================================================

    /// Connect to a wallet chosen by the configured selector.
    ///
    /// Calling this while already connected is a no-op that returns the
    /// current wallet; disconnect first to switch providers.
    pub async fn connect(&mut self) -> Result<Pubkey> {
        if let Some(session) = &self.session {
            if session.is_live() {
                debug!(wallet = %session.wallet(), "Already connected");
                return Ok(session.wallet());
            }
            warn!(
                provider = session.provider_name(),
                "Provider dropped the connection, discarding stale session"
            );
            self.session = None;
        }

        let available: Vec<Arc<dyn WalletProvider>> = self
            .providers
            .iter()
            .filter(|p| p.is_available())
            .cloned()
            .collect();
        if available.is_empty() {
            return Err(OntoraSdkError::Connection(
                "No wallet provider available".to_string(),
            ));
        }

        let provider = self
            .selector
            .select(&available)
            .and_then(|index| available.get(index).cloned())
            .ok_or_else(|| {
                OntoraSdkError::Connection("No wallet provider selected".to_string())
            })?;

        let wallet = provider.connect().await.map_err(|reason| {
            warn!(provider = provider.name(), %reason, "Wallet connection rejected");
            OntoraSdkError::Connection(format!("{} rejected connection: {reason}", provider.name()))
        })?;

        info!(wallet = %wallet, provider = provider.name(), "Wallet connected");
        self.session = Some(Session::new(wallet, provider));
        Ok(wallet)
    }

    /// Disconnect the current wallet. No-op when already disconnected.
    ///
    /// The session is dropped even if the provider reports an error.
    pub async fn disconnect(&mut self) -> Result<()> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };

        session.provider().disconnect().await.map_err(|reason| {
            warn!(provider = session.provider_name(), %reason, "Wallet disconnect failed");
            OntoraSdkError::Connection(reason)
        })?;

        info!(wallet = %session.wallet(), "Wallet disconnected");
        Ok(())
    }

    /// Pure state query; performs no I/O.
    pub fn is_connected(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_live)
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_connected() {
            SessionStatus::Connected
        } else {
            SessionStatus::Disconnected
        }
    }

    /// Connected wallet address, if any.
    pub fn wallet(&self) -> Option<Pubkey> {
        self.active_session().ok().map(Session::wallet)
    }

    fn active_session(&self) -> Result<&Session> {
        match &self.session {
            Some(session) if session.is_live() => Ok(session),
            _ => Err(OntoraSdkError::NotConnected),
        }
    }

    //=========================================================================
    // Transactions
    //=========================================================================

    /// Register a user profile. A new one-time account is generated per call
    /// and returned in [`TransactionResult::created_account`].
    pub async fn register_user(&self) -> Result<TransactionResult> {
        let session = self.active_session()?;
        let prepared = RegisterUserBuilder::new()
            .with_user(session.wallet())
            .build_transaction(&self.connection)
            .await?;
        self.submit(session, prepared).await
    }

    pub async fn stake(&self, amount: i64, agent_id: &str) -> Result<TransactionResult> {
        let session = self.active_session()?;
        let prepared = StakeBuilder::new()
            .with_user(session.wallet())
            .with_amount(amount)
            .with_agent(agent_id)
            .build_transaction(&self.connection)
            .await?;
        self.submit(session, prepared).await
    }

    pub async fn claim_rewards(&self, agent_id: &str) -> Result<TransactionResult> {
        let session = self.active_session()?;
        let prepared = ClaimRewardsBuilder::new()
            .with_user(session.wallet())
            .with_agent(agent_id)
            .build_transaction(&self.connection)
            .await?;
        self.submit(session, prepared).await
    }

    /// Create a governance proposal at a freshly generated address.
    /// `voting_duration` is in seconds.
    pub async fn create_proposal(
        &self,
        title: &str,
        description: &str,
        voting_duration: i64,
    ) -> Result<TransactionResult> {
        let session = self.active_session()?;
        let prepared = CreateProposalBuilder::new()
            .with_proposer(session.wallet())
            .with_title(title)
            .with_description(description)
            .with_voting_duration(voting_duration)
            .build_transaction(&self.connection)
            .await?;
        self.submit(session, prepared).await
    }

    pub async fn vote(&self, proposal_id: &str, in_favor: bool) -> Result<TransactionResult> {
        let session = self.active_session()?;
        let prepared = VoteBuilder::new()
            .with_voter(session.wallet())
            .with_proposal(proposal_id)
            .in_favor(in_favor)
            .build_transaction(&self.connection)
            .await?;
        self.submit(session, prepared).await
    }

    /// Have the wallet sign as fee payer and submit once. No retries.
    async fn submit(
        &self,
        session: &Session,
        prepared: PreparedTransaction,
    ) -> Result<TransactionResult> {
        let PreparedTransaction {
            operation,
            transaction,
            created_account,
        } = prepared;

        let signed = session
            .provider()
            .sign_transaction(transaction)
            .await
            .map_err(|reason| {
                warn!(%operation, %reason, "Wallet refused to sign");
                OntoraSdkError::Submission(format!("wallet signing failed: {reason}"))
            })?;

        let signature = self
            .connection
            .send_transaction(&signed)
            .await
            .map_err(|e| {
                warn!(%operation, error = %e, "Transaction rejected");
                OntoraSdkError::Submission(e.to_string())
            })?;

        info!(%operation, %signature, wallet = %session.wallet(), "Transaction submitted");
        Ok(TransactionResult {
            signature,
            created_account,
        })
    }

    //=========================================================================
    // Reads
    //=========================================================================

    /// Fetch the connected wallet's stake on `agent_id`.
    ///
    /// Fails with [`OntoraSdkError::AccountNotFound`] if nothing was staked.
    pub async fn fetch_stake_state(&self, agent_id: &str) -> Result<StakeAccount> {
        let session = self.active_session()?;
        validate_identifier("agent id", agent_id)?;

        let (stake_pda, _) = utils::derive_stake_pda(&PROGRAM_ID, &session.wallet(), agent_id)?;
        debug!(
            operation = %Operation::FetchStakeState,
            %stake_pda,
            agent_id,
            "Fetching stake account"
        );
        utils::fetch_account(&self.connection, &stake_pda).await
    }

    pub async fn fetch_rewards_state(&self) -> Result<RewardsAccount> {
        let session = self.active_session()?;
        let (rewards_pda, _) = utils::derive_rewards_pda(&PROGRAM_ID, &session.wallet())?;
        utils::fetch_account(&self.connection, &rewards_pda).await
    }

    /// Fetch a proposal by account address (as returned by `create_proposal`).
    pub async fn fetch_proposal(&self, proposal: &Pubkey) -> Result<ProposalAccount> {
        self.active_session()?;
        utils::fetch_account(&self.connection, proposal).await
    }

    /// Fetch the connected wallet's ballot on `proposal_id`.
    pub async fn fetch_vote(&self, proposal_id: &str) -> Result<VoteAccount> {
        let session = self.active_session()?;
        validate_identifier("proposal id", proposal_id)?;

        let (vote_pda, _) = utils::derive_vote_pda(&PROGRAM_ID, &session.wallet(), proposal_id)?;
        utils::fetch_account(&self.connection, &vote_pda).await
    }
}
