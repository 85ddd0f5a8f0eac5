// Example: staking on an agent and reading the stake back
//
// This example demonstrates how to:
// 1. Load the network settings from ONTORA_RPC_URL / ONTORA_COMMITMENT
// 2. Connect a keypair-backed wallet
// 3. Stake, claim rewards, take part in governance and fetch the resulting state
//
// Run against a local validator with the program deployed:
//   ONTORA_RPC_URL=http://127.0.0.1:8899 RUST_LOG=ontora_sdk=debug \
//     cargo run --example stake_flow

use ontora_sdk::{ChainClient, ClientConfig, KeypairWallet, RpcConnection};
use solana_sdk::signature::Keypair;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env()?;
    println!("Using RPC endpoint {}", config.rpc_url);

    // Replace with a funded keypair.
    let wallet = Arc::new(KeypairWallet::new(Keypair::new()));
    let mut client = ChainClient::new(RpcConnection::new(&config)).with_provider(wallet);

    let address = client.connect().await?;
    println!("Connected wallet: {address}");

    let registered = client.register_user().await?;
    println!("Registered user: {}", registered.id());

    let staked = client.stake(500, "agent-001").await?;
    println!("Staked: {}", staked.id());

    let stake = client.fetch_stake_state("agent-001").await?;
    println!("  Amount: {}", stake.amount);
    println!("  Staked at: {}", stake.staked_at);

    let claimed = client.claim_rewards("agent-001").await?;
    println!("Claimed rewards: {}", claimed.id());

    let proposal = client
        .create_proposal("Upgrade AI Model", "Proposal to upgrade AI model v2", 604_800)
        .await?;
    println!("Created proposal: {}", proposal.id());
    if let Some(address) = proposal.created_account {
        let created = client.fetch_proposal(&address).await?;
        println!("  Title: {}", created.title);
        println!("  Voting ends at: {}", created.voting_ends_at);
    }

    let ballot = client.vote("proposal-001", true).await?;
    println!("Voted: {}", ballot.id());

    client.disconnect().await?;
    Ok(())
}
