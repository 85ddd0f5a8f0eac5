use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

// Deployed Ontora program
pub const PROGRAM_ID: Pubkey = pubkey!("ontoraAgent11111111111111111111111111111111");

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
