use sha2::{Digest, Sha256};

/// Length of the Anchor discriminator prefix.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Discriminator of an instruction handler: `sha256("global:<name>")[..8]`.
pub fn instruction_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    hashed_prefix("global", name)
}

/// Discriminator of an account type: `sha256("account:<Name>")[..8]`.
pub fn account_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    hashed_prefix("account", name)
}

fn hashed_prefix(namespace: &str, name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let digest = Sha256::digest(format!("{namespace}:{name}").as_bytes());
    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    out
}
