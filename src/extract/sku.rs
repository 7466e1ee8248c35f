//! Display SKU generation

use sha2::{Digest, Sha256};

/// Number of title words contributing to the SKU prefix
const PREFIX_WORDS: usize = 3;

/// Builds a short display SKU such as `MCB-0427` from a product title
///
/// The prefix is the uppercased initial of each of the first three words; the
/// suffix is a stable hash of the full title modulo 10000. Equal titles always
/// give equal SKUs. Different titles may collide.
///
/// # Example
///
/// ```
/// use sumi_shelf::extract::generate_sku;
///
/// let sku = generate_sku("Men's Classic Black T-Shirt");
/// assert!(sku.starts_with("MCB-"));
/// assert_eq!(sku, generate_sku("Men's Classic Black T-Shirt"));
/// ```
pub fn generate_sku(title: &str) -> String {
    let prefix: String = title
        .split_whitespace()
        .take(PREFIX_WORDS)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    format!("{}-{:04}", prefix, title_hash(title) % 10_000)
}

/// First eight bytes of the title's SHA-256, big-endian
fn title_hash(title: &str) -> u64 {
    let digest = Sha256::digest(title.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
