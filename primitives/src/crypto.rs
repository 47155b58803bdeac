//! Identifier generation and hashing.
//!
//! - Trade identifiers: 128 random bits from a CSPRNG, dashed hex
//! - Transaction ids: hex SHA-256 over `nonce || creator`
//! - Write-set digests: BLAKE3

use rand::{rngs::OsRng, CryptoRng, RngCore};
use sha2::Digest;

/// 32-byte digest.
pub type Hash = [u8; 32];

/// Generate a trade identifier from the operating system's CSPRNG.
///
/// Format: 8-4-4-4-12 lowercase hex digits. All 128 bits are random;
/// no version or variant bits are set.
pub fn generate_transaction_id() -> String {
    generate_transaction_id_with(&mut OsRng)
}

/// Generate a trade identifier from the given cryptographically secure RNG.
pub fn generate_transaction_id_with<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Uuid::from_bytes(bytes).hyphenated().to_string()
}

/// Returns true if `s` is a canonical dashed hex identifier.
pub fn is_dashed_hex_id(s: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];
    let parts: Vec<&str> = s.split('-').collect();
    parts.len() == GROUPS.len()
        && parts
            .iter()
            .zip(GROUPS)
            .all(|(part, len)| part.len() == len && part.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Derive a transaction id the way the peer does: hex SHA-256 of the
/// nonce followed by the serialized creator identity.
pub fn compute_tx_id(nonce: &[u8], creator: &[u8]) -> String {
    let mut hasher = sha2::Sha256::new();
    hasher.update(nonce);
    hasher.update(creator);
    hex::encode(hasher.finalize())
}

/// Compute BLAKE3 hash of the input data.
pub fn hash_blake3(data: &[u8]) -> Hash {
    *blake3::hash(data).as_bytes()
}
