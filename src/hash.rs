//! Shared digest utilities

use sha2::{Digest, Sha256};

use crate::types::Hash;

/// Hash256: 𝕊 → ℍ
///
/// Bitcoin's double-SHA256: SHA256(SHA256(data)).
pub fn hash256(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    second.into()
}

/// Hash256Pair: ℍ × ℍ → ℍ
///
/// Double-SHA256 over the 64-byte concatenation of two digests, the node
/// combination step of the transaction Merkle tree.
pub fn hash256_pair(left: &Hash, right: &Hash) -> Hash {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left);
    buf[32..].copy_from_slice(right);
    hash256(&buf)
}

/// Byte-reversed hex rendering of a digest.
///
/// Block explorers display txids and block hashes with the byte order
/// reversed; the reversed form is display-only and never hashed.
pub fn display_hex(digest: &Hash) -> String {
    digest.iter().rev().map(|byte| format!("{:02x}", byte)).collect()
}
