//! Merkle inclusion proof verification
//!
//! Recomputes a candidate root from a leaf digest, its index in the block,
//! and the sibling path. The recomputation always produces some root; the
//! pipeline owns the comparison against the validated header's root, which
//! is the actual inclusion check.

use crate::constants::HASH_LEN;
use crate::error::{ProofError, Result};
use crate::hash::hash256_pair;
use crate::types::{Hash, Natural};

/// ParseMerklePath: 𝕊 → ℍ*
///
/// Split a concatenation of 32-byte sibling digests. Any other length is
/// malformed.
pub fn parse_merkle_path(bytes: &[u8]) -> Result<Vec<Hash>> {
    if bytes.len() % HASH_LEN != 0 {
        return Err(ProofError::BadMerkleProof(format!(
            "path length {} is not a multiple of 32",
            bytes.len()
        )));
    }

    let mut path = Vec::with_capacity(bytes.len() / HASH_LEN);
    for chunk in bytes.chunks_exact(HASH_LEN) {
        let mut digest = [0u8; HASH_LEN];
        digest.copy_from_slice(chunk);
        path.push(digest);
    }
    Ok(path)
}

/// RecomputeMerkleRoot: ℍ × ℍ* × ℕ → ℍ
///
/// Fold the sibling path over the leaf: an even index concatenates
/// `current ‖ sibling`, an odd index `sibling ‖ current`, halving the index
/// at each level. An empty path is only valid for index 0, a single-leaf
/// tree whose root is the leaf itself, and the index must address a leaf
/// inside the tree the path describes.
pub fn recompute_merkle_root(leaf: Hash, path: &[Hash], index: Natural) -> Result<Hash> {
    if path.is_empty() && index > 0 {
        return Err(ProofError::BadMerkleProof(
            "empty path with a nonzero leaf index".to_string(),
        ));
    }
    if (path.len() as u32) < Natural::BITS && index >> path.len() != 0 {
        return Err(ProofError::BadMerkleProof(format!(
            "index {} out of range for a path of depth {}",
            index,
            path.len()
        )));
    }

    let mut current = leaf;
    let mut position = index;
    for sibling in path {
        current = if position % 2 == 0 {
            hash256_pair(&current, sibling)
        } else {
            hash256_pair(sibling, &current)
        };
        position >>= 1;
    }
    Ok(current)
}
