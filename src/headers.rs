//! Block header sequence validation
//!
//! The proof supplies a short window of raw 80-byte headers, oldest first,
//! with the transaction asserted to be included in the first one. Work and
//! linkage are checked over the whole window: a single low-work header
//! cannot be paired with unrelated valid ancestors to fake inclusion.

use crate::constants::{HASH_LEN, HEADER_LEN};
use crate::error::{ProofError, Result};
use crate::hash::hash256;
use crate::pow::check_proof_of_work;
use crate::types::{BlockHeader, Hash};

/// ParseHeader: 𝕊⁸⁰ → ℋ
///
/// Field extraction from one raw 80-byte record. Cannot fail: every 80-byte
/// string is a structurally well-formed header.
pub fn parse_header(bytes: &[u8; HEADER_LEN]) -> BlockHeader {
    let mut prev_block_hash = [0u8; HASH_LEN];
    prev_block_hash.copy_from_slice(&bytes[4..36]);
    let mut merkle_root = [0u8; HASH_LEN];
    merkle_root.copy_from_slice(&bytes[36..68]);

    BlockHeader {
        version: i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        prev_block_hash,
        merkle_root,
        timestamp: u32::from_le_bytes([bytes[68], bytes[69], bytes[70], bytes[71]]),
        bits: u32::from_le_bytes([bytes[72], bytes[73], bytes[74], bytes[75]]),
        nonce: u32::from_le_bytes([bytes[76], bytes[77], bytes[78], bytes[79]]),
    }
}

/// ValidateHeaderChain: 𝕊 → ℍ × ℍ
///
/// For a concatenation of raw headers, oldest first:
/// 1. |bytes| must be a positive multiple of 80
/// 2. ∀i: Hash256(header[i]) ≤ ExpandTarget(header[i].bits)
/// 3. ∀i > 0: header[i].prev_block_hash = Hash256(header[i−1])
///
/// Returns the Merkle root and digest of header[0], the block asserted to
/// contain the transaction.
pub fn validate_header_chain(bytes: &[u8]) -> Result<(Hash, Hash)> {
    if bytes.is_empty() || bytes.len() % HEADER_LEN != 0 {
        return Err(ProofError::MalformedHeaders(bytes.len()));
    }

    let mut result = ([0u8; HASH_LEN], [0u8; HASH_LEN]);
    let mut prev_digest = [0u8; HASH_LEN];

    for (i, raw) in bytes.chunks_exact(HEADER_LEN).enumerate() {
        let mut record = [0u8; HEADER_LEN];
        record.copy_from_slice(raw);
        let header = parse_header(&record);
        let digest = hash256(raw);

        if !check_proof_of_work(&digest, header.bits)? {
            return Err(ProofError::InsufficientWork(i));
        }
        if i > 0 && header.prev_block_hash != prev_digest {
            return Err(ProofError::BrokenChain(i));
        }

        if i == 0 {
            result = (header.merkle_root, digest);
        }
        prev_digest = digest;
    }

    Ok(result)
}
