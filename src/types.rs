//! Core types for SPV payment proof verification

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

/// Hash type: 256-bit digest
pub type Hash = [u8; 32];

/// Byte string type
pub type ByteString = Vec<u8>;

/// Natural number type
pub type Natural = u64;

/// OutPoint: 𝒪 = ℍ × ℕ
///
/// Reference to a previous transaction output: the funding txid in its
/// natural (non-reversed) byte order, plus the output index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
}

/// Transaction Input: ℐ = 𝒪 × 𝕊 × ℕ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub prevout: OutPoint,
    pub script_sig: ByteString,
    pub sequence: u32,
}

/// Transaction Output: 𝒯 = ℕ × 𝕊
///
/// `value` is the output amount in satoshis, `script_pubkey` the recipient
/// script with its length prefix stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub value: u64,
    pub script_pubkey: ByteString,
}

/// Block Header: ℋ = ℤ × ℍ × ℍ × ℕ × ℕ × ℕ
///
/// Parsed view of one fixed 80-byte header record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash,
    pub merkle_root: Hash,
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// Payment Target: 𝕊 × ℕ
///
/// The recipient script and minimum satoshi amount a funding transaction
/// must pay. Fixed at construction of the verifier and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTarget {
    pub script_pubkey: ByteString,
    pub minimum_value: u64,
}

/// Funding Proof: the full argument tuple of one verification call.
///
/// `headers` is a concatenation of raw 80-byte headers, `merkle_proof` a
/// concatenation of 32-byte sibling digests. `version` and `locktime` are
/// the raw 4-byte serialized fields, not decoded integers: they are hashed
/// as supplied when deriving the txid. Consumed once per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingProof {
    pub headers: ByteString,
    pub merkle_proof: ByteString,
    pub version: [u8; 4],
    pub locktime: [u8; 4],
    pub tx_index: Natural,
    pub input_vector: ByteString,
    pub output_vector: ByteString,
}

/// Verification outcome
///
/// `Paid` carries the txid in its natural byte order. `NotPaid` carries
/// exactly one stable classification; the first failing stage wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Paid { txid: Hash },
    NotPaid { code: ErrorCode },
}

impl Outcome {
    pub fn is_paid(&self) -> bool {
        matches!(self, Outcome::Paid { .. })
    }
}
