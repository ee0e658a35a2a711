//! Serialization constants for SPV proof verification

/// Serialized block header length: 4 + 32 + 32 + 4 + 4 + 4 bytes
pub const HEADER_LEN: usize = 80;

/// Digest length
pub const HASH_LEN: usize = 32;

/// Serialized outpoint length: 32-byte txid + 4-byte output index
pub const OUTPOINT_LEN: usize = 36;

/// Output value field length: 8-byte little-endian satoshi amount
pub const VALUE_LEN: usize = 8;

/// Input sequence field length
pub const SEQUENCE_LEN: usize = 4;

/// Satoshis per BTC
pub const SATOSHIS_PER_BTC: u64 = 100_000_000;
