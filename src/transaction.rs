//! Transaction vector parsing and txid derivation
//!
//! Inputs and outputs arrive as separately serialized byte vectors, each
//! carrying a leading CompactSize record count. Decoding the declared number
//! of records must consume the vector exactly: truncation and trailing bytes
//! are both malformed. This is what defeats the boundary-shifting attack
//! where a byte is moved from the end of the input vector onto the front of
//! the output vector.

use crate::constants::*;
use crate::error::{ProofError, Result};
use crate::hash::hash256;
use crate::types::*;

/// ReadCompactSize: 𝕊 → ℕ × ℕ
///
/// Decode a CompactSize integer from the front of `bytes`, returning the
/// value and the number of bytes consumed. Values must use their shortest
/// encoding; a count that could be encoded shorter is not a valid
/// serialization.
fn read_compact_size(bytes: &[u8]) -> std::result::Result<(u64, usize), String> {
    let tag = *bytes.first().ok_or("missing count field")?;

    match tag {
        0x00..=0xfc => Ok((tag as u64, 1)),
        0xfd => {
            let raw = bytes.get(1..3).ok_or("truncated 2-byte count")?;
            let value = u16::from_le_bytes([raw[0], raw[1]]) as u64;
            if value < 0xfd {
                return Err("non-minimal count encoding".to_string());
            }
            Ok((value, 3))
        }
        0xfe => {
            let raw = bytes.get(1..5).ok_or("truncated 4-byte count")?;
            let value = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]) as u64;
            if value <= 0xffff {
                return Err("non-minimal count encoding".to_string());
            }
            Ok((value, 5))
        }
        0xff => {
            let raw = bytes.get(1..9).ok_or("truncated 8-byte count")?;
            let value = u64::from_le_bytes([
                raw[0], raw[1], raw[2], raw[3], raw[4], raw[5], raw[6], raw[7],
            ]);
            if value <= 0xffff_ffff {
                return Err("non-minimal count encoding".to_string());
            }
            Ok((value, 9))
        }
    }
}

/// Decode one input record starting at the front of `bytes`.
///
/// Layout: 32-byte previous txid, 4-byte previous output index, CompactSize
/// script length, script, 4-byte sequence.
fn read_input(bytes: &[u8]) -> std::result::Result<(TransactionInput, usize), String> {
    if bytes.len() < OUTPOINT_LEN {
        return Err("truncated outpoint".to_string());
    }
    let mut hash = [0u8; HASH_LEN];
    hash.copy_from_slice(&bytes[..HASH_LEN]);
    let index = u32::from_le_bytes([bytes[32], bytes[33], bytes[34], bytes[35]]);

    let (script_len, varint_len) = read_compact_size(&bytes[OUTPOINT_LEN..])?;
    let script_start = OUTPOINT_LEN + varint_len;
    let script_end = script_start
        .checked_add(usize::try_from(script_len).map_err(|_| "oversized script length")?)
        .ok_or("oversized script length")?;
    let script_sig = bytes
        .get(script_start..script_end)
        .ok_or("truncated script")?
        .to_vec();

    let sequence_end = script_end + SEQUENCE_LEN;
    let raw = bytes.get(script_end..sequence_end).ok_or("truncated sequence")?;
    let sequence = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);

    let input = TransactionInput {
        prevout: OutPoint { hash, index },
        script_sig,
        sequence,
    };
    Ok((input, sequence_end))
}

/// Decode one output record starting at the front of `bytes`.
///
/// Layout: 8-byte little-endian satoshi value, CompactSize script length,
/// script.
fn read_output(bytes: &[u8]) -> std::result::Result<(TransactionOutput, usize), String> {
    let raw = bytes.get(..VALUE_LEN).ok_or("truncated value")?;
    let value = u64::from_le_bytes([
        raw[0], raw[1], raw[2], raw[3], raw[4], raw[5], raw[6], raw[7],
    ]);

    let (script_len, varint_len) = read_compact_size(&bytes[VALUE_LEN..])?;
    let script_start = VALUE_LEN + varint_len;
    let script_end = script_start
        .checked_add(usize::try_from(script_len).map_err(|_| "oversized script length")?)
        .ok_or("oversized script length")?;
    let script_pubkey = bytes
        .get(script_start..script_end)
        .ok_or("truncated script")?
        .to_vec();

    let output = TransactionOutput { value, script_pubkey };
    Ok((output, script_end))
}

/// ParseInputVector: 𝕊 → ℐ*
///
/// Decode the declared number of input records and require exact
/// consumption of the vector.
pub fn parse_input_vector(bytes: &[u8]) -> Result<Vec<TransactionInput>> {
    let (count, mut offset) =
        read_compact_size(bytes).map_err(ProofError::BadInputVector)?;

    let mut inputs = Vec::new();
    for i in 0..count {
        let (input, consumed) = read_input(&bytes[offset..])
            .map_err(|reason| ProofError::BadInputVector(format!("input {}: {}", i, reason)))?;
        offset += consumed;
        inputs.push(input);
    }

    if offset != bytes.len() {
        return Err(ProofError::BadInputVector(format!(
            "{} trailing bytes after {} inputs",
            bytes.len() - offset,
            count
        )));
    }

    Ok(inputs)
}

/// ParseOutputVector: 𝕊 → 𝒯*
///
/// Decode the declared number of output records and require exact
/// consumption of the vector.
pub fn parse_output_vector(bytes: &[u8]) -> Result<Vec<TransactionOutput>> {
    let (count, mut offset) =
        read_compact_size(bytes).map_err(ProofError::BadOutputVector)?;

    let mut outputs = Vec::new();
    for i in 0..count {
        let (output, consumed) = read_output(&bytes[offset..])
            .map_err(|reason| ProofError::BadOutputVector(format!("output {}: {}", i, reason)))?;
        offset += consumed;
        outputs.push(output);
    }

    if offset != bytes.len() {
        return Err(ProofError::BadOutputVector(format!(
            "{} trailing bytes after {} outputs",
            bytes.len() - offset,
            count
        )));
    }

    Ok(outputs)
}

/// ComputeTxid: 𝕊⁴ × 𝕊 × 𝕊 × 𝕊⁴ → ℍ
///
/// Double-SHA256 over `version ‖ inputs ‖ outputs ‖ locktime`, the legacy
/// (non-witness) transaction serialization. The result is in natural byte
/// order; reverse it only for display.
pub fn compute_txid(
    version: &[u8; 4],
    input_vector: &[u8],
    output_vector: &[u8],
    locktime: &[u8; 4],
) -> Hash {
    let mut serialized =
        Vec::with_capacity(8 + input_vector.len() + output_vector.len());
    serialized.extend_from_slice(version);
    serialized.extend_from_slice(input_vector);
    serialized.extend_from_slice(output_vector);
    serialized.extend_from_slice(locktime);
    hash256(&serialized)
}
