//! Single-pass SPV payment verification pipeline
//!
//! Stage order is fixed: parse the input vector, parse the output vector,
//! derive the txid, recompute the Merkle root from the sibling path,
//! validate the header window, compare the candidate root against the
//! first header's root, then match the payment. The first failure fixes
//! the classification and later stages never run.

use crate::error::{ProofError, Result};
use crate::headers::validate_header_chain;
use crate::matcher::match_payment;
use crate::merkle::{parse_merkle_path, recompute_merkle_root};
use crate::transaction::{compute_txid, parse_input_vector, parse_output_vector};
use crate::types::{FundingProof, Hash, Outcome};

/// VerifyPayment: proof × 𝕊 × ℕ → Outcome
///
/// Pure function of its arguments: the same byte inputs always produce the
/// same `Outcome`, and every input produces one. Fine-grained internal
/// failures are collapsed to the stable external classification here.
pub fn verify_payment(
    proof: &FundingProof,
    target_script: &[u8],
    minimum_value: u64,
) -> Outcome {
    match run_pipeline(proof, target_script, minimum_value) {
        Ok(txid) => Outcome::Paid { txid },
        Err(error) => Outcome::NotPaid { code: error.error_code() },
    }
}

fn run_pipeline(
    proof: &FundingProof,
    target_script: &[u8],
    minimum_value: u64,
) -> Result<Hash> {
    // Cheapest rejections first: both vectors must parse to exactly their
    // declared record counts before anything is hashed.
    let _inputs = parse_input_vector(&proof.input_vector)?;
    let outputs = parse_output_vector(&proof.output_vector)?;

    let txid = compute_txid(
        &proof.version,
        &proof.input_vector,
        &proof.output_vector,
        &proof.locktime,
    );

    let path = parse_merkle_path(&proof.merkle_proof)?;
    let candidate_root = recompute_merkle_root(txid, &path, proof.tx_index)?;

    let (block_root, _block_digest) = validate_header_chain(&proof.headers)?;
    if candidate_root != block_root {
        return Err(ProofError::RootMismatch);
    }

    match_payment(&outputs, target_script, minimum_value)?;

    Ok(txid)
}
