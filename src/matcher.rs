//! Payment matching against the configured recipient script

use crate::error::{ProofError, Result};
use crate::types::TransactionOutput;

/// MatchPayment: 𝒯* × 𝕊 × ℕ → {paid, not paid}
///
/// Scan outputs in order; the first output whose script equals the target
/// script byte-for-byte is the candidate. No address decoding or script
/// canonicalization happens here, and multiple outputs to the same script
/// are never summed.
pub fn match_payment(
    outputs: &[TransactionOutput],
    target_script: &[u8],
    minimum_value: u64,
) -> Result<()> {
    let candidate = outputs
        .iter()
        .find(|output| output.script_pubkey == target_script)
        .ok_or(ProofError::DoesNotPayRecipient)?;

    if candidate.value < minimum_value {
        return Err(ProofError::UnderpaysRecipient {
            got: candidate.value,
            required: minimum_value,
        });
    }

    Ok(())
}
