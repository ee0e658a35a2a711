//! # SPV-Proof
//!
//! Trustless verification that a specific Bitcoin payment actually occurred
//! and is buried under proof-of-work, using only a raw transaction's
//! input/output vectors, a Merkle inclusion proof, and a short window of
//! block headers.
//!
//! ## Architecture
//!
//! The verification core is a single-pass pipeline of four components:
//! - Transaction Vector Parser: exact-consumption decoding of the raw
//!   input and output vectors, and txid derivation
//! - Merkle Proof Verifier: root recomputation from leaf, index, and
//!   sibling path
//! - Header Chain Validator: per-header proof-of-work and pairwise linkage
//!   over the whole supplied window
//! - Payment Matcher: first-match comparison of recipient script and value
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every verification is deterministic and
//!    side-effect-free; no component retains state between calls
//! 2. **Exact Consumption**: every variable-length decode reports how many
//!    bytes it consumed, and each vector must be consumed exactly
//! 3. **Exact Version Pinning**: consensus-critical dependencies are pinned
//!    to exact versions
//! 4. **One Classification Per Call**: the first failing stage fixes the
//!    outcome; nothing is retried or aggregated
//!
//! ## Usage
//!
//! ```rust
//! use spv_proof::{SpvProof, PaymentTarget, FundingProof, Outcome, ErrorCode};
//!
//! let verifier = SpvProof::new(PaymentTarget {
//!     script_pubkey: vec![0x00, 0x14, 0x42, 0x42],
//!     minimum_value: 1_000_000,
//! });
//!
//! // An empty input vector cannot carry a count field, so the proof is
//! // rejected before any hashing happens.
//! let proof = FundingProof {
//!     headers: vec![],
//!     merkle_proof: vec![],
//!     version: [0x02, 0x00, 0x00, 0x00],
//!     locktime: [0x00; 4],
//!     tx_index: 0,
//!     input_vector: vec![],
//!     output_vector: vec![],
//! };
//! let outcome = verifier.verify_payment(&proof);
//! assert_eq!(outcome, Outcome::NotPaid { code: ErrorCode::BadVin });
//! ```

pub mod types;
pub mod constants;
pub mod hash;
pub mod transaction;
pub mod merkle;
pub mod pow;
pub mod headers;
pub mod matcher;
pub mod verify;
pub mod error;

// Re-export commonly used types
pub use types::*;
pub use constants::*;
pub use error::{ErrorCode, ProofError, Result};
pub use verify::verify_payment;

/// Main SPV payment proof verifier
///
/// Holds the configured [`PaymentTarget`] — the recipient script and the
/// minimum satoshi amount — which is fixed for the verifier's lifetime and
/// safely shared by immutable reference across threads.
///
/// # Examples
///
/// ```
/// use spv_proof::{SpvProof, PaymentTarget};
///
/// let verifier = SpvProof::new(PaymentTarget {
///     script_pubkey: vec![0x00, 0x14, 0x42, 0x42],
///     minimum_value: 1_000_000,
/// });
/// assert_eq!(verifier.target().minimum_value, 1_000_000);
/// ```
pub struct SpvProof {
    target: PaymentTarget,
}

impl SpvProof {
    /// Create a verifier for the given payment target.
    pub fn new(target: PaymentTarget) -> Self {
        Self { target }
    }

    /// The configured recipient script and minimum amount.
    pub fn target(&self) -> &PaymentTarget {
        &self.target
    }

    /// Verify one funding proof against the configured target.
    ///
    /// Pure function of the proof and the configured target: the same
    /// inputs always produce the same [`Outcome`], and every input produces
    /// one. See [`verify::verify_payment`] for the underlying pipeline.
    ///
    /// # Examples
    ///
    /// ```
    /// use spv_proof::{SpvProof, PaymentTarget, FundingProof, Outcome, ErrorCode};
    ///
    /// let verifier = SpvProof::new(PaymentTarget {
    ///     script_pubkey: vec![0x51],
    ///     minimum_value: 1,
    /// });
    ///
    /// let proof = FundingProof {
    ///     headers: vec![],
    ///     merkle_proof: vec![0xde, 0xad, 0xbe, 0xef],
    ///     version: [0x01, 0x00, 0x00, 0x00],
    ///     locktime: [0x00; 4],
    ///     tx_index: 0,
    ///     // Zero-record vectors are exactly consumed by their count byte
    ///     input_vector: vec![0x00],
    ///     output_vector: vec![0x00],
    /// };
    ///
    /// // The ragged merkle proof is the first failing stage
    /// assert_eq!(
    ///     verifier.verify_payment(&proof),
    ///     Outcome::NotPaid { code: ErrorCode::BadProof },
    /// );
    /// ```
    pub fn verify_payment(&self, proof: &FundingProof) -> Outcome {
        verify::verify_payment(proof, &self.target.script_pubkey, self.target.minimum_value)
    }
}
