//! Error types for SPV proof verification
//!
//! `ProofError` is the fine-grained internal taxonomy. The external contract
//! exposes the coarser [`ErrorCode`] classification: every header failure
//! (length, work, linkage, target encoding) collapses into the same
//! proof-failure surface as a Merkle mismatch.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    #[error("Input vector malformed: {0}")]
    BadInputVector(String),

    #[error("Output vector malformed: {0}")]
    BadOutputVector(String),

    #[error("Merkle proof malformed: {0}")]
    BadMerkleProof(String),

    #[error("Recomputed merkle root does not match the header merkle root")]
    RootMismatch,

    #[error("Header sequence length {0} is not a positive multiple of 80")]
    MalformedHeaders(usize),

    #[error("Invalid compact target {0:#010x}")]
    InvalidTarget(u32),

    #[error("Header {0} digest exceeds its declared target")]
    InsufficientWork(usize),

    #[error("Header {0} previous-block digest does not match its parent")]
    BrokenChain(usize),

    #[error("No output pays the configured recipient script")]
    DoesNotPayRecipient,

    #[error("Matched output pays {got} satoshis, minimum is {required}")]
    UnderpaysRecipient { got: u64, required: u64 },
}

impl ProofError {
    /// Collapse to the stable externally observable classification.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ProofError::BadInputVector(_) => ErrorCode::BadVin,
            ProofError::BadOutputVector(_) => ErrorCode::BadVout,
            ProofError::BadMerkleProof(_)
            | ProofError::RootMismatch
            | ProofError::MalformedHeaders(_)
            | ProofError::InvalidTarget(_)
            | ProofError::InsufficientWork(_)
            | ProofError::BrokenChain(_) => ErrorCode::BadProof,
            ProofError::DoesNotPayRecipient => ErrorCode::DoesNotPayJames,
            ProofError::UnderpaysRecipient { .. } => ErrorCode::MustPayJamesMore,
        }
    }
}

/// Stable externally observable error codes.
///
/// Both the numeric code and the identifier string are part of the external
/// contract and must not change between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "ERR_BAD_VIN")]
    BadVin,
    #[serde(rename = "ERR_BAD_VOUT")]
    BadVout,
    #[serde(rename = "ERR_BAD_PROOF")]
    BadProof,
    #[serde(rename = "ERR_DOES_NOT_PAY_JAMES")]
    DoesNotPayJames,
    #[serde(rename = "ERR_MUST_PAY_JAMES_MORE")]
    MustPayJamesMore,
}

impl ErrorCode {
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::BadVin => 1,
            ErrorCode::BadVout => 2,
            ErrorCode::BadProof => 3,
            ErrorCode::DoesNotPayJames => 4,
            ErrorCode::MustPayJamesMore => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadVin => "ERR_BAD_VIN",
            ErrorCode::BadVout => "ERR_BAD_VOUT",
            ErrorCode::BadProof => "ERR_BAD_PROOF",
            ErrorCode::DoesNotPayJames => "ERR_DOES_NOT_PAY_JAMES",
            ErrorCode::MustPayJamesMore => "ERR_MUST_PAY_JAMES_MORE",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Result<T> = std::result::Result<T, ProofError>;
