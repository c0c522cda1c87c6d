//! Error types for joint key derivation and verification.

use thiserror::Error;

/// Errors surfaced by derivation, signing, and verification.
///
/// A signature that simply does not match the message and derived key is
/// *not* an error: [`joint_verify`](crate::joint_verify) reports that as
/// `Ok(false)`. These variants cover caller mistakes and the one degenerate
/// derivation outcome, so the two situations are never conflated.
#[derive(Debug, Error)]
pub enum JointSignError {
    /// Empty public-key set, or bytes that do not decode to a public key
    /// or signature.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The hash of the public-key set reduced to zero modulo the curve
    /// order, so no valid private scalar exists for this set.
    #[error("derived scalar is zero modulo the curve order")]
    DerivationDegenerate,
}
