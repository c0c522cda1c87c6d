//! Joint signature verification.

use k256::ecdsa::signature::Verifier;
use k256::ecdsa::{Signature, VerifyingKey};

use crate::derive::derive_shared_key;
use crate::error::JointSignError;

/// Checks a joint signature over `message` for the given public-key set.
///
/// Re-derives the shared public key from the set (the private scalar is
/// discarded) and verifies the signature against it.
///
/// # Returns
/// - `Ok(true)` if the signature was produced over exactly this message by
///   the key derived from exactly this set.
/// - `Ok(false)` if the signature is well-formed but does not match —
///   a tampered message, a different key set, or an unrelated signature.
/// - `Err(_)` only for invalid inputs (empty key set, degenerate
///   derivation), so callers can tell a bad signature from a caller bug.
pub fn joint_verify(
    public_keys: &[VerifyingKey],
    message: &[u8],
    signature: &Signature,
) -> Result<bool, JointSignError> {
    let derived = derive_shared_key(public_keys)?;
    Ok(derived.public_key().verify(message, signature).is_ok())
}
