//! Joint signing with the derived key pair.

use k256::ecdsa::{Signature, VerifyingKey};

use crate::derive::derive_shared_key;
use crate::error::JointSignError;

/// Produces a joint signature over `message` for the given public-key set.
///
/// Derives the shared key pair from the set, signs with its private scalar,
/// and drops the scalar when the call returns. Anyone holding the same
/// public-key set can check the result with
/// [`joint_verify`](crate::joint_verify).
///
/// # Errors
/// Fails with `InvalidInput` on an empty key set and
/// `DerivationDegenerate` if derivation yields a zero scalar.
pub fn joint_sign(
    public_keys: &[VerifyingKey],
    message: &[u8],
) -> Result<Signature, JointSignError> {
    let derived = derive_shared_key(public_keys)?;
    Ok(derived.sign(message))
}
