//! Derivation of the shared key pair from a public-key set.

use k256::ecdsa::{SigningKey, VerifyingKey};
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::Field;
use k256::{Scalar, U256};
use sha2::{Digest, Sha256};

use crate::error::JointSignError;
use crate::types::KeyPair;

/// Encodes a public key as its canonical 33-byte compressed SEC1 point.
///
/// Sorting and concatenation in [`derive_shared_key`] operate on these
/// encodings, so every party must use the same form.
pub fn encode_public_key(public_key: &VerifyingKey) -> Vec<u8> {
    public_key.to_encoded_point(true).as_bytes().to_vec()
}

/// Decodes a compressed or uncompressed SEC1 point encoding.
pub fn decode_public_key(bytes: &[u8]) -> Result<VerifyingKey, JointSignError> {
    VerifyingKey::from_sec1_bytes(bytes)
        .map_err(|err| JointSignError::InvalidInput(format!("malformed public key: {err}")))
}

/// Derives the shared key pair from a set of public keys.
///
/// The result depends only on the byte content of the set: the same keys in
/// any order yield the same key pair, while adding, removing, or replacing
/// a single key yields an unrelated one.
///
/// # Errors
/// - `InvalidInput` if `public_keys` is empty.
/// - `DerivationDegenerate` if the digest reduces to zero modulo the curve
///   order (probability about 2^-256).
pub fn derive_shared_key(public_keys: &[VerifyingKey]) -> Result<KeyPair, JointSignError> {
    if public_keys.is_empty() {
        return Err(JointSignError::InvalidInput(
            "public key set is empty".to_string(),
        ));
    }

    // Step 1: serialize every key to its canonical compressed encoding.
    let mut encodings: Vec<Vec<u8>> = public_keys.iter().map(encode_public_key).collect();

    // Step 2: sort byte-wise so the digest is independent of input order.
    encodings.sort_unstable();

    // Step 3: hash the concatenation of the sorted encodings.
    let mut hasher = Sha256::new();
    for encoding in &encodings {
        hasher.update(encoding);
    }
    let digest = hasher.finalize();

    // Step 4: reduce the digest modulo the curve order to get the scalar.
    let scalar = <Scalar as Reduce<U256>>::reduce_bytes(&digest);
    if bool::from(scalar.is_zero()) {
        return Err(JointSignError::DerivationDegenerate);
    }

    // Step 5: the derived public point is the scalar times the base point;
    // SigningKey computes it from the scalar bytes. Zero was rejected above,
    // and a reduced scalar is always in range.
    let secret = SigningKey::from_bytes(&scalar.to_bytes())
        .map_err(|_| JointSignError::DerivationDegenerate)?;

    Ok(KeyPair::new(secret))
}
