//! Key pair and exchange types.

use std::fmt;

use k256::ecdsa::signature::Signer;
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use serde::{Deserialize, Serialize};

use crate::error::JointSignError;
use crate::verify::joint_verify;

/// An ECDSA key pair on secp256k1.
///
/// The private scalar is never serialized and is redacted from `Debug`
/// output; only the public key is meant to leave this struct.
pub struct KeyPair {
    secret: SigningKey,
}

impl KeyPair {
    pub(crate) fn new(secret: SigningKey) -> Self {
        Self { secret }
    }

    /// Returns the public key corresponding to the private scalar.
    pub fn public_key(&self) -> VerifyingKey {
        *self.secret.verifying_key()
    }

    /// Signs `message` with this key pair's private scalar.
    ///
    /// Uses ECDSA with an RFC 6979 deterministic nonce and a SHA-256
    /// message digest.
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.secret.sign(message)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", self.secret.verifying_key())
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Everything a verifier needs, in a serializable form.
///
/// Participants only ever exchange public material: the agreed public-key
/// set, the message, and the joint signature. Public keys are 33-byte
/// compressed SEC1 encodings; the signature is the 64-byte `r || s` form.
#[derive(Serialize, Deserialize)]
pub struct SignedMessage {
    pub public_keys: Vec<Vec<u8>>,
    pub message: Vec<u8>,
    pub signature: Vec<u8>,
}

impl SignedMessage {
    /// Bundles the public-key set, message, and signature for exchange.
    pub fn new(public_keys: &[VerifyingKey], message: &[u8], signature: &Signature) -> Self {
        Self {
            public_keys: public_keys
                .iter()
                .map(crate::derive::encode_public_key)
                .collect(),
            message: message.to_vec(),
            signature: signature.to_bytes().to_vec(),
        }
    }

    /// Decodes the bundle and verifies the signature against the derived
    /// joint public key.
    ///
    /// # Returns
    /// - `Ok(true)` if the signature is valid for the message and key set.
    /// - `Ok(false)` if it is well-formed but does not verify.
    /// - `Err(JointSignError::InvalidInput)` if any public key or the
    ///   signature fails to decode.
    pub fn verify(&self) -> Result<bool, JointSignError> {
        let public_keys = self
            .public_keys
            .iter()
            .map(|bytes| crate::derive::decode_public_key(bytes))
            .collect::<Result<Vec<_>, _>>()?;

        let signature = Signature::from_slice(&self.signature)
            .map_err(|err| JointSignError::InvalidInput(format!("malformed signature: {err}")))?;

        joint_verify(&public_keys, &self.message, &signature)
    }
}
