//! Per-participant key generation.

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;

use crate::types::KeyPair;

/// Generates a fresh secp256k1 key pair for one participant.
///
/// The private scalar is drawn uniformly from `[1, n-1]` using the
/// operating system's CSPRNG. Each participant calls this independently
/// and then shares only the public key.
pub fn generate_key_pair() -> KeyPair {
    KeyPair::new(SigningKey::random(&mut OsRng))
}
