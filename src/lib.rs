//! Deterministic "joint signing" over secp256k1.
//!
//! A group of participants each generate an ECDSA key pair and share their
//! public keys. A single shared key pair is then derived deterministically
//! from the sorted, concatenated public-key encodings, and that derived key
//! signs on behalf of the group. Any holder of the same public-key set can
//! re-derive the public point and verify the signature.
//!
//! # Security warning
//!
//! This is a demonstration, **not** a threshold signature scheme. The
//! derived private scalar is a function of public data only: anyone who
//! holds the full public-key set (which is shared openly by construction)
//! can recompute it and forge "joint" signatures alone. No participant ever
//! holds a secret share. Do not use this for anything that needs actual
//! multi-party security.
//!
//! # Parameters
//!
//! Curve secp256k1, hash SHA-256, scalar reduction modulo the group order,
//! ECDSA with RFC 6979 nonces. Public keys are encoded as 33-byte
//! compressed SEC1 points; independent implementations must match these
//! choices exactly to derive the same key.

pub mod derive;
pub mod error;
pub mod keygen;
pub mod sign;
pub mod types;
pub mod verify;

pub use derive::derive_shared_key;
pub use error::JointSignError;
pub use keygen::generate_key_pair;
pub use sign::joint_sign;
pub use types::{KeyPair, SignedMessage};
pub use verify::joint_verify;

pub use k256::ecdsa::{Signature, VerifyingKey};
