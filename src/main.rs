//! Demonstration of the joint signing flow with three participants.
//!
//! Mirrors the intended usage: each party generates a key pair, the public
//! keys are shared, one party signs, and any party verifies from the
//! exchanged bundle. Nothing here runs when the library is merely linked.

use joint_signing::{generate_key_pair, joint_sign, joint_verify, SignedMessage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Step 1: each participant generates an independent key pair.
    let party_a = generate_key_pair();
    let party_b = generate_key_pair();
    let party_c = generate_key_pair();

    // Step 2: the participants share their public keys with each other.
    let public_keys = vec![
        party_a.public_key(),
        party_b.public_key(),
        party_c.public_key(),
    ];
    println!("3 participants generated keys and shared their public keys");

    // Step 3: produce the joint signature over the message.
    let message = b"Hello, world!";
    let signature = joint_sign(&public_keys, message)?;
    println!("Joint signature produced over \"Hello, world!\"");

    // Step 4: verify directly against the key set.
    let valid = joint_verify(&public_keys, message, &signature)?;
    println!("Signature is valid: {valid}");

    // Step 5: round-trip the exchange bundle through JSON, as a verifier
    // on another machine would receive it.
    let bundle = SignedMessage::new(&public_keys, message, &signature);
    let json = serde_json::to_string_pretty(&bundle)?;
    let received: SignedMessage = serde_json::from_str(&json)?;
    println!("Bundle verified after JSON round trip: {}", received.verify()?);

    Ok(())
}
