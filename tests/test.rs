// Test module for joint_signing
#[cfg(test)]
mod tests {
    use joint_signing::derive::encode_public_key;
    use joint_signing::{
        derive_shared_key, generate_key_pair, joint_sign, joint_verify, JointSignError,
        SignedMessage,
    };

    #[test]
    fn test_derivation_is_order_independent() {
        let a = generate_key_pair().public_key();
        let b = generate_key_pair().public_key();
        let c = generate_key_pair().public_key();

        let derived_abc = derive_shared_key(&[a, b, c]).unwrap();
        let derived_cab = derive_shared_key(&[c, a, b]).unwrap();
        let derived_bca = derive_shared_key(&[b, c, a]).unwrap();

        assert_eq!(
            encode_public_key(&derived_abc.public_key()),
            encode_public_key(&derived_cab.public_key()),
            "Derived key must not depend on the order keys were contributed"
        );
        assert_eq!(
            encode_public_key(&derived_abc.public_key()),
            encode_public_key(&derived_bca.public_key()),
            "Derived key must not depend on the order keys were contributed"
        );
    }

    #[test]
    fn test_derivation_is_membership_sensitive() {
        let a = generate_key_pair().public_key();
        let b = generate_key_pair().public_key();
        let c = generate_key_pair().public_key();

        let derived_full = derive_shared_key(&[a, b, c]).unwrap();
        let derived_pair = derive_shared_key(&[a, b]).unwrap();

        assert_ne!(
            encode_public_key(&derived_full.public_key()),
            encode_public_key(&derived_pair.public_key()),
            "Sets differing by one key must derive different keys"
        );
    }

    #[test]
    fn test_sign_and_verify_round_trip() {
        let a = generate_key_pair().public_key();
        let b = generate_key_pair().public_key();
        let c = generate_key_pair().public_key();
        let public_keys = [a, b, c];

        let message = b"Hello, world!";
        let signature = joint_sign(&public_keys, message).unwrap();

        let valid = joint_verify(&public_keys, message, &signature).unwrap();
        assert!(valid, "Signature must verify for the message it was made over");

        let valid = joint_verify(&public_keys, b"Goodbye", &signature).unwrap();
        assert!(!valid, "Signature must not verify for a different message");
    }

    #[test]
    fn test_verify_rejects_different_key_set() {
        let a = generate_key_pair().public_key();
        let b = generate_key_pair().public_key();
        let c = generate_key_pair().public_key();
        let d = generate_key_pair().public_key();

        let message = b"transfer 10 coins";
        let signature = joint_sign(&[a, b, c], message).unwrap();

        let valid = joint_verify(&[a, b], message, &signature).unwrap();
        assert!(!valid, "Verification with a key omitted must fail");

        let valid = joint_verify(&[a, b, c, d], message, &signature).unwrap();
        assert!(!valid, "Verification with a key added must fail");
    }

    #[test]
    fn test_empty_key_set_is_rejected() {
        let result = derive_shared_key(&[]);
        assert!(
            matches!(result, Err(JointSignError::InvalidInput(_))),
            "Deriving from an empty set must be an invalid-input error"
        );

        let result = joint_sign(&[], b"message");
        assert!(
            matches!(result, Err(JointSignError::InvalidInput(_))),
            "Signing with an empty set must be an invalid-input error"
        );

        let signature = joint_sign(&[generate_key_pair().public_key()], b"message").unwrap();
        let result = joint_verify(&[], b"message", &signature);
        assert!(
            matches!(result, Err(JointSignError::InvalidInput(_))),
            "Verifying with an empty set must be an invalid-input error"
        );
    }

    #[test]
    fn test_signed_message_json_round_trip() {
        let a = generate_key_pair().public_key();
        let b = generate_key_pair().public_key();
        let c = generate_key_pair().public_key();
        let public_keys = [a, b, c];

        let message = b"Hello, world!";
        let signature = joint_sign(&public_keys, message).unwrap();

        let bundle = SignedMessage::new(&public_keys, message, &signature);
        let json = serde_json::to_string(&bundle).unwrap();
        let received: SignedMessage = serde_json::from_str(&json).unwrap();

        assert!(
            received.verify().unwrap(),
            "Bundle must still verify after a JSON round trip"
        );
    }

    #[test]
    fn test_malformed_bundle_is_invalid_input_not_false() {
        let a = generate_key_pair().public_key();
        let message = b"Hello, world!";
        let signature = joint_sign(&[a], message).unwrap();

        // Truncated signature bytes must not decode.
        let mut bundle = SignedMessage::new(&[a], message, &signature);
        bundle.signature.truncate(10);
        assert!(
            matches!(bundle.verify(), Err(JointSignError::InvalidInput(_))),
            "A truncated signature is malformed input, not a failed verification"
        );

        // An all-zero r || s is not a valid signature encoding either.
        let mut bundle = SignedMessage::new(&[a], message, &signature);
        bundle.signature = vec![0u8; 64];
        assert!(
            matches!(bundle.verify(), Err(JointSignError::InvalidInput(_))),
            "A zero signature is malformed input, not a failed verification"
        );

        // Garbage public-key bytes must not decode.
        let mut bundle = SignedMessage::new(&[a], message, &signature);
        bundle.public_keys[0] = vec![0xff; 33];
        assert!(
            matches!(bundle.verify(), Err(JointSignError::InvalidInput(_))),
            "A malformed public key is invalid input, not a failed verification"
        );
    }

    #[test]
    fn test_key_pair_debug_redacts_secret() {
        let key_pair = generate_key_pair();
        let debug = format!("{key_pair:?}");
        assert!(
            debug.contains("<redacted>"),
            "Debug output must not expose the private scalar: {debug}"
        );
    }
}
