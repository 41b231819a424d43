//! End-to-end scenarios for jq255s (§8), mirroring `tests/jq255e.rs`;
//! jq255s has no endomorphism, so this file stands in as the
//! regression check that the plain windowed multiplier and the
//! schemes layered on it are equally correct.
#![cfg(feature = "jq255s")]
use jq255::jq255s::{ecdh, keygen, mulgen, sign, verify, Point, PublicKey, Scalar};

#[test]
fn sign_then_verify_round_trips() {
    let kp = keygen(b"alice's seed, at least 16 bytes long");
    let sig = sign(&kp.sec, kp.public.encoded(), None, b"hello, jq255s", b"");
    assert!(verify(&sig, &kp.public, None, b"hello, jq255s"));
}

#[test]
fn verify_rejects_tampered_message() {
    let kp = keygen(b"bob's seed, at least 16 bytes long!");
    let sig = sign(&kp.sec, kp.public.encoded(), None, b"message one", b"");
    assert!(!verify(&sig, &kp.public, None, b"message two"));
}

#[test]
fn ecdh_is_symmetric() {
    let a = keygen(b"ecdh party a, at least 16 bytes!!!!");
    let b = keygen(b"ecdh party b, at least 16 bytes!!!!");
    let (out_a, ok_a) = ecdh(&a.sec, &a.public, &b.public);
    let (out_b, ok_b) = ecdh(&b.sec, &b.public, &a.public);
    assert!(ok_a);
    assert!(ok_b);
    assert_eq!(out_a, out_b);
}

#[test]
fn ecdh_with_invalid_peer_fails_but_is_deterministic() {
    let a = keygen(b"ecdh party a again, 16+ bytes!!!!!!");
    let identity_enc = [0u8; 32];
    let invalid_peer = PublicKey::decode(&identity_enc);
    assert!(!invalid_peer.is_valid());

    let (out1, ok1) = ecdh(&a.sec, &a.public, &invalid_peer);
    let (out2, ok2) = ecdh(&a.sec, &a.public, &invalid_peer);
    assert!(!ok1);
    assert!(!ok2);
    assert_eq!(out1, out2);
}

#[test]
fn identity_encoding_decodes_but_is_marked_invalid() {
    let identity_enc = [0u8; 32];
    let (point, ok) = Point::decode(&identity_enc);
    assert_eq!(ok, u64::MAX);
    assert_eq!(point.is_identity(), u64::MAX);
    assert!(!PublicKey::decode(&identity_enc).is_valid());
}

#[test]
fn mulgen_of_one_is_the_generator() {
    let g = jq255::jq255s::generator();
    let one_times_g = mulgen(&Scalar::ONE);
    assert!(g.equals(&one_times_g));
}
