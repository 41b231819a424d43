//! End-to-end scenarios for jq255e (§8): sign/verify round-trips,
//! ECDH symmetry, and the identity-key failure paths.
use jq255::jq255e::{ecdh, keygen, mulgen, sign, verify, Point, PublicKey, Scalar};

#[test]
fn sign_then_verify_round_trips() {
    let kp = keygen(b"alice's seed, at least 16 bytes long");
    let sig = sign(&kp.sec, kp.public.encoded(), None, b"hello, jq255e", b"");
    assert!(verify(&sig, &kp.public, None, b"hello, jq255e"));
}

#[test]
fn verify_rejects_tampered_message() {
    let kp = keygen(b"bob's seed, at least 16 bytes long!");
    let sig = sign(&kp.sec, kp.public.encoded(), None, b"message one", b"");
    assert!(!verify(&sig, &kp.public, None, b"message two"));
}

#[test]
fn verify_rejects_wrong_key() {
    let kp_a = keygen(b"keypair a seed, long enough here...");
    let kp_b = keygen(b"keypair b seed, also long enough..!");
    let sig = sign(&kp_a.sec, kp_a.public.encoded(), None, b"shared message", b"");
    assert!(!verify(&sig, &kp_b.public, None, b"shared message"));
}

#[test]
fn nonempty_seed_randomizes_the_nonce_without_breaking_verification() {
    let kp = keygen(b"carol's seed, at least 16 bytes!!!!");
    let sig1 = sign(&kp.sec, kp.public.encoded(), None, b"msg", b"nonce-seed-1");
    let sig2 = sign(&kp.sec, kp.public.encoded(), None, b"msg", b"nonce-seed-2");
    assert_ne!(sig1, sig2);
    assert!(verify(&sig1, &kp.public, None, b"msg"));
    assert!(verify(&sig2, &kp.public, None, b"msg"));
}

#[test]
fn hashed_message_mode_uses_a_distinct_domain_from_raw_mode() {
    let kp = keygen(b"dave's seed, at least 16 bytes!!!!!!");
    let hv = [0x11u8; 32];
    let sig_raw = sign(&kp.sec, kp.public.encoded(), None, &hv, b"");
    let sig_hashed = sign(&kp.sec, kp.public.encoded(), Some(b"sha256"), &hv, b"");
    assert_ne!(sig_raw, sig_hashed);
    assert!(verify(&sig_raw, &kp.public, None, &hv));
    assert!(verify(&sig_hashed, &kp.public, Some(b"sha256"), &hv));
    assert!(!verify(&sig_raw, &kp.public, Some(b"sha256"), &hv));
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

    let legit_partner = keygen(b"ecdh legit partner, 16+ bytes!!!!!!");
    let (legit_out, legit_ok) = ecdh(&a.sec, &a.public, &legit_partner.public);
    assert!(legit_ok);
    assert_ne!(legit_out, out1);
}

#[test]
fn identity_encoding_decodes_but_is_marked_invalid() {
    let identity_enc = [0u8; 32];
    let (point, ok) = Point::decode(&identity_enc);
    assert_eq!(ok, u64::MAX);
    assert_eq!(point.is_identity(), u64::MAX);

    let key = PublicKey::decode(&identity_enc);
    assert!(!key.is_valid());
}

#[test]
fn verify_rejects_invalid_public_key() {
    let identity_enc = [0u8; 32];
    let invalid = PublicKey::decode(&identity_enc);
    let kp = keygen(b"whoever signed this, 16+ bytes!!!!!");
    let sig = sign(&kp.sec, kp.public.encoded(), None, b"msg", b"");
    assert!(!verify(&sig, &invalid, None, b"msg"));
}

#[test]
fn verify_rejects_wrong_length_signature() {
    let kp = keygen(b"length check seed, 16+ bytes long!!");
    let mut sig = sign(&kp.sec, kp.public.encoded(), None, b"msg", b"").to_vec();
    sig.pop();
    assert!(!verify(&sig, &kp.public, None, b"msg"));
}

#[test]
fn mulgen_of_one_is_the_generator() {
    let g = jq255::jq255e::generator();
    let one_times_g = mulgen(&Scalar::ONE);
    assert!(g.equals(&one_times_g));
}
