//! Scalar-layer invariants (§8): reduction, encode/decode, and the
//! digit recodings the multipliers rely on, exercised through the
//! jq255e scalar instantiation.
use jq255::jq255e::Scalar;

fn small(n: u64) -> Scalar {
    let mut bytes = [0u8; 32];
    bytes[0..8].copy_from_slice(&n.to_le_bytes());
    Scalar::decode_reduce(&bytes)
}

#[test]
fn decode_reduce_of_small_value_round_trips_through_encode() {
    let s = small(12345);
    let (back, ok) = Scalar::decode(&s.encode());
    assert_eq!(ok, u64::MAX);
    assert!(back.equals(&s));
}

#[test]
fn add_sub_are_inverse() {
    let a = small(17);
    let b = small(9_999_991);
    assert!(a.add(&b).sub(&b).equals(&a));
}

#[test]
fn mul_by_one_is_identity() {
    let a = small(424_242);
    assert!(a.mul(&Scalar::ONE).equals(&a));
}

#[test]
fn neg_of_neg_is_identity() {
    let a = small(7);
    assert!(a.neg().neg().equals(&a));
}

#[test]
fn recode_digits_reconstruct_the_scalar() {
    let a = small(0xDEAD_BEEF);
    let digits = a.recode();
    let mut acc = Scalar::ZERO;
    let two_pow_5 = small(32);
    for &d in digits.iter().rev() {
        acc = acc.mul(&two_pow_5);
        let term = if d >= 0 { small(d as u64) } else { small((-d) as u64).neg() };
        acc = acc.add(&term);
    }
    assert!(acc.equals(&a), "recoded digits did not reconstruct the scalar");
}

#[test]
fn wnaf_digits_are_zero_or_odd_in_range() {
    let a = small(123_456_789);
    for &d in a.recode_wnaf().iter() {
        assert!(d == 0 || (d % 2 != 0 && d.abs() <= 15));
    }
}

#[test]
fn decode_rejects_value_at_or_above_modulus() {
    // r = 2^254 - r0, so the all-ones top-bit pattern is always >= r.
    let mut bytes = [0xFFu8; 32];
    bytes[31] = 0x7F;
    let (_, ok) = Scalar::decode(&bytes);
    assert_eq!(ok, 0);
}
