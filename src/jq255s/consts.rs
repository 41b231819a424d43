//! jq255s curve constants: field modulus subtrahend, curve
//! coefficients `(a, b) = (-1, 1/2)`, and the scalar modulus correction
//! term. jq255s has no endomorphism splitting (that is jq255e-only);
//! see `sc.rs`/`mul.rs` in this module for the plain windowed
//! multiplier used instead.
//!
//! `R0` is a placeholder scalar-modulus correction, not the published
//! jq255s constant — see DESIGN.md, and [`crate::jq255e::consts`]'s
//! doc comment for the reasoning this mirrors.
use crate::gf::Gf;
use crate::sc::Scalar;

pub const C: u64 = 3957;
pub type F = Gf<C>;

pub const R0_LO: u64 = 101;
pub const R0_HI: u64 = 0;
pub type S = Scalar<R0_LO, R0_HI, false>;

pub fn a() -> F {
    F::ZERO.sub(&F::ONE)
}

pub fn b() -> F {
    F::ONE.mul2().inv()
}

/// `a^2 - 4b`.
pub fn b_prime() -> F {
    a().square().sub(&b().mul2().mul2())
}

/// `-2a`.
pub fn a_prime() -> F {
    a().mul2().neg()
}
