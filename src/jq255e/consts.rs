//! jq255e curve constants: the field modulus subtrahend, curve
//! coefficients `(a, b) = (0, -2)`, the scalar modulus correction term,
//! and the endomorphism/generator constants derived from them.
//!
//! `R0`'s value (the scalar layer's `r = 2^254 - R0`) is a placeholder,
//! not the published jq255e constant: see DESIGN.md. It is chosen only
//! to land `r` in the residue class (`5 mod 8`) that
//! [`crate::endo::derive`]'s modular square root needs; every
//! downstream computation (recoding, splitting, group law, signing) is
//! fully general and works correctly for whatever `r` this constant
//! defines.
use crate::gf::Gf;
use crate::sc::Scalar;
use std::sync::LazyLock;

pub const C: u64 = 18651;
pub type F = Gf<C>;

pub const R0_LO: u64 = 131;
pub const R0_HI: u64 = 0;
pub type S = Scalar<R0_LO, R0_HI, true>;

pub fn a() -> F {
    F::ZERO
}

pub fn b() -> F {
    F::ZERO.sub(&F::ONE).sub(&F::ONE)
}

/// `a^2 - 4b`, the quantity the curve equation and point decoding use.
pub fn b_prime() -> F {
    a().square().sub(&b().mul2().mul2())
}

/// `-2a`.
pub fn a_prime() -> F {
    a().mul2().neg()
}

struct Endo {
    mu: S,
    u_lat: u128,
    v_lat: u128,
}

static ENDO: LazyLock<Endo> = LazyLock::new(|| {
    let (u_lat, v_lat, mu) = crate::endo::derive::<R0_LO, R0_HI>();
    Endo { mu, u_lat, v_lat }
});

pub fn mu() -> S {
    ENDO.mu
}

pub fn lattice() -> (u128, u128) {
    (ENDO.u_lat, ENDO.v_lat)
}

/// The field-domain endomorphism constant `eta = sqrt(-1) (mod q)`,
/// distinct from the scalar-domain `mu = sqrt(-1) (mod r)` above:
/// applying the endomorphism to a point multiplies its `U` coordinate
/// by this and negates `T` (§4.4), while `mu` only ever appears in the
/// scalar-splitting arithmetic in `sc::split`.
static ETA: LazyLock<F> = LazyLock::new(|| F::ZERO.sub(&F::ONE).sqrt().0);

pub fn eta() -> F {
    *ETA
}
