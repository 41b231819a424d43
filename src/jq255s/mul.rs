//! jq255s scalar multiplication. jq255s has no endomorphism splitting,
//! so the generic multiplier is a plain single-scalar windowed scan
//! over the 51-digit recoding — compare `jq255e::mul::mul`, which
//! additionally splits the scalar and folds in the curve endomorphism.
use super::consts::S;
use super::gen::{build_wnaf_window, build_window_point, fixed_base_windows, generator};
use super::pt::{self, Point};

/// `s * p`, constant-time.
pub fn mul(s: &S, p: &Point) -> Point {
    let win = build_window_point(p);
    let digits = s.recode();
    let mut acc = Point::IDENTITY;
    for &d in digits.iter().rev() {
        acc = acc.xdouble(5);
        acc = acc.add(&pt::lookup(&win, d));
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
