//! The jq255s base point `G` and its precomputed multiples. See
//! `jq255e::gen`'s doc comment: the same generator-search rationale
//! applies here.
use super::pt::{Affine, Point};
use std::sync::LazyLock;

fn find_generator() -> Point {
    for candidate in 3u64.. {
        let mut bytes = [0u8; 32];
        bytes[0..8].copy_from_slice(&candidate.to_le_bytes());
        let (p, ok) = Point::decode(&bytes);
        if ok != 0 && p.is_identity() == 0 {
            return p;
        }
    }
    unreachable!("a curve of this size has far fewer than u64::MAX non-residues in a row")
}

pub fn generator() -> Point {
    static G: LazyLock<Point> = LazyLock::new(find_generator);
    *G
}

pub fn build_window_point(base: &Point) -> [Point; 16] {
    let mut win = [*base; 16];
    for i in 1..16 {
        win[i] = win[i - 1].add(base);
    }
    win
}

fn to_affine_window(win: &[Point; 16]) -> [Affine; 16] {
    let mut out = [Affine::from_point(&win[0]); 16];
    for i in 0..16 {
        out[i] = Affine::from_point(&win[i]);
    }
    out
}

pub fn build_wnaf_window(base: &Point) -> [Point; 8] {
    let base2 = base.double();
    let mut win = [*base; 8];
    for i in 1..8 {
        win[i] = win[i - 1].add(&base2);
    }
    win
}

struct FixedBaseWindows {
    win: [[Affine; 16]; 4],
}

static FIXED: LazyLock<FixedBaseWindows> = LazyLock::new(|| {
    let g = generator();
    let bases = [g, g.xdouble(65), g.xdouble(130), g.xdouble(195)];
    let mut win = [[Affine::from_point(&g); 16]; 4];
    for k in 0..4 {
        win[k] = to_affine_window(&build_window_point(&bases[k]));
    }
    FixedBaseWindows { win }
});

pub fn fixed_base_windows() -> &'static [[Affine; 16]; 4] {
    &FIXED.win
}
