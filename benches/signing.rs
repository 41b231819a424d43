use criterion::{Criterion, criterion_group, criterion_main};
use jq255::jq255e::{keygen, mulgen, sign, verify};
use std::hint::black_box;

pub fn bench_keygen(c: &mut Criterion) {
    c.bench_function("jq255e keygen", |b| {
        b.iter(|| keygen(black_box(b"benchmark seed material, 32+ bytes long")))
    });
}

pub fn bench_mulgen(c: &mut Criterion) {
    let kp = keygen(b"benchmark seed material, 32+ bytes long");
    c.bench_function("jq255e mulgen", |b| {
        b.iter(|| mulgen(black_box(&kp.sec)))
    });
}

pub fn bench_sign(c: &mut Criterion) {
    let kp = keygen(b"benchmark seed material, 32+ bytes long");
    let msg = black_box([0u8; 64]);
    c.bench_function("jq255e sign", |b| {
        b.iter(|| sign(black_box(&kp.sec), kp.public.encoded(), None, &msg, b""))
    });
}

pub fn bench_verify(c: &mut Criterion) {
    let kp = keygen(b"benchmark seed material, 32+ bytes long");
    let msg = [0u8; 64];
    let sig = sign(&kp.sec, kp.public.encoded(), None, &msg, b"");
    c.bench_function("jq255e verify", |b| {
        b.iter(|| verify(black_box(&sig), &kp.public, None, &msg))
    });
}

criterion_group!(benches, bench_keygen, bench_mulgen, bench_sign, bench_verify);
criterion_main!(benches);
