use bignum::Int;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn operand(limbs: usize, seed: u64) -> Int {
    // Deterministic dense operand: no RNG needed for throughput shapes.
    let mut z = Int::from(seed | 1);

    while z.bitlen() < limbs as u64 * 64 {
        z = z.square().add_u64(seed);
    }

    z.rem_2exp(limbs as u64 * 64)
}

pub fn bench_mul(c: &mut Criterion) {
    let a = operand(16, 0x9E37);
    let b = operand(16, 0x79B9);

    c.bench_function("mul 16x16 limbs", |bch| {
        bch.iter(|| black_box(&a).mul(black_box(&b)))
    });

    c.bench_function("sqr 16 limbs", |bch| {
        bch.iter(|| black_box(&a).square())
    });

    let d = operand(8, 0xC2B2);

    c.bench_function("divmod 16/8 limbs", |bch| {
        bch.iter(|| black_box(&a).quorem(black_box(&d)))
    });
}

criterion_group!(benches, bench_mul);
criterion_main!(benches);
