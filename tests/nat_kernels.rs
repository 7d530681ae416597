use bignum::limb::{self, LIMB_BITS, LIMB_MAX, Limb};
use bignum::nat;

use core::cmp::Ordering;

#[test]
fn limb_add_sub_carry_chain() {
    assert_eq!(limb::add(LIMB_MAX, 1), (0, 1));
    assert_eq!(limb::add(1, 2), (3, 0));
    assert_eq!(limb::addc(LIMB_MAX, 0, 1), (0, 1));
    assert_eq!(limb::addc(LIMB_MAX, LIMB_MAX, 1), (LIMB_MAX, 1));

    assert_eq!(limb::sub(0, 1), (LIMB_MAX, 1));
    assert_eq!(limb::subc(0, LIMB_MAX, 1), (0, 1));
    assert_eq!(limb::subc(5, 3, 1), (1, 0));
}

#[test]
fn limb_mul_full_width() {
    let (hi, lo) = limb::mul(LIMB_MAX, LIMB_MAX);

    // (B−1)² = B² − 2B + 1.
    assert_eq!(hi, LIMB_MAX - 1);
    assert_eq!(lo, 1);

    assert_eq!(limb::sqr(3), (0, 9));
    assert_eq!(limb::muladd(LIMB_MAX, LIMB_MAX, LIMB_MAX), (0, LIMB_MAX));
    assert_eq!(
        limb::muladd2(LIMB_MAX, LIMB_MAX, LIMB_MAX, LIMB_MAX),
        (LIMB_MAX, LIMB_MAX)
    );
}

#[test]
fn limb_bit_counts_defined_on_zero() {
    assert_eq!(limb::clz(0), LIMB_BITS);
    assert_eq!(limb::ctz(0), LIMB_BITS);
    assert_eq!(limb::bitlen(0), 0);
    assert_eq!(limb::bitlen(1), 1);
    assert_eq!(limb::bitlen(LIMB_MAX), LIMB_BITS);
    assert_eq!(limb::popcount(LIMB_MAX), LIMB_BITS);
}

#[test]
fn nat_add_1_stops_rippling() {
    let x = [LIMB_MAX, LIMB_MAX, 7, 9];
    let mut z = [0; 4];

    let c = nat::add_1(&mut z, &x, 1);
    assert_eq!(c, 0);
    assert_eq!(z, [0, 0, 8, 9]);

    // Full ripple produces a carry-out.
    let x = [LIMB_MAX, LIMB_MAX];
    let mut z = [0; 2];
    assert_eq!(nat::add_1(&mut z, &x, 1), 1);
    assert_eq!(z, [0, 0]);
}

#[test]
fn nat_add_sub_round_trip() {
    let x = [1, 2, 3, LIMB_MAX];
    let y = [LIMB_MAX, 0, LIMB_MAX, 4];

    let mut sum = [0; 4];
    let c = nat::add_n(&mut sum, &x, &y);

    let mut back = [0; 4];
    let b = nat::sub_n(&mut back, &sum, &y);

    assert_eq!(back, x);
    assert_eq!(c, 1);
    assert_eq!(b, 1);
}

#[test]
fn nat_mixed_length_add_sub() {
    let x = [LIMB_MAX, LIMB_MAX, 1];
    let y = [1, 1];

    let mut z = [0; 3];
    assert_eq!(nat::add(&mut z, &x, &y), 0);
    assert_eq!(z, [0, 1, 2]);

    let mut w = [0; 3];
    assert_eq!(nat::sub(&mut w, &z, &y), 0);
    assert_eq!(w, x);
}

#[test]
fn nat_mul_1_and_addmul_1() {
    let x = [LIMB_MAX, LIMB_MAX];
    let mut z = [0; 2];

    // (B² − 1)·2 = 2B² − 2.
    let c = nat::mul_1(&mut z, &x, 2);
    assert_eq!(c, 1);
    assert_eq!(z, [LIMB_MAX - 1, LIMB_MAX]);

    let c = nat::addmul_1(&mut z, &x, 1);
    assert_eq!(c, 1);
    assert_eq!(z, [LIMB_MAX - 2, LIMB_MAX]);

    let c = nat::submul_1(&mut z, &x, 1);
    assert_eq!(c, 1);
    assert_eq!(z, [LIMB_MAX - 1, LIMB_MAX]);
}

#[test]
fn nat_mul_matches_schoolbook_corners() {
    // (B−1)·(B−1) = B² − 2B + 1.
    let mut z = [0; 2];
    nat::mul(&mut z, &[LIMB_MAX], &[LIMB_MAX]);
    assert_eq!(z, [1, LIMB_MAX - 1]);

    // Zero-length operand writes zeros.
    let mut z = [7; 3];
    nat::mul(&mut z, &[1, 2, 3], &[]);
    assert_eq!(z, [0, 0, 0]);

    // Cross-limb carries.
    let mut z = [0; 4];
    nat::mul(&mut z, &[LIMB_MAX, LIMB_MAX], &[LIMB_MAX, LIMB_MAX]);
    assert_eq!(z, [1, 0, LIMB_MAX - 1, LIMB_MAX]);
}

#[test]
fn nat_sqr_agrees_with_mul() {
    let xs: [&[Limb]; 4] = [
        &[5],
        &[LIMB_MAX, 1],
        &[LIMB_MAX, LIMB_MAX, LIMB_MAX],
        &[0x1234, 0, LIMB_MAX, 7],
    ];

    for x in xs {
        let mut sq = vec![0; 2 * x.len()];
        nat::sqr(&mut sq, x);

        let mut prod = vec![0; 2 * x.len()];
        nat::mul(&mut prod, x, x);

        assert_eq!(sq, prod);
    }
}

#[test]
fn nat_shifts_return_spillover() {
    let x = [LIMB_MAX, 0b1011];
    let mut z = [0; 2];

    let out = nat::lshift(&mut z, &x, 4);
    assert_eq!(out, 0);
    assert_eq!(z, [LIMB_MAX << 4, (0b1011 << 4) | 0xF]);

    let mut back = [0; 2];
    let out = nat::rshift(&mut back, &z, 4);
    assert_eq!(out, 0);
    assert_eq!(back, x);

    // Bits falling off either end are returned.
    let mut z = [0; 1];
    assert_eq!(nat::lshift(&mut z, &[LIMB_MAX], 1), 1);
    assert_eq!(nat::rshift(&mut z, &[0b101], 1), 1 << (LIMB_BITS - 1));
}

#[test]
fn nat_logic_ops_pointwise() {
    let x = [0b1100, LIMB_MAX];
    let y = [0b1010, 0];
    let mut z = [0; 2];

    nat::and_n(&mut z, &x, &y);
    assert_eq!(z, [0b1000, 0]);

    nat::ior_n(&mut z, &x, &y);
    assert_eq!(z, [0b1110, LIMB_MAX]);

    nat::xor_n(&mut z, &x, &y);
    assert_eq!(z, [0b0110, LIMB_MAX]);

    nat::andn_n(&mut z, &x, &y);
    assert_eq!(z, [0b0100, LIMB_MAX]);

    nat::nand_n(&mut z, &x, &y);
    assert_eq!(z, [!0b1000, LIMB_MAX]);

    nat::com(&mut z, &x);
    assert_eq!(z, [!0b1100, 0]);
}

#[test]
fn nat_cmp_and_strip() {
    assert_eq!(nat::cmp(&[1, 2], &[1, 2]), Ordering::Equal);
    assert_eq!(nat::cmp(&[2, 1], &[1, 2]), Ordering::Less);
    assert_eq!(nat::cmp(&[0, 3], &[LIMB_MAX, 2]), Ordering::Greater);

    assert_eq!(nat::strip(&[0, 0, 0]), 0);
    assert_eq!(nat::strip(&[1, 0, 0]), 1);
    assert_eq!(nat::strip(&[0, 0, 9]), 3);

    assert_eq!(nat::cmp_stripped(&[5, 0, 0], &[5]), Ordering::Equal);
}

#[test]
fn nat_bit_access_across_boundaries() {
    let x = [LIMB_MAX, 0b1];

    assert_eq!(nat::getbit(&x, 0), 1);
    assert_eq!(nat::getbit(&x, LIMB_BITS as u64), 1);
    assert_eq!(nat::getbit(&x, LIMB_BITS as u64 + 1), 0);
    assert_eq!(nat::getbit(&x, 10 * LIMB_BITS as u64), 0);

    // A window straddling the limb boundary assembles from both limbs.
    let w = nat::getbits(&x, LIMB_BITS as u64 - 2, 4);
    assert_eq!(w, 0b0111);

    let w = nat::getbits(&x, LIMB_BITS as u64 - 1, 3);
    assert_eq!(w, 0b011);
}

#[test]
fn nat_scan_and_counts() {
    let x = [0b1000, 0, 0b100];

    assert_eq!(nat::scan1(&x, 0), Some(3));
    assert_eq!(nat::scan1(&x, 4), Some(2 * LIMB_BITS as u64 + 2));
    assert_eq!(nat::scan1(&x, 3 * LIMB_BITS as u64), None);

    assert_eq!(nat::scan0(&[LIMB_MAX], 0), LIMB_BITS as u64);
    assert_eq!(nat::scan0(&[0b1011], 0), 2);

    assert_eq!(nat::ctz(&x), 3);
    assert_eq!(nat::ctz(&[0, 0]), 2 * LIMB_BITS as u64);
    assert_eq!(nat::bitlen(&x), 2 * LIMB_BITS as u64 + 3);
    assert_eq!(nat::popcount(&x), 2);
    assert_eq!(nat::hamdist(&x, &[0, 0, 0b100]), 1);
}
