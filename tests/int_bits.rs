use bignum::Int;

use core::str::FromStr;

fn int(s: &str) -> Int {
    Int::from_str(s).unwrap()
}

fn corpus() -> Vec<Int> {
    [
        "0",
        "1",
        "-1",
        "5",
        "-5",
        "255",
        "-256",
        "18446744073709551615",
        "-18446744073709551615",
        "18446744073709551616",
        "-18446744073709551616",
        "340282366920938463463374607431768211455",
        "-123456789012345678901234567890",
    ]
    .iter()
    .map(|s| int(s))
    .collect()
}

#[test]
fn bitwise_twos_complement_identities() {
    let xs = corpus();

    for x in &xs {
        // com(x) = −x − 1.
        assert_eq!(x.com(), x.neg().sub_u64(1), "{x}");
        assert_eq!(x.com().com(), *x);

        for y in &xs {
            let and = x.and(y);
            let ior = x.ior(y);
            let xor = x.xor(y);

            // ior + and = x + y.
            assert_eq!(ior.add(&and), x.add(y), "{x} {y}");

            // xor = ior − and.
            assert_eq!(xor, ior.sub(&and), "{x} {y}");

            // De Morgan.
            assert_eq!(x.com().and(&y.com()), ior.com(), "{x} {y}");

            // Symmetry.
            assert_eq!(and, y.and(x));
            assert_eq!(ior, y.ior(x));
            assert_eq!(xor, y.xor(x));
        }
    }
}

#[test]
fn bitwise_small_truth_table() {
    // Check against machine arithmetic on a window of small values.
    for a in -9i64..=9 {
        for b in -9i64..=9 {
            let x = Int::from(a);
            let y = Int::from(b);

            assert_eq!(x.and(&y), Int::from(a & b), "{a} & {b}");
            assert_eq!(x.ior(&y), Int::from(a | b), "{a} | {b}");
            assert_eq!(x.xor(&y), Int::from(a ^ b), "{a} ^ {b}");
            assert_eq!(x.com(), Int::from(!a));
        }
    }
}

#[test]
fn bitwise_operators() {
    let a = int("12");
    let b = int("-10");

    assert_eq!(&a & &b, Int::from(12i64 & -10));
    assert_eq!(&a | &b, Int::from(12i64 | -10));
    assert_eq!(&a ^ &b, Int::from(12i64 ^ -10));
    assert_eq!(!&a, Int::from(!12i64));
}

#[test]
fn tstbit_on_negatives_reads_twos_complement() {
    // −4 = …11100.
    let m4 = int("-4");
    assert!(!m4.tstbit(0));
    assert!(!m4.tstbit(1));
    assert!(m4.tstbit(2));
    assert!(m4.tstbit(3));
    assert!(m4.tstbit(500));

    // −1 is all ones.
    let m1 = int("-1");
    for pos in [0u64, 1, 63, 64, 65, 1000] {
        assert!(m1.tstbit(pos));
    }

    let p5 = int("5");
    assert!(p5.tstbit(0));
    assert!(!p5.tstbit(1));
    assert!(p5.tstbit(2));
    assert!(!p5.tstbit(200));
}

#[test]
fn setbit_clrbit_combit_match_machine_words() {
    for start in [-9i64, -4, -1, 0, 1, 7] {
        for pos in 0..16u64 {
            let mut z = Int::from(start);
            z.setbit(pos);
            assert_eq!(z, Int::from(start | 1 << pos), "set {start} {pos}");

            let mut z = Int::from(start);
            z.clrbit(pos);
            assert_eq!(z, Int::from(start & !(1 << pos)), "clr {start} {pos}");

            let mut z = Int::from(start);
            z.combit(pos);
            assert_eq!(z, Int::from(start ^ 1 << pos), "com {start} {pos}");
        }
    }
}

#[test]
fn setbit_grows_storage() {
    let mut z = Int::one();
    z.setbit(300);

    assert_eq!(z, Int::one().mul_2exp(300).add_u64(1));
    assert_eq!(z.bitlen(), 301);
}

#[test]
fn scan_over_signed_values() {
    let x = int("136"); // 10001000
    assert_eq!(x.scan1(0), Some(3));
    assert_eq!(x.scan1(4), Some(7));
    assert_eq!(x.scan1(8), None);
    assert_eq!(x.scan0(0), Some(0));
    assert_eq!(x.scan0(3), Some(4));

    // −136 = …101111000: trailing zeros kept, then complemented.
    let y = int("-136");
    assert_eq!(y.scan1(0), Some(3));
    assert_eq!(y.scan1(4), Some(4));
    assert_eq!(y.scan0(0), Some(0));
    assert_eq!(y.scan0(3), Some(7));
    assert!(y.scan1(1000).is_some());

    // −1 has no clear bit.
    assert_eq!(int("-1").scan0(0), None);
    assert_eq!(int("-1").scan1(77), Some(77));
}

#[test]
fn popcount_and_hamdist_signs() {
    assert_eq!(int("255").popcount(), 8);
    assert_eq!(Int::new().popcount(), 0);
    assert_eq!(int("-1").popcount(), u64::MAX);

    assert_eq!(int("255").hamdist(&int("0")), 8);
    assert_eq!(int("5").hamdist(&int("-5")), u64::MAX);
    assert_eq!(int("-7").hamdist(&int("-1")), 2);
    assert_eq!(int("-1").hamdist(&int("-1")), 0);
}
