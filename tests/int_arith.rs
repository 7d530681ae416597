use bignum::Int;

use core::cmp::Ordering;
use core::str::FromStr;

fn int(s: &str) -> Int {
    Int::from_str(s).unwrap()
}

#[test]
fn int_sign_dispatch_on_add_sub() {
    let a = int("1000000000000000000000000000000");
    let b = int("-999999999999999999999999999999");

    assert_eq!(a.add(&b), Int::one());
    assert_eq!(b.add(&a), Int::one());
    assert_eq!(a.sub(&a), Int::new());
    assert_eq!(b.sub(&b), Int::new());
    assert_eq!(a.neg().sub(&b), int("-1"));
    assert_eq!(b.sub(&a), int("-1999999999999999999999999999999"));
}

#[test]
fn int_add_mul_laws() {
    let xs = [
        int("0"),
        int("1"),
        int("-1"),
        int("18446744073709551616"),
        int("-340282366920938463463374607431768211457"),
        int("12345678901234567890123456789"),
    ];

    for x in &xs {
        for y in &xs {
            // Commutativity.
            assert_eq!(x.add(y), y.add(x));
            assert_eq!(x.mul(y), y.mul(x));

            for z in &xs {
                // Associativity and distributivity.
                assert_eq!(x.add(y).add(z), x.add(&y.add(z)));
                assert_eq!(x.mul(y).mul(z), x.mul(&y.mul(z)));
                assert_eq!(x.mul(&y.add(z)), x.mul(y).add(&x.mul(z)));
            }
        }
    }
}

#[test]
fn int_square_matches_mul() {
    let xs = [int("0"), int("-7"), int("18446744073709551615"), int("123456789123456789123456789")];

    for x in &xs {
        assert_eq!(x.square(), x.mul(x));
        assert!(x.square().sgn() >= 0);
    }
}

#[test]
fn int_scalar_variants() {
    let x = int("1000");

    assert_eq!(x.add_u64(24), int("1024"));
    assert_eq!(x.sub_u64(2000), int("-1000"));
    assert_eq!(x.u64_sub(2000), int("1000"));
    assert_eq!(x.neg().u64_sub(1), int("1001"));
    assert_eq!(x.i64_sub(-1), int("-1001"));
    assert_eq!(x.mul_u64(0), Int::new());
    assert_eq!(x.mul_i64(-3), int("-3000"));
    assert_eq!(x.addmul(&int("2"), &int("3")), int("1006"));
    assert_eq!(x.submul(&int("2"), &int("3")), int("994"));
}

#[test]
fn int_operator_impls() {
    let a = int("6");
    let b = int("-4");

    assert_eq!(&a + &b, int("2"));
    assert_eq!(&a - &b, int("10"));
    assert_eq!(&a * &b, int("-24"));
    assert_eq!(-&a, int("-6"));
    assert_eq!(a.clone() + b.clone(), int("2"));
}

#[test]
fn int_comparisons_and_conversions() {
    let a = int("-5");
    let b = int("3");

    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(a.cmpabs(&b), Ordering::Greater);
    assert_eq!(a.sgn(), -1);
    assert_eq!(Int::new().sgn(), 0);

    assert_eq!(a.get_i64(), -5);
    assert_eq!(b.get_u64(), 3);
    assert!(b.fits_u64_p());
    assert!(!a.fits_u64_p());
    assert!(a.fits_i64_p());

    let big = int("18446744073709551616");
    assert!(!big.fits_u64_p());
    assert!(big.sub_u64(1).fits_u64_p());

    assert_eq!(int("-9223372036854775808").get_i64(), i64::MIN);
    assert!(int("-9223372036854775808").fits_i64_p());
    assert!(!int("-9223372036854775809").fits_i64_p());

    assert_eq!(Int::from(-9223372036854775808i64), int("-9223372036854775808"));
    assert_eq!(Int::from(u64::MAX), int("18446744073709551615"));
}

#[test]
fn int_swap_and_views() {
    let mut a = int("11");
    let mut b = int("-22");

    a.swap(&mut b);
    assert_eq!(a, int("-22"));
    assert_eq!(b, int("11"));

    let v = a.as_view();
    assert_eq!(v.sgn(), -1);
    assert_eq!(v.to_int(), a);
    assert_eq!(v.bitlen(), 5);
}
