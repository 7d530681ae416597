use bignum::{Int, Rng};

use core::str::FromStr;
use rand::{RngCore, SeedableRng, rngs::StdRng};

fn int(s: &str) -> Int {
    Int::from_str(s).unwrap()
}

/// Deterministic byte stream for repeatable primality rounds.
struct TestRng(StdRng);

impl Rng for TestRng {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        self.0.fill_bytes(buf);
    }
}

fn rng(seed: u64) -> TestRng {
    TestRng(StdRng::seed_from_u64(seed))
}

#[test]
fn probab_prime_small_values() {
    let mut r = rng(1);

    let primes = [2u64, 3, 5, 7, 97, 541, 1009, 65537, 999999937];
    let composites = [0u64, 1, 4, 9, 561, 1024, 65535, 999999938];

    for p in primes {
        assert!(Int::from(p).probab_prime_p(15, &mut r), "{p}");
    }

    for c in composites {
        assert!(!Int::from(c).probab_prime_p(15, &mut r), "{c}");
    }

    // Negative operands are judged by magnitude.
    assert!(int("-97").probab_prime_p(15, &mut r));
}

#[test]
fn probab_prime_mersenne_and_fermat() {
    let mut r = rng(2);

    // 2^127 − 1 is prime.
    let m127 = int("170141183460469231731687303715884105727");
    assert!(m127.probab_prime_p(20, &mut r));

    // 2^64 + 1 = 274177 · 67280421310721.
    let f64 = int("18446744073709551617");
    assert!(!f64.probab_prime_p(20, &mut r));
    assert_eq!(
        f64.quorem(&int("274177")),
        (int("67280421310721"), Int::new())
    );

    // 2^61 − 1 prime, 2^67 − 1 = 193707721 · 761838257287.
    assert!(int("2305843009213693951").probab_prime_p(20, &mut r));
    assert!(!int("147573952589676412927").probab_prime_p(20, &mut r));
}

#[test]
fn probab_prime_strong_pseudoprimes() {
    let mut r = rng(3);

    // Carmichael numbers and base-2 strong pseudoprimes.
    for c in [
        "561",
        "41041",
        "825265",
        "2047",
        "3277",
        "4033",
        "3215031751",
    ] {
        assert!(!int(c).probab_prime_p(20, &mut r), "{c}");
    }
}

#[test]
fn mr_and_lucas_agree_on_a_window() {
    let mut r = rng(4);

    // Cross-check the full pipeline against trial division on a dense
    // window above the small-prime table.
    for n in 1025u64..1625 {
        let is_prime = {
            let mut p = n > 1;
            let mut d = 2;

            while d * d <= n {
                if n % d == 0 {
                    p = false;
                    break;
                }

                d += 1;
            }

            p
        };

        assert_eq!(
            Int::from(n).probab_prime_p(10, &mut r),
            is_prime,
            "{n}"
        );
    }
}

#[test]
fn nextprime_walks_upward() {
    let mut r = rng(5);

    assert_eq!(int("-5").nextprime(&mut r), int("2"));
    assert_eq!(Int::new().nextprime(&mut r), int("2"));
    assert_eq!(int("2").nextprime(&mut r), int("3"));
    assert_eq!(int("3").nextprime(&mut r), int("5"));
    assert_eq!(int("89").nextprime(&mut r), int("97"));
    assert_eq!(int("1020").nextprime(&mut r), int("1021"));

    // Across the famous gap after 113.
    assert_eq!(int("114").nextprime(&mut r), int("127"));

    let big = int("18446744073709551616");
    let p = big.nextprime(&mut r);
    assert!(p.cmp(&big) == core::cmp::Ordering::Greater);
    assert!(p.probab_prime_p(20, &mut r));
}

#[test]
fn findprime_respects_its_budget() {
    let mut r = rng(6);

    // 114..127 is a 6-candidate stretch of odd composites.
    assert_eq!(int("114").findprime(3, &mut r), None);
    assert_eq!(int("114").findprime(10, &mut r), Some(int("127")));
    assert_eq!(int("88").findprime(5, &mut r), Some(int("89")));
}

#[test]
fn randprime_hits_the_requested_width() {
    let mut r = rng(7);

    for bits in [2u64, 3, 8, 16, 48, 96] {
        let p = Int::randprime(&mut r, bits);

        assert_eq!(p.bitlen(), bits, "{bits}");
        assert!(p.probab_prime_p(20, &mut r), "{bits}");

        // Top two bits forced.
        if bits >= 2 {
            assert!(p.tstbit(bits - 1));
            assert!(p.tstbit(bits - 2));
        }
    }
}

#[test]
fn urandomb_stays_in_range() {
    let mut r = rng(40);

    for bits in [1u64, 7, 64, 65, 200] {
        for _ in 0..50 {
            let z = Int::urandomb(&mut r, bits);

            assert!(z.sgn() >= 0);
            assert!(z.bitlen() <= bits, "{bits}");
        }
    }

    assert_eq!(Int::urandomb(&mut r, 0), Int::new());
}

#[test]
fn urandomm_is_uniform_below_the_bound() {
    let mut r = rng(41);
    let m = int("1000003");
    let mut seen_high = false;

    for _ in 0..200 {
        let z = Int::urandomm(&mut r, &m);

        assert!(z.sgn() >= 0);
        assert!(z.cmp(&m) == core::cmp::Ordering::Less);

        if z.cmp(&int("500000")) == core::cmp::Ordering::Greater {
            seen_high = true;
        }
    }

    assert!(seen_high);
}

#[test]
fn realloc_bits_shrinks_and_clears() {
    let mut z = int("340282366920938463463374607431768211455");
    z.realloc_bits(64);
    assert_eq!(z, Int::new());

    let mut z = int("255");
    z.realloc_bits(8);
    assert_eq!(z, int("255"));
}

#[test]
fn mr_rejects_composites_with_forced_base_2() {
    let mut r = rng(8);

    // 2047 = 23·89 passes base-2 Miller–Rabin alone; more rounds with
    // random bases catch it.
    let n = int("2047");
    assert!(n.mr_prime_p(1, true, &mut r));
    assert!(!n.mr_prime_p(12, false, &mut r));
}
