//! Vector addition and subtraction with explicit carry chains.
//!
//! Every kernel comes in an out-of-place form (`zp` disjoint from the
//! inputs) and an in-place `_in` form mutating the accumulator. The
//! scalar forms stop rippling as soon as the carry clears and, in the
//! out-of-place case, fall back to a plain copy of the untouched tail.

use crate::limb::{self, Limb};

/// `zp := xp + y`, returning the carry-out. `zp.len() == xp.len()`.
///
/// Ripples only while the carry is set, then copies the remaining limbs.
pub fn add_1(zp: &mut [Limb], xp: &[Limb], y: Limb) -> Limb {
    debug_assert_eq!(zp.len(), xp.len());

    let mut c = y;

    for i in 0..xp.len() {
        if c == 0 {
            zp[i..].copy_from_slice(&xp[i..]);
            return 0;
        }

        let (z, c2) = limb::add(xp[i], c);
        zp[i] = z;
        c = c2;
    }

    c
}

/// `zp := zp + y` in place, returning the carry-out.
pub fn add_1_in(zp: &mut [Limb], y: Limb) -> Limb {
    let mut c = y;

    for z in zp.iter_mut() {
        if c == 0 {
            return 0;
        }

        let (s, c2) = limb::add(*z, c);
        *z = s;
        c = c2;
    }

    c
}

/// `zp := xp − y`, returning the borrow-out. `zp.len() == xp.len()`.
pub fn sub_1(zp: &mut [Limb], xp: &[Limb], y: Limb) -> Limb {
    debug_assert_eq!(zp.len(), xp.len());

    let mut b = y;

    for i in 0..xp.len() {
        if b == 0 {
            zp[i..].copy_from_slice(&xp[i..]);
            return 0;
        }

        let (z, b2) = limb::sub(xp[i], b);
        zp[i] = z;
        b = b2;
    }

    b
}

/// `zp := zp − y` in place, returning the borrow-out.
pub fn sub_1_in(zp: &mut [Limb], y: Limb) -> Limb {
    let mut b = y;

    for z in zp.iter_mut() {
        if b == 0 {
            return 0;
        }

        let (d, b2) = limb::sub(*z, b);
        *z = d;
        b = b2;
    }

    b
}

/// Equal-length add `zp := xp + yp`, returning the carry-out.
pub fn add_n(zp: &mut [Limb], xp: &[Limb], yp: &[Limb]) -> Limb {
    debug_assert!(zp.len() == xp.len() && xp.len() == yp.len());

    let mut c = 0;

    for i in 0..xp.len() {
        let (z, c2) = limb::addc(xp[i], yp[i], c);
        zp[i] = z;
        c = c2;
    }

    c
}

/// Equal-length in-place add `zp := zp + yp`, returning the carry-out.
pub fn add_n_in(zp: &mut [Limb], yp: &[Limb]) -> Limb {
    debug_assert_eq!(zp.len(), yp.len());

    let mut c = 0;

    for (z, &y) in zp.iter_mut().zip(yp) {
        let (s, c2) = limb::addc(*z, y, c);
        *z = s;
        c = c2;
    }

    c
}

/// Equal-length subtract `zp := xp − yp`, returning the borrow-out.
pub fn sub_n(zp: &mut [Limb], xp: &[Limb], yp: &[Limb]) -> Limb {
    debug_assert!(zp.len() == xp.len() && xp.len() == yp.len());

    let mut b = 0;

    for i in 0..xp.len() {
        let (z, b2) = limb::subc(xp[i], yp[i], b);
        zp[i] = z;
        b = b2;
    }

    b
}

/// Equal-length in-place subtract `zp := zp − yp`, returning the borrow.
pub fn sub_n_in(zp: &mut [Limb], yp: &[Limb]) -> Limb {
    debug_assert_eq!(zp.len(), yp.len());

    let mut b = 0;

    for (z, &y) in zp.iter_mut().zip(yp) {
        let (d, b2) = limb::subc(*z, y, b);
        *z = d;
        b = b2;
    }

    b
}

/// Mixed-length add `zp := xp + yp` with `xp.len() ≥ yp.len()`, returning
/// the carry-out. `zp.len() == xp.len()`.
pub fn add(zp: &mut [Limb], xp: &[Limb], yp: &[Limb]) -> Limb {
    debug_assert!(xp.len() >= yp.len());
    debug_assert_eq!(zp.len(), xp.len());

    let yn = yp.len();
    let c = add_n(&mut zp[..yn], &xp[..yn], yp);

    add_1(&mut zp[yn..], &xp[yn..], c)
}

/// Mixed-length in-place add `zp := zp + yp` with `zp.len() ≥ yp.len()`,
/// returning the carry-out.
pub fn add_in(zp: &mut [Limb], yp: &[Limb]) -> Limb {
    debug_assert!(zp.len() >= yp.len());

    let yn = yp.len();
    let c = add_n_in(&mut zp[..yn], yp);

    add_1_in(&mut zp[yn..], c)
}

/// Mixed-length subtract `zp := xp − yp` with `xp ≥ yp` as integers and
/// `xp.len() ≥ yp.len()`, returning the borrow-out (zero on the stated
/// precondition).
pub fn sub(zp: &mut [Limb], xp: &[Limb], yp: &[Limb]) -> Limb {
    debug_assert!(xp.len() >= yp.len());
    debug_assert_eq!(zp.len(), xp.len());

    let yn = yp.len();
    let b = sub_n(&mut zp[..yn], &xp[..yn], yp);

    sub_1(&mut zp[yn..], &xp[yn..], b)
}

/// Mixed-length in-place subtract `zp := zp − yp`, returning the borrow.
pub fn sub_in(zp: &mut [Limb], yp: &[Limb]) -> Limb {
    debug_assert!(zp.len() >= yp.len());

    let yn = yp.len();
    let b = sub_n_in(&mut zp[..yn], yp);

    sub_1_in(&mut zp[yn..], b)
}
