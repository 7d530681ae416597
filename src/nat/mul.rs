//! Schoolbook multiplication kernels.
//!
//! The scalar mul-accumulate forms (`mul_1`, `addmul_1`, `submul_1`) are
//! the row operations; [`mul`] stacks them, and [`sqr`] halves the work by
//! exploiting the symmetry of the cross products.

use crate::limb::{self, Limb};

/// `zp := xp · y`, returning the high carry limb.
/// `zp.len() == xp.len()`, disjoint.
pub fn mul_1(zp: &mut [Limb], xp: &[Limb], y: Limb) -> Limb {
    debug_assert_eq!(zp.len(), xp.len());

    let mut c = 0;

    for i in 0..xp.len() {
        let (lo, hi) = limb::muladd(xp[i], y, c);
        zp[i] = lo;
        c = hi;
    }

    c
}

/// `zp := zp · y` in place, returning the high carry limb.
pub fn mul_1_in(zp: &mut [Limb], y: Limb) -> Limb {
    let mut c = 0;

    for z in zp.iter_mut() {
        let (lo, hi) = limb::muladd(*z, y, c);
        *z = lo;
        c = hi;
    }

    c
}

/// `zp := zp + xp · y`, returning the high carry limb.
/// `zp.len() == xp.len()`.
pub fn addmul_1(zp: &mut [Limb], xp: &[Limb], y: Limb) -> Limb {
    debug_assert_eq!(zp.len(), xp.len());

    let mut c = 0;

    for i in 0..xp.len() {
        let (lo, hi) = limb::muladd2(xp[i], y, zp[i], c);
        zp[i] = lo;
        c = hi;
    }

    c
}

/// `zp := zp − xp · y`, returning the borrow-out limb.
/// `zp.len() == xp.len()`.
pub fn submul_1(zp: &mut [Limb], xp: &[Limb], y: Limb) -> Limb {
    debug_assert_eq!(zp.len(), xp.len());

    let mut c = 0;

    for i in 0..xp.len() {
        let (lo, hi) = limb::muladd(xp[i], y, c);
        let (z, b) = limb::sub(zp[i], lo);
        zp[i] = z;
        c = hi + b;
    }

    c
}

/// Schoolbook product `zp := xp · yp`.
///
/// `zp.len() == xp.len() + yp.len()`; the top limb may come out zero.
/// An empty `yp` or `xp` writes zeros.
pub fn mul(zp: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
    let xn = xp.len();
    let yn = yp.len();

    debug_assert_eq!(zp.len(), xn + yn);

    if xn == 0 || yn == 0 {
        zp.fill(0);
        return;
    }

    zp[xn] = mul_1(&mut zp[..xn], xp, yp[0]);

    for j in 1..yn {
        let c = addmul_1(&mut zp[j..j + xn], xp, yp[j]);
        zp[j + xn] = c;
    }
}

/// Dedicated squaring `zp := xp²`, `zp.len() == 2·xp.len()`.
///
/// Accumulates each cross product xᵢxⱼ (i < j) once, doubles the whole
/// accumulator with a single-bit shift, then adds the diagonal squares.
pub fn sqr(zp: &mut [Limb], xp: &[Limb]) {
    let n = xp.len();

    debug_assert_eq!(zp.len(), 2 * n);

    zp.fill(0);

    if n == 0 {
        return;
    }

    for i in 0..n - 1 {
        let c = addmul_1(&mut zp[2 * i + 1..i + n], &xp[i + 1..], xp[i]);
        zp[i + n] = c;
    }

    // Double the off-diagonal sum; it is below 2^(2nL−1) so nothing falls
    // off the top.
    let c = super::lshift_in(zp, 1);
    debug_assert_eq!(c, 0);

    let mut c = 0;

    for i in 0..n {
        let (hi, lo) = limb::sqr(xp[i]);
        let (z0, c0) = limb::addc(zp[2 * i], lo, c);
        let (z1, c1) = limb::addc(zp[2 * i + 1], hi, c0);
        zp[2 * i] = z0;
        zp[2 * i + 1] = z1;
        c = c1;
    }

    debug_assert_eq!(c, 0);
}
