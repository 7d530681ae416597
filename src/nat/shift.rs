//! Bit shifts inside a limb vector.
//!
//! The bit count is strictly within `(0, L)`; whole-limb moves are the
//! caller's concern (the signed layer composes them with these kernels).
//! Left shifts return the bits pushed out of the top limb; right shifts
//! return the bits pushed out of the bottom limb, placed in the high end
//! of the returned limb.

use crate::limb::{LIMB_BITS, Limb};

/// `zp := xp << bits`, returning the shifted-out high limb.
pub fn lshift(zp: &mut [Limb], xp: &[Limb], bits: u32) -> Limb {
    debug_assert!(bits > 0 && bits < LIMB_BITS);
    debug_assert_eq!(zp.len(), xp.len());

    let n = xp.len();

    if n == 0 {
        return 0;
    }

    let rb = LIMB_BITS - bits;
    let ret = xp[n - 1] >> rb;

    for i in (1..n).rev() {
        zp[i] = (xp[i] << bits) | (xp[i - 1] >> rb);
    }

    zp[0] = xp[0] << bits;

    ret
}

/// `zp := zp << bits` in place, returning the shifted-out high limb.
pub fn lshift_in(zp: &mut [Limb], bits: u32) -> Limb {
    debug_assert!(bits > 0 && bits < LIMB_BITS);

    let n = zp.len();

    if n == 0 {
        return 0;
    }

    let rb = LIMB_BITS - bits;
    let ret = zp[n - 1] >> rb;

    for i in (1..n).rev() {
        zp[i] = (zp[i] << bits) | (zp[i - 1] >> rb);
    }

    zp[0] <<= bits;

    ret
}

/// `zp := xp >> bits`, returning the shifted-out bits in the high end of
/// the result limb.
pub fn rshift(zp: &mut [Limb], xp: &[Limb], bits: u32) -> Limb {
    debug_assert!(bits > 0 && bits < LIMB_BITS);
    debug_assert_eq!(zp.len(), xp.len());

    let n = xp.len();

    if n == 0 {
        return 0;
    }

    let rb = LIMB_BITS - bits;
    let ret = xp[0] << rb;

    for i in 0..n - 1 {
        zp[i] = (xp[i] >> bits) | (xp[i + 1] << rb);
    }

    zp[n - 1] = xp[n - 1] >> bits;

    ret
}

/// `zp := zp >> bits` in place, returning the shifted-out bits in the
/// high end of the result limb.
pub fn rshift_in(zp: &mut [Limb], bits: u32) -> Limb {
    debug_assert!(bits > 0 && bits < LIMB_BITS);

    let n = zp.len();

    if n == 0 {
        return 0;
    }

    let rb = LIMB_BITS - bits;
    let ret = zp[0] << rb;

    for i in 0..n - 1 {
        zp[i] = (zp[i] >> bits) | (zp[i + 1] << rb);
    }

    zp[n - 1] >>= bits;

    ret
}
