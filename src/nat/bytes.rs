//! Endian-aware byte import and export for limb vectors.
//!
//! The endian parameter follows the convention used across the crate:
//! `-1` little-endian, `+1` big-endian, `0` host order. Limb vectors
//! themselves are always little-endian by limb; the parameter only
//! shapes the byte stream.

use crate::limb::{LIMB_BYTES, Limb};
use crate::nat;

/// Resolves the host byte order to `-1` or `+1`.
pub fn host_endian() -> i32 {
    if cfg!(target_endian = "little") { -1 } else { 1 }
}

/// Number of significant bytes of `xp`.
pub fn bytelen(xp: &[Limb]) -> usize {
    nat::bitlen(xp).div_ceil(8) as usize
}

/// Reads `bytes` into `zp`; unused leading limbs are zeroed.
///
/// Aborts if the buffer holds more significant bytes than `zp` can take.
pub fn import(zp: &mut [Limb], bytes: &[u8], endian: i32) {
    let endian = if endian == 0 { host_endian() } else { endian };

    zp.fill(0);

    if endian < 0 {
        for (i, &b) in bytes.iter().enumerate() {
            let li = i / LIMB_BYTES;
            assert!(
                li < zp.len() || b == 0,
                "import overflows the destination"
            );

            if li < zp.len() {
                zp[li] |= (b as Limb) << (8 * (i % LIMB_BYTES));
            }
        }
    } else {
        for (i, &b) in bytes.iter().rev().enumerate() {
            let li = i / LIMB_BYTES;
            assert!(
                li < zp.len() || b == 0,
                "import overflows the destination"
            );

            if li < zp.len() {
                zp[li] |= (b as Limb) << (8 * (i % LIMB_BYTES));
            }
        }
    }
}

/// Writes `xp` into `out`, padding with zeros.
///
/// `out` may be any length at least `bytelen(xp)`; shorter aborts.
pub fn export(out: &mut [u8], xp: &[Limb], endian: i32) {
    let endian = if endian == 0 { host_endian() } else { endian };
    let significant = bytelen(xp);

    assert!(out.len() >= significant, "export buffer too small");

    out.fill(0);

    if endian < 0 {
        for i in 0..significant {
            out[i] = (xp[i / LIMB_BYTES] >> (8 * (i % LIMB_BYTES))) as u8;
        }
    } else {
        let n = out.len();

        for i in 0..significant {
            out[n - 1 - i] = (xp[i / LIMB_BYTES] >> (8 * (i % LIMB_BYTES))) as u8;
        }
    }
}
