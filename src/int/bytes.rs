//! Byte import/export and the compact difficulty-target form.
//!
//! Byte streams transport magnitudes; the sign stays with the caller
//! (import always yields a non-negative value). The compact form packs
//! sign · mantissa · 256^(exponent−3) into one 32-bit word: bits [31:24]
//! exponent, bit 23 sign, bits [22:0] mantissa.

use super::{Int, IntRef};
use crate::limb::{LIMB_BYTES, Limb};
use crate::nat::{self, bytes};

impl Int {
    /// Imports a magnitude from a byte stream.
    /// Endian: `-1` little, `+1` big, `0` host.
    pub fn from_bytes(data: &[u8], endian: i32) -> Int {
        let nlimbs = data.len().div_ceil(LIMB_BYTES).max(1);
        let mut limbs = vec![0 as Limb; nlimbs];

        bytes::import(&mut limbs, data, endian);

        Int::from_raw(limbs, false)
    }

    /// Number of significant bytes of the magnitude.
    pub fn bytelen(&self) -> usize {
        bytes::bytelen(self.d())
    }

    /// Exports the magnitude with exactly [`Int::bytelen`] bytes; zero
    /// exports as an empty vector.
    pub fn to_bytes(&self, endian: i32) -> Vec<u8> {
        let mut out = vec![0u8; self.bytelen()];

        bytes::export(&mut out, self.d(), endian);

        out
    }

    /// Exports the magnitude into `out`, padding with zeros. Aborts when
    /// `out` is shorter than the significant bytes.
    pub fn write_bytes(&self, out: &mut [u8], endian: i32) {
        bytes::export(out, self.d(), endian);
    }

    /// Decodes the compact form.
    pub fn from_compact(compact: u32) -> Int {
        let exponent = compact >> 24;
        let neg = compact & 0x0080_0000 != 0;
        let mantissa = compact & 0x007F_FFFF;

        let z = if exponent <= 3 {
            Int::from(mantissa >> (8 * (3 - exponent)))
        } else {
            Int::from(mantissa).mul_2exp(8 * (exponent as u64 - 3))
        };

        if neg { z.neg() } else { z }
    }

    /// Encodes into the compact form, renormalizing when the mantissa's
    /// top bit would collide with the sign bit. Truncates the low bytes
    /// of wide values, matching the difficulty-target semantics.
    pub fn to_compact(&self) -> u32 {
        if self.is_zero() {
            return 0;
        }

        let mut size = self.bytelen() as u32;

        let mut mantissa = if size <= 3 {
            (self.get_u64() as u32) << (8 * (3 - size))
        } else {
            self.abs().quo_2exp(8 * (size as u64 - 3)).get_u64() as u32
        };

        if mantissa & 0x0080_0000 != 0 {
            mantissa >>= 8;
            size += 1;
        }

        assert!(size <= 0xFF, "value too wide for the compact form");

        let mut compact = mantissa | (size << 24);

        if self.is_neg() {
            compact |= 0x0080_0000;
        }

        compact
    }
}

impl<'a> IntRef<'a> {
    /// Borrowed view of the significant bytes, exported without
    /// promoting to an owned value.
    pub fn write_bytes(&self, out: &mut [u8], endian: i32) {
        bytes::export(out, self.limbs, endian);
    }

    /// Number of significant bytes of the viewed magnitude.
    pub fn bytelen(&self) -> usize {
        bytes::bytelen(self.limbs)
    }

    /// Number of significant bits of the viewed magnitude.
    pub fn bitlen(&self) -> u64 {
        nat::bitlen(self.limbs)
    }
}
