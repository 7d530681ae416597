//! Modular exponentiation kernels.
//!
//! Two engines share the window-table idea but differ in what they leak:
//!
//! - the variable-time sliding window ([`powm_mont`], [`powm_div`]):
//!   width 5, a table of the 16 odd powers, zero bits cost one squaring,
//!   windows are right-shifted until odd before the table lookup;
//! - the constant-time fixed window ([`powm_sec`]): width 4, a table of
//!   all 16 powers selected by a full sweep, every 4-bit chunk of the
//!   public-length exponent costs exactly four squarings and one
//!   multiply.

use crate::limb::Limb;
use crate::nat::{self, modular::Barrett, modular::Montgomery, sec};

/// Sliding-window width of the variable-time engines.
pub const SLIDE_WIDTH: u32 = 5;

/// Fixed-window width of the constant-time engine.
pub const FIXED_WIDTH: u32 = 4;

/// One step of the sliding-window scan: square the running value, or
/// multiply it by the table entry holding the (2i+1)-th power.
enum SlideOp {
    Sqr,
    MulEntry(usize),
}

/// Drives the odd-window scan of the exponent, emitting the operation
/// sequence to a single sink so the caller owns all its buffers.
fn slide<F: FnMut(SlideOp)>(yp: &[Limb], mut f: F) {
    let ybits = nat::bitlen(yp);
    let mut i = ybits as i64 - 1;

    while i >= 0 {
        if nat::getbit(yp, i as u64) == 0 {
            f(SlideOp::Sqr);
            i -= 1;
            continue;
        }

        let width = SLIDE_WIDTH.min((i + 1) as u32);
        let mut w = nat::getbits(yp, (i + 1) as u64 - width as u64, width);
        let tz = w.trailing_zeros();

        w >>= tz;

        let used = width - tz;

        for _ in 0..used {
            f(SlideOp::Sqr);
        }

        f(SlideOp::MulEntry((w >> 1) as usize));
        i -= used as i64;
    }
}

/// Variable-time powm over a Montgomery interior. The modulus inside `mg`
/// is odd; `xp` must already be reduced below it. `zp.len() == mod_len`.
pub fn powm_mont(zp: &mut [Limb], xp: &[Limb], yp: &[Limb], mg: &Montgomery) {
    let n = mg.mod_len();

    debug_assert!(zp.len() == n && xp.len() == n);

    let one = {
        let mut o = vec![0 as Limb; n];
        o[0] = 1;
        o
    };

    // Base and its square in the Montgomery domain.
    let mut xm = vec![0; n];
    mg.mul(&mut xm, xp, mg.r2());

    let mut x2 = vec![0; n];
    mg.mul(&mut x2, &xm, &xm);

    // Table of the odd powers x^1, x^3, …, x^31.
    let nents = 1usize << (SLIDE_WIDTH - 1);
    let mut table = vec![xm.clone()];

    for i in 1..nents {
        let mut t = vec![0; n];
        mg.mul(&mut t, &table[i - 1], &x2);
        table.push(t);
    }

    // Running value starts at 1 in the domain (R mod m).
    let mut z = vec![0; n];
    mg.mul(&mut z, &one, mg.r2());

    let mut tmp = vec![0; n];

    slide(yp, |op| {
        match op {
            SlideOp::Sqr => mg.mul(&mut tmp, &z, &z),
            SlideOp::MulEntry(e) => mg.mul(&mut tmp, &z, &table[e]),
        }
        core::mem::swap(&mut z, &mut tmp);
    });

    // Leave the domain and finish the almost-Montgomery correction.
    mg.mul(&mut tmp, &z, &one);

    if nat::cmp_stripped(&tmp, mg.mod_limbs()) != core::cmp::Ordering::Less {
        nat::sub_n(zp, &tmp, mg.mod_limbs());
    } else {
        zp.copy_from_slice(&tmp);
    }
}

/// Variable-time powm over a Barrett interior, for even moduli (or any
/// modulus the caller prefers not to lift into the Montgomery domain).
/// `xp` must already be reduced below the modulus.
pub fn powm_div(zp: &mut [Limb], xp: &[Limb], yp: &[Limb], br: &Barrett) {
    let n = br.mod_len();

    debug_assert!(zp.len() == n && xp.len() == n);

    let mut x2 = vec![0; n];
    let mut prod = vec![0; 2 * n];

    nat::mul(&mut prod, xp, xp);
    br.reduce(&mut x2, &prod);

    let nents = 1usize << (SLIDE_WIDTH - 1);
    let mut table = vec![xp.to_vec()];

    for i in 1..nents {
        let mut t = vec![0; n];
        nat::mul(&mut prod, &table[i - 1], &x2);
        br.reduce(&mut t, &prod);
        table.push(t);
    }

    let mut z = vec![0 as Limb; n];
    z[0] = 1;

    let mut tmp = vec![0; n];

    slide(yp, |op| {
        match op {
            SlideOp::Sqr => nat::mul(&mut prod, &z, &z),
            SlideOp::MulEntry(e) => nat::mul(&mut prod, &z, &table[e]),
        }
        br.reduce(&mut tmp, &prod);
        core::mem::swap(&mut z, &mut tmp);
    });

    zp.copy_from_slice(&z);
}

/// Constant-time fixed-window powm.
///
/// The modulus inside `mg` is odd; `xp` must be reduced below it. The
/// whole stored length of `yp` is consumed in 4-bit chunks top-down, so
/// only the public limb count of the exponent shapes the execution. Every
/// chunk performs four squarings, one full-sweep table selection, and one
/// constant-time Montgomery multiply.
pub fn powm_sec(zp: &mut [Limb], xp: &[Limb], yp: &[Limb], mg: &Montgomery) {
    let n = mg.mod_len();

    debug_assert!(zp.len() == n && xp.len() == n);

    let one = {
        let mut o = vec![0 as Limb; n];
        o[0] = 1;
        o
    };

    // R mod m, the domain representation of 1.
    let mut one_m = vec![0; n];
    mg.mul_sec(&mut one_m, &one, mg.r2());

    let mut xm = vec![0; n];
    mg.mul_sec(&mut xm, xp, mg.r2());

    // Flattened table of x^0 … x^15 in the domain.
    let nents = 1usize << FIXED_WIDTH;
    let mut table = vec![0 as Limb; nents * n];
    table[..n].copy_from_slice(&one_m);
    table[n..2 * n].copy_from_slice(&xm);

    for e in 2..nents {
        let (lo, hi) = table.split_at_mut(e * n);
        let prev = &lo[(e - 1) * n..];
        mg.mul_sec(&mut hi[..n], prev, &xm);
    }

    let total_bits = yp.len() as u64 * crate::limb::LIMB_BITS as u64;
    let mut z = one_m.clone();
    let mut tmp = vec![0; n];
    let mut entry = vec![0; n];

    let mut pos = total_bits;

    while pos > 0 {
        pos -= FIXED_WIDTH as u64;

        for _ in 0..FIXED_WIDTH {
            mg.mul_sec(&mut tmp, &z, &z);
            core::mem::swap(&mut z, &mut tmp);
        }

        let w = nat::getbits(yp, pos, FIXED_WIDTH);
        sec::tabselect(&mut entry, &table, n, w);

        mg.mul_sec(&mut tmp, &z, &entry);
        core::mem::swap(&mut z, &mut tmp);
    }

    // Leave the domain; the result is then at most m, so one masked
    // subtraction finishes the job.
    mg.mul_sec(&mut tmp, &z, &one);

    let ge = sec::gte_p(&tmp, mg.mod_limbs());
    sec::cnd_sub_n(ge, &mut tmp, mg.mod_limbs());

    zp.copy_from_slice(&tmp);
}
