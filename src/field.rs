//! Arithmetic on 𝔽_p, the field DPF shares live in.
//!
//! `p = 2^31 - 1` is a Mersenne prime, which is why reduction is a mask-and-compare
//! instead of a division: any `u32` already has at most 32 significant bits, so
//! masking off bit 31 leaves a value in `[0, 2^31)`, and the only value in that
//! range still `>= p` is `p` itself (all 31 low bits set).

use docext::docext;

/// The field modulus, `2^31 - 1`.
pub const P: u32 = (1 << 31) - 1;

/// Reduce `u` modulo `p`.
///
/// Only the low 31 bits of `u` participate; this mirrors how the PRG extracts a
/// field element from a 128-bit seed (§4.1: `reduce(low 31 bits)`); the caller
/// is expected to have already narrowed to the bits that matter.
#[must_use]
pub fn reduce(u: u32) -> u32 {
    let x = u & P;
    if x >= P {
        x - P
    } else {
        x
    }
}

/// Reduce a sum of two already-reduced field elements, `u in [0, 2p)`.
#[must_use]
pub fn reduce_add(u: u32) -> u32 {
    if u >= P {
        u - P
    } else {
        u
    }
}

/// Field negation.
#[must_use]
#[docext]
pub fn neg(x: u32) -> u32 {
    // $-0 \equiv 0 \pmod p$, and for $x \neq 0$, $-x \equiv p - x \pmod p$ since
    // $x + (p - x) = p \equiv 0$.
    if x == 0 {
        0
    } else {
        P - x
    }
}

/// Field addition of two already-reduced elements.
#[must_use]
pub fn add(a: u32, b: u32) -> u32 {
    reduce_add(a + b)
}
