//! The key generator (§4.3): builds two parallel PRG trees from fresh roots
//! and derives the correction words that make both parties' outputs agree
//! off-path and diverge by exactly `cw_final` on-path.

use {
    crate::{
        entropy::{draw_seed, EntropySource},
        error::{check_index_range, Error},
        field,
        key::{CorrectionWord, Key, Party},
        prg::{self, PrgContext},
        seed,
    },
    zeroize::Zeroize,
};

/// Generate a DPF key pair for the point function that is `1` at `alpha` and
/// `0` elsewhere over an `n`-bit domain.
///
/// `alpha` must already be masked to `n` bits; callers that don't are
/// rejected with [`Error::IndexOutOfRange`] rather than silently evaluated
/// against the wrong index (§4.3, "tie-break and edge cases").
#[tracing::instrument(skip(ctx, entropy), fields(n))]
pub fn gen_key<C: PrgContext, E: EntropySource>(
    n: u32,
    alpha: u64,
    ctx: &C,
    entropy: &mut E,
) -> Result<(Vec<u8>, Vec<u8>), Error> {
    check_index_range(alpha, n)?;

    let root_s0 = draw_seed(entropy)?;
    let root_s1 = draw_seed(entropy)?;

    let mut s0 = root_s0;
    let mut s1 = root_s1;
    let mut t0 = false;
    let mut t1 = true;

    let mut cws = Vec::with_capacity(n as usize);

    for i in 1..=n {
        let alpha_i = seed::msb_bit(alpha, n, i);

        let (s0_l, t0_l, s0_r, t0_r) = prg::g(ctx, s0)?;
        let (s1_l, t1_l, s1_r, t1_r) = prg::g(ctx, s1)?;

        let (keep0, lose0, keep_t0) = if alpha_i {
            (s0_r, s0_l, t0_r)
        } else {
            (s0_l, s0_r, t0_l)
        };
        let (keep1, lose1, keep_t1) = if alpha_i {
            (s1_r, s1_l, t1_r)
        } else {
            (s1_l, s1_r, t1_l)
        };

        let s_cw = seed::xor(lose0, lose1);
        let t_cw_l = t0_l ^ t1_l ^ alpha_i ^ true;
        let t_cw_r = t0_r ^ t1_r ^ alpha_i;
        let keep_t_cw = if alpha_i { t_cw_r } else { t_cw_l };

        let (next_s0, next_t0) = if t0 {
            (seed::xor(keep0, s_cw), keep_t0 ^ keep_t_cw)
        } else {
            (keep0, keep_t0)
        };
        let (next_s1, next_t1) = if t1 {
            (seed::xor(keep1, s_cw), keep_t1 ^ keep_t_cw)
        } else {
            (keep1, keep_t1)
        };

        s0 = next_s0;
        t0 = next_t0;
        s1 = next_s1;
        t1 = next_t1;

        cws.push(CorrectionWord {
            s_cw,
            t_cw_l,
            t_cw_r,
        });
    }

    // cw_final = (1 - reduce(s0^n) + reduce(s1^n)) mod p, negated if t1^n = 1.
    let a = field::reduce(seed::low_bits(&s0));
    let b = field::reduce(seed::low_bits(&s1));
    let mut cw_final = field::add(field::add(1, field::neg(a)), b);
    if t1 {
        cw_final = field::neg(cw_final);
    }

    s0.zeroize();
    s1.zeroize();

    let mut root_s0 = root_s0;
    let mut root_s1 = root_s1;

    let k0 = Key {
        party: Party::Zero,
        root_seed: root_s0,
        root_t: false,
        cws: cws.clone(),
        cw_final,
    };
    let k1 = Key {
        party: Party::One,
        root_seed: root_s1,
        root_t: true,
        cws,
        cw_final,
    };

    let encoded = (k0.encode(), k1.encode());
    root_s0.zeroize();
    root_s1.zeroize();
    Ok(encoded)
}
