//! The point and batched evaluators (§4.4): walk one party's tree along the
//! bits of `x`, applying correction words along the way, and land on a field
//! share.
//!
//! Each evaluator comes in two forms: one taking an already-[decoded](Key)
//! key, and a `_bytes` convenience that decodes the raw wire format first.
//! Decoding once and reusing the typed `Key` is preferred for repeated
//! evaluations against the same key; it also means a key decoded for one `n`
//! but passed to an evaluator called with another surfaces as
//! [`Error::DomainWidthMismatch`] rather than a length mismatch.

use crate::{
    error::{check_index_range, Error},
    field,
    key::Key,
    prg::{self, PrgContext},
    seed, tree,
};

fn check_key_width(key: &Key, n: u32) -> Result<(), Error> {
    if key.n() == n {
        Ok(())
    } else {
        Err(Error::DomainWidthMismatch {
            key_n: key.n(),
            called_n: n,
        })
    }
}

/// Evaluate one party's key at a single domain point `x`, returning that
/// party's share of `f_{alpha,1}(x)`.
#[tracing::instrument(skip(key, ctx), fields(n))]
pub fn eval_point<C: PrgContext>(n: u32, key: &Key, x: u64, ctx: &C) -> Result<u32, Error> {
    check_index_range(x, n)?;
    check_key_width(key, n)?;

    let mut s = key.root_seed;
    let mut t = key.root_t;

    for i in 1..=n {
        let cw = &key.cws[(i - 1) as usize];
        let (mut s_l, mut t_l, mut s_r, mut t_r) = prg::g(ctx, s)?;
        if t {
            seed::xor_assign(&mut s_l, &cw.s_cw);
            seed::xor_assign(&mut s_r, &cw.s_cw);
            t_l ^= cw.t_cw_l;
            t_r ^= cw.t_cw_r;
        }
        let xi = seed::msb_bit(x, n, i);
        s = seed::select(xi, s_l, s_r);
        t = if xi { t_r } else { t_l };
    }

    Ok(finish_share(key, s, t))
}

/// [`eval_point`], decoding `key` from its wire format first.
pub fn eval_point_bytes<C: PrgContext>(n: u32, key: &[u8], x: u64, ctx: &C) -> Result<u32, Error> {
    eval_point(n, &Key::decode(n, key)?, x, ctx)
}

/// Fold a leaf's `(seed, control bit)` into a field share, per §4.4 step 3 /
/// §4.5 step 4: reduce the seed, fold in `cw_final` if the control bit is
/// set, and negate for party 1.
pub(crate) fn finish_share(key: &Key, leaf_seed: [u8; 16], leaf_t: bool) -> u32 {
    let mut out = field::reduce(seed::low_bits(&leaf_seed));
    if leaf_t {
        out = field::add(out, key.cw_final);
    }
    if matches!(key.party, crate::key::Party::One) {
        out = field::neg(out);
    }
    out
}

/// Evaluate one party's key at every point of `xs`, using the default
/// shallow-layer cache depth `c = min(12, n)` (§4.4).
pub fn eval_batch<C: PrgContext>(n: u32, key: &Key, xs: &[u64], ctx: &C) -> Result<Vec<u32>, Error> {
    eval_batch_with_cache(n, key, xs, ctx, n.min(12))
}

/// [`eval_batch`], decoding `key` from its wire format first.
pub fn eval_batch_bytes<C: PrgContext>(
    n: u32,
    key: &[u8],
    xs: &[u64],
    ctx: &C,
) -> Result<Vec<u32>, Error> {
    eval_batch(n, &Key::decode(n, key)?, xs, ctx)
}

/// Evaluate one party's key at every point of `xs`, precomputing the top
/// `cache_levels` levels of the tree before walking the rest for each `x`
/// (§4.4, "shallow-layer caching"). Results are identical for any choice of
/// `cache_levels` in `[0, n]`; this is Testable Property scenario 6 in §8.
#[tracing::instrument(skip(key, xs, ctx), fields(n, batch_len = xs.len(), cache_levels))]
pub fn eval_batch_with_cache<C: PrgContext>(
    n: u32,
    key: &Key,
    xs: &[u64],
    ctx: &C,
    cache_levels: u32,
) -> Result<Vec<u32>, Error> {
    check_key_width(key, n)?;
    if cache_levels > n {
        return Err(Error::InvalidDomainWidth { n: cache_levels });
    }
    for &x in xs {
        check_index_range(x, n)?;
    }

    let (cache_seeds, cache_ts) =
        tree::expand_to_depth(ctx, key.root_seed, key.root_t, &key.cws, cache_levels)?;

    let mut out = Vec::with_capacity(xs.len());
    for &x in xs {
        let prefix = if cache_levels == 0 {
            0
        } else {
            (x >> (n - cache_levels)) as usize
        };
        let mut s = cache_seeds[prefix];
        let mut t = cache_ts[prefix];

        for i in (cache_levels + 1)..=n {
            let cw = &key.cws[(i - 1) as usize];
            let (mut s_l, mut t_l, mut s_r, mut t_r) = prg::g(ctx, s)?;
            if t {
                seed::xor_assign(&mut s_l, &cw.s_cw);
                seed::xor_assign(&mut s_r, &cw.s_cw);
                t_l ^= cw.t_cw_l;
                t_r ^= cw.t_cw_r;
            }
            let xi = seed::msb_bit(x, n, i);
            s = seed::select(xi, s_l, s_r);
            t = if xi { t_r } else { t_l };
        }

        out.push(finish_share(key, s, t));
    }
    Ok(out)
}
