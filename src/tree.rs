//! The level-by-level tree descent shared by the shallow-layer cache (§4.4)
//! and the full-domain evaluator (§4.5): both amount to "expand every node at
//! the current level into its two children," they only differ in how many
//! levels they expand and in what happens to the leaves afterwards.

use crate::{
    error::Error,
    key::CorrectionWord,
    prg::{self, PrgContext},
    seed::{self, Seed},
};

/// Expand every node of one level into its two children, applying the
/// level's correction word wherever a node's control bit is set (§4.4 step 2,
/// §4.5 step 3). Children are written in natural lexicographic (MSB-first)
/// order: node `j`'s children land at `2*j` (left) and `2*j + 1` (right) in
/// the returned vectors.
pub(crate) fn expand_level<C: PrgContext + ?Sized>(
    ctx: &C,
    seeds: &[Seed],
    ts: &[bool],
    cw: &CorrectionWord,
) -> Result<(Vec<Seed>, Vec<bool>), Error> {
    let mut next_s = Vec::with_capacity(seeds.len() * 2);
    let mut next_t = Vec::with_capacity(seeds.len() * 2);
    for (&s, &t) in seeds.iter().zip(ts) {
        let (mut s_l, mut t_l, mut s_r, mut t_r) = prg::g(ctx, s)?;
        if t {
            seed::xor_assign(&mut s_l, &cw.s_cw);
            seed::xor_assign(&mut s_r, &cw.s_cw);
            t_l ^= cw.t_cw_l;
            t_r ^= cw.t_cw_r;
        }
        next_s.push(s_l);
        next_t.push(t_l);
        next_s.push(s_r);
        next_t.push(t_r);
    }
    Ok((next_s, next_t))
}

/// Expand the tree rooted at `(root_s, root_t)` down to `depth` levels, using
/// `cws[0..depth]` as the per-level correction words. Returns the `2^depth`
/// nodes at that depth, in MSB-first order.
pub(crate) fn expand_to_depth<C: PrgContext + ?Sized>(
    ctx: &C,
    root_s: Seed,
    root_t: bool,
    cws: &[CorrectionWord],
    depth: u32,
) -> Result<(Vec<Seed>, Vec<bool>), Error> {
    let mut seeds = vec![root_s];
    let mut ts = vec![root_t];
    for cw in &cws[..depth as usize] {
        let (s, t) = expand_level(ctx, &seeds, &ts, cw)?;
        seeds = s;
        ts = t;
    }
    Ok((seeds, ts))
}
