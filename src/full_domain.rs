//! The full-domain evaluator (§4.5): expand one party's tree to every leaf in
//! `O(2^n)` PRG calls instead of re-walking the tree once per input.

use crate::{
    error::Error,
    eval,
    key::Key,
    prg::PrgContext,
    seed::Seed,
    tree,
};

/// The raw output of a full-domain expansion: one `(seed, control bit)` pair
/// per leaf, in natural lexicographic (MSB-first) order of the leaf index.
///
/// §4.5 step 4 treats turning these into field shares as the caller's
/// responsibility; [`FullDomain::into_shares`] does that conversion for
/// callers who want it, while the raw seeds remain available for callers (a
/// PIR application, say) that want to derive something else from them.
#[derive(Debug, Clone)]
pub struct FullDomain {
    seeds: Vec<Seed>,
    ts: Vec<bool>,
}

impl FullDomain {
    /// The raw `(seed, control bit)` pairs, indexed by leaf (domain point).
    #[must_use]
    pub fn leaves(&self) -> impl ExactSizeIterator<Item = (Seed, bool)> + '_ {
        self.seeds.iter().copied().zip(self.ts.iter().copied())
    }

    /// Fold every leaf into a field share (§4.4 step 3 / §4.5 step 4): reduce
    /// the seed, fold in `cw_final` where the control bit is set, and negate
    /// for party 1.
    #[must_use]
    pub fn into_shares(self, key: &Key) -> Vec<u32> {
        self.seeds
            .into_iter()
            .zip(self.ts)
            .map(|(s, t)| eval::finish_share(key, s, t))
            .collect()
    }
}

/// Evaluate one party's key at every point of an `n`-bit domain.
///
/// Rejected for `n >= usize::BITS` (§5, §7): `2^n` leaves would not fit a
/// `usize` on this platform, so there is no way to allocate the output at all.
#[tracing::instrument(skip(key, ctx), fields(n))]
pub fn eval_full_domain<C: PrgContext>(n: u32, key: &Key, ctx: &C) -> Result<FullDomain, Error> {
    if key.n() != n {
        return Err(Error::DomainWidthMismatch {
            key_n: key.n(),
            called_n: n,
        });
    }
    if n >= usize::BITS {
        return Err(Error::DomainTooLargeForFullDomain(n));
    }

    let (seeds, ts) = tree::expand_to_depth(ctx, key.root_seed, key.root_t, &key.cws, n)?;
    Ok(FullDomain { seeds, ts })
}
