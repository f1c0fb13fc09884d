//! A two-party [distributed point function](https://eprint.iacr.org/2018/707)
//! (DPF) in the style of Boyle–Gilboa–Ishai (CCS 2016).
//!
//! A DPF lets two parties hold compact keys `k0`, `k1` such that, for a secret
//! index `alpha` and a fixed value `1`, evaluating both keys on any input `x`
//! yields additive shares of the point function `f(x) = [x == alpha]` over
//! `GF(2^31 - 1)`. Neither key alone reveals `alpha`.
//!
//! The crate is organized around the four cooperating pieces of the
//! construction:
//!
//! - [`field`]: arithmetic in the share field.
//! - [`prg`]: the length-doubling PRG built on a fixed-key block cipher,
//!   behind the [`PrgContext`] trait so callers can swap in their own backend.
//! - [`keygen::gen_key`]: builds a key pair for a given domain width and
//!   index.
//! - [`eval`] and [`full_domain`]: evaluate one party's key, either at a
//!   handful of points (with optional shallow-layer caching) or at every
//!   point in the domain.
//!
//! Keys cross process boundaries as plain byte buffers ([`key::Key::encode`] /
//! [`key::Key::decode`]); everything else in this crate operates on the typed
//! [`key::Key`].

#[cfg(test)]
mod test;

mod entropy;
mod error;
mod eval;
mod field;
mod full_domain;
mod key;
mod keygen;
mod prg;
mod seed;
mod tree;

pub use {
    entropy::{EntropySource, OsEntropy},
    error::Error,
    eval::{eval_batch, eval_batch_bytes, eval_batch_with_cache, eval_point, eval_point_bytes},
    field::P,
    full_domain::{eval_full_domain, FullDomain},
    key::{CorrectionWord, Key, Party},
    keygen::gen_key,
    prg::{AesPrg, PrgContext},
};
