//! The length-doubling PRG `G` the tree descent is built on (§4.2), and the
//! trait boundary that lets a caller swap in a different fixed-key block
//! cipher.

use {
    crate::{
        error::{BackendError, Error},
        seed::{self, Seed},
    },
    aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit},
};

/// A fixed-key block cipher context used as the PRG's pseudorandom permutation.
///
/// This is the "PRG context" of §6: an opaque handle bound to a random but
/// fixed 128-bit key, offering a single operation: encrypt `length` bytes
/// (always a positive multiple of 16) with padding disabled. A [`PrgContext`]
/// is not safe for concurrent use by multiple evaluators (§5); give each
/// worker thread its own context, constructed from the same key bytes if they
/// need to agree.
pub trait PrgContext {
    /// Encrypt `input` into `output`, both a positive multiple of 16 bytes long
    /// and the same length. AES-128-ECB with no padding, i.e. each 16-byte
    /// block is encrypted independently under the context's fixed key.
    fn encrypt(&self, input: &[u8], output: &mut [u8]) -> Result<(), Error>;
}

/// The default [`PrgContext`], backed by the `aes` crate's AES-128
/// implementation run block-by-block in ECB mode.
#[derive(Clone)]
pub struct AesPrg(aes::Aes128);

impl AesPrg {
    /// Build a context bound to the given 128-bit key.
    #[must_use]
    pub fn new(key: [u8; 16]) -> Self {
        Self(aes::Aes128::new(GenericArray::from_slice(&key)))
    }
}

impl PrgContext for AesPrg {
    fn encrypt(&self, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
        if input.len() != output.len() || input.len() % 16 != 0 || input.is_empty() {
            return Err(Error::Cipher(BackendError::new(InvalidBlockLength {
                len: input.len(),
            })));
        }
        let mut blocks: Vec<GenericArray<u8, aes::cipher::consts::U16>> = input
            .chunks_exact(16)
            .map(GenericArray::clone_from_slice)
            .collect();
        self.0.encrypt_blocks(&mut blocks);
        for (chunk, block) in output.chunks_exact_mut(16).zip(&blocks) {
            chunk.copy_from_slice(block);
        }
        Ok(())
    }
}

#[derive(Debug)]
struct InvalidBlockLength {
    len: usize,
}

impl std::fmt::Display for InvalidBlockLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PRG input/output length {} is not a positive multiple of 16",
            self.len
        )
    }
}

impl std::error::Error for InvalidBlockLength {}

/// Evaluate `G` on a single seed: one PRG step, producing both children's
/// seeds and control bits (§4.2).
///
/// `x` need not have its LSB cleared; this function clears it before deriving
/// the left child and sets it before deriving the right child, per the
/// construction in §4.2.
pub(crate) fn g<C: PrgContext + ?Sized>(
    ctx: &C,
    x: Seed,
) -> Result<(Seed, bool, Seed, bool), Error> {
    let x0 = seed::clear_lsb(x);
    let x1 = seed::set_lsb(x0);

    // A single two-block call, per §4.2's performance-preferred shape.
    let mut input = [0u8; 32];
    input[..16].copy_from_slice(&x0);
    input[16..].copy_from_slice(&x1);
    let mut output = [0u8; 32];
    ctx.encrypt(&input, &mut output)?;

    let mut y0 = [0u8; 16];
    y0.copy_from_slice(&output[..16]);
    let mut y1 = [0u8; 16];
    y1.copy_from_slice(&output[16..]);

    // Davies-Meyer-style whitening (§4.2 step 3).
    let z0 = seed::xor(y0, x0);
    let z1 = seed::xor(y1, x1);

    let t_l = seed::lsb(&z0);
    let t_r = seed::lsb(&z1);
    let s_l = seed::clear_lsb(z0);
    let s_r = seed::clear_lsb(z1);

    Ok((s_l, t_l, s_r, t_r))
}
