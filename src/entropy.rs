//! The randomness boundary: a pluggable source of uniformly random bytes the
//! key generator draws its two root seeds from (§4.3 step 1, §6 "entropy
//! source interface").

use {
    crate::error::{BackendError, Error},
    rand_core::RngCore,
    zeroize::Zeroize,
};

/// A source of cryptographically strong randomness.
///
/// Must fail loudly, never silently return low-quality or all-zero bytes,
/// when the underlying source is unavailable. Implementations are not
/// required to be safe for concurrent use from multiple threads.
pub trait EntropySource {
    /// Fill `buf` with uniformly random bytes, or report why the source
    /// refused.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error>;
}

/// The default [`EntropySource`], backed by the operating system RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        rand::rngs::OsRng
            .try_fill_bytes(buf)
            .map_err(|e| Error::Entropy(BackendError::new(e)))
    }
}

/// Draw a fresh 128-bit seed from an entropy source.
pub(crate) fn draw_seed(entropy: &mut impl EntropySource) -> Result<[u8; 16], Error> {
    let mut buf = [0u8; 16];
    let result = entropy.fill(&mut buf);
    if result.is_err() {
        buf.zeroize();
    }
    result?;
    Ok(buf)
}
