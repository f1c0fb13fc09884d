use std::fmt;

/// Errors surfaced by this crate's public entry points.
///
/// Every fallible operation returns one of these variants; none of them is
/// swallowed or retried internally (see the error handling design in the
/// crate-level documentation). In particular a [`PrgContext`](crate::PrgContext)
/// that reports [`Error::Cipher`] must be treated as unusable afterwards; build
/// a fresh context to continue.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Domain width was outside `[1, 64]`.
    #[error("domain width n = {n} is out of range [1, 64]")]
    InvalidDomainWidth {
        /// The out-of-range width the caller supplied.
        n: u32,
    },

    /// The secret index did not fit in `n` bits.
    #[error("index alpha = {alpha} does not fit in a {n}-bit domain")]
    IndexOutOfRange {
        /// The offending index.
        alpha: u64,
        /// The domain width it was checked against.
        n: u32,
    },

    /// A key built for one domain width was evaluated with another.
    #[error("key was generated for n = {key_n} but evaluated with n = {called_n}")]
    DomainWidthMismatch {
        /// The width baked into the key at generation time.
        key_n: u32,
        /// The width the caller passed to the evaluator.
        called_n: u32,
    },

    /// A key buffer did not have the length `18 * n + 34` prescribed by the codec.
    #[error("key buffer has length {actual}, expected {expected} for n = {n}")]
    InvalidKeyLength {
        /// The length the codec expected given `n`.
        expected: usize,
        /// The length the buffer actually had.
        actual: usize,
        /// The domain width the length was checked against.
        n: u32,
    },

    /// The party tag byte at offset 0 was neither `0` nor `1`.
    #[error("party tag byte {0} is not 0 or 1")]
    InvalidPartyTag(u8),

    /// Full-domain evaluation was requested at a width whose leaf count does not
    /// fit in a `usize` on this platform.
    #[error("full-domain evaluation at n = {0} would require 2^n leaves, which overflows usize")]
    DomainTooLargeForFullDomain(u32),

    /// The entropy source refused to produce randomness. The caller may retry.
    #[error("entropy source failed: {0}")]
    Entropy(#[source] BackendError),

    /// The AES backend reported an internal failure. The [`PrgContext`](crate::PrgContext)
    /// that produced this error must not be reused.
    #[error("PRG cipher backend failed: {0}")]
    Cipher(#[source] BackendError),
}

/// A boxed, type-erased backend error.
///
/// [`PrgContext`](crate::PrgContext) and [`EntropySource`](crate::EntropySource) implementations
/// are free to use any error type of their choosing; this crate boxes it once at the point it
/// crosses into [`Error`] so the public API does not have to be generic over backend error types.
pub struct BackendError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl BackendError {
    pub(crate) fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(err))
    }
}

impl fmt::Debug for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

/// Validate that `n` is in the domain this crate supports, `[1, 64]`.
pub(crate) fn check_domain_width(n: u32) -> Result<(), Error> {
    if (1..=64).contains(&n) {
        Ok(())
    } else {
        Err(Error::InvalidDomainWidth { n })
    }
}

/// Validate that `alpha` fits in `n` bits (masking is the caller's job, not ours).
pub(crate) fn check_index_range(alpha: u64, n: u32) -> Result<(), Error> {
    check_domain_width(n)?;
    let fits = n == 64 || alpha < (1u64 << n);
    if fits {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { alpha, n })
    }
}
