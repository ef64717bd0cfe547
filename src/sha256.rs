//! SHA-256 merkle algorithms.
//!
//! [`Sha256Algorithm`] is backed by the `sha2` crate and always available.
//! With the `ring` feature, [`RingSha256Algorithm`] computes the same digests
//! through `ring::digest`.

use crate::hash::Algorithm;
use sha2::{Digest, Sha256};
use std::fmt;
use std::hash::Hasher;

/// 256-bit digest produced by the SHA-256 algorithms.
pub type Sha256Hash = [u8; 32];

fn first_word(h: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&h[..8]);
    u64::from_be_bytes(word)
}

/// SHA-256 over the `sha2` crate.
#[derive(Clone, Default)]
pub struct Sha256Algorithm(Sha256);

impl Sha256Algorithm {
    /// Creates a fresh hasher.
    pub fn new() -> Sha256Algorithm {
        Sha256Algorithm::default()
    }
}

impl fmt::Debug for Sha256Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Sha256Algorithm")
    }
}

impl Hasher for Sha256Algorithm {
    #[inline]
    fn write(&mut self, msg: &[u8]) {
        Digest::update(&mut self.0, msg)
    }

    #[inline]
    fn finish(&self) -> u64 {
        first_word(&self.0.clone().finalize())
    }
}

impl Algorithm<Sha256Hash> for Sha256Algorithm {
    #[inline]
    fn hash(&mut self) -> Sha256Hash {
        let mut h = [0u8; 32];
        h.copy_from_slice(&self.0.finalize_reset());
        h
    }

    #[inline]
    fn reset(&mut self) {
        Digest::reset(&mut self.0);
    }
}

#[cfg(feature = "ring")]
pub use self::ring_impl::RingSha256Algorithm;

#[cfg(feature = "ring")]
mod ring_impl {
    use super::{first_word, Sha256Hash};
    use crate::hash::Algorithm;
    use ring::digest::{Context, SHA256};
    use std::fmt;
    use std::hash::Hasher;

    /// SHA-256 over `ring::digest`.
    ///
    /// `ring` contexts are consumed on finish, so finalization swaps in a
    /// fresh context.
    #[derive(Clone)]
    pub struct RingSha256Algorithm(Context);

    impl RingSha256Algorithm {
        /// Creates a fresh hasher.
        pub fn new() -> RingSha256Algorithm {
            RingSha256Algorithm(Context::new(&SHA256))
        }
    }

    impl Default for RingSha256Algorithm {
        fn default() -> RingSha256Algorithm {
            RingSha256Algorithm::new()
        }
    }

    impl fmt::Debug for RingSha256Algorithm {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("RingSha256Algorithm")
        }
    }

    impl Hasher for RingSha256Algorithm {
        #[inline]
        fn write(&mut self, msg: &[u8]) {
            self.0.update(msg)
        }

        #[inline]
        fn finish(&self) -> u64 {
            first_word(self.0.clone().finish().as_ref())
        }
    }

    impl Algorithm<Sha256Hash> for RingSha256Algorithm {
        #[inline]
        fn hash(&mut self) -> Sha256Hash {
            let ctx = std::mem::replace(&mut self.0, Context::new(&SHA256));
            let mut h = [0u8; 32];
            h.copy_from_slice(ctx.finish().as_ref());
            h
        }

        #[inline]
        fn reset(&mut self) {
            self.0 = Context::new(&SHA256);
        }
    }
}
