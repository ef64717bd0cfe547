//! Hash infrastructure for items in Merkle Tree.

use crate::merkle::Element;
use std::hash::Hasher;

/// A hashable type.
///
/// Types implementing `Hashable` are able to be [`hash`]ed with an instance of
/// [`Hasher`]. Byte-like types (`[u8]`, `Vec<u8>`, `str`, `String`, `[u8; N]`)
/// are written raw, without a length prefix, so the leaf of `"a"` under a
/// SHA-256 algorithm is exactly `sha256(b"a")`.
///
/// ## Implementing `Hashable`
///
/// Structured items decide themselves how they are laid out for the hasher:
///
/// ```text
/// use merkle_inclusion::hash::Hashable;
///
/// struct Holder {
///     address: String,
///     balance: u64,
/// }
///
/// impl<H: Hasher> Hashable<H> for Holder {
///     fn hash(&self, state: &mut H) {
///         self.address.hash(state);
///         state.write(&self.balance.to_be_bytes());
///     }
/// }
/// ```
///
/// ## `Hashable` and `Eq`
///
/// When implementing both `Hashable` and [`Eq`], it is important that the following
/// property holds:
///
/// ```text
/// k1 == k2 -> hash(k1) == hash(k2)
/// ```
///
/// [`hash`]: #tymethod.hash
pub trait Hashable<H: Hasher> {
    /// Feeds this value into the given [`Hasher`].
    fn hash(&self, state: &mut H);

    /// Feeds a slice of this type into the given [`Hasher`].
    fn hash_slice(data: &[Self], state: &mut H)
    where
        Self: Sized,
    {
        for piece in data {
            piece.hash(state);
        }
    }
}

/// Hashing algorithm type.
///
/// Algorithm conforms standard [`Hasher`] trait and provides methods to return
/// full length hash and reset current state. Internal nodes are combined as
/// `hash(left || right)` with no domain prefix, the orientation recorded in a
/// proof step decides the concatenation order on verification.
pub trait Algorithm<T>: Hasher + Default
where
    T: Element,
{
    /// Returns the hash value for the data stream written so far.
    fn hash(&mut self) -> T;

    /// Reset Hasher state.
    fn reset(&mut self);

    /// Returns the digest of `data` alone, discarding any previous state.
    fn digest(&mut self, data: &[u8]) -> T {
        self.reset();
        self.write(data);
        self.hash()
    }

    /// Returns the leaf value for an already digested item.
    ///
    /// Leaves are the item digests themselves.
    fn leaf(&mut self, leaf: T) -> T {
        leaf
    }

    /// Returns the hash value for MT interior node.
    fn node(&mut self, left: T, right: T) -> T {
        self.reset();
        self.write(left.as_ref());
        self.write(right.as_ref());
        self.hash()
    }
}

/// Lowercase hex rendering of a digest for display and logs.
pub fn to_hex<T: AsRef<[u8]> + ?Sized>(digest: &T) -> String {
    hex::encode(digest.as_ref())
}
