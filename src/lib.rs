//! _Merkle Tree_ with compact inclusion proofs.
//!
//! Merkle tree (MT) implemented as a binary tree allocated as a vec of
//! statically sized hashes to give hashes more locality. MT specialized
//! to the extent of hashing algorithm and hash item, compatible to the
//! `std::hash::Hasher` and supports custom hash algorithms.
//!
//! The tree is built once over an ordered, non-empty sequence of leaf hashes
//! and is read-only afterwards. Internal nodes are `ALG(left || right)`; a
//! layer with an odd number of nodes pairs its last node with itself:
//!
//! ```text
//! layer[i + 1][k] = ALG(layer[i][2k] || layer[i][2k + 1])
//! layer[i + 1][k] = ALG(layer[i][2k] || layer[i][2k])       if 2k + 1 == width
//! ```
//!
//! Link: [](https://en.wikipedia.org/wiki/Merkle_tree)
//!
//! # Implementation choices
//!
//! Standard way in Rust is to hash objects with a `std::hash::Hasher`, and mainly
//! that is the reason behind the choice of the abstractions:
//!
//! `Object : Hashable<H> -> Hasher + Algorithm <- Merkle Tree`
//!
//! [`hash::Algorithm`] complements [`std::hash::Hasher`] to be reusable and
//! follows the idea that the result hash is a mapping of the data stream.
//! SHA-256 is shipped in [`sha256`], over `sha2` by default and over `ring`
//! with the `ring` feature.
//!
//! A [`proof::Proof`] is the list of sibling hashes from leaf to root, each
//! tagged with the [`proof::Side`] it takes in the concatenation. Verifying
//! it needs only the leaf, the proof and a trusted root.
//!
//! # Interface
//!
//! ```text
//! - from_data (items) -> tree
//! - root -> hash
//! - gen_proof_for_leaf (leaf) -> proof
//! - verify (leaf, proof, root) -> bool
//! ```
//!
//! # Quick start
//!
//! ```
//! use merkle_inclusion::hash::Algorithm;
//! use merkle_inclusion::merkle::MerkleTree;
//! use merkle_inclusion::sha256::{Sha256Algorithm, Sha256Hash};
//! use merkle_inclusion::verify;
//!
//! let t: MerkleTree<Sha256Hash, Sha256Algorithm> =
//!     MerkleTree::from_data(["a", "x", "c"]).unwrap();
//!
//! let leaf = Sha256Algorithm::new().digest(b"a");
//! let proof = t.gen_proof_for_leaf(&leaf).unwrap();
//! assert!(verify::<_, Sha256Algorithm>(&leaf, &proof, &t.root()));
//! ```

#![deny(
    missing_docs,
    unused_qualifications,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces
)]

/// Hash infrastructure for items in Merkle tree.
pub mod hash;

/// Common implementations for [`hash::Hashable`].
mod hash_impl;

/// SHA-256 implementations of [`hash::Algorithm`].
pub mod sha256;

/// Merkle tree inclusion proof
pub mod proof;

/// Merkle tree abstractions, implementation and algorithms.
pub mod merkle;

/// Tree construction settings.
pub mod config;

/// Error type.
pub mod error;

pub use crate::config::BuildConfig;
pub use crate::error::{Error, Result};
pub use crate::merkle::MerkleTree;
pub use crate::proof::{verify, Proof, ProofStep, Side};

#[cfg(test)]
mod test_common;


/// Tests for Merkle Hasher Customization
#[cfg(test)]
mod test_cmh;
