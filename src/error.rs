use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of tree construction and proof generation.
///
/// Verification never produces an `Error`, a bad proof is simply `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No leaves were supplied, so there is no root.
    #[error("cannot build a merkle tree from zero leaves")]
    EmptyTree,

    /// Proof requested for a digest that is not in the leaf layer.
    #[error("leaf {leaf} is not part of the tree")]
    LeafNotFound {
        /// Hex encoding of the missing digest.
        leaf: String,
    },

    /// Positional proof requested outside `[0, leafs)`.
    #[error("{index} is out of bounds (max: {leafs})")]
    IndexOutOfBounds {
        /// Requested leaf position.
        index: usize,
        /// Number of leaves in the tree.
        leafs: usize,
    },

    /// Rejected build configuration.
    #[error("invalid build config: {0}")]
    InvalidConfig(String),
}
