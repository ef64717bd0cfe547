use std::fmt;
use std::marker::PhantomData;
use std::ops;

use log::{debug, trace};
use rayon::prelude::*;

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::hash::{to_hex, Algorithm, Hashable};
use crate::proof::{Proof, ProofStep, Side};

/// Element stored in the merkle tree.
///
/// Any fixed-size digest representation qualifies, `[u8; N]` being the
/// common one. Equality must be byte-wise.
pub trait Element: Eq + Clone + AsRef<[u8]> + Send + Sync + fmt::Debug {}

impl<T> Element for T where T: Eq + Clone + AsRef<[u8]> + Send + Sync + fmt::Debug {}

/// Merkle Tree.
///
/// All leafs and nodes are stored in a linear array (vec), layer after
/// layer, leafs first and root last.
///
/// A merkle tree is a tree in which every non-leaf node is the hash of its
/// children nodes. A diagram depicting how it works:
///
/// ```text
///         root = h1234 = h(h12 + h34)
///        /                           \
///  h12 = h(h1 + h2)            h34 = h(h3 + h4)
///   /            \              /            \
/// h1 = h(tx1)  h2 = h(tx2)    h3 = h(tx3)  h4 = h(tx4)
/// ```
///
/// In memory layout:
///
/// ```text
///     [h1 h2 h3 h4 h12 h34 root]
/// ```
///
/// The number of inputs is not always a power of two. When a layer has an
/// odd number of nodes, the last node is paired with itself:
///
/// ```text
///            root = h(h12 + h33)
///           /                   \
///   h12 = h(h1 + h2)       h33 = h(h3 + h3)
///    /          \           /
///   h1          h2         h3
///
///     [h1 h2 h3 h12 h33 root]
/// ```
///
/// The duplicated node is not stored, so every layer is exactly
/// `ceil(width / 2)` wide. A consequence is that `[h1 h2 h3]` and
/// `[h1 h2 h3 h3]` share the same root.
pub struct MerkleTree<T, A>
where
    T: Element,
    A: Algorithm<T>,
{
    data: Vec<T>,
    // Start of every layer in `data`, plus the end of the root layer.
    offsets: Vec<usize>,
    leafs: usize,
    root: T,
    _a: PhantomData<fn() -> A>,
}

impl<T: Element, A: Algorithm<T>> MerkleTree<T, A> {
    /// Creates new merkle tree from a sequence of leaf hashes.
    pub fn new<I: IntoIterator<Item = T>>(leafs: I) -> Result<MerkleTree<T, A>> {
        Self::new_with_config(leafs, BuildConfig::default())
    }

    /// Creates new merkle tree from a sequence of leaf hashes.
    pub fn new_with_config<I: IntoIterator<Item = T>>(
        leafs: I,
        config: BuildConfig,
    ) -> Result<MerkleTree<T, A>> {
        Self::build(leafs.into_iter().collect(), &config)
    }

    /// Creates new merkle tree from an iterator over leaf hashes.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(into: I) -> Result<MerkleTree<T, A>> {
        Self::new(into)
    }

    /// Creates new merkle tree from a list of hashable objects.
    ///
    /// Every item is digested with `A` and turned into a leaf with
    /// [`Algorithm::leaf`].
    pub fn from_data<O: Hashable<A>, I: IntoIterator<Item = O>>(
        data: I,
    ) -> Result<MerkleTree<T, A>> {
        Self::from_data_with_config(data, BuildConfig::default())
    }

    /// Creates new merkle tree from a list of hashable objects.
    pub fn from_data_with_config<O: Hashable<A>, I: IntoIterator<Item = O>>(
        data: I,
        config: BuildConfig,
    ) -> Result<MerkleTree<T, A>> {
        let mut a = A::default();
        let leafs = data
            .into_iter()
            .map(|x| {
                a.reset();
                x.hash(&mut a);
                let item = a.hash();
                a.leaf(item)
            })
            .collect();

        Self::build(leafs, &config)
    }

    fn build(mut data: Vec<T>, config: &BuildConfig) -> Result<Self> {
        config.validate()?;

        let leafs = data.len();
        if leafs == 0 {
            return Err(Error::EmptyTree);
        }

        data.reserve_exact(get_merkle_tree_len(leafs) - leafs);

        let mut offsets = Vec::with_capacity(get_merkle_depth(leafs) + 2);
        offsets.push(0);

        let mut level: usize = 0;
        let mut start = 0;
        let mut width = leafs;
        while width > 1 {
            let layer = {
                let nodes = &data[start..start + width];
                if config.is_parallel(width) {
                    hash_layer_parallel::<T, A>(nodes, config.chunk_nodes)
                } else {
                    hash_layer::<T, A>(nodes)
                }
            };

            trace!(
                "layer {} hashed: width {} -> {}{}",
                level,
                width,
                layer.len(),
                if width & 1 == 1 { " (last node duplicated)" } else { "" }
            );

            start += width;
            width = layer.len();
            offsets.push(start);
            data.extend(layer);
            level += 1;
        }
        offsets.push(data.len());

        debug_assert_eq!(data.len(), get_merkle_tree_len(leafs));
        debug_assert_eq!(level, get_merkle_depth(leafs));

        // The last layer is one node wide.
        let root = data[data.len() - 1].clone();

        debug!(
            "merkle tree built: leafs {}, height {}, root {}",
            leafs,
            level + 1,
            to_hex(&root)
        );

        Ok(MerkleTree {
            data,
            offsets,
            leafs,
            root,
            _a: PhantomData,
        })
    }

    /// Generate merkle tree inclusion proof for leaf `i`.
    ///
    /// Steps are ordered leaf to root, one per layer below the root. A node
    /// without a right neighbour gets itself as its `Right` sibling.
    pub fn gen_proof(&self, i: usize) -> Result<Proof<T>> {
        if i >= self.leafs {
            return Err(Error::IndexOutOfBounds {
                index: i,
                leafs: self.leafs,
            });
        }

        let depth = self.depth();
        let mut steps = Vec::with_capacity(depth);
        let mut j = i;

        for level in 0..depth {
            let layer = self.layer_nodes(level);
            let step = if j & 1 == 0 {
                // j is left
                let sibling = layer.get(j + 1).unwrap_or(&layer[j]);
                ProofStep::new(sibling.clone(), Side::Right)
            } else {
                // j is right
                ProofStep::new(layer[j - 1].clone(), Side::Left)
            };
            steps.push(step);
            j >>= 1;
        }

        debug!("proof generated for leaf {} ({} steps)", i, steps.len());

        Ok(Proof::new(steps))
    }

    /// Generate merkle tree inclusion proof for the leaf equal to `leaf`.
    ///
    /// When the same digest occurs more than once, the proof is for its
    /// first position. Use [`leaf_indices`](#method.leaf_indices) and
    /// [`gen_proof`](#method.gen_proof) to prove the other occurrences.
    pub fn gen_proof_for_leaf(&self, leaf: &T) -> Result<Proof<T>> {
        let i = self.leaf_index(leaf).ok_or_else(|| Error::LeafNotFound {
            leaf: to_hex(leaf),
        })?;
        self.gen_proof(i)
    }

    /// Returns the first position of `leaf` in the leaf layer.
    pub fn leaf_index(&self, leaf: &T) -> Option<usize> {
        self.leaves().iter().position(|l| l == leaf)
    }

    /// Returns every position of `leaf` in the leaf layer, ascending.
    pub fn leaf_indices<'a>(&'a self, leaf: &'a T) -> impl Iterator<Item = usize> + 'a {
        self.leaves()
            .iter()
            .enumerate()
            .filter(move |(_, l)| *l == leaf)
            .map(|(i, _)| i)
    }

    /// Checks `proof` for `leaf` against the root of this tree.
    pub fn verify(&self, leaf: &T, proof: &Proof<T>) -> bool {
        proof.validate::<A>(leaf, &self.root)
    }

    /// Returns merkle root
    pub fn root(&self) -> T {
        self.root.clone()
    }

    /// Returns the leaf layer.
    pub fn leaves(&self) -> &[T] {
        self.layer_nodes(0)
    }

    /// Returns the nodes of layer `level`, 0 being the leafs and
    /// `height() - 1` the root.
    pub fn layer(&self, level: usize) -> Option<&[T]> {
        if level < self.height() {
            Some(self.layer_nodes(level))
        } else {
            None
        }
    }

    fn layer_nodes(&self, level: usize) -> &[T] {
        &self.data[self.offsets[level]..self.offsets[level + 1]]
    }

    /// Returns number of elements in the tree.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the vector contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns height of the tree, the number of layers including the root.
    pub fn height(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the number of layers below the root, the length of every proof.
    pub fn depth(&self) -> usize {
        self.height() - 1
    }

    /// Returns original number of elements the tree was built upon.
    pub fn leafs(&self) -> usize {
        self.leafs
    }

    /// Extracts a slice containing the entire vector.
    ///
    /// Equivalent to `&s[..]`.
    pub fn as_slice(&self) -> &[T] {
        self
    }
}

fn hash_pair<T: Element, A: Algorithm<T>>(a: &mut A, pair: &[T]) -> T {
    let left = &pair[0];
    let right = pair.get(1).unwrap_or(left);
    a.node(left.clone(), right.clone())
}

fn hash_layer<T: Element, A: Algorithm<T>>(nodes: &[T]) -> Vec<T> {
    let mut a = A::default();
    nodes.chunks(2).map(|pair| hash_pair(&mut a, pair)).collect()
}

// `chunk_nodes` is even, so only the last chunk can end with an unpaired node.
fn hash_layer_parallel<T: Element, A: Algorithm<T>>(nodes: &[T], chunk_nodes: usize) -> Vec<T> {
    let chunks: Vec<Vec<T>> = nodes
        .par_chunks(chunk_nodes)
        .map(hash_layer::<T, A>)
        .collect();

    chunks.into_iter().flatten().collect()
}

impl<T: Element, A: Algorithm<T>> ops::Deref for MerkleTree<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.data.deref()
    }
}

impl<T: Element, A: Algorithm<T>> Clone for MerkleTree<T, A> {
    fn clone(&self) -> Self {
        MerkleTree {
            data: self.data.clone(),
            offsets: self.offsets.clone(),
            leafs: self.leafs,
            root: self.root.clone(),
            _a: PhantomData,
        }
    }
}

impl<T: Element, A: Algorithm<T>> PartialEq for MerkleTree<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.leafs == other.leafs && self.data == other.data
    }
}

impl<T: Element, A: Algorithm<T>> Eq for MerkleTree<T, A> {}

impl<T: Element, A: Algorithm<T>> fmt::Debug for MerkleTree<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("data", &self.data)
            .field("leafs", &self.leafs)
            .field("height", &self.height())
            .finish()
    }
}

/// Number of layers below the root of a tree over `leafs` leafs,
/// `ceil(log2(leafs))`.
pub fn get_merkle_depth(leafs: usize) -> usize {
    if leafs <= 1 {
        return 0;
    }
    log2_pow2(leafs.next_power_of_two())
}

/// Total number of nodes stored for a tree over `leafs` leafs.
pub fn get_merkle_tree_len(leafs: usize) -> usize {
    let mut len = leafs;
    let mut width = leafs;
    while width > 1 {
        width = (width + 1) / 2;
        len += width;
    }
    len
}

/// find power of 2 of a number which is power of 2
pub fn log2_pow2(n: usize) -> usize {
    n.trailing_zeros() as usize
}
