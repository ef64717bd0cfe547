use crate::hash::{Algorithm, Hashable};
use crate::merkle::Element;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of a sibling relative to the running hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// Sibling is the left operand: `hash(sibling || running)`.
    Left,
    /// Sibling is the right operand: `hash(running || sibling)`.
    Right,
}

impl Side {
    /// The opposite orientation.
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// One layer of an inclusion proof.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProofStep<T> {
    /// Sibling node hash.
    pub sibling: T,
    /// Which operand the sibling is.
    pub side: Side,
}

impl<T> ProofStep<T> {
    /// Creates a proof step.
    pub fn new(sibling: T, side: Side) -> ProofStep<T> {
        ProofStep { sibling, side }
    }
}

/// Merkle tree inclusion proof for data element, for which item = Leaf(Hash(Data Item)).
///
/// Layout, leaf to root:
///
/// ```text
/// [ (h1x, side) (h2y, side) (h3z, side) ... ]
/// ```
///
/// The proof carries neither the leaf nor the root. Validation folds the
/// leaf through every step and compares the result with a root obtained
/// elsewhere, so a proof alone proves nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Proof<T> {
    steps: Vec<ProofStep<T>>,
}

impl<T: Element> Proof<T> {
    /// Creates new MT inclusion proof
    pub fn new(steps: Vec<ProofStep<T>>) -> Proof<T> {
        Proof { steps }
    }

    /// Returns the steps of this proof, leaf to root.
    pub fn steps(&self) -> &[ProofStep<T>] {
        &self.steps
    }

    /// Mutable access to the steps.
    pub fn steps_mut(&mut self) -> &mut Vec<ProofStep<T>> {
        &mut self.steps
    }

    /// Number of steps, equal to the depth of the proved tree.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` for the proof of a single-leaf tree.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Leaf position implied by the sibling sides, `None` if it does not
    /// fit in `usize`.
    pub fn index(&self) -> Option<usize> {
        self.steps
            .iter()
            .enumerate()
            .try_fold(0usize, |acc, (i, step)| match step.side {
                Side::Right => Some(acc),
                Side::Left => 1usize.checked_shl(i as u32).map(|bit| acc | bit),
            })
    }

    /// Returns the root the hash chain starting at `leaf` leads to.
    pub fn compute_root<A: Algorithm<T>>(&self, leaf: T) -> T {
        let mut a = A::default();
        self.steps.iter().fold(leaf, |h, step| match step.side {
            Side::Left => a.node(step.sibling.clone(), h),
            Side::Right => a.node(h, step.sibling.clone()),
        })
    }

    /// Verifies MT inclusion proof of `leaf` under `root`.
    pub fn validate<A: Algorithm<T>>(&self, leaf: &T, root: &T) -> bool {
        self.compute_root::<A>(leaf.clone()) == *root
    }

    /// Verifies MT inclusion proof and that leaf_data is the original leaf data for which proof was generated.
    pub fn validate_with_data<A: Algorithm<T>>(&self, leaf_data: &dyn Hashable<A>, root: &T) -> bool {
        let mut a = A::default();
        leaf_data.hash(&mut a);
        let item = a.hash();
        let leaf = a.leaf(item);

        self.validate::<A>(&leaf, root)
    }
}

impl<T> IntoIterator for Proof<T> {
    type Item = ProofStep<T>;
    type IntoIter = std::vec::IntoIter<ProofStep<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<T> FromIterator<ProofStep<T>> for Proof<T> {
    fn from_iter<I: IntoIterator<Item = ProofStep<T>>>(iter: I) -> Self {
        Proof {
            steps: iter.into_iter().collect(),
        }
    }
}

/// Checks that `proof` chains `leaf` up to `root` under algorithm `A`.
///
/// Needs no tree. Any mismatch, including a proof of the wrong length,
/// yields `false`.
pub fn verify<T: Element, A: Algorithm<T>>(leaf: &T, proof: &Proof<T>, root: &T) -> bool {
    proof.validate::<A>(leaf, root)
}
