use crate::hash::{Algorithm, Hashable};
use crate::merkle::MerkleTree;
use crate::proof::verify;
use crate::sha256::{Sha256Algorithm, Sha256Hash};
use std::hash::Hasher;

/// MT leaf hash prefix
const LEAF: u8 = 0x00;

/// MT interior node hash prefix
const INTERIOR: u8 = 0x01;

/// Custom merkle hasher: domain separated leafs and nodes, as in
/// Certificate Transparency (RFC 6962).
#[derive(Debug, Clone, Default)]
struct CMH(Sha256Algorithm);

impl Hasher for CMH {
    fn write(&mut self, msg: &[u8]) {
        self.0.write(msg)
    }

    fn finish(&self) -> u64 {
        self.0.finish()
    }
}

impl Algorithm<Sha256Hash> for CMH {
    fn hash(&mut self) -> Sha256Hash {
        self.0.hash()
    }

    fn reset(&mut self) {
        self.0.reset()
    }

    fn leaf(&mut self, leaf: Sha256Hash) -> Sha256Hash {
        self.reset();
        self.write_u8(LEAF);
        self.write(leaf.as_ref());
        self.hash()
    }

    fn node(&mut self, left: Sha256Hash, right: Sha256Hash) -> Sha256Hash {
        self.reset();
        self.write_u8(INTERIOR);
        self.write(left.as_ref());
        self.write(right.as_ref());
        self.hash()
    }
}

#[test]
fn test_custom_merkle_hasher() {
    let data = [1u64, 2, 3, 4, 5];
    let mt: MerkleTree<Sha256Hash, CMH> = MerkleTree::from_data(data.iter()).unwrap();
    let plain: MerkleTree<Sha256Hash, Sha256Algorithm> =
        MerkleTree::from_data(data.iter()).unwrap();
    assert_ne!(mt.root(), plain.root());

    // leafs went through the prefixed `leaf`
    let mut a = CMH::default();
    3u64.hash(&mut a);
    let item = a.hash();
    assert_eq!(mt.leaves()[2], a.leaf(item));
    assert_ne!(mt.leaves()[2], item);

    for (i, leaf) in mt.leaves().iter().enumerate() {
        let proof = mt.gen_proof(i).unwrap();
        assert!(verify::<Sha256Hash, CMH>(leaf, &proof, &mt.root()));
        assert!(!verify::<Sha256Hash, Sha256Algorithm>(leaf, &proof, &mt.root()));
        assert!(proof.validate_with_data::<CMH>(&data[i], &mt.root()));
    }
}
