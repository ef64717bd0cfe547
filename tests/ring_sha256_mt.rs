#![cfg(feature = "ring")]

use merkle_inclusion::merkle::MerkleTree;
use merkle_inclusion::sha256::{RingSha256Algorithm, Sha256Algorithm, Sha256Hash};
use merkle_inclusion::verify;

#[test]
fn test_ring_and_sha2_build_the_same_tree() -> anyhow::Result<()> {
    let rows: Vec<String> = (0..37).map(|i| format!("0x{:040x},{}", i, i * 1000)).collect();

    let ring: MerkleTree<Sha256Hash, RingSha256Algorithm> = MerkleTree::from_data(&rows)?;
    let sha2: MerkleTree<Sha256Hash, Sha256Algorithm> = MerkleTree::from_data(&rows)?;
    assert_eq!(ring.as_slice(), sha2.as_slice());

    // proofs are interchangeable between backends
    for i in [0, 17, 36] {
        let proof = ring.gen_proof(i)?;
        let leaf = ring.leaves()[i];
        assert!(verify::<_, Sha256Algorithm>(&leaf, &proof, &sha2.root()));
    }
    Ok(())
}
