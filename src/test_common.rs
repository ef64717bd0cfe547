use crate::hash::*;
use crate::merkle::MerkleTree;
use std::fmt;
use std::hash::Hasher;

pub const SIZE: usize = 0x10;

pub type Item = [u8; SIZE];

/// Toy algorithm: xors every written byte into a 16 byte ring.
///
/// `node(l, r) == l ^ r`, so it ignores orientation. Only use it where
/// that does not matter.
#[derive(Debug, Copy, Clone, Default)]
pub struct XOR128 {
    data: Item,
    i: usize,
}

impl XOR128 {
    pub fn new() -> XOR128 {
        XOR128 {
            data: [0; SIZE],
            i: 0,
        }
    }
}

impl Hasher for XOR128 {
    fn write(&mut self, bytes: &[u8]) {
        for x in bytes {
            self.data[self.i & (SIZE - 1)] ^= *x;
            self.i += 1;
        }
    }

    fn finish(&self) -> u64 {
        let mut h: u64 = 0;
        let mut off: u64 = 0;
        for i in 0..8 {
            h |= (self.data[i] as u64) << off;
            off += 8;
        }
        h
    }
}

impl Algorithm<Item> for XOR128 {
    #[inline]
    fn hash(&mut self) -> Item {
        self.data
    }

    #[inline]
    fn reset(&mut self) {
        *self = XOR128::new();
    }
}

impl fmt::UpperHex for XOR128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for b in self.data.as_ref() {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

pub fn get_vec_tree_from_slice(leafs: usize) -> MerkleTree<Item, XOR128> {
    let x: Vec<u64> = (0..leafs as u64).map(|i| i * 93).collect();
    MerkleTree::from_data(&x).expect("failed to create tree from slice")
}
