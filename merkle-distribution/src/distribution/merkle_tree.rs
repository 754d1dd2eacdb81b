// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::{Address, Amount, Hash};
use crate::cryptography::{Keccak256Hasher, MerkleHasher};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use thiserror::Error;

/// Length in bytes of the canonical leaf preimage: a 20 byte address followed
/// by a 32 byte big-endian amount.
pub const LEAF_ENCODING_LEN: usize = 52;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MerkleTreeError {
    #[error("Cannot build a Merkle tree with no leaves")]
    EmptyDistribution,
    #[error("Duplicate leaf {leaf} in tree input")]
    DuplicateLeaf { leaf: Hash },
    #[error("Leaf {leaf} is not part of this tree")]
    UnknownLeaf { leaf: Hash },
    #[error("Proof for leaf {leaf} reconstructs root {computed}, expected {expected}")]
    ProofConsistency {
        leaf: Hash,
        computed: Hash,
        expected: Hash,
    },
}

pub type Result<T> = std::result::Result<T, MerkleTreeError>;

/// Encode an `(address, amount)` pair into the canonical leaf preimage: the 20
/// raw address bytes followed by the amount as a 32 byte big-endian integer.
///
/// This is the packed ABI encoding of `(address, uint256)`, so an on-chain
/// verifier derives the same leaf hashes from the same claim data.
pub fn encode_leaf(address: &Address, amount: Amount) -> [u8; LEAF_ENCODING_LEN] {
    let mut encoded = [0u8; LEAF_ENCODING_LEN];
    encoded[..20].copy_from_slice(address.as_slice());
    encoded[20..].copy_from_slice(&amount.to_be_bytes::<32>());
    encoded
}

/// Hash the canonical leaf encoding of an `(address, amount)` pair.
pub fn leaf_hash<H: MerkleHasher>(address: &Address, amount: Amount) -> Hash {
    H::hash(&encode_leaf(address, amount))
}

/// Hash two sibling nodes into their parent.
///
/// The siblings are concatenated in ascending byte order before hashing, so
/// a proof carries no left/right position data.
pub fn hash_pair<H: MerkleHasher>(a: &Hash, b: &Hash) -> Hash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(lo.as_slice());
    preimage[32..].copy_from_slice(hi.as_slice());
    H::hash(&preimage)
}

/// A Merkle tree over sorted, distinct leaf hashes.
///
/// All levels are kept so that proofs can be extracted for any leaf. Leaves
/// are sorted before pairing, which makes the root a commitment to the leaf
/// set rather than to the order the entries arrived in. When a level has an
/// odd node count, the unpaired node moves up to the next level unchanged.
pub struct MerkleTree<H: MerkleHasher = Keccak256Hasher> {
    /// Node hashes per level. `levels[0]` holds the sorted leaves and the
    /// last level holds the single root.
    levels: Vec<Vec<Hash>>,
    _hasher: PhantomData<H>,
}

impl<H: MerkleHasher> MerkleTree<H> {
    /// Build a tree committing to `leaves`.
    ///
    /// # Errors
    ///
    /// Returns an error if `leaves` is empty or contains duplicates.
    pub fn from_leaves(mut leaves: Vec<Hash>) -> Result<Self> {
        if leaves.is_empty() {
            return Err(MerkleTreeError::EmptyDistribution);
        }

        leaves.sort_unstable();
        if let Some(pair) = leaves.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(MerkleTreeError::DuplicateLeaf { leaf: pair[0] });
        }

        let mut levels = vec![leaves];
        while levels[levels.len() - 1].len() > 1 {
            let current = &levels[levels.len() - 1];
            let mut next = Vec::with_capacity(current.len().div_ceil(2));
            for pair in current.chunks(2) {
                let parent = if let [left, right] = pair {
                    hash_pair::<H>(left, right)
                } else {
                    // Odd node out: promoted unchanged, not paired with itself.
                    pair[0]
                };
                next.push(parent);
            }
            levels.push(next);
        }

        let tree = Self {
            levels,
            _hasher: PhantomData,
        };
        debug!(
            "Built Merkle tree over {} leaves (depth {})",
            tree.leaf_count(),
            tree.depth()
        );
        Ok(tree)
    }

    /// The root hash committing to all leaves.
    pub fn root(&self) -> Hash {
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of leaves committed to.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of pairing levels above the leaves. A single-leaf tree has
    /// depth zero.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// The leaf hashes in ascending order.
    pub fn leaves(&self) -> &[Hash] {
        &self.levels[0]
    }

    /// Whether `leaf` is committed to by this tree.
    pub fn contains(&self, leaf: &Hash) -> bool {
        self.levels[0].binary_search(leaf).is_ok()
    }

    /// Extract the inclusion proof for `leaf`.
    ///
    /// The returned proof is checked against the root before it is handed
    /// out, so a proof that does not verify never leaves this function.
    ///
    /// # Errors
    ///
    /// Returns an error if `leaf` is not part of the tree, or if the
    /// extracted proof fails to reconstruct the root.
    pub fn proof(&self, leaf: &Hash) -> Result<MerkleProof> {
        let mut index = self.levels[0]
            .binary_search(leaf)
            .map_err(|_| MerkleTreeError::UnknownLeaf { leaf: *leaf })?;

        let mut siblings = Vec::with_capacity(self.depth());
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = index ^ 1;
            // A promoted node has no sibling at this level.
            if sibling < level.len() {
                siblings.push(level[sibling]);
            }
            index /= 2;
        }

        let proof = MerkleProof::new(siblings);
        let computed = proof.compute_root::<H>(*leaf);
        if computed != self.root() {
            error!(
                "Proof for leaf {leaf} reconstructs root {computed}, expected {}",
                self.root()
            );
            return Err(MerkleTreeError::ProofConsistency {
                leaf: *leaf,
                computed,
                expected: self.root(),
            });
        }

        Ok(proof)
    }
}

/// An inclusion proof: the sibling hashes on the path from a leaf to the
/// root, leaf side first.
///
/// Sorted pair hashing makes position data unnecessary, so the proof
/// serializes as a bare array of hashes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerkleProof {
    siblings: Vec<Hash>,
}

impl MerkleProof {
    pub fn new(siblings: Vec<Hash>) -> Self {
        Self { siblings }
    }

    /// The sibling hashes, leaf side first.
    pub fn siblings(&self) -> &[Hash] {
        &self.siblings
    }

    /// Number of sibling hashes in the proof.
    pub fn depth(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Fold the proof over `leaf`, reconstructing the root it commits to.
    pub fn compute_root<H: MerkleHasher>(&self, leaf: Hash) -> Hash {
        self.siblings
            .iter()
            .fold(leaf, |node, sibling| hash_pair::<H>(&node, sibling))
    }

    /// Whether this proof links `leaf` to `root`.
    pub fn verify<H: MerkleHasher>(&self, leaf: Hash, root: Hash) -> bool {
        self.compute_root::<H>(leaf) == root
    }
}
