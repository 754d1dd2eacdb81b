// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::Hash;
use alloy::primitives::keccak256;

/// Hash data using Keccak-256.
pub fn hash<T: AsRef<[u8]>>(data: T) -> Hash {
    keccak256(data.as_ref())
}

/// Digest function used to derive Merkle tree nodes.
///
/// The tree and proof code is generic over this trait so that the pairing and
/// promotion rules can be exercised with any 32 byte digest. Production
/// artifacts use [`Keccak256Hasher`], which matches the on-chain verifier.
pub trait MerkleHasher {
    /// Hash arbitrary bytes into a tree node.
    fn hash(data: &[u8]) -> Hash;
}

/// The default hasher. Hashes with Keccak-256, as the verifier contract does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Keccak256Hasher;

impl MerkleHasher for Keccak256Hasher {
    fn hash(data: &[u8]) -> Hash {
        keccak256(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hasher_matches_free_function() {
        let data = b"cumulative distribution";
        assert_eq!(Keccak256Hasher::hash(data), hash(data));
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash("merkle"), hash("merkle"));
        assert_ne!(hash("merkle"), hash("Merkle"));
    }
}
