// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Cumulative Merkle distributions.
//!
//! Each distribution epoch aggregates textual reward entries, carries the
//! previous epoch's balances forward, commits to the resulting cumulative
//! ledger with a Merkle tree and emits a self-contained artifact of amounts
//! and inclusion proofs.

mod artifact;
mod merkle_tree;
mod rewards;

pub use artifact::{ArtifactError, DistributionArtifact, MerkleEntry};
pub use merkle_tree::{
    encode_leaf, hash_pair, leaf_hash, MerkleProof, MerkleTree, MerkleTreeError, LEAF_ENCODING_LEN,
};
pub use rewards::{build_ledger, CumulativeLedger, LedgerError, RewardEntry, AMOUNT_DECIMALS};
