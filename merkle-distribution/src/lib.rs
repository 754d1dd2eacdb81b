// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Cumulative Merkle reward distributions.
//!
//! Aggregates per-address reward entries into a cumulative ledger, merges in
//! the previous epoch's balances and commits to the result with a Merkle
//! tree whose leaves hash `(address, amount)` pairs. The output of an epoch
//! is an immutable artifact holding every address's cumulative amount and
//! inclusion proof, ready for on-chain claim verification.
//!
//! # Example
//!
//! ```
//! use merkle_distribution::{build_ledger, DistributionArtifact, RewardEntry};
//!
//! let entries = vec![
//!     RewardEntry::new("0xa7f3659c53820346176f7e0e350780df304db179", "1.5"),
//!     RewardEntry::new("0x293f12bb0a24369b84b8ea23fba1766bcd9d3aaf", "20"),
//! ];
//!
//! // No previous epoch: the ledger holds this epoch's entries only.
//! let ledger = build_ledger(entries, None)?;
//! let artifact = DistributionArtifact::build(&ledger)?;
//! artifact.verify()?;
//! # Ok::<(), merkle_distribution::ArtifactError>(())
//! ```

#[macro_use]
extern crate tracing;

pub mod common;
pub mod cryptography;
pub mod distribution;
pub mod utils;

pub use common::{address_text, Address, Amount, Hash};
pub use cryptography::{Keccak256Hasher, MerkleHasher};
pub use distribution::{
    build_ledger, encode_leaf, hash_pair, leaf_hash, ArtifactError, CumulativeLedger,
    DistributionArtifact, LedgerError, MerkleEntry, MerkleProof, MerkleTree, MerkleTreeError,
    RewardEntry, AMOUNT_DECIMALS, LEAF_ENCODING_LEN,
};
