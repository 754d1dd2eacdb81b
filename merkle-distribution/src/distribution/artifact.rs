// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::{address_text, Address, Amount, Hash};
use crate::cryptography::Keccak256Hasher;
use crate::distribution::merkle_tree::{leaf_hash, MerkleProof, MerkleTree, MerkleTreeError};
use crate::distribution::rewards::{CumulativeLedger, LedgerError};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error(transparent)]
    Tree(#[from] MerkleTreeError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Ledger total {tracked} does not match recomputed total {recomputed}")]
    TotalMismatch { tracked: Amount, recomputed: Amount },
    #[error("Proof for {} does not verify against root {root}", address_text(.address))]
    InvalidProof { address: Address, root: Hash },
    #[error("Stored total {stored} does not match the sum of entries {computed}")]
    TotalInvalid { stored: Amount, computed: Amount },
    #[error("Failed to access artifact file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize artifact: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArtifactError>;

/// A single address's claim data within an artifact.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleEntry {
    /// Cumulative claimable amount, serialized as a decimal string.
    #[serde_as(as = "DisplayFromStr")]
    pub amount: Amount,
    /// Inclusion proof binding the address and amount to the root.
    pub proof: MerkleProof,
}

/// An immutable, self-contained description of one distribution epoch.
///
/// Everything a claimant or verifier needs is embedded: per-address amounts
/// with their inclusion proofs, the Merkle root, and the grand total.
/// Serializes to the JSON consumed by claim tooling:
///
/// ```json
/// {
///   "merkle": {
///     "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1": {
///       "amount": "15000000000000000000",
///       "proof": ["0x3e9c..."]
///     }
///   },
///   "root": "0x8c31...",
///   "total": "35000000000000000000"
/// }
/// ```
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionArtifact {
    /// Claim data per address, in ascending address order.
    pub merkle: BTreeMap<Address, MerkleEntry>,
    /// The Merkle root all proofs verify against.
    pub root: Hash,
    /// Sum of all amounts, serialized as a decimal string.
    #[serde_as(as = "DisplayFromStr")]
    pub total: Amount,
}

impl DistributionArtifact {
    /// Build the artifact for one epoch from a cumulative ledger.
    ///
    /// Derives a leaf per address, commits to the leaf set with a Merkle
    /// tree and extracts one verified proof per address. The ledger's
    /// running total is cross-checked against a fresh sum first.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger is empty, if its running total
    /// disagrees with the recomputed sum, or if proof extraction fails.
    pub fn build(ledger: &CumulativeLedger) -> Result<Self> {
        let recomputed = ledger.recompute_total()?;
        if recomputed != ledger.total() {
            error!(
                "Ledger total {} does not match recomputed total {recomputed}",
                ledger.total()
            );
            return Err(ArtifactError::TotalMismatch {
                tracked: ledger.total(),
                recomputed,
            });
        }

        let leaves: Vec<(Address, Amount, Hash)> = ledger
            .iter()
            .map(|(address, amount)| {
                let leaf = leaf_hash::<Keccak256Hasher>(address, *amount);
                (*address, *amount, leaf)
            })
            .collect();

        let tree = MerkleTree::<Keccak256Hasher>::from_leaves(
            leaves.iter().map(|(_, _, leaf)| *leaf).collect(),
        )?;

        let mut merkle = BTreeMap::new();
        for (address, amount, leaf) in leaves {
            let proof = tree.proof(&leaf)?;
            merkle.insert(address, MerkleEntry { amount, proof });
        }

        info!(
            "Built distribution artifact: {} addresses, root {}, total {}",
            merkle.len(),
            tree.root(),
            ledger.total()
        );

        Ok(Self {
            merkle,
            root: tree.root(),
            total: ledger.total(),
        })
    }

    /// Check the artifact against itself: every proof must verify against
    /// the root and the amounts must sum to the stored total.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first address whose proof fails, or
    /// describing the total mismatch.
    pub fn verify(&self) -> Result<()> {
        let mut computed = Amount::ZERO;
        for (address, entry) in &self.merkle {
            let leaf = leaf_hash::<Keccak256Hasher>(address, entry.amount);
            if !entry.proof.verify::<Keccak256Hasher>(leaf, self.root) {
                return Err(ArtifactError::InvalidProof {
                    address: *address,
                    root: self.root,
                });
            }
            computed = computed
                .checked_add(entry.amount)
                .ok_or(LedgerError::AmountOverflow { address: *address })?;
        }

        if computed != self.total {
            return Err(ArtifactError::TotalInvalid {
                stored: self.total,
                computed,
            });
        }

        debug!(
            "Verified {} proofs against root {}",
            self.merkle.len(),
            self.root
        );
        Ok(())
    }

    /// Recover the cumulative ledger embedded in this artifact, for carrying
    /// balances forward into the next epoch.
    pub fn ledger(&self) -> Result<CumulativeLedger> {
        let mut ledger = CumulativeLedger::default();
        for (address, entry) in &self.merkle {
            ledger.credit(*address, entry.amount)?;
        }
        Ok(ledger)
    }

    /// Serialize the artifact to pretty-printed JSON at `path`.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Wrote distribution artifact to {}", path.display());
        Ok(())
    }

    /// Read an artifact previously written with [`Self::write_to_file`].
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let artifact: Self = serde_json::from_str(&json)?;
        debug!("Read distribution artifact from {}", path.display());
        Ok(artifact)
    }
}
