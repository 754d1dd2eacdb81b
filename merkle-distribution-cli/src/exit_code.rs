// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use color_eyre::eyre::Report;
use merkle_distribution::{ArtifactError, LedgerError, MerkleTreeError};

pub(crate) const INVALID_INPUT_EXIT_CODE: i32 = 6;
const SERIALIZATION_ERROR: i32 = 11;
const IO_ERROR: i32 = 12;
// Internal invariant failures: the tool caught itself producing bad data.
const INTERNAL_INVARIANT_ERROR: i32 = 21;

pub type ExitCodeError = (Report, i32);

pub(crate) fn artifact_error_exit_code(err: &ArtifactError) -> i32 {
    match err {
        ArtifactError::Tree(err) => tree_error_exit_code(err),
        ArtifactError::Ledger(err) => ledger_error_exit_code(err),
        ArtifactError::TotalMismatch { .. } => INTERNAL_INVARIANT_ERROR,
        ArtifactError::InvalidProof { .. } | ArtifactError::TotalInvalid { .. } => {
            INVALID_INPUT_EXIT_CODE
        }
        ArtifactError::Io(_) => IO_ERROR,
        ArtifactError::Json(_) => SERIALIZATION_ERROR,
    }
}

pub(crate) fn ledger_error_exit_code(err: &LedgerError) -> i32 {
    match err {
        LedgerError::InvalidAddress { .. }
        | LedgerError::InvalidAmount { .. }
        | LedgerError::AmountOverflow { .. } => INVALID_INPUT_EXIT_CODE,
    }
}

fn tree_error_exit_code(err: &MerkleTreeError) -> i32 {
    match err {
        MerkleTreeError::EmptyDistribution | MerkleTreeError::DuplicateLeaf { .. } => {
            INVALID_INPUT_EXIT_CODE
        }
        MerkleTreeError::UnknownLeaf { .. } | MerkleTreeError::ProofConsistency { .. } => {
            INTERNAL_INVARIANT_ERROR
        }
    }
}
