// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::exit_code::{self, ExitCodeError};
use color_eyre::eyre::Report;
use merkle_distribution::DistributionArtifact;
use std::path::Path;

pub fn run(path: &Path) -> Result<(), ExitCodeError> {
    let artifact = DistributionArtifact::read_from_file(path).map_err(|err| {
        let exit_code = exit_code::artifact_error_exit_code(&err);
        (
            Report::new(err).wrap_err(format!("Failed to read artifact {}", path.display())),
            exit_code,
        )
    })?;

    artifact.verify().map_err(|err| {
        let exit_code = exit_code::artifact_error_exit_code(&err);
        (
            Report::new(err).wrap_err(format!("Artifact {} failed verification", path.display())),
            exit_code,
        )
    })?;

    println!(
        "Verified {} proofs against root {}",
        artifact.merkle.len(),
        artifact.root
    );
    println!("Total: {}", artifact.total);

    Ok(())
}
