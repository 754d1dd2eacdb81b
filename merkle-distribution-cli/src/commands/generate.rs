// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::exit_code::{self, ExitCodeError, INVALID_INPUT_EXIT_CODE};
use color_eyre::eyre::{eyre, Report, Result};
use merkle_distribution::{build_ledger, CumulativeLedger, DistributionArtifact, RewardEntry};
use std::path::Path;

pub fn run(args: &[String], previous: Option<&Path>, output: &Path) -> Result<(), ExitCodeError> {
    let entries = parse_entry_args(args).map_err(|err| (err, INVALID_INPUT_EXIT_CODE))?;
    info!("Building a distribution from {} reward entries", entries.len());

    let prior = match previous {
        Some(path) => Some(read_prior_ledger(path)?),
        None => None,
    };

    let ledger = build_ledger(entries, prior.as_ref()).map_err(|err| {
        let exit_code = exit_code::ledger_error_exit_code(&err);
        (Report::new(err), exit_code)
    })?;

    let artifact = DistributionArtifact::build(&ledger).map_err(|err| {
        let exit_code = exit_code::artifact_error_exit_code(&err);
        (Report::new(err), exit_code)
    })?;

    artifact.write_to_file(output).map_err(|err| {
        let exit_code = exit_code::artifact_error_exit_code(&err);
        (
            Report::new(err).wrap_err(format!("Failed to write artifact to {}", output.display())),
            exit_code,
        )
    })?;

    println!("Generated distribution for {} addresses", artifact.merkle.len());
    println!("Root:  {}", artifact.root);
    println!("Total: {}", artifact.total);
    println!("Saved: {}", output.display());

    Ok(())
}

fn read_prior_ledger(path: &Path) -> Result<CumulativeLedger, ExitCodeError> {
    let artifact = DistributionArtifact::read_from_file(path).map_err(|err| {
        let exit_code = exit_code::artifact_error_exit_code(&err);
        (
            Report::new(err)
                .wrap_err(format!("Failed to read previous artifact {}", path.display())),
            exit_code,
        )
    })?;

    let ledger = artifact.ledger().map_err(|err| {
        let exit_code = exit_code::artifact_error_exit_code(&err);
        (Report::new(err), exit_code)
    })?;

    println!(
        "Carrying {} balances forward from {}",
        ledger.len(),
        path.display()
    );

    Ok(ledger)
}

fn parse_entry_args(args: &[String]) -> Result<Vec<RewardEntry>> {
    if args.len() % 2 != 0 {
        return Err(eyre!(
            "Expected alternating <address> <amount> pairs, got {} arguments",
            args.len()
        ));
    }

    Ok(args
        .chunks_exact(2)
        .map(|pair| RewardEntry::new(pair[0].as_str(), pair[1].as_str()))
        .collect())
}
