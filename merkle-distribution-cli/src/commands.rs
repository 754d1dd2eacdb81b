// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

mod generate;
mod verify;

use crate::exit_code::ExitCodeError;
use crate::opt::Opt;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum SubCmd {
    /// Build a distribution artifact from reward entries, optionally
    /// carrying a previous artifact's balances forward.
    Generate {
        /// Alternating address and decimal amount values:
        /// <address1> <amount1> [<address2> <amount2> ...]
        ///
        /// May be omitted to republish the balances carried over with
        /// --previous.
        #[clap(num_args = 0..)]
        entries: Vec<String>,

        /// Path to the previous epoch's artifact, merged cumulatively.
        #[clap(long)]
        previous: Option<PathBuf>,

        /// Where to write the artifact.
        #[clap(long, default_value = "merkle_output.json")]
        output: PathBuf,
    },

    /// Re-check every proof and the total of an existing artifact.
    Verify {
        /// Path to the artifact to verify.
        path: PathBuf,
    },
}

pub fn handle_subcommand(opt: Opt) -> Result<(), ExitCodeError> {
    match opt.command {
        SubCmd::Generate {
            entries,
            previous,
            output,
        } => generate::run(&entries, previous.as_deref(), &output),
        SubCmd::Verify { path } => verify::run(&path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn generate_accepts_a_carry_forward_only_invocation() {
        let opt = Opt::try_parse_from([
            "mdist",
            "generate",
            "--previous",
            "epoch_1.json",
            "--output",
            "epoch_2.json",
        ])
        .expect("entries are optional when a previous artifact is given");

        match opt.command {
            SubCmd::Generate {
                entries,
                previous,
                output,
            } => {
                assert!(entries.is_empty());
                assert_eq!(previous, Some(PathBuf::from("epoch_1.json")));
                assert_eq!(output, PathBuf::from("epoch_2.json"));
            }
            SubCmd::Verify { .. } => panic!("expected the generate subcommand"),
        }
    }

    #[test]
    fn generate_accepts_entries_alongside_a_previous_artifact() {
        let opt = Opt::try_parse_from([
            "mdist",
            "generate",
            "0xa7f3659c53820346176f7e0e350780df304db179",
            "1.5",
            "--previous",
            "epoch_1.json",
        ])
        .expect("entries and --previous combine");

        match opt.command {
            SubCmd::Generate {
                entries, previous, ..
            } => {
                assert_eq!(entries.len(), 2);
                assert_eq!(previous, Some(PathBuf::from("epoch_1.json")));
            }
            SubCmd::Verify { .. } => panic!("expected the generate subcommand"),
        }
    }
}
