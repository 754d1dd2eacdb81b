// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

#![allow(dead_code)]

use merkle_distribution::{build_ledger, Amount, CumulativeLedger, RewardEntry};

pub const ADDR_A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1";
pub const ADDR_B: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb2";
pub const ADDR_C: &str = "0xccccccccccccccccccccccccccccccccccccccc3";

/// Build reward entries from `(address, amount)` string pairs.
pub fn entries(pairs: &[(&str, &str)]) -> Vec<RewardEntry> {
    pairs
        .iter()
        .map(|(address, amount)| RewardEntry::new(*address, *amount))
        .collect()
}

/// Aggregate string pairs straight into a ledger, with no prior epoch.
pub fn ledger_of(pairs: &[(&str, &str)]) -> CumulativeLedger {
    build_ledger(entries(pairs), None).expect("fixture entries are valid")
}

/// `amount` whole tokens in the smallest unit.
pub fn eth(amount: u64) -> Amount {
    Amount::from(amount) * Amount::from(1_000_000_000_000_000_000u64)
}
