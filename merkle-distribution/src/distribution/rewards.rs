// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::{address_text, Address, Amount};
use alloy::primitives::utils::{parse_units, ParseUnits};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

/// Number of decimal places in the reward token. Textual amounts are scaled by
/// `10^AMOUNT_DECIMALS` into the token's smallest unit.
pub const AMOUNT_DECIMALS: u8 = 18;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid reward address {raw:?}: {reason}")]
    InvalidAddress { raw: String, reason: String },
    #[error("Invalid reward amount {raw:?} for {}: {reason}", address_text(.address))]
    InvalidAmount {
        address: Address,
        raw: String,
        reason: String,
    },
    #[error("Cumulative amount for {} overflows the amount type", address_text(.address))]
    AmountOverflow { address: Address },
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// A single textual reward entry, as supplied on the command line or read from
/// an external payout source. Not yet validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardEntry {
    /// Hex address of the recipient, with or without a `0x` prefix.
    pub address: String,
    /// Decimal amount in whole tokens, e.g. `"1.5"`.
    pub amount: String,
}

impl RewardEntry {
    pub fn new(address: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            amount: amount.into(),
        }
    }
}

/// Validated cumulative balances for one distribution epoch, keyed by address.
///
/// Addresses are held in their canonical 20 byte form, so differently cased
/// spellings of the same address collapse into a single balance. The map is
/// ordered, which keeps every walk over the ledger deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CumulativeLedger {
    balances: BTreeMap<Address, Amount>,
    total: Amount,
}

impl CumulativeLedger {
    /// Add `amount` to the balance tracked for `address`.
    ///
    /// The ledger is unchanged if either the balance or the running total
    /// would overflow.
    pub fn credit(&mut self, address: Address, amount: Amount) -> Result<()> {
        let balance = self
            .amount_of(&address)
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow { address })?;
        let total = self
            .total
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow { address })?;

        self.balances.insert(address, balance);
        self.total = total;

        Ok(())
    }

    /// The cumulative balance for `address`, zero if the address is unknown.
    pub fn amount_of(&self, address: &Address) -> Amount {
        self.balances.get(address).copied().unwrap_or_default()
    }

    /// The running total of all balances.
    pub fn total(&self) -> Amount {
        self.total
    }

    /// Sum all balances from scratch, independently of the running total.
    pub fn recompute_total(&self) -> Result<Amount> {
        self.balances
            .iter()
            .try_fold(Amount::ZERO, |sum, (address, amount)| {
                sum.checked_add(*amount)
                    .ok_or(LedgerError::AmountOverflow { address: *address })
            })
    }

    /// Iterate balances in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &Amount)> {
        self.balances.iter()
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

/// Aggregate textual reward entries into a [`CumulativeLedger`].
///
/// Entries for the same address are summed, and a `prior` ledger (usually
/// recovered from the previous epoch's artifact) is carried forward in full,
/// so every address keeps its lifetime cumulative balance. Validation is
/// all or nothing: the first invalid entry fails the whole build.
///
/// # Arguments
///
/// * `entries` - Textual `(address, amount)` reward entries for this epoch.
/// * `prior` - The previous epoch's ledger, if any.
///
/// # Errors
///
/// Returns an error if an address or amount does not parse, if an amount is
/// negative, or if any balance overflows.
///
/// # Example
///
/// ```
/// use merkle_distribution::{build_ledger, Amount, RewardEntry};
///
/// let entries = vec![
///     RewardEntry::new("0xa7f3659c53820346176f7e0e350780df304db179", "1.5"),
///     RewardEntry::new("0xa7f3659c53820346176f7e0e350780df304db179", "0.5"),
/// ];
///
/// let ledger = build_ledger(entries, None)?;
/// assert_eq!(ledger.total(), Amount::from(2_000_000_000_000_000_000u64));
/// # Ok::<(), merkle_distribution::LedgerError>(())
/// ```
pub fn build_ledger<I>(entries: I, prior: Option<&CumulativeLedger>) -> Result<CumulativeLedger>
where
    I: IntoIterator<Item = RewardEntry>,
{
    let mut ledger = CumulativeLedger::default();

    let mut entry_count = 0usize;
    for entry in entries {
        let address = parse_address(&entry.address)?;
        let amount = parse_amount(&address, &entry.amount)?;
        ledger.credit(address, amount)?;
        entry_count += 1;
    }

    if let Some(prior) = prior {
        for (address, amount) in prior.iter() {
            ledger.credit(*address, *amount)?;
        }
    }

    info!(
        "Aggregated {entry_count} reward entries into {} cumulative balances (total {})",
        ledger.len(),
        ledger.total()
    );

    Ok(ledger)
}

fn parse_address(raw: &str) -> Result<Address> {
    Address::from_str(raw).map_err(|err| LedgerError::InvalidAddress {
        raw: raw.to_string(),
        reason: err.to_string(),
    })
}

fn parse_amount(address: &Address, raw: &str) -> Result<Amount> {
    // `parse_units` reads a digit-less string such as "" as zero. An absent
    // amount is invalid input, not an entitlement of zero.
    if !raw.bytes().any(|byte| byte.is_ascii_digit()) {
        return Err(LedgerError::InvalidAmount {
            address: *address,
            raw: raw.to_string(),
            reason: "amount must contain at least one digit".to_string(),
        });
    }

    match parse_units(raw, AMOUNT_DECIMALS) {
        Ok(ParseUnits::U256(amount)) => Ok(amount),
        // A sign in the input yields the signed variant. Rewards only accrue.
        Ok(ParseUnits::I256(_)) => Err(LedgerError::InvalidAmount {
            address: *address,
            raw: raw.to_string(),
            reason: "amount must not be negative".to_string(),
        }),
        Err(err) => Err(LedgerError::InvalidAmount {
            address: *address,
            raw: raw.to_string(),
            reason: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR_A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1";
    const ADDR_B: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb2";

    fn eth(amount: u64) -> Amount {
        Amount::from(amount) * Amount::from(1_000_000_000_000_000_000u64)
    }

    fn address(raw: &str) -> Address {
        Address::from_str(raw).expect("valid test address")
    }

    #[test]
    fn parses_whole_and_fractional_amounts() {
        let ledger = build_ledger(
            vec![
                RewardEntry::new(ADDR_A, "1.5"),
                RewardEntry::new(ADDR_B, "20"),
            ],
            None,
        )
        .expect("entries are valid");

        assert_eq!(
            ledger.amount_of(&address(ADDR_A)),
            Amount::from(1_500_000_000_000_000_000u64)
        );
        assert_eq!(ledger.amount_of(&address(ADDR_B)), eth(20));
        assert_eq!(ledger.total(), eth(20) + Amount::from(1_500_000_000_000_000_000u64));
    }

    #[test]
    fn sums_entries_for_the_same_address() {
        let ledger = build_ledger(
            vec![
                RewardEntry::new(ADDR_A, "10"),
                RewardEntry::new(ADDR_A, "5"),
            ],
            None,
        )
        .expect("entries are valid");

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.amount_of(&address(ADDR_A)), eth(15));
    }

    #[test]
    fn collapses_differently_cased_spellings() {
        let ledger = build_ledger(
            vec![
                RewardEntry::new("0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1", "10"),
                RewardEntry::new(ADDR_A, "5"),
            ],
            None,
        )
        .expect("entries are valid");

        assert_eq!(ledger.len(), 1, "case variants must share one balance");
        assert_eq!(ledger.amount_of(&address(ADDR_A)), eth(15));
    }

    #[test]
    fn carries_prior_balances_forward() {
        let prior = build_ledger(
            vec![
                RewardEntry::new(ADDR_A, "100"),
                RewardEntry::new(ADDR_B, "7"),
            ],
            None,
        )
        .expect("prior entries are valid");

        let ledger = build_ledger(vec![RewardEntry::new(ADDR_A, "25")], Some(&prior))
            .expect("entries are valid");

        assert_eq!(ledger.amount_of(&address(ADDR_A)), eth(125));
        assert_eq!(
            ledger.amount_of(&address(ADDR_B)),
            eth(7),
            "prior-only addresses must survive unchanged"
        );
        assert_eq!(ledger.total(), eth(132));
    }

    #[test]
    fn rejects_negative_amounts() {
        let result = build_ledger(vec![RewardEntry::new(ADDR_A, "-3")], None);
        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));

        // Even a signed zero carries a sign and is refused.
        let result = build_ledger(vec![RewardEntry::new(ADDR_A, "-0")], None);
        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
    }

    #[test]
    fn rejects_unparsable_amounts() {
        for raw in ["abc", "1.2.3", "", ".", " "] {
            let result = build_ledger(vec![RewardEntry::new(ADDR_A, raw)], None);
            assert!(
                matches!(result, Err(LedgerError::InvalidAmount { .. })),
                "amount {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn errors_name_the_canonical_address_form() {
        let entry = RewardEntry::new("0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1", "abc");
        let err = build_ledger(vec![entry], None).expect_err("amount is invalid");

        assert!(
            err.to_string().contains(ADDR_A),
            "error should render the address in canonical form: {err}"
        );
    }

    #[test]
    fn rejects_invalid_addresses() {
        for raw in ["0x123", "not-an-address", ""] {
            let result = build_ledger(vec![RewardEntry::new(raw, "1")], None);
            assert!(
                matches!(result, Err(LedgerError::InvalidAddress { .. })),
                "address {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn entry_order_does_not_matter() {
        let entries = vec![
            RewardEntry::new(ADDR_A, "1"),
            RewardEntry::new(ADDR_B, "2"),
            RewardEntry::new(ADDR_A, "3"),
        ];
        let mut reversed = entries.clone();
        reversed.reverse();

        let ledger = build_ledger(entries, None).expect("entries are valid");
        let ledger_reversed = build_ledger(reversed, None).expect("entries are valid");

        assert_eq!(ledger, ledger_reversed);
    }

    #[test]
    fn zero_amounts_are_valid_entries() {
        let ledger =
            build_ledger(vec![RewardEntry::new(ADDR_A, "0")], None).expect("zero is valid");

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.amount_of(&address(ADDR_A)), Amount::ZERO);
        assert_eq!(ledger.total(), Amount::ZERO);
    }

    #[test]
    fn empty_input_builds_an_empty_ledger() {
        let ledger = build_ledger(vec![], None).expect("empty input is valid");
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), Amount::ZERO);
    }

    #[test]
    fn running_total_matches_recomputed_total() {
        let ledger = build_ledger(
            vec![
                RewardEntry::new(ADDR_A, "1.25"),
                RewardEntry::new(ADDR_B, "3"),
                RewardEntry::new(ADDR_A, "0.75"),
            ],
            None,
        )
        .expect("entries are valid");

        assert_eq!(
            ledger.total(),
            ledger.recompute_total().expect("no overflow")
        );
    }

    #[test]
    fn credit_fails_on_overflow_without_changing_the_ledger() {
        let mut ledger = CumulativeLedger::default();
        ledger
            .credit(address(ADDR_A), Amount::MAX)
            .expect("first credit fits");

        let result = ledger.credit(address(ADDR_A), Amount::from(1u8));
        assert!(matches!(result, Err(LedgerError::AmountOverflow { .. })));
        assert_eq!(ledger.amount_of(&address(ADDR_A)), Amount::MAX);
        assert_eq!(ledger.total(), Amount::MAX);
    }
}
