// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

/// A 20 byte Ethereum style account address.
pub type Address = alloy::primitives::Address;
/// An unsigned 256 bit reward amount, denominated in the token's smallest unit.
pub type Amount = alloy::primitives::U256;
/// A 32 byte Keccak-256 digest.
pub type Hash = alloy::primitives::B256;

/// Canonical textual form of an address: lowercase hex with a `0x` prefix.
pub fn address_text(address: &Address) -> String {
    format!("0x{}", hex::encode(address.as_slice()))
}
