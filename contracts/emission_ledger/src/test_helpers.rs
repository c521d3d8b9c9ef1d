//! Shared test helpers for emission_ledger tests.

#![cfg(test)]

use crate::{EmissionLedger, EmissionLedgerClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Env};

/// Emission used by the production registry: 1e16 units per second.
pub const RATE: i128 = 10_000_000_000_000_000;

/// One token with 18 decimals.
pub const UNIT: i128 = 1_000_000_000_000_000_000;

/// Reward inventory minted to the ledger.
pub const LEDGER_FUNDING: i128 = 10_000 * UNIT;

/// One day in seconds.
pub const ONE_DAY: u64 = 86_400;

/// Start timestamp for every scenario.
pub const T0: u64 = 1_000_000;

pub fn set_time(e: &Env, timestamp: u64) {
    e.ledger().with_mut(|li| li.timestamp = timestamp);
}

/// Deploys a funded ledger at `T0`.
/// Returns `(client, admin, reward_token, contract_id)`.
pub fn setup(e: &Env) -> (EmissionLedgerClient<'_>, Address, Address, Address) {
    e.mock_all_auths();
    set_time(e, T0);

    let contract_id = e.register(EmissionLedger, ());
    let client = EmissionLedgerClient::new(e, &contract_id);
    let admin = Address::generate(e);

    let reward_token = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    StellarAssetClient::new(e, &reward_token).mint(&contract_id, &LEDGER_FUNDING);

    client.initialize(&admin, &reward_token, &RATE);

    (client, admin, reward_token, contract_id)
}
