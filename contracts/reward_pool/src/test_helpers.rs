//! Shared test helpers for reward_pool tests.

#![cfg(test)]

use crate::{RewardStreamPool, RewardStreamPoolClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

/// Seven days in seconds.
pub const REWARDS_DURATION: u64 = 604_800;

/// A reward that streams at exactly 1000 units per second.
pub const REWARD: i128 = 604_800_000;

pub const T0: u64 = 1_000_000;

pub fn set_time(e: &Env, timestamp: u64) {
    e.ledger().with_mut(|li| li.timestamp = timestamp);
}

/// Deploys a pool with distinct stake and reward tokens at `T0`.
/// Returns `(client, admin, stake_token, reward_token, contract_id)`.
pub fn setup(
    e: &Env,
) -> (
    RewardStreamPoolClient<'_>,
    Address,
    Address,
    Address,
    Address,
) {
    e.mock_all_auths();
    set_time(e, T0);

    let admin = Address::generate(e);
    let stake_token = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let reward_token = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();

    let (client, contract_id) = deploy(e, &admin, &stake_token, &reward_token);
    (client, admin, stake_token, reward_token, contract_id)
}

/// Deploys a pool whose stake token is also its reward token.
/// Returns `(client, admin, token, contract_id)`.
pub fn setup_single_token(e: &Env) -> (RewardStreamPoolClient<'_>, Address, Address, Address) {
    e.mock_all_auths();
    set_time(e, T0);

    let admin = Address::generate(e);
    let token = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();

    let (client, contract_id) = deploy(e, &admin, &token, &token);
    (client, admin, token, contract_id)
}

fn deploy<'a>(
    e: &'a Env,
    admin: &Address,
    stake_token: &Address,
    reward_token: &Address,
) -> (RewardStreamPoolClient<'a>, Address) {
    let contract_id = e.register(RewardStreamPool, ());
    let client = RewardStreamPoolClient::new(e, &contract_id);
    client.initialize(admin, stake_token, reward_token, &REWARDS_DURATION);
    (client, contract_id)
}

/// Creates a staker holding `amount` of `stake_token`, pre-approved for the pool.
pub fn funded_staker(e: &Env, stake_token: &Address, pool: &Address, amount: i128) -> Address {
    let staker = Address::generate(e);
    StellarAssetClient::new(e, stake_token).mint(&staker, &amount);
    let expiry_ledger = e.ledger().sequence().saturating_add(10_000);
    TokenClient::new(e, stake_token).approve(&staker, pool, &amount, &expiry_ledger);
    staker
}

/// Sends `amount` of `reward_token` to the pool, as a keeper would before notifying.
pub fn fund_rewards(e: &Env, reward_token: &Address, pool: &Address, amount: i128) {
    StellarAssetClient::new(e, reward_token).mint(pool, &amount);
}
