//! Shared test helpers for voter tests.
//!
//! Wires one voter account to a real emission ledger entry and a real reward
//! stream pool, with the account installed as the pool's keeper.

#![cfg(test)]

use crate::{VoterAccount, VoterAccountClient};
use emission_ledger::{EmissionLedger, EmissionLedgerClient};
use reward_pool::{RewardStreamPool, RewardStreamPoolClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

pub const RATE: i128 = 10_000_000_000_000_000;
pub const LEDGER_FUNDING: i128 = 1_000_000 * 1_000_000_000_000_000_000;
pub const GOV_MINT: i128 = 1_000_000;
pub const REWARDS_DURATION: u64 = 604_800;
pub const ONE_DAY: u64 = 86_400;
pub const T0: u64 = 1_000_000;

pub struct VoterFixture<'a> {
    pub voter: VoterAccountClient<'a>,
    pub ledger: EmissionLedgerClient<'a>,
    pub pool: RewardStreamPoolClient<'a>,
    pub gov: TokenClient<'a>,
    pub reward: TokenClient<'a>,
    pub registry: Address,
    pub owner: Address,
    pub pool_admin: Address,
    pub voter_id: Address,
    pub pool_id: u32,
}

pub fn set_time(e: &Env, timestamp: u64) {
    e.ledger().with_mut(|li| li.timestamp = timestamp);
}

pub fn setup(e: &Env) -> VoterFixture<'_> {
    e.mock_all_auths();
    set_time(e, T0);

    let token_admin = Address::generate(e);
    let registry = Address::generate(e);
    let owner = Address::generate(e);
    let pool_admin = Address::generate(e);

    let gov_token = e
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    let reward_token = e
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    let lp_token = e
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();

    let ledger_id = e.register(EmissionLedger, ());
    let ledger = EmissionLedgerClient::new(e, &ledger_id);
    ledger.initialize(&registry, &reward_token, &RATE);
    StellarAssetClient::new(e, &reward_token).mint(&ledger_id, &LEDGER_FUNDING);

    let voter_id = e.register(VoterAccount, ());
    let voter = VoterAccountClient::new(e, &voter_id);
    let pool_id = ledger.register_pool(&registry, &100, &voter_id);

    let pool_addr = e.register(RewardStreamPool, ());
    let pool = RewardStreamPoolClient::new(e, &pool_addr);
    pool.initialize(&pool_admin, &lp_token, &reward_token, &REWARDS_DURATION);
    pool.set_keeper(&pool_admin, &voter_id);
    voter.initialize(&registry, &owner, &gov_token, &ledger_id, &pool_id, &pool_addr);

    StellarAssetClient::new(e, &gov_token).mint(&owner, &GOV_MINT);
    let gov = TokenClient::new(e, &gov_token);
    let expiry_ledger = e.ledger().sequence().saturating_add(10_000);
    gov.approve(&owner, &voter_id, &GOV_MINT, &expiry_ledger);

    VoterFixture {
        voter,
        ledger,
        pool,
        gov,
        reward: TokenClient::new(e, &reward_token),
        registry,
        owner,
        pool_admin,
        voter_id,
        pool_id,
    }
}
