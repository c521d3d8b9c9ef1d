//! Shared test helpers for voter_registry tests.

#![cfg(test)]

use crate::{VoterRegistry, VoterRegistryClient};
use emission_ledger::{EmissionLedger, EmissionLedgerClient};
use reward_pool::{RewardStreamPool, RewardStreamPoolClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};
use voter::{VoterAccount, VoterAccountClient};

pub const LEDGER_FUNDING: i128 = 1_000_000 * 1_000_000_000_000_000_000;
pub const GOV_MINT: i128 = 1_000_000;
pub const REWARDS_DURATION: u64 = 604_800;
pub const ONE_DAY: u64 = 86_400;
pub const T0: u64 = 1_000_000;

pub struct RegistryFixture<'a> {
    pub registry: VoterRegistryClient<'a>,
    pub ledger: EmissionLedgerClient<'a>,
    pub admin: Address,
    pub registry_id: Address,
    pub gov_token: Address,
    pub reward_token: Address,
    pub lp_token: Address,
}

/// One adopted voter with its own reward pool.
pub struct AdoptedVoter<'a> {
    pub voter: VoterAccountClient<'a>,
    pub pool: RewardStreamPoolClient<'a>,
    pub owner: Address,
}

pub fn set_time(e: &Env, timestamp: u64) {
    e.ledger().with_mut(|li| li.timestamp = timestamp);
}

pub fn setup(e: &Env) -> RegistryFixture<'_> {
    e.mock_all_auths();
    set_time(e, T0);

    let admin = Address::generate(e);
    let gov_token = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let reward_token = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let lp_token = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();

    let ledger_id = e.register(EmissionLedger, ());
    StellarAssetClient::new(e, &reward_token).mint(&ledger_id, &LEDGER_FUNDING);

    let registry_id = e.register(VoterRegistry, ());
    let registry = VoterRegistryClient::new(e, &registry_id);
    registry.initialize(&admin, &gov_token, &reward_token, &ledger_id);

    RegistryFixture {
        registry,
        ledger: EmissionLedgerClient::new(e, &ledger_id),
        admin,
        registry_id,
        gov_token,
        reward_token,
        lp_token,
    }
}

/// Deploys a reward pool and a voter account, makes the account the pool's
/// keeper and has the registry adopt it for a freshly funded owner.
pub fn adopt_voter<'a>(e: &'a Env, f: &RegistryFixture<'a>) -> AdoptedVoter<'a> {
    let pool_id = e.register(RewardStreamPool, ());
    let pool = RewardStreamPoolClient::new(e, &pool_id);
    pool.initialize(&f.admin, &f.lp_token, &f.reward_token, &REWARDS_DURATION);

    let voter_id = e.register(VoterAccount, ());
    pool.set_keeper(&f.admin, &voter_id);

    let owner = Address::generate(e);
    f.registry.new_voter(&f.admin, &owner, &voter_id, &pool_id);

    StellarAssetClient::new(e, &f.gov_token).mint(&owner, &GOV_MINT);
    let expiry_ledger = e.ledger().sequence().saturating_add(10_000);
    TokenClient::new(e, &f.gov_token).approve(&owner, &voter_id, &GOV_MINT, &expiry_ledger);

    AdoptedVoter {
        voter: VoterAccountClient::new(e, &voter_id),
        pool,
        owner,
    }
}
