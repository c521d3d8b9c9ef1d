#![no_std]

//! # Voter Registry Contract
//!
//! Factory and orchestrator for voter accounts. The registry administers the
//! emission ledger: every adopted voter gets its own ledger entry, and the
//! registry is the only identity allowed to retire a voter.
//!
//! ## Features
//! - Adopt a freshly deployed voter account and bind it to a new ledger entry
//!   and a reward stream pool
//! - Harvest every known voter in one call, isolating failures per voter
//! - Retire voters and remove them from the known set
//! - Re-weight a voter's share of the global emission
//!
//! ## Security
//! - Admin-controlled adoption, retire, re-weight and admin transfer
//! - A voter account can be adopted only once
//! - Emits events for every state change

mod events;
mod types;

pub use types::{DataKey, HarvestSummary, VoterRecord};

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use vwave_common::{math, LedgerClient, VoterClient};
use vwave_errors::VotingError;

/// Global emission of the ledger: 0.01 reward token (18 decimals) per second.
pub const REWARD_PER_SECOND: i128 = 10_000_000_000_000_000;

/// Allocation weight given to each new voter's ledger entry.
pub const DEFAULT_ALLOC_WEIGHT: u32 = 100;

#[cfg(test)]
mod test_helpers;


// ─── Helpers ───────────────────────────────────────────────────────────────

fn read_address(e: &Env, key: &DataKey) -> Result<Address, VotingError> {
    e.storage()
        .instance()
        .get(key)
        .ok_or(VotingError::NotInitialized)
}

fn require_admin(e: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();
    if read_address(e, &DataKey::Admin)? != *caller {
        return Err(VotingError::NotAdmin);
    }
    Ok(())
}

fn load_voters(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get(&DataKey::Voters)
        .unwrap_or_else(|| Vec::new(e))
}

fn load_record(e: &Env, voter: &Address) -> Result<VoterRecord, VotingError> {
    e.storage()
        .persistent()
        .get(&DataKey::Voter(voter.clone()))
        .ok_or(VotingError::UnknownVoter)
}

#[contract]
pub struct VoterRegistry;

#[contractimpl]
impl VoterRegistry {
    /// Initialize the registry and the emission ledger it will administer.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to retire and re-weight voters
    /// * `gov_token` - Token voters lock for voting power
    /// * `reward_token` - Token the ledger emits
    /// * `ledger` - A freshly deployed, uninitialized emission ledger
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the registry is already initialized
    pub fn initialize(
        e: Env,
        admin: Address,
        gov_token: Address,
        reward_token: Address,
        ledger: Address,
    ) -> Result<(), VotingError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::GovToken, &gov_token);
        e.storage()
            .instance()
            .set(&DataKey::RewardToken, &reward_token);
        e.storage().instance().set(&DataKey::Ledger, &ledger);
        e.storage()
            .instance()
            .set(&DataKey::Voters, &Vec::<Address>::new(&e));

        LedgerClient::new(&e, &ledger).initialize(
            &e.current_contract_address(),
            &reward_token,
            &REWARD_PER_SECOND,
        );

        events::emit_initialized(&e, &admin, &ledger);
        Ok(())
    }

    /// Adopt a freshly deployed voter account for `owner`.
    ///
    /// Registers a new ledger entry with `DEFAULT_ALLOC_WEIGHT` bound to the
    /// account, binds the account to it and to `reward_pool`, and adds it to
    /// the known set. The pool admin must make the account the pool's keeper
    /// for its harvests to go through.
    ///
    /// Only the registry admin may adopt: the registry has no way to check
    /// the code behind `voter`.
    ///
    /// # Arguments
    /// * `admin` - The registry admin; must authorize
    /// * `owner` - The governance-token holder; must authorize
    /// * `voter` - An uninitialized voter account instance
    /// * `reward_pool` - Destination of the voter's harvests
    ///
    /// # Returns
    /// The voter account address
    ///
    /// # Errors
    /// * `NotAdmin` - If `admin` is not the registry admin
    /// * `VoterAlreadyRegistered` - If `voter` was adopted before
    /// * `AlreadyInitialized` - Surfaces from the voter if it was bound elsewhere
    ///
    /// # Events
    /// Emits `new_voter` with the new address as topic
    pub fn new_voter(
        e: Env,
        admin: Address,
        owner: Address,
        voter: Address,
        reward_pool: Address,
    ) -> Result<Address, VotingError> {
        require_admin(&e, &admin)?;
        owner.require_auth();
        let key = DataKey::Voter(voter.clone());
        if e.storage().persistent().has(&key) {
            return Err(VotingError::VoterAlreadyRegistered);
        }

        let this = e.current_contract_address();
        let ledger = read_address(&e, &DataKey::Ledger)?;
        let gov_token = read_address(&e, &DataKey::GovToken)?;

        let pool_id =
            LedgerClient::new(&e, &ledger).register_pool(&this, &DEFAULT_ALLOC_WEIGHT, &voter);
        VoterClient::new(&e, &voter).initialize(
            &this,
            &owner,
            &gov_token,
            &ledger,
            &pool_id,
            &reward_pool,
        );

        let record = VoterRecord {
            owner: owner.clone(),
            pool_id,
            reward_pool: reward_pool.clone(),
            created_at: e.ledger().timestamp(),
        };
        e.storage().persistent().set(&key, &record);

        let mut voters = load_voters(&e);
        voters.push_back(voter.clone());
        e.storage().instance().set(&DataKey::Voters, &voters);

        events::emit_new_voter(&e, &voter, &owner, pool_id, &reward_pool);
        Ok(voter)
    }

    /// Harvest every known voter.
    ///
    /// Each harvest runs as its own sub-invocation: a failing voter is rolled
    /// back, reported in the summary and by a `harvest_failed` event, and the
    /// sweep continues.
    pub fn harvest_all(e: Env) -> Result<HarvestSummary, VotingError> {
        let mut summary = HarvestSummary {
            harvested: 0,
            total_reward: 0,
            failed: Vec::new(&e),
        };

        for voter in load_voters(&e).iter() {
            match VoterClient::new(&e, &voter).try_harvest() {
                Ok(Ok(amount)) => {
                    summary.harvested = summary.harvested.saturating_add(1);
                    summary.total_reward = math::add(summary.total_reward, amount)?;
                }
                _ => {
                    events::emit_harvest_failed(&e, &voter);
                    summary.failed.push_back(voter);
                }
            }
        }

        events::emit_harvest_all(
            &e,
            summary.harvested,
            summary.total_reward,
            summary.failed.len(),
        );
        Ok(summary)
    }

    /// Retire a known voter through its registry-only path and forget it.
    ///
    /// # Errors
    /// * `NotAdmin` - If `admin` is not the registry admin
    /// * `UnknownVoter` - If `voter` is not in the known set, including one
    ///   already retired
    pub fn retire(e: Env, admin: Address, voter: Address) -> Result<(), VotingError> {
        require_admin(&e, &admin)?;
        load_record(&e, &voter)?;

        VoterClient::new(&e, &voter).retire(&e.current_contract_address());

        e.storage()
            .persistent()
            .remove(&DataKey::Voter(voter.clone()));
        let mut voters = load_voters(&e);
        if let Some(index) = voters.first_index_of(&voter) {
            voters.remove(index);
        }
        e.storage().instance().set(&DataKey::Voters, &voters);

        events::emit_voter_retired(&e, &voter);
        Ok(())
    }

    /// Change the share of global emission a voter's ledger entry receives.
    pub fn set_voter_weight(
        e: Env,
        admin: Address,
        voter: Address,
        alloc_weight: u32,
    ) -> Result<(), VotingError> {
        require_admin(&e, &admin)?;
        let record = load_record(&e, &voter)?;
        let ledger = read_address(&e, &DataKey::Ledger)?;
        LedgerClient::new(&e, &ledger).set_pool(
            &e.current_contract_address(),
            &record.pool_id,
            &alloc_weight,
        );
        events::emit_voter_weight_set(&e, &voter, alloc_weight);
        Ok(())
    }

    pub fn transfer_admin(e: Env, admin: Address, new_admin: Address) -> Result<(), VotingError> {
        require_admin(&e, &admin)?;
        new_admin.require_auth();
        e.storage().instance().set(&DataKey::Admin, &new_admin);
        events::emit_admin_transferred(&e, &admin, &new_admin);
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn is_voter(e: Env, voter: Address) -> bool {
        e.storage().persistent().has(&DataKey::Voter(voter))
    }

    pub fn get_voter_count(e: Env) -> u32 {
        load_voters(&e).len()
    }

    pub fn get_voters(e: Env) -> Vec<Address> {
        load_voters(&e)
    }

    /// # Errors
    /// * `UnknownVoter` - If `voter` is not in the known set
    pub fn get_voter(e: Env, voter: Address) -> Result<VoterRecord, VotingError> {
        load_record(&e, &voter)
    }

    /// Sum of the voting power of every known voter.
    pub fn total_vote_count(e: Env) -> Result<i128, VotingError> {
        let mut total = 0_i128;
        for voter in load_voters(&e).iter() {
            total = math::add(total, VoterClient::new(&e, &voter).vote_count())?;
        }
        Ok(total)
    }

    pub fn get_ledger(e: Env) -> Result<Address, VotingError> {
        read_address(&e, &DataKey::Ledger)
    }

    pub fn reward_per_second(_e: Env) -> i128 {
        REWARD_PER_SECOND
    }

    pub fn get_gov_token(e: Env) -> Result<Address, VotingError> {
        read_address(&e, &DataKey::GovToken)
    }

    pub fn get_reward_token(e: Env) -> Result<Address, VotingError> {
        read_address(&e, &DataKey::RewardToken)
    }

    pub fn get_admin(e: Env) -> Result<Address, VotingError> {
        read_address(&e, &DataKey::Admin)
    }
}
