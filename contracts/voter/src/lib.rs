//! Voter Account Contract
//!
//! One account per governance-token locker. Principal deposited here becomes
//! voting power, optionally boosted by a time-lock bonus, and that voting
//! power is the account's stake in its emission ledger entry. Harvesting
//! moves the accrued emission into the bound reward stream pool, where
//! liquidity stakers claim it.
//!
//! ## Lifecycle
//!
//! `Active <-> Paused -> Retired`. Pausing blocks new voting power but not the
//! withdrawal of unlocked principal. Only the registry can retire; retirement
//! pulls all voting power out of the ledger and releases the lock.
//!
//! The account must be the keeper of its reward pool, so its harvest can
//! notify the pool directly. Retirement never depends on that: when the pool
//! would refuse the final harvest, the reward stays settled on the ledger and
//! `flush_reward` forwards it later.
//!
//! Only one lock is tracked, and the bonus balance always belongs to it. A
//! new lock replaces the record and gives up the previous lock's bonus.

#![no_std]

mod events;
pub mod lock;
mod token;
mod types;

pub use types::{DataKey, LockRecord, VoterConfig, VoterState, VoterStatus};

use soroban_sdk::{contract, contractimpl, Address, Env};
use vwave_common::math;
use vwave_common::{LedgerClient, RewardPoolClient};
use vwave_errors::VotingError;

#[cfg(test)]
mod test_helpers;


#[cfg(test)]
mod test_lock;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn load_config(e: &Env) -> Result<VoterConfig, VotingError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(VotingError::NotInitialized)
}

fn load_state(e: &Env) -> Result<VoterState, VotingError> {
    e.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(VotingError::NotInitialized)
}

fn save_state(e: &Env, state: &VoterState) {
    e.storage().instance().set(&DataKey::State, state);
}

fn load_lock(e: &Env) -> Option<LockRecord> {
    e.storage().instance().get(&DataKey::Lock)
}

fn voting_power(state: &VoterState) -> Result<i128, VotingError> {
    if state.status == VoterStatus::Retired {
        return Ok(0);
    }
    math::add(state.balance, state.bonus_balance)
}

fn require_owner(config: &VoterConfig) {
    config.owner.require_auth();
}

/// New voting power may only be added while `Active`.
fn require_votable(state: &VoterState) -> Result<(), VotingError> {
    match state.status {
        VoterStatus::Active => Ok(()),
        VoterStatus::Paused => Err(VotingError::VotingPaused),
        VoterStatus::Retired => Err(VotingError::VoterRetired),
    }
}

/// Pull everything accrued on the ledger into the reward pool and start a
/// new stream with it. Nothing is notified when nothing accrued.
fn harvest_into_pool(e: &Env, config: &VoterConfig) -> Result<i128, VotingError> {
    let this = e.current_contract_address();
    let amount = LedgerClient::new(e, &config.ledger).harvest(
        &config.pool_id,
        &this,
        &config.reward_pool,
    );
    if amount > 0 {
        RewardPoolClient::new(e, &config.reward_pool).notify_reward_amount(&this, &amount);
    }
    events::emit_reward_harvested(e, &config.reward_pool, amount);
    Ok(amount)
}

/// Whether the reward pool would take a notify from this account for the
/// ledger's reward token.
fn pool_accepts_harvest(e: &Env, config: &VoterConfig) -> bool {
    let this = e.current_contract_address();
    let pool = RewardPoolClient::new(e, &config.reward_pool);
    let is_keeper = matches!(pool.try_get_keeper(), Ok(Ok(keeper)) if keeper == this);
    if !is_keeper {
        return false;
    }
    let ledger_token = LedgerClient::new(e, &config.ledger).try_get_reward_token();
    match (pool.try_get_reward_token(), ledger_token) {
        (Ok(Ok(pool_token)), Ok(Ok(ledger_token))) => pool_token == ledger_token,
        _ => false,
    }
}

fn add_voting_power(e: &Env, config: &VoterConfig, amount: i128) {
    let this = e.current_contract_address();
    LedgerClient::new(e, &config.ledger).deposit(&config.pool_id, &this, &amount);
}

fn remove_voting_power(e: &Env, config: &VoterConfig, amount: i128) {
    if amount <= 0 {
        return;
    }
    let this = e.current_contract_address();
    LedgerClient::new(e, &config.ledger).withdraw(&config.pool_id, &this, &amount);
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct VoterAccount;

#[contractimpl]
impl VoterAccount {
    /// Bind a freshly deployed account. Called once by the registry that adopts it.
    pub fn initialize(
        e: Env,
        registry: Address,
        owner: Address,
        gov_token: Address,
        ledger: Address,
        pool_id: u32,
        reward_pool: Address,
    ) -> Result<(), VotingError> {
        if e.storage().instance().has(&DataKey::Config) {
            return Err(VotingError::AlreadyInitialized);
        }
        registry.require_auth();

        let config = VoterConfig {
            registry,
            owner,
            gov_token,
            ledger,
            pool_id,
            reward_pool,
        };
        e.storage().instance().set(&DataKey::Config, &config);
        save_state(
            &e,
            &VoterState {
                status: VoterStatus::Active,
                balance: 0,
                bonus_balance: 0,
            },
        );

        events::emit_initialized(
            &e,
            &config.owner,
            &config.registry,
            config.pool_id,
            &config.reward_pool,
        );
        Ok(())
    }

    // ── Voting ─────────────────────────────────────────────────────────────

    /// Deposit `amount` governance tokens as unlocked voting power.
    pub fn vote(e: Env, amount: i128) -> Result<(), VotingError> {
        let config = load_config(&e)?;
        require_owner(&config);
        if amount <= 0 {
            return Err(VotingError::InvalidAmount);
        }
        let mut state = load_state(&e)?;
        require_votable(&state)?;

        token::transfer_into_contract(&e, &config.gov_token, &config.owner, amount);
        state.balance = math::add(state.balance, amount)?;
        save_state(&e, &state);
        add_voting_power(&e, &config, amount);

        events::emit_vote_recorded(&e, &config.owner, amount, voting_power(&state)?);
        Ok(())
    }

    /// Deposit and time-lock `amount` for `duration` seconds.
    ///
    /// The lock record is replaced by this lock. The previous lock's bonus is
    /// withdrawn from the ledger and the bonus balance becomes this lock's
    /// bonus; the previous lock's principal stays as unlocked balance.
    pub fn vote_with_lock(e: Env, amount: i128, duration: u64) -> Result<(), VotingError> {
        let config = load_config(&e)?;
        require_owner(&config);
        if amount <= 0 {
            return Err(VotingError::InvalidAmount);
        }
        let mut state = load_state(&e)?;
        require_votable(&state)?;
        let bonus = lock::lock_bonus(&e, amount, duration)?;

        token::transfer_into_contract(&e, &config.gov_token, &config.owner, amount);

        let expiration = e
            .ledger()
            .timestamp()
            .checked_add(duration)
            .ok_or(VotingError::Overflow)?;
        e.storage()
            .instance()
            .set(&DataKey::Lock, &LockRecord { amount, expiration });

        let replaced_bonus = state.bonus_balance;
        state.balance = math::add(state.balance, amount)?;
        state.bonus_balance = bonus;
        save_state(&e, &state);
        add_voting_power(&e, &config, math::add(amount, bonus)?);
        remove_voting_power(&e, &config, replaced_bonus);

        events::emit_vote_locked(&e, &config.owner, amount, duration, bonus, expiration);
        events::emit_vote_recorded(&e, &config.owner, amount, voting_power(&state)?);
        Ok(())
    }

    /// Return `amount` of principal to the owner.
    ///
    /// Unlocked principal is consumed first. Works while paused, and after
    /// retirement without any lock check.
    pub fn unvote(e: Env, amount: i128) -> Result<(), VotingError> {
        let config = load_config(&e)?;
        require_owner(&config);
        if amount <= 0 {
            return Err(VotingError::InvalidAmount);
        }
        let mut state = load_state(&e)?;
        let lock = load_lock(&e);

        let locked = lock::locked_principal(&lock, e.ledger().timestamp());
        let unlocked = math::sub(state.balance, locked)?;
        if amount > unlocked {
            return Err(VotingError::InsufficientUnlockedBalance);
        }

        let mut released = 0;
        if let Some(mut record) = lock {
            let free = math::sub(state.balance, record.amount)?;
            let from_lock = math::sub(amount, free)?.max(0);
            released = lock::bonus_release(&e, state.bonus_balance, from_lock, record.amount)?;

            record.amount = math::sub(record.amount, from_lock)?;
            if record.amount == 0 {
                e.storage().instance().remove(&DataKey::Lock);
            } else {
                e.storage().instance().set(&DataKey::Lock, &record);
            }
            state.bonus_balance = math::sub(state.bonus_balance, released)?;
        }

        state.balance = math::sub(state.balance, amount)?;
        save_state(&e, &state);
        if state.status != VoterStatus::Retired {
            remove_voting_power(&e, &config, math::add(amount, released)?);
        }
        token::transfer_from_contract(&e, &config.gov_token, &config.owner, amount);

        events::emit_unvote_recorded(
            &e,
            &config.owner,
            amount,
            released,
            voting_power(&state)?,
        );
        Ok(())
    }

    // ── Harvest ────────────────────────────────────────────────────────────

    /// Forward accrued emission to the bound reward pool. Permissionless,
    /// refused once retired. Returns the amount forwarded.
    pub fn harvest(e: Env) -> Result<i128, VotingError> {
        let config = load_config(&e)?;
        if load_state(&e)?.status == VoterStatus::Retired {
            return Err(VotingError::VoterRetired);
        }
        harvest_into_pool(&e, &config)
    }

    /// Forward reward the final harvest of `retire` left on the ledger.
    /// Permissionless, retired accounts only.
    pub fn flush_reward(e: Env) -> Result<i128, VotingError> {
        let config = load_config(&e)?;
        if load_state(&e)?.status != VoterStatus::Retired {
            return Err(VotingError::NotRetired);
        }
        harvest_into_pool(&e, &config)
    }

    // ── Lifecycle ──────────────────────────────────────────────────────────

    pub fn pause(e: Env) -> Result<(), VotingError> {
        let config = load_config(&e)?;
        require_owner(&config);
        let mut state = load_state(&e)?;
        match state.status {
            VoterStatus::Active => {}
            VoterStatus::Paused => return Err(VotingError::AlreadyPaused),
            VoterStatus::Retired => return Err(VotingError::VoterRetired),
        }
        state.status = VoterStatus::Paused;
        save_state(&e, &state);
        events::emit_paused(&e, &config.owner);
        Ok(())
    }

    pub fn unpause(e: Env) -> Result<(), VotingError> {
        let config = load_config(&e)?;
        require_owner(&config);
        let mut state = load_state(&e)?;
        match state.status {
            VoterStatus::Paused => {}
            VoterStatus::Active => return Err(VotingError::NotPaused),
            VoterStatus::Retired => return Err(VotingError::VoterRetired),
        }
        state.status = VoterStatus::Active;
        save_state(&e, &state);
        events::emit_unpaused(&e, &config.owner);
        Ok(())
    }

    /// Terminal shutdown, registry only.
    ///
    /// Harvests what is pending when the reward pool accepts it, withdraws all
    /// voting power from the ledger, drops the lock and the bonus. Principal
    /// stays for the owner to unvote. Reward that could not be forwarded is
    /// settled on the ledger by the withdrawal.
    pub fn retire(e: Env, caller: Address) -> Result<(), VotingError> {
        caller.require_auth();
        let config = load_config(&e)?;
        if caller != config.registry {
            return Err(VotingError::UnauthorizedRetire);
        }
        let mut state = load_state(&e)?;
        if state.status == VoterStatus::Retired {
            return Err(VotingError::VoterRetired);
        }

        if pool_accepts_harvest(&e, &config) {
            harvest_into_pool(&e, &config)?;
        }
        remove_voting_power(&e, &config, voting_power(&state)?);

        e.storage().instance().remove(&DataKey::Lock);
        state.bonus_balance = 0;
        state.status = VoterStatus::Retired;
        save_state(&e, &state);

        events::emit_retired(&e, &config.registry, state.balance);
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Current voting power: principal plus bonus, 0 once retired.
    pub fn vote_count(e: Env) -> i128 {
        load_state(&e)
            .and_then(|state| voting_power(&state))
            .unwrap_or(0)
    }

    /// Total stake registered on this account's ledger entry.
    pub fn total_vote_count(e: Env) -> Result<i128, VotingError> {
        let config = load_config(&e)?;
        Ok(LedgerClient::new(&e, &config.ledger).total_stake(&config.pool_id))
    }

    /// Pending emission on the ledger that the next harvest would forward.
    pub fn pending_reward(e: Env) -> Result<i128, VotingError> {
        let config = load_config(&e)?;
        Ok(LedgerClient::new(&e, &config.ledger)
            .pending_reward(&config.pool_id, &e.current_contract_address()))
    }

    pub fn total_balance(e: Env) -> Result<i128, VotingError> {
        Ok(load_state(&e)?.balance)
    }

    pub fn bonus_balance(e: Env) -> Result<i128, VotingError> {
        Ok(load_state(&e)?.bonus_balance)
    }

    pub fn locked_amount(e: Env) -> i128 {
        load_lock(&e).map(|lock| lock.amount).unwrap_or(0)
    }

    /// Expiry of the tracked lock, 0 when there is none.
    pub fn lock_expiration(e: Env) -> u64 {
        load_lock(&e).map(|lock| lock.expiration).unwrap_or(0)
    }

    pub fn get_status(e: Env) -> Result<VoterStatus, VotingError> {
        Ok(load_state(&e)?.status)
    }

    pub fn is_active(e: Env) -> bool {
        matches!(load_state(&e), Ok(state) if state.status == VoterStatus::Active)
    }

    pub fn is_paused(e: Env) -> bool {
        matches!(load_state(&e), Ok(state) if state.status == VoterStatus::Paused)
    }

    pub fn is_retired(e: Env) -> bool {
        matches!(load_state(&e), Ok(state) if state.status == VoterStatus::Retired)
    }

    pub fn get_config(e: Env) -> Result<VoterConfig, VotingError> {
        load_config(&e)
    }
}
