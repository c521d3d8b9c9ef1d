//! Emission Ledger Contract
//!
//! Emits a fixed number of reward units per second and splits them across
//! registered pools by allocation weight. Inside a pool, reward is tracked
//! through a cumulative reward-per-share accumulator, so no operation ever
//! iterates over stakers.
//!
//! ## Key design decisions
//!
//! - **One staker per pool**: a pool is bound at registration to the voter
//!   account it serves. Any other address is rejected, so nobody can dilute
//!   a voter's share by registering stake of their own.
//! - **Checkpoint before every stake change**: `deposit`, `withdraw` and
//!   `harvest` accrue the pool to "now" before touching balances.
//! - **Mass update on weight or rate change**: changing the global split
//!   first checkpoints every pool, so past accrual is never repriced.
//! - **Stake is bookkeeping only**: no tokens move on deposit/withdraw; the
//!   reward token leaves the ledger only through `harvest`.

#![no_std]

mod events;
mod types;

pub use types::{DataKey, PoolInfo, UserInfo};

use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env};
use vwave_common::math::{self, PRECISION};
use vwave_errors::VotingError;

#[cfg(test)]
mod test_helpers;


// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_admin(e: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();
    let stored: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(VotingError::NotInitialized)?;
    if stored != *caller {
        return Err(VotingError::NotAdmin);
    }
    Ok(())
}

fn read_reward_per_second(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::RewardPerSecond)
        .unwrap_or(0)
}

fn read_total_alloc_weight(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::TotalAllocWeight)
        .unwrap_or(0)
}

fn pool_count(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::PoolCount).unwrap_or(0)
}

fn load_pool(e: &Env, pool_id: u32) -> Result<PoolInfo, VotingError> {
    e.storage()
        .persistent()
        .get(&DataKey::Pool(pool_id))
        .ok_or(VotingError::PoolNotFound)
}

fn save_pool(e: &Env, pool_id: u32, pool: &PoolInfo) {
    e.storage().persistent().set(&DataKey::Pool(pool_id), pool);
}

fn require_bound_staker(pool: &PoolInfo, staker: &Address) -> Result<(), VotingError> {
    if pool.staker != *staker {
        return Err(VotingError::UnauthorizedStaker);
    }
    Ok(())
}

fn load_user(e: &Env, pool_id: u32, staker: &Address) -> UserInfo {
    e.storage()
        .persistent()
        .get(&DataKey::User(pool_id, staker.clone()))
        .unwrap_or_default()
}

fn save_user(e: &Env, pool_id: u32, staker: &Address, user: &UserInfo) {
    e.storage()
        .persistent()
        .set(&DataKey::User(pool_id, staker.clone()), user);
}

/// Advance `pool` to the current timestamp in memory.
///
/// Returns `true` when the accrual time moved. With zero stake the time still
/// advances and that stretch of emission is forfeited.
fn accrue(e: &Env, pool: &mut PoolInfo) -> Result<bool, VotingError> {
    let now = e.ledger().timestamp();
    if now <= pool.last_accrual_time {
        return Ok(false);
    }

    let total_weight = read_total_alloc_weight(e);
    if pool.total_stake > 0 && total_weight > 0 && pool.alloc_weight > 0 {
        let elapsed = (now - pool.last_accrual_time) as i128;
        let emitted = math::mul(elapsed, read_reward_per_second(e))?;
        let reward = math::mul_div_floor(
            e,
            emitted,
            pool.alloc_weight as i128,
            total_weight as i128,
        )?;
        let per_share = math::mul_div_floor(e, reward, PRECISION, pool.total_stake)?;
        pool.acc_reward_per_share = math::add(pool.acc_reward_per_share, per_share)?;
    }
    pool.last_accrual_time = now;
    Ok(true)
}

/// Checkpoint a stored pool and persist the result.
fn update_pool_internal(e: &Env, pool_id: u32) -> Result<PoolInfo, VotingError> {
    let mut pool = load_pool(e, pool_id)?;
    if accrue(e, &mut pool)? {
        save_pool(e, pool_id, &pool);
        events::emit_pool_updated(
            e,
            pool_id,
            pool.last_accrual_time,
            pool.total_stake,
            pool.acc_reward_per_share,
        );
    }
    Ok(pool)
}

fn mass_update(e: &Env) -> Result<(), VotingError> {
    for pool_id in 0..pool_count(e) {
        update_pool_internal(e, pool_id)?;
    }
    Ok(())
}

/// Reward accrued by `user` since its checkpoint, without the settled buffer.
fn accrued_since_checkpoint(
    e: &Env,
    pool: &PoolInfo,
    user: &UserInfo,
) -> Result<i128, VotingError> {
    let delta = math::sub(pool.acc_reward_per_share, user.reward_checkpoint)?;
    math::mul_div_floor(e, user.stake, delta, PRECISION)
}

/// Move everything accrued so far into the user's buffer and re-checkpoint.
fn settle(e: &Env, pool: &PoolInfo, user: &mut UserInfo) -> Result<(), VotingError> {
    let pending = accrued_since_checkpoint(e, pool, user)?;
    user.unclaimed = math::add(user.unclaimed, pending)?;
    user.reward_checkpoint = pool.acc_reward_per_share;
    Ok(())
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct EmissionLedger;

#[contractimpl]
impl EmissionLedger {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization. `admin` must authorize; in production it is
    /// the voter registry, which configures the ledger it owns.
    pub fn initialize(
        e: Env,
        admin: Address,
        reward_token: Address,
        reward_per_second: i128,
    ) -> Result<(), VotingError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(VotingError::AlreadyInitialized);
        }
        if reward_per_second < 0 {
            return Err(VotingError::InvalidAmount);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage()
            .instance()
            .set(&DataKey::RewardToken, &reward_token);
        e.storage()
            .instance()
            .set(&DataKey::RewardPerSecond, &reward_per_second);
        e.storage().instance().set(&DataKey::TotalAllocWeight, &0_u32);
        e.storage().instance().set(&DataKey::PoolCount, &0_u32);

        events::emit_initialized(&e, &admin, &reward_token, reward_per_second);
        Ok(())
    }

    /// Add a pool with zero stake whose accrual starts now, bound to
    /// `staker`. Returns its id.
    pub fn register_pool(
        e: Env,
        admin: Address,
        alloc_weight: u32,
        staker: Address,
    ) -> Result<u32, VotingError> {
        require_admin(&e, &admin)?;
        mass_update(&e)?;

        let pool_id = pool_count(&e);
        let pool = PoolInfo {
            staker: staker.clone(),
            alloc_weight,
            acc_reward_per_share: 0,
            last_accrual_time: e.ledger().timestamp(),
            total_stake: 0,
        };
        save_pool(&e, pool_id, &pool);

        let total = read_total_alloc_weight(&e)
            .checked_add(alloc_weight)
            .ok_or(VotingError::Overflow)?;
        e.storage().instance().set(&DataKey::TotalAllocWeight, &total);
        let next = pool_id.checked_add(1).ok_or(VotingError::Overflow)?;
        e.storage().instance().set(&DataKey::PoolCount, &next);

        events::emit_pool_registered(&e, pool_id, alloc_weight, &staker);
        Ok(pool_id)
    }

    /// Change a pool's allocation weight. Every pool is checkpointed first.
    pub fn set_pool(
        e: Env,
        admin: Address,
        pool_id: u32,
        alloc_weight: u32,
    ) -> Result<(), VotingError> {
        require_admin(&e, &admin)?;
        mass_update(&e)?;

        let mut pool = load_pool(&e, pool_id)?;
        let old_weight = pool.alloc_weight;
        let total = read_total_alloc_weight(&e)
            .checked_sub(old_weight)
            .ok_or(VotingError::Underflow)?
            .checked_add(alloc_weight)
            .ok_or(VotingError::Overflow)?;
        pool.alloc_weight = alloc_weight;
        save_pool(&e, pool_id, &pool);
        e.storage().instance().set(&DataKey::TotalAllocWeight, &total);

        events::emit_pool_set(&e, pool_id, old_weight, alloc_weight);
        Ok(())
    }

    /// Change the global emission rate. Every pool is checkpointed first.
    pub fn set_reward_per_second(
        e: Env,
        admin: Address,
        reward_per_second: i128,
    ) -> Result<(), VotingError> {
        require_admin(&e, &admin)?;
        if reward_per_second < 0 {
            return Err(VotingError::InvalidAmount);
        }
        mass_update(&e)?;
        e.storage()
            .instance()
            .set(&DataKey::RewardPerSecond, &reward_per_second);
        events::emit_reward_per_second_set(&e, reward_per_second);
        Ok(())
    }

    // ── Accrual ────────────────────────────────────────────────────────────

    /// Checkpoint one pool. Calling it twice in the same timestamp is a no-op.
    pub fn update_pool(e: Env, pool_id: u32) -> Result<PoolInfo, VotingError> {
        update_pool_internal(&e, pool_id)
    }

    /// Checkpoint every pool.
    pub fn mass_update_pools(e: Env) -> Result<(), VotingError> {
        mass_update(&e)
    }

    // ── Stake lifecycle ────────────────────────────────────────────────────

    /// Register `amount` more stake for `staker`. Accrued reward is settled
    /// into the staker's buffer first.
    pub fn deposit(e: Env, pool_id: u32, staker: Address, amount: i128) -> Result<(), VotingError> {
        staker.require_auth();
        if amount <= 0 {
            return Err(VotingError::InvalidAmount);
        }

        require_bound_staker(&load_pool(&e, pool_id)?, &staker)?;

        let mut pool = update_pool_internal(&e, pool_id)?;
        let mut user = load_user(&e, pool_id, &staker);
        settle(&e, &pool, &mut user)?;

        user.stake = math::add(user.stake, amount)?;
        pool.total_stake = math::add(pool.total_stake, amount)?;
        save_user(&e, pool_id, &staker, &user);
        save_pool(&e, pool_id, &pool);

        events::emit_deposit(&e, &staker, pool_id, amount);
        Ok(())
    }

    /// Remove `amount` of `staker`'s stake. Accrued reward stays in the buffer.
    pub fn withdraw(e: Env, pool_id: u32, staker: Address, amount: i128) -> Result<(), VotingError> {
        staker.require_auth();
        if amount <= 0 {
            return Err(VotingError::InvalidAmount);
        }

        require_bound_staker(&load_pool(&e, pool_id)?, &staker)?;

        let mut pool = update_pool_internal(&e, pool_id)?;
        let mut user = load_user(&e, pool_id, &staker);
        if amount > user.stake {
            return Err(VotingError::InsufficientStake);
        }
        settle(&e, &pool, &mut user)?;

        user.stake = math::sub(user.stake, amount)?;
        pool.total_stake = math::sub(pool.total_stake, amount)?;
        save_user(&e, pool_id, &staker, &user);
        save_pool(&e, pool_id, &pool);

        events::emit_withdraw(&e, &staker, pool_id, amount);
        Ok(())
    }

    /// Settle and pay out `staker`'s whole reward buffer to `to`.
    /// Returns the amount transferred (0 leaves the token untouched).
    pub fn harvest(e: Env, pool_id: u32, staker: Address, to: Address) -> Result<i128, VotingError> {
        staker.require_auth();
        require_bound_staker(&load_pool(&e, pool_id)?, &staker)?;

        let pool = update_pool_internal(&e, pool_id)?;
        let mut user = load_user(&e, pool_id, &staker);
        settle(&e, &pool, &mut user)?;

        let amount = user.unclaimed;
        user.unclaimed = 0;
        save_user(&e, pool_id, &staker, &user);

        if amount > 0 {
            let token: Address = e
                .storage()
                .instance()
                .get(&DataKey::RewardToken)
                .ok_or(VotingError::NotInitialized)?;
            let contract = e.current_contract_address();
            TokenClient::new(&e, &token).transfer(&contract, &to, &amount);
        }

        events::emit_harvest(&e, &staker, pool_id, &to, amount);
        Ok(amount)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Reward `staker` could harvest right now. Matches what `harvest` would
    /// pay in the same timestamp, without mutating state.
    pub fn pending_reward(e: Env, pool_id: u32, staker: Address) -> Result<i128, VotingError> {
        let mut pool = load_pool(&e, pool_id)?;
        accrue(&e, &mut pool)?;
        let user = load_user(&e, pool_id, &staker);
        let pending = accrued_since_checkpoint(&e, &pool, &user)?;
        math::add(user.unclaimed, pending)
    }

    pub fn get_pool(e: Env, pool_id: u32) -> Result<PoolInfo, VotingError> {
        load_pool(&e, pool_id)
    }

    pub fn get_user_info(e: Env, pool_id: u32, staker: Address) -> UserInfo {
        load_user(&e, pool_id, &staker)
    }

    pub fn total_stake(e: Env, pool_id: u32) -> Result<i128, VotingError> {
        Ok(load_pool(&e, pool_id)?.total_stake)
    }

    pub fn pool_length(e: Env) -> u32 {
        pool_count(&e)
    }

    pub fn reward_per_second(e: Env) -> i128 {
        read_reward_per_second(&e)
    }

    pub fn total_alloc_weight(e: Env) -> u32 {
        read_total_alloc_weight(&e)
    }

    pub fn get_reward_token(e: Env) -> Result<Address, VotingError> {
        e.storage()
            .instance()
            .get(&DataKey::RewardToken)
            .ok_or(VotingError::NotInitialized)
    }

    pub fn get_admin(e: Env) -> Result<Address, VotingError> {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(VotingError::NotInitialized)
    }
}
