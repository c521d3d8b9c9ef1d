//! Reward Stream Pool Contract
//!
//! Streams a notified reward linearly over a fixed duration to everyone who
//! stakes the pool's stake token, pro rata to balance and time staked. The
//! accumulator `reward_per_token_stored` makes every operation O(1) in the
//! number of stakers.
//!
//! A single keeper tops the stream up via `notify_reward_amount`; in the
//! Vwave deployment the keeper is the voter account bound to this pool.

#![no_std]

mod events;
mod types;

pub use types::{DataKey, StakerInfo, StreamState};

use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env};
use vwave_common::math::{self, PRECISION};
use vwave_errors::VotingError;

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

fn read_rewards_duration(e: &Env) -> Result<u64, VotingError> {
    e.storage()
        .instance()
        .get(&DataKey::RewardsDuration)
        .ok_or(VotingError::NotInitialized)
}

fn load_state(e: &Env) -> StreamState {
    e.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

fn save_state(e: &Env, state: &StreamState) {
    e.storage().instance().set(&DataKey::State, state);
}

fn load_staker(e: &Env, staker: &Address) -> StakerInfo {
    e.storage()
        .persistent()
        .get(&DataKey::Staker(staker.clone()))
        .unwrap_or_default()
}

fn save_staker(e: &Env, staker: &Address, info: &StakerInfo) {
    e.storage()
        .persistent()
        .set(&DataKey::Staker(staker.clone()), info);
}

fn applicable_time(e: &Env, state: &StreamState) -> u64 {
    e.ledger().timestamp().min(state.period_finish)
}

fn current_reward_per_token(e: &Env, state: &StreamState) -> Result<i128, VotingError> {
    if state.total_supply == 0 {
        return Ok(state.reward_per_token_stored);
    }
    let elapsed = applicable_time(e, state).saturating_sub(state.last_update_time);
    let released = math::mul(elapsed as i128, state.reward_rate)?;
    let per_token = math::mul_div_floor(e, released, PRECISION, state.total_supply)?;
    math::add(state.reward_per_token_stored, per_token)
}

fn compute_earned(e: &Env, info: &StakerInfo, reward_per_token: i128) -> Result<i128, VotingError> {
    let delta = math::sub(reward_per_token, info.reward_per_token_paid)?;
    let fresh = math::mul_div_floor(e, info.balance, delta, PRECISION)?;
    math::add(info.rewards, fresh)
}

/// Checkpoint the global accumulator in memory.
fn update_global(e: &Env, state: &mut StreamState) -> Result<(), VotingError> {
    state.reward_per_token_stored = current_reward_per_token(e, state)?;
    state.last_update_time = applicable_time(e, state);
    Ok(())
}

/// Checkpoint the global accumulator and settle `staker` against it.
fn update_reward(
    e: &Env,
    state: &mut StreamState,
    staker: &Address,
) -> Result<StakerInfo, VotingError> {
    update_global(e, state)?;
    let mut info = load_staker(e, staker);
    info.rewards = compute_earned(e, &info, state.reward_per_token_stored)?;
    info.reward_per_token_paid = state.reward_per_token_stored;
    Ok(info)
}

fn withdraw_internal(e: &Env, staker: &Address, amount: i128) -> Result<(), VotingError> {
    if amount <= 0 {
        return Err(VotingError::InvalidAmount);
    }
    let mut state = load_state(e);
    let mut info = update_reward(e, &mut state, staker)?;
    if amount > info.balance {
        return Err(VotingError::InsufficientStakedBalance);
    }

    info.balance = math::sub(info.balance, amount)?;
    state.total_supply = math::sub(state.total_supply, amount)?;
    save_staker(e, staker, &info);
    save_state(e, &state);

    let stake_token = read_address(e, &DataKey::StakeToken)?;
    let contract = e.current_contract_address();
    TokenClient::new(e, &stake_token).transfer(&contract, staker, &amount);

    events::emit_withdrawn(e, staker, amount);
    Ok(())
}

fn get_reward_internal(e: &Env, staker: &Address) -> Result<i128, VotingError> {
    let mut state = load_state(e);
    let mut info = update_reward(e, &mut state, staker)?;
    let reward = info.rewards;
    info.rewards = 0;
    save_staker(e, staker, &info);
    save_state(e, &state);

    if reward > 0 {
        let reward_token = read_address(e, &DataKey::RewardToken)?;
        let contract = e.current_contract_address();
        TokenClient::new(e, &reward_token).transfer(&contract, staker, &reward);
        events::emit_reward_paid(e, staker, reward);
    }
    Ok(reward)
}

/// Reward-token balance that is not staked principal.
fn available_reward_balance(e: &Env, state: &StreamState) -> Result<i128, VotingError> {
    let reward_token = read_address(e, &DataKey::RewardToken)?;
    let stake_token = read_address(e, &DataKey::StakeToken)?;
    let held = TokenClient::new(e, &reward_token).balance(&e.current_contract_address());
    if reward_token == stake_token {
        math::sub(held, state.total_supply)
    } else {
        Ok(held)
    }
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct RewardStreamPool;

#[contractimpl]
impl RewardStreamPool {
    /// One-time setup. The keeper starts as `admin`.
    pub fn initialize(
        e: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
        rewards_duration: u64,
    ) -> Result<(), VotingError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(VotingError::AlreadyInitialized);
        }
        if rewards_duration == 0 {
            return Err(VotingError::InvalidRewardsDuration);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Keeper, &admin);
        e.storage()
            .instance()
            .set(&DataKey::StakeToken, &stake_token);
        e.storage()
            .instance()
            .set(&DataKey::RewardToken, &reward_token);
        e.storage()
            .instance()
            .set(&DataKey::RewardsDuration, &rewards_duration);
        save_state(&e, &StreamState::default());

        events::emit_initialized(&e, &admin, &stake_token, &reward_token, rewards_duration);
        Ok(())
    }

    // ── Staking ────────────────────────────────────────────────────────────

    /// Pull `amount` of the stake token from `staker`. Requires a prior
    /// `approve` for this contract.
    pub fn stake(e: Env, staker: Address, amount: i128) -> Result<(), VotingError> {
        staker.require_auth();
        if amount <= 0 {
            return Err(VotingError::InvalidAmount);
        }
        let mut state = load_state(&e);
        let mut info = update_reward(&e, &mut state, &staker)?;

        info.balance = math::add(info.balance, amount)?;
        state.total_supply = math::add(state.total_supply, amount)?;
        save_staker(&e, &staker, &info);
        save_state(&e, &state);

        let stake_token = read_address(&e, &DataKey::StakeToken)?;
        let contract = e.current_contract_address();
        TokenClient::new(&e, &stake_token).transfer_from(&contract, &staker, &contract, &amount);

        events::emit_staked(&e, &staker, amount);
        Ok(())
    }

    pub fn withdraw(e: Env, staker: Address, amount: i128) -> Result<(), VotingError> {
        staker.require_auth();
        withdraw_internal(&e, &staker, amount)
    }

    /// Pay out everything `staker` has earned. Returns the amount transferred.
    pub fn get_reward(e: Env, staker: Address) -> Result<i128, VotingError> {
        staker.require_auth();
        get_reward_internal(&e, &staker)
    }

    /// Withdraw the whole balance and claim. Returns the reward paid.
    pub fn exit(e: Env, staker: Address) -> Result<i128, VotingError> {
        staker.require_auth();
        let balance = load_staker(&e, &staker).balance;
        if balance > 0 {
            withdraw_internal(&e, &staker, balance)?;
        }
        get_reward_internal(&e, &staker)
    }

    // ── Keeper / admin ─────────────────────────────────────────────────────

    /// Start a new reward period of `rewards_duration` seconds from now.
    ///
    /// Whatever the running period has not yet released is rolled into the
    /// new rate. The reward must already sit in the contract.
    pub fn notify_reward_amount(e: Env, caller: Address, amount: i128) -> Result<(), VotingError> {
        caller.require_auth();
        if read_address(&e, &DataKey::Keeper)? != caller {
            return Err(VotingError::UnauthorizedKeeper);
        }
        if amount <= 0 {
            return Err(VotingError::InvalidAmount);
        }

        let duration = read_rewards_duration(&e)?;
        let mut state = load_state(&e);
        update_global(&e, &mut state)?;

        let now = e.ledger().timestamp();
        let total = if now >= state.period_finish {
            amount
        } else {
            let remaining = (state.period_finish - now) as i128;
            let leftover = math::mul(remaining, state.reward_rate)?;
            math::add(amount, leftover)?
        };
        // Flooring leaves up to `duration - 1` units unstreamed. They stay in
        // the balance and count toward the next notify's funding check.
        state.reward_rate = total / duration as i128;

        let available = available_reward_balance(&e, &state)?;
        if state.reward_rate > available / duration as i128 {
            return Err(VotingError::RewardTooHigh);
        }

        state.last_update_time = now;
        state.period_finish = now.checked_add(duration).ok_or(VotingError::Overflow)?;
        save_state(&e, &state);

        events::emit_reward_added(&e, amount, state.reward_rate, state.period_finish);
        Ok(())
    }

    pub fn set_keeper(e: Env, admin: Address, keeper: Address) -> Result<(), VotingError> {
        require_admin(&e, &admin)?;
        e.storage().instance().set(&DataKey::Keeper, &keeper);
        events::emit_keeper_set(&e, &keeper);
        Ok(())
    }

    /// Change the period length. Refused while a period is still streaming.
    pub fn set_rewards_duration(e: Env, admin: Address, duration: u64) -> Result<(), VotingError> {
        require_admin(&e, &admin)?;
        if duration == 0 {
            return Err(VotingError::InvalidRewardsDuration);
        }
        if e.ledger().timestamp() < load_state(&e).period_finish {
            return Err(VotingError::RewardPeriodActive);
        }
        e.storage()
            .instance()
            .set(&DataKey::RewardsDuration, &duration);
        events::emit_rewards_duration_set(&e, duration);
        Ok(())
    }

    /// Send out tokens sent here by mistake. Stake and reward tokens are off limits.
    pub fn recover_token(
        e: Env,
        admin: Address,
        token: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), VotingError> {
        require_admin(&e, &admin)?;
        if amount <= 0 {
            return Err(VotingError::InvalidAmount);
        }
        if token == read_address(&e, &DataKey::StakeToken)?
            || token == read_address(&e, &DataKey::RewardToken)?
        {
            return Err(VotingError::ProtectedToken);
        }
        TokenClient::new(&e, &token).transfer(&e.current_contract_address(), &to, &amount);
        events::emit_token_recovered(&e, &token, &to, amount);
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn earned(e: Env, account: Address) -> Result<i128, VotingError> {
        let state = load_state(&e);
        let rpt = current_reward_per_token(&e, &state)?;
        compute_earned(&e, &load_staker(&e, &account), rpt)
    }

    pub fn reward_per_token(e: Env) -> Result<i128, VotingError> {
        current_reward_per_token(&e, &load_state(&e))
    }

    pub fn last_time_reward_applicable(e: Env) -> u64 {
        applicable_time(&e, &load_state(&e))
    }

    pub fn total_supply(e: Env) -> i128 {
        load_state(&e).total_supply
    }

    pub fn balance_of(e: Env, account: Address) -> i128 {
        load_staker(&e, &account).balance
    }

    pub fn reward_rate(e: Env) -> i128 {
        load_state(&e).reward_rate
    }

    pub fn period_finish(e: Env) -> u64 {
        load_state(&e).period_finish
    }

    pub fn rewards_duration(e: Env) -> Result<u64, VotingError> {
        read_rewards_duration(&e)
    }

    /// Total released over one full period at the current rate.
    pub fn get_reward_for_duration(e: Env) -> Result<i128, VotingError> {
        math::mul(load_state(&e).reward_rate, read_rewards_duration(&e)? as i128)
    }

    pub fn get_keeper(e: Env) -> Result<Address, VotingError> {
        read_address(&e, &DataKey::Keeper)
    }

    pub fn get_admin(e: Env) -> Result<Address, VotingError> {
        read_address(&e, &DataKey::Admin)
    }

    pub fn get_stake_token(e: Env) -> Result<Address, VotingError> {
        read_address(&e, &DataKey::StakeToken)
    }

    pub fn get_reward_token(e: Env) -> Result<Address, VotingError> {
        read_address(&e, &DataKey::RewardToken)
    }
}
