use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the ledger is configured.
///
/// # Topics
/// * `Symbol` - "ledger_initialized"
///
/// # Data
/// * `Address` - The admin
/// * `Address` - The reward token
/// * `i128` - The emission per second
pub fn emit_initialized(e: &Env, admin: &Address, reward_token: &Address, per_second: i128) {
    let topics = (Symbol::new(e, "ledger_initialized"),);
    e.events()
        .publish(topics, (admin.clone(), reward_token.clone(), per_second));
}

/// Emitted when a new pool is registered.
///
/// # Topics
/// * `Symbol` - "pool_registered"
/// * `u32` - The new pool id
///
/// # Data
/// * `u32` - The allocation weight
/// * `Address` - The only staker allowed in the pool
pub fn emit_pool_registered(e: &Env, pool_id: u32, alloc_weight: u32, staker: &Address) {
    let topics = (Symbol::new(e, "pool_registered"), pool_id);
    e.events().publish(topics, (alloc_weight, staker.clone()));
}

/// Emitted when a pool's allocation weight changes.
///
/// # Data
/// * `u32` - The previous weight
/// * `u32` - The new weight
pub fn emit_pool_set(e: &Env, pool_id: u32, old_weight: u32, new_weight: u32) {
    let topics = (Symbol::new(e, "pool_set"), pool_id);
    e.events().publish(topics, (old_weight, new_weight));
}

pub fn emit_reward_per_second_set(e: &Env, per_second: i128) {
    e.events()
        .publish((Symbol::new(e, "reward_per_second_set"),), per_second);
}

/// Emitted whenever a checkpoint advances a pool's accrual time.
///
/// # Topics
/// * `Symbol` - "pool_updated"
/// * `u32` - The pool id
///
/// # Data
/// * `u64` - The new `last_accrual_time`
/// * `i128` - The pool's total stake
/// * `i128` - The new `acc_reward_per_share`
pub fn emit_pool_updated(
    e: &Env,
    pool_id: u32,
    last_accrual_time: u64,
    total_stake: i128,
    acc_reward_per_share: i128,
) {
    let topics = (Symbol::new(e, "pool_updated"), pool_id);
    e.events()
        .publish(topics, (last_accrual_time, total_stake, acc_reward_per_share));
}

/// # Data
/// * `u32` - The pool id
/// * `i128` - The stake added
pub fn emit_deposit(e: &Env, staker: &Address, pool_id: u32, amount: i128) {
    let topics = (Symbol::new(e, "deposit"), staker.clone());
    e.events().publish(topics, (pool_id, amount));
}

pub fn emit_withdraw(e: &Env, staker: &Address, pool_id: u32, amount: i128) {
    let topics = (Symbol::new(e, "withdraw"), staker.clone());
    e.events().publish(topics, (pool_id, amount));
}

/// # Data
/// * `u32` - The pool id
/// * `Address` - The recipient of the reward
/// * `i128` - The amount paid out
pub fn emit_harvest(e: &Env, staker: &Address, pool_id: u32, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "harvest"), staker.clone());
    e.events().publish(topics, (pool_id, to.clone(), amount));
}
