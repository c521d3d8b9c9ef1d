use soroban_sdk::{Address, Env, Symbol};

pub fn emit_initialized(
    e: &Env,
    admin: &Address,
    stake_token: &Address,
    reward_token: &Address,
    rewards_duration: u64,
) {
    let topics = (Symbol::new(e, "reward_pool_initialized"),);
    e.events().publish(
        topics,
        (
            admin.clone(),
            stake_token.clone(),
            reward_token.clone(),
            rewards_duration,
        ),
    );
}

pub fn emit_keeper_set(e: &Env, keeper: &Address) {
    e.events()
        .publish((Symbol::new(e, "keeper_set"),), keeper.clone());
}

pub fn emit_rewards_duration_set(e: &Env, duration: u64) {
    e.events()
        .publish((Symbol::new(e, "rewards_duration_set"),), duration);
}

/// # Topics
/// * `Symbol` - "staked"
/// * `Address` - The staker
///
/// # Data
/// * `i128` - The amount staked
pub fn emit_staked(e: &Env, staker: &Address, amount: i128) {
    let topics = (Symbol::new(e, "staked"), staker.clone());
    e.events().publish(topics, amount);
}

pub fn emit_withdrawn(e: &Env, staker: &Address, amount: i128) {
    let topics = (Symbol::new(e, "withdrawn"), staker.clone());
    e.events().publish(topics, amount);
}

/// Emitted with the exact amount transferred to the staker.
pub fn emit_reward_paid(e: &Env, staker: &Address, amount: i128) {
    let topics = (Symbol::new(e, "reward_paid"), staker.clone());
    e.events().publish(topics, amount);
}

/// Emitted when the keeper starts or extends a reward period.
///
/// # Topics
/// * `Symbol` - "reward_added"
///
/// # Data
/// * `i128` - The amount notified
/// * `i128` - The resulting reward rate
/// * `u64` - The new period finish
pub fn emit_reward_added(e: &Env, amount: i128, reward_rate: i128, period_finish: u64) {
    e.events().publish(
        (Symbol::new(e, "reward_added"),),
        (amount, reward_rate, period_finish),
    );
}

pub fn emit_token_recovered(e: &Env, token: &Address, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "token_recovered"), token.clone());
    e.events().publish(topics, (to.clone(), amount));
}
