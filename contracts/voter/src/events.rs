use soroban_sdk::{Address, Env, Symbol};

/// # Topics
/// * `Symbol` - "voter_initialized"
/// * `Address` - The owner
///
/// # Data
/// * `Address` - The registry
/// * `u32` - The ledger pool id
/// * `Address` - The bound reward pool
pub fn emit_initialized(
    e: &Env,
    owner: &Address,
    registry: &Address,
    pool_id: u32,
    reward_pool: &Address,
) {
    let topics = (Symbol::new(e, "voter_initialized"), owner.clone());
    e.events()
        .publish(topics, (registry.clone(), pool_id, reward_pool.clone()));
}

/// # Data
/// * `i128` - The principal added
/// * `i128` - Voting power afterwards
pub fn emit_vote_recorded(e: &Env, owner: &Address, amount: i128, vote_count: i128) {
    let topics = (Symbol::new(e, "vote_recorded"), owner.clone());
    e.events().publish(topics, (amount, vote_count));
}

/// # Data
/// * `i128` - The principal locked
/// * `u64` - The lock duration
/// * `i128` - The bonus granted
/// * `u64` - The lock expiration
pub fn emit_vote_locked(
    e: &Env,
    owner: &Address,
    amount: i128,
    duration: u64,
    bonus: i128,
    expiration: u64,
) {
    let topics = (Symbol::new(e, "vote_locked"), owner.clone());
    e.events()
        .publish(topics, (amount, duration, bonus, expiration));
}

/// # Data
/// * `i128` - The principal returned
/// * `i128` - Bonus released with it
/// * `i128` - Voting power afterwards
pub fn emit_unvote_recorded(
    e: &Env,
    owner: &Address,
    amount: i128,
    bonus_released: i128,
    vote_count: i128,
) {
    let topics = (Symbol::new(e, "unvote_recorded"), owner.clone());
    e.events()
        .publish(topics, (amount, bonus_released, vote_count));
}

pub fn emit_reward_harvested(e: &Env, reward_pool: &Address, amount: i128) {
    let topics = (Symbol::new(e, "reward_harvested"), reward_pool.clone());
    e.events().publish(topics, amount);
}

pub fn emit_paused(e: &Env, owner: &Address) {
    e.events()
        .publish((Symbol::new(e, "paused"),), owner.clone());
}

pub fn emit_unpaused(e: &Env, owner: &Address) {
    e.events()
        .publish((Symbol::new(e, "unpaused"),), owner.clone());
}

/// # Data
/// * `i128` - Principal still held for the owner to unvote
pub fn emit_retired(e: &Env, registry: &Address, balance: i128) {
    let topics = (Symbol::new(e, "retired"), registry.clone());
    e.events().publish(topics, balance);
}
