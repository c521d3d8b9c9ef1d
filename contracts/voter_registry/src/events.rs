use soroban_sdk::{Address, Env, Symbol};

pub fn emit_initialized(e: &Env, admin: &Address, ledger: &Address) {
    e.events().publish(
        (Symbol::new(e, "registry_initialized"),),
        (admin.clone(), ledger.clone()),
    );
}

/// # Topics
/// * `Symbol` - "new_voter"
/// * `Address` - The new voter account
///
/// # Data
/// * `Address` - The owner
/// * `u32` - The ledger pool id
/// * `Address` - The bound reward pool
pub fn emit_new_voter(
    e: &Env,
    voter: &Address,
    owner: &Address,
    pool_id: u32,
    reward_pool: &Address,
) {
    let topics = (Symbol::new(e, "new_voter"), voter.clone());
    e.events()
        .publish(topics, (owner.clone(), pool_id, reward_pool.clone()));
}

pub fn emit_harvest_failed(e: &Env, voter: &Address) {
    e.events()
        .publish((Symbol::new(e, "harvest_failed"), voter.clone()), ());
}

/// # Data
/// * `u32` - Voters harvested
/// * `i128` - Total forwarded
/// * `u32` - Voters that failed
pub fn emit_harvest_all(e: &Env, harvested: u32, total_reward: i128, failed: u32) {
    e.events().publish(
        (Symbol::new(e, "harvest_all"),),
        (harvested, total_reward, failed),
    );
}

pub fn emit_voter_retired(e: &Env, voter: &Address) {
    e.events()
        .publish((Symbol::new(e, "voter_retired"), voter.clone()), ());
}

pub fn emit_voter_weight_set(e: &Env, voter: &Address, alloc_weight: u32) {
    e.events().publish(
        (Symbol::new(e, "voter_weight_set"), voter.clone()),
        alloc_weight,
    );
}

pub fn emit_admin_transferred(e: &Env, old_admin: &Address, new_admin: &Address) {
    e.events().publish(
        (Symbol::new(e, "admin_transferred"),),
        (old_admin.clone(), new_admin.clone()),
    );
}
