use soroban_sdk::{contracttype, Address};

// ─── Pool state ────────────────────────────────────────────────────────────

/// One registered stake entry of the ledger, bound to a single staker.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    /// The only address allowed to deposit, withdraw or harvest here.
    pub staker: Address,
    /// Relative share of the global emission rate.
    pub alloc_weight: u32,
    /// Cumulative reward per unit of stake, scaled by `PRECISION`. Never decreases.
    pub acc_reward_per_share: i128,
    /// Ledger timestamp of the last accrual checkpoint.
    pub last_accrual_time: u64,
    /// Sum of all stake currently registered to this pool.
    pub total_stake: i128,
}

/// A staker's position in one pool.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserInfo {
    /// Registered stake (voting power).
    pub stake: i128,
    /// `acc_reward_per_share` captured at the last settlement.
    pub reward_checkpoint: i128,
    /// Settled but not yet harvested reward.
    pub unclaimed: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Ledger admin (the voter registry in production).
    Admin,
    /// Token paid out by `harvest`.
    RewardToken,
    /// Global emission per second, split by allocation weight.
    RewardPerSecond,
    /// Sum of all pools' allocation weights.
    TotalAllocWeight,
    /// Number of registered pools; ids are `0..PoolCount`.
    PoolCount,
    /// Pool id -> PoolInfo.
    Pool(u32),
    /// (Pool id, staker) -> UserInfo.
    User(u32, Address),
}
