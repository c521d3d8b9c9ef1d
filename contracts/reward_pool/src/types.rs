use soroban_sdk::{contracttype, Address};

/// Global streaming state.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StreamState {
    /// Sum of every staker's balance.
    pub total_supply: i128,
    /// Reward units released per second until `period_finish`.
    pub reward_rate: i128,
    /// Cumulative reward per staked unit, scaled by `PRECISION`.
    pub reward_per_token_stored: i128,
    pub last_update_time: u64,
    pub period_finish: u64,
}

/// Per-account position.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakerInfo {
    pub balance: i128,
    /// `reward_per_token` captured at the last settlement.
    pub reward_per_token_paid: i128,
    /// Settled, unclaimed reward.
    pub rewards: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    /// Only identity allowed to call `notify_reward_amount`.
    Keeper,
    StakeToken,
    RewardToken,
    /// Length in seconds of each reward period.
    RewardsDuration,
    State,
    Staker(Address),
}
