use soroban_sdk::{contracttype, Address};

/// Lifecycle of a voter account. `Retired` is terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoterStatus {
    Active,
    Paused,
    Retired,
}

/// Bindings fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterConfig {
    /// The registry that created this account; the only identity allowed to retire it.
    pub registry: Address,
    pub owner: Address,
    pub gov_token: Address,
    pub ledger: Address,
    /// Entry of the emission ledger this account stakes into.
    pub pool_id: u32,
    /// Destination of harvested emission.
    pub reward_pool: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterState {
    pub status: VoterStatus,
    /// Governance tokens held, locked and unlocked.
    pub balance: i128,
    /// Voting power granted by the tracked lock on top of principal. Not redeemable.
    pub bonus_balance: i128,
}

/// The single tracked time-lock. A new lock overwrites it and its bonus.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockRecord {
    pub amount: i128,
    pub expiration: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    State,
    Lock,
}
