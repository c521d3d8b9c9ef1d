use soroban_sdk::{contracttype, Address, Vec};

/// Registry entry of one adopted voter account.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterRecord {
    pub owner: Address,
    /// Emission ledger entry registered for this voter.
    pub pool_id: u32,
    /// Reward stream pool its harvests feed.
    pub reward_pool: Address,
    pub created_at: u64,
}

/// Outcome of one `harvest_all` sweep.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HarvestSummary {
    /// Voters whose harvest committed.
    pub harvested: u32,
    /// Emission forwarded by those voters.
    pub total_reward: i128,
    /// Voters whose harvest failed and was rolled back.
    pub failed: Vec<Address>,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    GovToken,
    RewardToken,
    /// The emission ledger this registry administers.
    Ledger,
    /// Voter account -> VoterRecord
    Voter(Address),
    /// Known voter accounts, in creation order.
    Voters,
}
