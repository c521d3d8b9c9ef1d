//! Client interfaces for the synchronous cross-contract calls.
//!
//! Only the entry points another contract actually invokes are declared
//! here. A failed nested call aborts the caller's whole invocation unless the
//! caller explicitly uses the generated `try_*` variant.

use soroban_sdk::{contractclient, Address, Env};
use vwave_errors::VotingError;

/// Entry points of the emission ledger used by the registry and voters.
#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn initialize(
        env: Env,
        admin: Address,
        reward_token: Address,
        reward_per_second: i128,
    ) -> Result<(), VotingError>;

    fn register_pool(
        env: Env,
        admin: Address,
        alloc_weight: u32,
        staker: Address,
    ) -> Result<u32, VotingError>;

    fn set_pool(env: Env, admin: Address, pool_id: u32, alloc_weight: u32)
        -> Result<(), VotingError>;

    fn deposit(env: Env, pool_id: u32, staker: Address, amount: i128) -> Result<(), VotingError>;

    fn withdraw(env: Env, pool_id: u32, staker: Address, amount: i128)
        -> Result<(), VotingError>;

    fn harvest(env: Env, pool_id: u32, staker: Address, to: Address) -> Result<i128, VotingError>;

    fn pending_reward(env: Env, pool_id: u32, staker: Address) -> Result<i128, VotingError>;

    fn total_stake(env: Env, pool_id: u32) -> Result<i128, VotingError>;

    fn get_reward_token(env: Env) -> Result<Address, VotingError>;
}

/// Keeper entry point of a reward stream pool, plus the views a voter checks
/// before forwarding reward to it.
#[contractclient(name = "RewardPoolClient")]
pub trait RewardPoolInterface {
    fn notify_reward_amount(env: Env, caller: Address, amount: i128) -> Result<(), VotingError>;

    fn get_keeper(env: Env) -> Result<Address, VotingError>;

    fn get_reward_token(env: Env) -> Result<Address, VotingError>;
}

/// Registry-facing entry points of a voter account.
#[contractclient(name = "VoterClient")]
pub trait VoterInterface {
    fn initialize(
        env: Env,
        registry: Address,
        owner: Address,
        gov_token: Address,
        ledger: Address,
        pool_id: u32,
        reward_pool: Address,
    ) -> Result<(), VotingError>;

    fn harvest(env: Env) -> Result<i128, VotingError>;

    fn retire(env: Env, caller: Address) -> Result<(), VotingError>;

    fn vote_count(env: Env) -> i128;
}
