#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `VotingError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and role errors (codes 100-199).
    Authorization,
    /// Voter account lifecycle and lock errors (codes 200-299).
    Voting,
    /// Emission ledger errors (codes 300-399).
    Ledger,
    /// Reward stream pool errors (codes 400-499).
    RewardPool,
    /// Voter registry errors (codes 500-599).
    Registry,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  VotingError
/// @notice Canonical error enum shared by all Vwave contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Voting
///   300 - 399 : Ledger
///   400 - 499 : RewardPool
///   500 - 599 : Registry
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum VotingError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    /// Contracts: ledger, reward pool, voter, registry
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    /// Contracts: ledger, reward pool, voter, registry
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the stored admin.
    /// Contracts: ledger, reward pool, registry
    NotAdmin = 100,

    /// `retire` was invoked by someone other than the bound registry.
    /// Contracts: voter
    UnauthorizedRetire = 101,

    /// `notify_reward_amount` was invoked by someone other than the keeper.
    /// Contracts: reward pool
    UnauthorizedKeeper = 102,

    /// Ledger stake change or harvest by an address other than the pool's bound staker.
    /// Contracts: ledger
    UnauthorizedStaker = 103,

    // --- Voting (200-299) ---
    /// Amount argument must be strictly positive.
    /// Contracts: ledger, reward pool, voter
    InvalidAmount = 200,

    /// Lock duration is outside `[MIN_LOCK_DURATION, MAX_LOCK_DURATION]`.
    /// Contracts: voter
    InvalidDuration = 201,

    /// Unvote amount exceeds the principal that is not time-locked.
    /// Contracts: voter
    InsufficientUnlockedBalance = 202,

    /// New voting power cannot be added while the voter is paused.
    /// Contracts: voter
    VotingPaused = 203,

    /// The voter has been retired; only principal withdrawal remains.
    /// Contracts: voter
    VoterRetired = 204,

    /// The voter is already paused.
    /// Contracts: voter
    AlreadyPaused = 205,

    /// The voter is not paused.
    /// Contracts: voter
    NotPaused = 206,

    /// Operation is reserved for a retired voter.
    /// Contracts: voter
    NotRetired = 207,

    // --- Ledger (300-399) ---
    /// No emission pool exists for the given id.
    /// Contracts: ledger
    PoolNotFound = 300,

    /// Withdrawal exceeds the staker's registered stake.
    /// Contracts: ledger
    InsufficientStake = 301,

    // --- RewardPool (400-499) ---
    /// Withdrawal exceeds the staker's staked balance.
    /// Contracts: reward pool
    InsufficientStakedBalance = 400,

    /// Notified reward would pay out more than the pool holds.
    /// Contracts: reward pool
    RewardTooHigh = 401,

    /// Rewards duration must be strictly positive.
    /// Contracts: reward pool
    InvalidRewardsDuration = 402,

    /// Rewards duration cannot change while a reward period is running.
    /// Contracts: reward pool
    RewardPeriodActive = 403,

    /// Stake and reward tokens cannot be recovered.
    /// Contracts: reward pool
    ProtectedToken = 404,

    // --- Registry (500-599) ---
    /// Address is not a currently registered voter.
    /// Contracts: registry
    UnknownVoter = 500,

    /// Voter address is already registered.
    /// Contracts: registry
    VoterAlreadyRegistered = 501,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,

    /// Integer underflow (or a negative operand) in checked arithmetic.
    Underflow = 701,

    /// Division by zero in checked arithmetic.
    DivisionByZero = 702,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every VotingError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for VotingError {
    fn category(&self) -> ErrorCategory {
        match self {
            VotingError::NotInitialized | VotingError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            VotingError::NotAdmin
            | VotingError::UnauthorizedRetire
            | VotingError::UnauthorizedKeeper
            | VotingError::UnauthorizedStaker => ErrorCategory::Authorization,

            VotingError::InvalidAmount
            | VotingError::InvalidDuration
            | VotingError::InsufficientUnlockedBalance
            | VotingError::VotingPaused
            | VotingError::VoterRetired
            | VotingError::AlreadyPaused
            | VotingError::NotPaused
            | VotingError::NotRetired => ErrorCategory::Voting,

            VotingError::PoolNotFound | VotingError::InsufficientStake => ErrorCategory::Ledger,

            VotingError::InsufficientStakedBalance
            | VotingError::RewardTooHigh
            | VotingError::InvalidRewardsDuration
            | VotingError::RewardPeriodActive
            | VotingError::ProtectedToken => ErrorCategory::RewardPool,

            VotingError::UnknownVoter | VotingError::VoterAlreadyRegistered => {
                ErrorCategory::Registry
            }

            VotingError::Overflow | VotingError::Underflow | VotingError::DivisionByZero => {
                ErrorCategory::Arithmetic
            }
        }
    }

    fn description(&self) -> &'static str {
        match self {
            VotingError::NotInitialized => "Contract has not been initialized",
            VotingError::AlreadyInitialized => "Contract has already been initialized",
            VotingError::NotAdmin => "Caller is not the admin",
            VotingError::UnauthorizedRetire => "Only the voter registry can retire a voter",
            VotingError::UnauthorizedKeeper => "Caller is not the reward pool keeper",
            VotingError::UnauthorizedStaker => "Staker is not bound to this emission pool",
            VotingError::InvalidAmount => "Amount must be strictly positive (> 0)",
            VotingError::InvalidDuration => "Lock duration is outside the allowed range",
            VotingError::InsufficientUnlockedBalance => {
                "Amount exceeds the unlocked voting balance"
            }
            VotingError::VotingPaused => "Voting is paused for this voter",
            VotingError::VoterRetired => "Voter has been retired",
            VotingError::AlreadyPaused => "Voter is already paused",
            VotingError::NotPaused => "Voter is not paused",
            VotingError::NotRetired => "Voter is not retired",
            VotingError::PoolNotFound => "No emission pool found for the given id",
            VotingError::InsufficientStake => "Withdrawal exceeds the registered stake",
            VotingError::InsufficientStakedBalance => "Withdrawal exceeds the staked balance",
            VotingError::RewardTooHigh => "Reward rate exceeds the pool's reward balance",
            VotingError::InvalidRewardsDuration => "Rewards duration must be positive",
            VotingError::RewardPeriodActive => "Reward period has not finished yet",
            VotingError::ProtectedToken => "Stake and reward tokens cannot be recovered",
            VotingError::UnknownVoter => "Address is not a registered voter",
            VotingError::VoterAlreadyRegistered => "Voter is already registered",
            VotingError::Overflow => "Integer overflow in checked arithmetic",
            VotingError::Underflow => "Integer underflow in checked arithmetic",
            VotingError::DivisionByZero => "Division by zero in checked arithmetic",
        }
    }
}

#[cfg(test)]
mod test_errors;
