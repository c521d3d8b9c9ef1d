#![no_std]

//! Shared building blocks for the Vwave contracts.
//!
//! - [`math`]: checked, floor-rounding fixed-point helpers used by every
//!   accrual formula.
//! - [`interfaces`]: typed clients for the synchronous cross-contract calls
//!   between the voter, the emission ledger and the reward pools.

pub mod interfaces;
pub mod math;

pub use interfaces::{LedgerClient, RewardPoolClient, VoterClient};
pub use math::{BPS_DENOMINATOR, PRECISION};
