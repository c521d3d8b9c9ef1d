//! Overflow-safe arithmetic for reward accounting.
//!
//! Every function returns a `VotingError` instead of wrapping. All division
//! floors; dust from flooring stays in the contract and is never tracked.

use soroban_sdk::{Env, I256};
use vwave_errors::VotingError;

/// Fixed-point scale of every cumulative reward-per-unit accumulator.
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

/// Basis-point denominator (100 bps = 1 %).
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Checked `i128` addition.
#[inline]
pub fn add(a: i128, b: i128) -> Result<i128, VotingError> {
    a.checked_add(b).ok_or(VotingError::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub(a: i128, b: i128) -> Result<i128, VotingError> {
    a.checked_sub(b).ok_or(VotingError::Underflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul(a: i128, b: i128) -> Result<i128, VotingError> {
    a.checked_mul(b).ok_or(VotingError::Overflow)
}

/// `floor(a * b / denominator)` for non-negative operands.
///
/// The product is formed in 256 bits when it does not fit in `i128`, so only
/// a quotient that itself exceeds `i128` reports `Overflow`.
pub fn mul_div_floor(e: &Env, a: i128, b: i128, denominator: i128) -> Result<i128, VotingError> {
    if denominator == 0 {
        return Err(VotingError::DivisionByZero);
    }
    if a < 0 || b < 0 || denominator < 0 {
        return Err(VotingError::Underflow);
    }
    if a == 0 || b == 0 {
        return Ok(0);
    }
    if let Some(product) = a.checked_mul(b) {
        return Ok(product / denominator);
    }

    let wide = I256::from_i128(e, a)
        .mul(&I256::from_i128(e, b))
        .div(&I256::from_i128(e, denominator));
    wide.to_i128().ok_or(VotingError::Overflow)
}
