//! Time-lock rules: duration bounds, bonus schedule and bonus release.

use soroban_sdk::Env;
use vwave_common::math::{self, BPS_DENOMINATOR};
use vwave_errors::VotingError;

use crate::types::LockRecord;

pub const DAY: u64 = 86_400;
pub const YEAR: u64 = 365 * DAY;

pub const MIN_LOCK_DURATION: u64 = 7 * DAY;
pub const MAX_LOCK_DURATION: u64 = 4 * YEAR;

/// Bonus granted for a lock of `MAX_LOCK_DURATION`, in basis points of principal.
pub const MAX_BONUS_BPS: i128 = 4_000;

pub fn validate_duration(duration: u64) -> Result<(), VotingError> {
    if !(MIN_LOCK_DURATION..=MAX_LOCK_DURATION).contains(&duration) {
        return Err(VotingError::InvalidDuration);
    }
    Ok(())
}

/// `floor(amount * duration / MAX_LOCK_DURATION * 40%)`, computed in one division.
pub fn lock_bonus(e: &Env, amount: i128, duration: u64) -> Result<i128, VotingError> {
    validate_duration(duration)?;
    let numerator = math::mul(duration as i128, MAX_BONUS_BPS)?;
    let denominator = math::mul(MAX_LOCK_DURATION as i128, BPS_DENOMINATOR)?;
    math::mul_div_floor(e, amount, numerator, denominator)
}

/// Principal that is still time-locked at `now`.
pub fn locked_principal(lock: &Option<LockRecord>, now: u64) -> i128 {
    match lock {
        Some(lock) if now < lock.expiration => lock.amount,
        _ => 0,
    }
}

/// Bonus to release when `from_lock` units of a lock holding `lock_amount` are unvoted.
///
/// Proportional to the lock principal consumed; the whole bonus goes once the
/// lock principal is gone, so no dust survives the lock.
pub fn bonus_release(
    e: &Env,
    bonus: i128,
    from_lock: i128,
    lock_amount: i128,
) -> Result<i128, VotingError> {
    if from_lock <= 0 || bonus == 0 {
        return Ok(0);
    }
    if from_lock >= lock_amount {
        return Ok(bonus);
    }
    math::mul_div_floor(e, bonus, from_lock, lock_amount)
}
