#![cfg(test)]

use crate::lock::*;
use crate::LockRecord;
use soroban_sdk::Env;
use vwave_errors::VotingError;

#[test]
fn test_duration_bounds() {
    assert_eq!(validate_duration(MIN_LOCK_DURATION), Ok(()));
    assert_eq!(validate_duration(MAX_LOCK_DURATION), Ok(()));
    assert_eq!(validate_duration(60), Err(VotingError::InvalidDuration));
    assert_eq!(
        validate_duration(MIN_LOCK_DURATION - 1),
        Err(VotingError::InvalidDuration)
    );
    assert_eq!(validate_duration(5 * YEAR), Err(VotingError::InvalidDuration));
}

#[test]
fn test_bonus_schedule() {
    let e = Env::default();
    assert_eq!(lock_bonus(&e, 100, YEAR), Ok(10));
    assert_eq!(lock_bonus(&e, 100, 2 * YEAR), Ok(20));
    assert_eq!(lock_bonus(&e, 100, MAX_LOCK_DURATION), Ok(40));
    // 100 * 7d / 4y * 40% = 0.19..., floored.
    assert_eq!(lock_bonus(&e, 100, MIN_LOCK_DURATION), Ok(0));
}

#[test]
fn test_bonus_holds_for_large_principal() {
    let e = Env::default();
    let principal = 1_000_000_000 * 1_000_000_000_000_000_000_i128;
    assert_eq!(lock_bonus(&e, principal, MAX_LOCK_DURATION), Ok(principal * 2 / 5));
}

#[test]
fn test_locked_principal_expires() {
    let lock = Some(LockRecord {
        amount: 50,
        expiration: 1_000,
    });
    assert_eq!(locked_principal(&lock, 999), 50);
    assert_eq!(locked_principal(&lock, 1_000), 0);
    assert_eq!(locked_principal(&None, 0), 0);
}

#[test]
fn test_bonus_release_is_proportional_and_complete() {
    let e = Env::default();
    assert_eq!(bonus_release(&e, 20, 0, 100), Ok(0));
    assert_eq!(bonus_release(&e, 20, 25, 100), Ok(5));
    assert_eq!(bonus_release(&e, 20, 33, 100), Ok(6));
    assert_eq!(bonus_release(&e, 20, 100, 100), Ok(20));
}
