extern crate std;

use crate::{ErrorCategory, ErrorExt, VotingError};
use std::vec::Vec;

fn all_variants() -> Vec<VotingError> {
    std::vec![
        VotingError::NotInitialized,
        VotingError::AlreadyInitialized,
        VotingError::NotAdmin,
        VotingError::UnauthorizedRetire,
        VotingError::UnauthorizedKeeper,
        VotingError::UnauthorizedStaker,
        VotingError::InvalidAmount,
        VotingError::InvalidDuration,
        VotingError::InsufficientUnlockedBalance,
        VotingError::VotingPaused,
        VotingError::VoterRetired,
        VotingError::AlreadyPaused,
        VotingError::NotPaused,
        VotingError::NotRetired,
        VotingError::PoolNotFound,
        VotingError::InsufficientStake,
        VotingError::InsufficientStakedBalance,
        VotingError::RewardTooHigh,
        VotingError::InvalidRewardsDuration,
        VotingError::RewardPeriodActive,
        VotingError::ProtectedToken,
        VotingError::UnknownVoter,
        VotingError::VoterAlreadyRegistered,
        VotingError::Overflow,
        VotingError::Underflow,
        VotingError::DivisionByZero,
    ]
}

// --- Wire code tests ---

#[test]
fn test_codes_initialization() {
    assert_eq!(VotingError::NotInitialized as u32, 1);
    assert_eq!(VotingError::AlreadyInitialized as u32, 2);
}

#[test]
fn test_codes_authorization() {
    assert_eq!(VotingError::NotAdmin as u32, 100);
    assert_eq!(VotingError::UnauthorizedRetire as u32, 101);
    assert_eq!(VotingError::UnauthorizedKeeper as u32, 102);
    assert_eq!(VotingError::UnauthorizedStaker as u32, 103);
}

#[test]
fn test_codes_voting() {
    assert_eq!(VotingError::InvalidAmount as u32, 200);
    assert_eq!(VotingError::InvalidDuration as u32, 201);
    assert_eq!(VotingError::InsufficientUnlockedBalance as u32, 202);
    assert_eq!(VotingError::VotingPaused as u32, 203);
    assert_eq!(VotingError::VoterRetired as u32, 204);
    assert_eq!(VotingError::AlreadyPaused as u32, 205);
    assert_eq!(VotingError::NotPaused as u32, 206);
    assert_eq!(VotingError::NotRetired as u32, 207);
}

#[test]
fn test_codes_ledger_and_pool() {
    assert_eq!(VotingError::PoolNotFound as u32, 300);
    assert_eq!(VotingError::InsufficientStake as u32, 301);
    assert_eq!(VotingError::InsufficientStakedBalance as u32, 400);
    assert_eq!(VotingError::RewardTooHigh as u32, 401);
    assert_eq!(VotingError::InvalidRewardsDuration as u32, 402);
    assert_eq!(VotingError::RewardPeriodActive as u32, 403);
    assert_eq!(VotingError::ProtectedToken as u32, 404);
}

#[test]
fn test_codes_registry_and_arithmetic() {
    assert_eq!(VotingError::UnknownVoter as u32, 500);
    assert_eq!(VotingError::VoterAlreadyRegistered as u32, 501);
    assert_eq!(VotingError::Overflow as u32, 700);
    assert_eq!(VotingError::Underflow as u32, 701);
    assert_eq!(VotingError::DivisionByZero as u32, 702);
}

#[test]
fn test_codes_are_unique() {
    let variants = all_variants();
    for (i, a) in variants.iter().enumerate() {
        for b in variants.iter().skip(i + 1) {
            assert_ne!(*a as u32, *b as u32, "duplicate code for {:?} / {:?}", a, b);
        }
    }
}

#[test]
fn test_category_matches_code_block() {
    for err in all_variants() {
        let expected = match err as u32 {
            1..=99 => ErrorCategory::Initialization,
            100..=199 => ErrorCategory::Authorization,
            200..=299 => ErrorCategory::Voting,
            300..=399 => ErrorCategory::Ledger,
            400..=499 => ErrorCategory::RewardPool,
            500..=599 => ErrorCategory::Registry,
            700..=799 => ErrorCategory::Arithmetic,
            other => panic!("code {} outside known blocks", other),
        };
        assert_eq!(err.category(), expected, "{:?}", err);
    }
}

#[test]
fn test_descriptions_non_empty_and_distinct() {
    let variants = all_variants();
    for err in variants.iter() {
        assert!(!err.description().is_empty());
    }
    for (i, a) in variants.iter().enumerate() {
        for b in variants.iter().skip(i + 1) {
            assert_ne!(a.description(), b.description());
        }
    }
}

#[test]
fn test_caller_facing_error_kinds_are_distinct() {
    // The error kinds callers branch on must never collapse into one code.
    let kinds = [
        VotingError::InvalidDuration,
        VotingError::InsufficientUnlockedBalance,
        VotingError::VotingPaused,
        VotingError::UnauthorizedRetire,
        VotingError::UnknownVoter,
        VotingError::UnauthorizedKeeper,
        VotingError::UnauthorizedStaker,
    ];
    for (i, a) in kinds.iter().enumerate() {
        for b in kinds.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
