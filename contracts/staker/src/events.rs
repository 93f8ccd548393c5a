//! Typed event payloads published by the pool.

use soroban_sdk::{contracttype, Address};

use crate::types::RewardTier;

/// An account added funds to the pool.
///
/// Topic: `(symbol_short!("contrib"), account)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contributed {
    pub account: Address,
    /// Amount added by this call.
    pub amount: i128,
    /// Pool total after this call.
    pub total: i128,
}

/// A reward tier was assigned to a contributor.
///
/// Topic: `(symbol_short!("reward"), account)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardIssued {
    pub account: Address,
    pub tier: RewardTier,
}

/// The pool met its threshold and was sent to the external target.
///
/// Topic: `(symbol_short!("executed"),)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolExecuted {
    pub amount: i128,
}

/// The pool missed its threshold; contributions may be withdrawn.
///
/// Topic: `(symbol_short!("open_wd"),)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawOpened {
    pub total: i128,
}

/// A contributor took their funds back out of a failed pool.
///
/// Topic: `(symbol_short!("withdrawn"), account)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub account: Address,
    pub amount: i128,
}
