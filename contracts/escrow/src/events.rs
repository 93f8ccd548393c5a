//! # Events
//!
//! Typed payloads published by the registry. Every successful mutating
//! entry point publishes exactly one of these, with the topic pair
//! `(symbol, deal_id)` so indexers can filter per deal.
//!
//! | Topic symbol | Payload          |
//! |--------------|------------------|
//! | `created`    | [`DealCreated`]  |
//! | `payment`    | [`DepositPaid`]  |
//! | `frozen`     | [`DepositFrozen`]|
//! | `complete`   | [`DealCompleted`]|
//! | `cancelled`  | [`DealCancelled`]|
//! | `payout`     | [`SellerPaid`]   |

use soroban_sdk::{contracttype, Address};

/// A new deal was opened in state `Created`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DealCreated {
    pub deal_id: u64,
    pub buyer: Address,
    pub seller: Address,
    pub cost: i128,
}

/// The buyer paid the required deposit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositPaid {
    pub deal_id: u64,
    pub amount: i128,
}

/// The seller posted the freeze fee, locking the deposit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositFrozen {
    pub deal_id: u64,
    pub amount: i128,
}

/// The buyer confirmed completion.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DealCompleted {
    pub deal_id: u64,
}

/// The seller cancelled; held funds were returned.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DealCancelled {
    pub deal_id: u64,
    /// Deposit amount returned to the buyer (0 if none was held).
    pub refunded: i128,
}

/// The seller collected the payout of a completed deal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellerPaid {
    pub deal_id: u64,
    pub amount: i128,
}
