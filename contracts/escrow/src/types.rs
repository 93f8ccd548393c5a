//! # Types
//!
//! Shared data structures for the escrow deal registry.
//!
//! ## Design decisions
//!
//! ### Config / Ledger split
//!
//! A `Deal` is internally stored as two separate ledger entries:
//!
//! - [`DealConfig`] — written once when the deal is opened; never mutated.
//! - [`DealLedger`] — written on every payment, freeze, settlement step.
//!
//! The public API exposes the reconstructed [`Deal`] struct for convenience.
//!
//! ### State as a Finite-State Machine
//!
//! [`DealState`] enforces a strict forward-or-cancel lifecycle:
//!
//! ```text
//! Created ──► Paid ──► DepositFrozen ──► Complete
//!    │          │             │
//!    └──────────┴─────────────┴──► Cancelled
//! ```
//!
//! `Complete` and `Cancelled` are terminal. Backward transitions are
//! rejected by every entry point with `Error::InvalidState`.

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle state of an escrow deal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DealState {
    /// Opened; waiting for the buyer's deposit.
    Created,
    /// Buyer's deposit held by the contract.
    Paid,
    /// Seller posted the freeze fee; deposit locked for completion.
    DepositFrozen,
    /// Buyer confirmed; seller may collect the payout.
    Complete,
    /// Seller backed out; held funds returned.
    Cancelled,
}

/// Immutable deal terms, written once when the deal is opened.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DealConfig {
    pub id: u64,
    pub buyer: Address,
    pub seller: Address,
    pub cost: i128,
    pub description: String,
}

impl DealConfig {
    /// Amount the buyer must deposit to move the deal to `Paid`.
    pub fn deposit_required(&self) -> i128 {
        self.cost
    }

    /// Fee the seller must post to freeze the deposit: a tenth of the
    /// cost, truncated.
    pub fn freeze_fee_required(&self) -> i128 {
        self.cost / 10
    }
}

/// Mutable deal state, updated on every transition.
///
/// Kept small so the frequent writes (pay, freeze, settle) are cheap.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DealLedger {
    pub state: DealState,
    /// Buyer funds currently held by the contract for this deal.
    pub deposit: i128,
    /// Seller funds currently held by the contract for this deal.
    pub freeze_fee: i128,
}

/// Full representation of an escrow deal.
///
/// Used as the public API return type; reconstructed internally from
/// the split `DealConfig` + `DealLedger` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deal {
    /// Unique identifier (auto-incremented).
    pub id: u64,
    /// Address that pays the deposit and confirms completion.
    pub buyer: Address,
    /// Address that freezes the deposit and collects the payout.
    pub seller: Address,
    /// Agreed price of the underlying good or service.
    pub cost: i128,
    /// Free-form description of what is being traded.
    pub description: String,
    /// Current lifecycle state.
    pub state: DealState,
    /// Buyer funds held for this deal.
    pub deposit: i128,
    /// Seller funds held for this deal.
    pub freeze_fee: i128,
}
