//! Shared data structures for the crowdsale.

use soroban_sdk::{contracttype, Address};

/// Immutable sale parameters, written once at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    /// Receives the settlement for every purchase and the team tokens.
    pub owner: Address,
    /// Settlement token buyers pay with.
    pub token: Address,
    /// Tokens credited per unit of settlement.
    pub rate: i128,
    /// Maximum total raise; 0 means unlimited.
    pub hardcap: i128,
    /// Ledger timestamp after which team tokens may be issued.
    pub sale_end: u64,
}
