//! Shared data structures for the staking pool.

use soroban_sdk::{contracttype, Address};

/// One whole unit of the settlement token (7 decimals).
pub const TOKEN_UNIT: i128 = 10_000_000;

/// Smallest contribution that earns Gold.
pub const GOLD_MIN: i128 = TOKEN_UNIT / 2;
/// Smallest contribution that earns Silver.
pub const SILVER_MIN: i128 = TOKEN_UNIT / 4;

/// Reward category earned by a contributor, ordered by contribution size.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RewardTier {
    None = 0,
    Bronze = 1,
    Silver = 2,
    Gold = 3,
}

impl RewardTier {
    /// Band a cumulative contribution into its tier.
    pub fn for_contribution(amount: i128) -> RewardTier {
        if amount >= GOLD_MIN {
            RewardTier::Gold
        } else if amount >= SILVER_MIN {
            RewardTier::Silver
        } else if amount > 0 {
            RewardTier::Bronze
        } else {
            RewardTier::None
        }
    }
}

/// Immutable pool parameters, written once at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// May trigger reward issuance.
    pub owner: Address,
    /// Settlement token contributions are made in.
    pub token: Address,
    /// Receives the whole pool when the threshold is met.
    pub external_target: Address,
    /// Ledger timestamp closing the contribution window.
    pub deadline: u64,
    /// Total the pool must reach by the deadline to settle outward.
    pub threshold: i128,
}
