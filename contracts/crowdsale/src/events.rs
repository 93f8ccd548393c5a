//! Typed event payloads published by the sale.

use soroban_sdk::{contracttype, Address};

/// A buyer exchanged settlement for tokens.
///
/// Topic: `(symbol_short!("purchase"), buyer)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensPurchased {
    pub buyer: Address,
    /// Settlement paid.
    pub amount: i128,
    /// Tokens credited (`amount * rate`).
    pub tokens: i128,
}

/// The one-shot post-sale team issuance.
///
/// Topic: `(symbol_short!("team"),)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TeamTokensIssued {
    /// Extra tokens credited to the owner.
    pub amount: i128,
}
