//! # Crowdsale
//!
//! Rate-based token sale. Buyers pay in the settlement token, which goes
//! straight to the sale owner; in exchange they are credited
//! `amount * rate` sale tokens in contract-internal balances. An optional
//! hardcap bounds the total raise, and once the sale window closes the
//! owner may mint themselves a one-shot 10% team allocation.
//!
//! | Phase     | Entry Point(s)                          |
//! |-----------|-----------------------------------------|
//! | Bootstrap | [`Crowdsale::init`]                     |
//! | Sale      | [`Crowdsale::buy_tokens`]               |
//! | Close-out | [`Crowdsale::issue_tokens_to_team`]     |
//! | Queries   | `balance_of`, `total_raised`, `total_tokens_issued`, `get_config`, `team_tokens_issued` |

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, symbol_short, token, Address, Env};

mod events;
mod storage;
mod types;


use events::{TeamTokensIssued, TokensPurchased};
pub use types::SaleConfig;

/// Team allocation issued after the sale, as a percentage of all tokens
/// sold. Computed with truncating division.
const TEAM_PERCENT: i128 = 10;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidArgument = 4,
    HardcapReached = 5,
    TooEarly = 6,
    AlreadyIssued = 7,
    InsufficientFunds = 8,
}

#[contract]
pub struct Crowdsale;

#[contractimpl]
impl Crowdsale {
    /// Initialise the sale.
    ///
    /// `hardcap` of 0 means the raise is unbounded. Must be called
    /// exactly once; subsequent calls fail with `AlreadyInitialized`.
    pub fn init(
        env: Env,
        owner: Address,
        token: Address,
        rate: i128,
        hardcap: i128,
        sale_end: u64,
    ) -> Result<(), Error> {
        owner.require_auth();
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if rate <= 0 || hardcap < 0 || sale_end <= env.ledger().timestamp() {
            return Err(Error::InvalidArgument);
        }
        storage::set_config(
            &env,
            &SaleConfig {
                owner,
                token,
                rate,
                hardcap,
                sale_end,
            },
        );
        Ok(())
    }

    /// Exchange `amount` of settlement for `amount * rate` sale tokens.
    ///
    /// Settlement moves directly to the sale owner. Returns the tokens
    /// credited.
    ///
    /// # Errors
    /// - `InvalidArgument` if `amount <= 0`.
    /// - `HardcapReached` if the purchase would push the raise past a
    ///   nonzero hardcap.
    /// - `InsufficientFunds` if the buyer cannot cover `amount`.
    pub fn buy_tokens(env: Env, buyer: Address, amount: i128) -> Result<i128, Error> {
        buyer.require_auth();
        let config = storage::config(&env)?;
        if amount <= 0 {
            return Err(Error::InvalidArgument);
        }
        let raised = storage::total_raised(&env);
        if config.hardcap > 0 && raised + amount > config.hardcap {
            return Err(Error::HardcapReached);
        }

        let client = token::Client::new(&env, &config.token);
        if client.balance(&buyer) < amount {
            return Err(Error::InsufficientFunds);
        }
        client.transfer(&buyer, &config.owner, &amount);

        let tokens = amount * config.rate;
        storage::add_balance(&env, &buyer, tokens);
        storage::set_total_raised(&env, raised + amount);
        storage::set_tokens_issued(&env, storage::tokens_issued(&env) + tokens);

        env.events().publish(
            (symbol_short!("purchase"), buyer.clone()),
            TokensPurchased {
                buyer: buyer.clone(),
                amount,
                tokens,
            },
        );
        Ok(tokens)
    }

    /// Credit the owner with `total_tokens_issued * 10 / 100` extra
    /// tokens, once, after the sale window closes. Returns the amount.
    ///
    /// # Errors
    /// - `Unauthorized` unless `caller` is the sale owner.
    /// - `TooEarly` before `sale_end`.
    /// - `AlreadyIssued` on any call after the first success.
    pub fn issue_tokens_to_team(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let config = storage::config(&env)?;
        if caller != config.owner {
            return Err(Error::Unauthorized);
        }
        if env.ledger().timestamp() < config.sale_end {
            return Err(Error::TooEarly);
        }
        if storage::team_issued(&env) {
            return Err(Error::AlreadyIssued);
        }

        let issued = storage::tokens_issued(&env);
        let team_tokens = issued * TEAM_PERCENT / 100;
        storage::add_balance(&env, &config.owner, team_tokens);
        storage::set_tokens_issued(&env, issued + team_tokens);
        storage::mark_team_issued(&env);

        env.events().publish(
            (symbol_short!("team"),),
            TeamTokensIssued {
                amount: team_tokens,
            },
        );
        Ok(team_tokens)
    }

    /// Sale-token balance credited to `account`.
    pub fn balance_of(env: Env, account: Address) -> i128 {
        storage::balance(&env, &account)
    }

    /// Total settlement collected so far.
    pub fn total_raised(env: Env) -> i128 {
        storage::total_raised(&env)
    }

    /// Total tokens credited so far, team tokens included.
    pub fn total_tokens_issued(env: Env) -> i128 {
        storage::tokens_issued(&env)
    }

    /// Whether the one-shot team issuance has happened.
    pub fn team_tokens_issued(env: Env) -> bool {
        storage::team_issued(&env)
    }

    /// The sale parameters fixed at initialization.
    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        storage::config(&env)
    }
}
