//! Typed storage helpers.
//!
//! Sale-wide singletons (config, counters, team flag) live in instance
//! storage; per-buyer token balances live in persistent storage with
//! their own TTLs.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::SaleConfig;
use crate::Error;

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Immutable sale parameters (Instance).
    Config,
    /// Total settlement collected so far (Instance).
    TotalRaised,
    /// Total tokens credited so far, team tokens included (Instance).
    TokensIssued,
    /// Whether the one-shot team issuance has happened (Instance).
    TeamIssued,
    /// Token balance per buyer (Persistent).
    Balance(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn config(env: &Env) -> Result<SaleConfig, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalRaised, &total);
}

pub fn tokens_issued(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TokensIssued)
        .unwrap_or(0)
}

pub fn set_tokens_issued(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TokensIssued, &total);
}

pub fn team_issued(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::TeamIssued)
        .unwrap_or(false)
}

pub fn mark_team_issued(env: &Env) {
    env.storage().instance().set(&DataKey::TeamIssued, &true);
}

pub fn balance(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Balance(account.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn add_balance(env: &Env, account: &Address, tokens: i128) {
    let key = DataKey::Balance(account.clone());
    let current: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage().persistent().set(&key, &(current + tokens));
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
