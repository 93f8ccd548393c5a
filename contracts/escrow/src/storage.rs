//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by the registry:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key         | Type      | Description                          |
//! |-------------|-----------|--------------------------------------|
//! | `DealCount` | `u64`     | Auto-increment deal ID counter       |
//! | `Token`     | `Address` | Settlement token for all deals       |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key          | Type         | Description                  |
//! |--------------|--------------|------------------------------|
//! | `Config(id)` | `DealConfig` | Immutable deal terms         |
//! | `Ledger(id)` | `DealLedger` | Mutable deal state and funds |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Deal, DealConfig, DealLedger};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys (`DealCount`, `Token`) live as long as the contract
/// and are extended together. Persistent-tier keys (`Config`, `Ledger`)
/// hold per-deal data with independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global auto-increment counter for deal IDs (Instance).
    DealCount,
    /// Settlement token shared by all deals (Instance).
    Token,
    /// Immutable deal terms keyed by ID (Persistent).
    Config(u64),
    /// Mutable deal state keyed by ID (Persistent).
    Ledger(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Atomically reads, increments, and stores the deal counter.
/// Returns the ID to use for the *current* deal (pre-increment value).
pub fn next_deal_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::DealCount)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::DealCount, &(current + 1));
    current
}

/// Number of deals opened so far.
pub fn deal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::DealCount)
        .unwrap_or(0)
}

/// Record the settlement token. Written once at initialization.
pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

/// True once the registry has been initialized with a settlement token.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

/// Retrieve the settlement token.
pub fn token(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save both the immutable terms and initial mutable state of a new deal.
pub fn save_new_deal(env: &Env, config: &DealConfig, ledger: &DealLedger) {
    let config_key = DataKey::Config(config.id);
    let ledger_key = DataKey::Ledger(config.id);

    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&ledger_key, ledger);
    bump_persistent(env, &config_key);
    bump_persistent(env, &ledger_key);
}

/// Load the full `Deal` by combining terms and state.
pub fn load_deal(env: &Env, id: u64) -> Result<Deal, Error> {
    let config = load_config(env, id)?;
    let ledger = load_ledger(env, id)?;
    Ok(Deal {
        id: config.id,
        buyer: config.buyer,
        seller: config.seller,
        cost: config.cost,
        description: config.description,
        state: ledger.state,
        deposit: ledger.deposit,
        freeze_fee: ledger.freeze_fee,
    })
}

/// Load only the immutable deal terms.
pub fn load_config(env: &Env, id: u64) -> Result<DealConfig, Error> {
    let key = DataKey::Config(id);
    let config: DealConfig = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::DealNotFound)?;
    bump_persistent(env, &key);
    Ok(config)
}

/// Load only the mutable deal state.
pub fn load_ledger(env: &Env, id: u64) -> Result<DealLedger, Error> {
    let key = DataKey::Ledger(id);
    let ledger: DealLedger = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::DealNotFound)?;
    bump_persistent(env, &key);
    Ok(ledger)
}

/// Save only the mutable deal state (the hot path for transitions).
pub fn save_ledger(env: &Env, id: u64, ledger: &DealLedger) {
    let key = DataKey::Ledger(id);
    env.storage().persistent().set(&key, ledger);
    bump_persistent(env, &key);
}
