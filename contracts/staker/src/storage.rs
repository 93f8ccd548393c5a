//! Typed storage helpers.
//!
//! Pool-wide singletons (config, running total, settlement flags) live
//! in instance storage. Per-account contributions and rewards, plus the
//! contributor roster reward issuance iterates, live in persistent
//! storage.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{PoolConfig, RewardTier};
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
    /// Immutable pool parameters (Instance).
    Config,
    /// Sum of all outstanding contributions (Instance).
    Total,
    /// Whether rewards have been issued (Instance).
    RewardsIssued,
    /// Whether the pool was settled to the external target (Instance).
    Executed,
    /// Whether a post-deadline settlement attempt opened refunds (Instance).
    OpenForWithdraw,
    /// Contributor addresses in first-contribution order (Persistent).
    Roster,
    /// Outstanding contribution per account (Persistent).
    Contribution(Address),
    /// Reward tier assigned per account (Persistent).
    Reward(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn config(env: &Env) -> Result<PoolConfig, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn total(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Total).unwrap_or(0)
}

pub fn set_total(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::Total, &total);
}

pub fn rewards_issued(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::RewardsIssued)
        .unwrap_or(false)
}

pub fn mark_rewards_issued(env: &Env) {
    env.storage().instance().set(&DataKey::RewardsIssued, &true);
}

pub fn executed(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Executed)
        .unwrap_or(false)
}

pub fn mark_executed(env: &Env) {
    env.storage().instance().set(&DataKey::Executed, &true);
}

pub fn open_for_withdraw(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::OpenForWithdraw)
        .unwrap_or(false)
}

pub fn mark_open_for_withdraw(env: &Env) {
    env.storage()
        .instance()
        .set(&DataKey::OpenForWithdraw, &true);
}

pub fn roster(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Roster)
        .unwrap_or(Vec::new(env))
}

pub fn push_contributor(env: &Env, account: &Address) {
    let mut roster = roster(env);
    roster.push_back(account.clone());
    env.storage().persistent().set(&DataKey::Roster, &roster);
    bump_persistent(env, &DataKey::Roster);
}

pub fn contribution(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Contribution(account.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_contribution(env: &Env, account: &Address, amount: i128) {
    let key = DataKey::Contribution(account.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

pub fn reward(env: &Env, account: &Address) -> RewardTier {
    let key = DataKey::Reward(account.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(RewardTier::None)
}

pub fn set_reward(env: &Env, account: &Address, tier: RewardTier) {
    let key = DataKey::Reward(account.clone());
    env.storage().persistent().set(&key, &tier);
    bump_persistent(env, &key);
}
