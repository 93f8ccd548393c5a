//! # Staker
//!
//! Contribution pool gated by a deadline and a threshold. Anyone may
//! contribute until the deadline. Afterwards the pool settles one of two
//! ways: if the threshold was met, [`Staker::execute`] forwards the whole
//! pool to the external target; if it was missed, contributors take
//! their money back via [`Staker::withdraw`]. Independently, the owner
//! assigns every contributor a reward tier sized by their cumulative
//! contribution.
//!
//! | Phase      | Entry Point(s)                            |
//! |------------|-------------------------------------------|
//! | Bootstrap  | [`Staker::init`]                          |
//! | Funding    | [`Staker::contribute`]                    |
//! | Settlement | [`Staker::execute`], [`Staker::withdraw`] |
//! | Rewards    | [`Staker::issue_rewards_to_all`]          |
//! | Queries    | `contribution_of`, `reward_of`, `total_contributed`, `get_config`, `open_for_withdraw`, `executed` |

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, symbol_short, token, Address, Env};

mod events;
mod storage;
mod types;


use events::{Contributed, PoolExecuted, RewardIssued, WithdrawOpened, Withdrawn};
pub use types::{PoolConfig, RewardTier, GOLD_MIN, SILVER_MIN, TOKEN_UNIT};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidArgument = 4,
    PoolClosed = 5,
    TooEarly = 6,
    AlreadyIssued = 7,
    AlreadyExecuted = 8,
    ThresholdMet = 9,
    NothingToWithdraw = 10,
    InsufficientFunds = 11,
}

#[contract]
pub struct Staker;

#[contractimpl]
impl Staker {
    /// Initialise the pool. Must be called exactly once.
    pub fn init(
        env: Env,
        owner: Address,
        token: Address,
        external_target: Address,
        deadline: u64,
        threshold: i128,
    ) -> Result<(), Error> {
        owner.require_auth();
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if threshold <= 0 || deadline <= env.ledger().timestamp() {
            return Err(Error::InvalidArgument);
        }
        storage::set_config(
            &env,
            &PoolConfig {
                owner,
                token,
                external_target,
                deadline,
                threshold,
            },
        );
        Ok(())
    }

    /// Add `amount` to the caller's contribution.
    ///
    /// # Errors
    /// - `PoolClosed` once the deadline has passed.
    /// - `InvalidArgument` if `amount <= 0`.
    /// - `InsufficientFunds` if the caller cannot cover `amount`.
    pub fn contribute(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        let config = storage::config(&env)?;
        if env.ledger().timestamp() >= config.deadline {
            return Err(Error::PoolClosed);
        }
        if amount <= 0 {
            return Err(Error::InvalidArgument);
        }

        let client = token::Client::new(&env, &config.token);
        if client.balance(&caller) < amount {
            return Err(Error::InsufficientFunds);
        }
        client.transfer(&caller, &env.current_contract_address(), &amount);

        let previous = storage::contribution(&env, &caller);
        // Withdrawals only open after the deadline, so a zero balance
        // here means a first-time contributor.
        if previous == 0 {
            storage::push_contributor(&env, &caller);
        }
        storage::set_contribution(&env, &caller, previous + amount);
        let total = storage::total(&env) + amount;
        storage::set_total(&env, total);

        env.events().publish(
            (symbol_short!("contrib"), caller.clone()),
            Contributed {
                account: caller.clone(),
                amount,
                total,
            },
        );
        Ok(())
    }

    /// Assign every contributor their reward tier. Owner-only, once,
    /// after the deadline. Accounts that withdrew down to zero before
    /// this call earn nothing.
    pub fn issue_rewards_to_all(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let config = storage::config(&env)?;
        if caller != config.owner {
            return Err(Error::Unauthorized);
        }
        if env.ledger().timestamp() < config.deadline {
            return Err(Error::TooEarly);
        }
        if storage::rewards_issued(&env) {
            return Err(Error::AlreadyIssued);
        }

        for account in storage::roster(&env).iter() {
            let contributed = storage::contribution(&env, &account);
            if contributed <= 0 {
                continue;
            }
            let tier = RewardTier::for_contribution(contributed);
            storage::set_reward(&env, &account, tier);
            env.events().publish(
                (symbol_short!("reward"), account.clone()),
                RewardIssued { account: account.clone(), tier },
            );
        }
        storage::mark_rewards_issued(&env);
        Ok(())
    }

    /// Settle the pool after the deadline: forward everything to the
    /// external target if the threshold was met, otherwise open refunds.
    ///
    /// # Errors
    /// - `TooEarly` before the deadline.
    /// - `AlreadyExecuted` once a prior call settled the pool either way.
    pub fn execute(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let config = storage::config(&env)?;
        if env.ledger().timestamp() < config.deadline {
            return Err(Error::TooEarly);
        }
        if storage::executed(&env) || storage::open_for_withdraw(&env) {
            return Err(Error::AlreadyExecuted);
        }

        let total = storage::total(&env);
        if total >= config.threshold {
            let client = token::Client::new(&env, &config.token);
            client.transfer(&env.current_contract_address(), &config.external_target, &total);
            storage::mark_executed(&env);
            env.events()
                .publish((symbol_short!("executed"),), PoolExecuted { amount: total });
        } else {
            storage::mark_open_for_withdraw(&env);
            env.events()
                .publish((symbol_short!("open_wd"),), WithdrawOpened { total });
        }
        Ok(())
    }

    /// Refund the caller's whole contribution from a pool that missed
    /// its threshold. Returns the refunded amount.
    ///
    /// # Errors
    /// - `TooEarly` before the deadline.
    /// - `ThresholdMet` if the pool reached its threshold.
    /// - `NothingToWithdraw` if the caller has no outstanding contribution.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let config = storage::config(&env)?;
        if env.ledger().timestamp() < config.deadline {
            return Err(Error::TooEarly);
        }
        let total = storage::total(&env);
        if total >= config.threshold {
            return Err(Error::ThresholdMet);
        }
        let amount = storage::contribution(&env, &caller);
        if amount <= 0 {
            return Err(Error::NothingToWithdraw);
        }

        let client = token::Client::new(&env, &config.token);
        client.transfer(&env.current_contract_address(), &caller, &amount);
        storage::set_contribution(&env, &caller, 0);
        storage::set_total(&env, total - amount);

        env.events().publish(
            (symbol_short!("withdrawn"), caller.clone()),
            Withdrawn {
                account: caller.clone(),
                amount,
            },
        );
        Ok(amount)
    }

    /// Outstanding contribution of `account`.
    pub fn contribution_of(env: Env, account: Address) -> i128 {
        storage::contribution(&env, &account)
    }

    /// Reward tier assigned to `account` (`None` until issuance).
    pub fn reward_of(env: Env, account: Address) -> RewardTier {
        storage::reward(&env, &account)
    }

    /// Sum of all outstanding contributions.
    pub fn total_contributed(env: Env) -> i128 {
        storage::total(&env)
    }

    /// Whether a settlement attempt opened refunds.
    pub fn open_for_withdraw(env: Env) -> bool {
        storage::open_for_withdraw(&env)
    }

    /// Whether the pool was forwarded to the external target.
    pub fn executed(env: Env) -> bool {
        storage::executed(&env)
    }

    /// The pool parameters fixed at initialization.
    pub fn get_config(env: Env) -> Result<PoolConfig, Error> {
        storage::config(&env)
    }
}
