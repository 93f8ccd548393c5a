//! # Escrow Deal Registry
//!
//! Single contract acting as both the factory and the home of every
//! escrow deal. Deals live in an arena keyed by an auto-incremented ID;
//! the registry holds no other linkage between them.
//!
//! | Phase      | Entry Point(s)                               |
//! |------------|----------------------------------------------|
//! | Bootstrap  | [`EscrowRegistry::init`]                     |
//! | Opening    | [`EscrowRegistry::new_escrow`]               |
//! | Funding    | [`EscrowRegistry::pay`], [`EscrowRegistry::freeze_deposit`] |
//! | Settlement | [`EscrowRegistry::complete`], [`EscrowRegistry::pay_to_seller`], [`EscrowRegistry::cancel`] |
//! | Queries    | `get_escrow`, `escrow_count`, `deposit_required`, `freeze_fee_required` |
//!
//! ## Architecture
//!
//! Every transition is gated by a single guard evaluated before any
//! write: first the deal's current state, then the caller's role.
//! Storage access is fully delegated to [`storage`]. Value movement uses
//! the settlement token configured at [`EscrowRegistry::init`]; a failed
//! call writes nothing.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, token, Address, Env, String,
};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;

use events::{DealCancelled, DealCompleted, DealCreated, DepositFrozen, DepositPaid, SellerPaid};
pub use types::{Deal, DealConfig, DealLedger, DealState};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    DealNotFound = 3,
    InvalidState = 4,
    Unauthorized = 5,
    InvalidArgument = 6,
    InsufficientFunds = 7,
}

/// The party a transition must originate from.
enum DealRole {
    Buyer,
    Seller,
}

/// Gate a transition on the deal's current state and the caller's role.
///
/// State is checked before role, so poking a settled deal reports
/// `InvalidState` regardless of who calls.
fn require_transition(
    config: &DealConfig,
    ledger: &DealLedger,
    allowed: &[DealState],
    caller: &Address,
    role: DealRole,
) -> Result<(), Error> {
    if !allowed.iter().any(|s| *s == ledger.state) {
        return Err(Error::InvalidState);
    }
    let expected = match role {
        DealRole::Buyer => &config.buyer,
        DealRole::Seller => &config.seller,
    };
    if caller != expected {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Move `amount` of the settlement token from `from` into the contract.
fn collect(env: &Env, token_addr: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    let client = token::Client::new(env, token_addr);
    if client.balance(from) < amount {
        return Err(Error::InsufficientFunds);
    }
    client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Move `amount` of the settlement token from the contract to `to`.
fn release(env: &Env, token_addr: &Address, to: &Address, amount: i128) {
    if amount > 0 {
        let client = token::Client::new(env, token_addr);
        client.transfer(&env.current_contract_address(), to, &amount);
    }
}

#[contract]
pub struct EscrowRegistry;

#[contractimpl]
impl EscrowRegistry {
    /// Initialise the registry with the settlement token all deals use.
    ///
    /// Must be called exactly once after deployment. Subsequent calls
    /// fail with `Error::AlreadyInitialized`.
    pub fn init(env: Env, token: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_token(&env, &token);
        Ok(())
    }

    /// Open a new deal between `buyer` and `seller` in state `Created`.
    ///
    /// Any authenticated caller may open a deal. Returns the new deal's ID.
    ///
    /// # Errors
    /// - `InvalidArgument` if `cost <= 0` or `buyer == seller`.
    pub fn new_escrow(
        env: Env,
        creator: Address,
        buyer: Address,
        seller: Address,
        cost: i128,
        description: String,
    ) -> Result<u64, Error> {
        creator.require_auth();
        storage::token(&env)?;

        if cost <= 0 || buyer == seller {
            return Err(Error::InvalidArgument);
        }

        let id = storage::next_deal_id(&env);
        let config = DealConfig {
            id,
            buyer: buyer.clone(),
            seller: seller.clone(),
            cost,
            description,
        };
        let ledger = DealLedger {
            state: DealState::Created,
            deposit: 0,
            freeze_fee: 0,
        };
        storage::save_new_deal(&env, &config, &ledger);

        env.events().publish(
            (symbol_short!("created"), id),
            DealCreated {
                deal_id: id,
                buyer,
                seller,
                cost,
            },
        );
        Ok(id)
    }

    /// Buyer pays the deposit, moving the deal `Created -> Paid`.
    ///
    /// # Errors
    /// - `InvalidState` unless the deal is in `Created`.
    /// - `Unauthorized` unless `caller` is the buyer.
    /// - `InvalidArgument` unless `amount` equals the required deposit.
    /// - `InsufficientFunds` if the buyer cannot cover `amount`.
    pub fn pay(env: Env, id: u64, caller: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        let config = storage::load_config(&env, id)?;
        let mut ledger = storage::load_ledger(&env, id)?;
        require_transition(
            &config,
            &ledger,
            &[DealState::Created],
            &caller,
            DealRole::Buyer,
        )?;
        if amount != config.deposit_required() {
            return Err(Error::InvalidArgument);
        }

        let token_addr = storage::token(&env)?;
        collect(&env, &token_addr, &caller, amount)?;

        ledger.deposit = amount;
        ledger.state = DealState::Paid;
        storage::save_ledger(&env, id, &ledger);

        env.events()
            .publish((symbol_short!("payment"), id), DepositPaid { deal_id: id, amount });
        Ok(())
    }

    /// Seller posts the freeze fee, moving the deal `Paid -> DepositFrozen`.
    ///
    /// # Errors
    /// - `InvalidState` unless the deal is in `Paid`.
    /// - `Unauthorized` unless `caller` is the seller.
    /// - `InvalidArgument` unless `amount` equals the required fee.
    /// - `InsufficientFunds` if the seller cannot cover `amount`.
    pub fn freeze_deposit(env: Env, id: u64, caller: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        let config = storage::load_config(&env, id)?;
        let mut ledger = storage::load_ledger(&env, id)?;
        require_transition(
            &config,
            &ledger,
            &[DealState::Paid],
            &caller,
            DealRole::Seller,
        )?;
        if amount != config.freeze_fee_required() {
            return Err(Error::InvalidArgument);
        }

        let token_addr = storage::token(&env)?;
        collect(&env, &token_addr, &caller, amount)?;

        ledger.freeze_fee = amount;
        ledger.state = DealState::DepositFrozen;
        storage::save_ledger(&env, id, &ledger);

        env.events().publish(
            (symbol_short!("frozen"), id),
            DepositFrozen { deal_id: id, amount },
        );
        Ok(())
    }

    /// Buyer confirms delivery, moving the deal `DepositFrozen -> Complete`.
    ///
    /// No value moves here; the seller collects via [`Self::pay_to_seller`].
    pub fn complete(env: Env, id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let config = storage::load_config(&env, id)?;
        let mut ledger = storage::load_ledger(&env, id)?;
        require_transition(
            &config,
            &ledger,
            &[DealState::DepositFrozen],
            &caller,
            DealRole::Buyer,
        )?;

        ledger.state = DealState::Complete;
        storage::save_ledger(&env, id, &ledger);

        env.events()
            .publish((symbol_short!("complete"), id), DealCompleted { deal_id: id });
        Ok(())
    }

    /// Seller cancels a deal that has not completed yet.
    ///
    /// Reachable from `Created`, `Paid` and `DepositFrozen`. Any held
    /// deposit goes back to the buyer and any held freeze fee back to
    /// the seller.
    pub fn cancel(env: Env, id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let config = storage::load_config(&env, id)?;
        let mut ledger = storage::load_ledger(&env, id)?;
        require_transition(
            &config,
            &ledger,
            &[DealState::Created, DealState::Paid, DealState::DepositFrozen],
            &caller,
            DealRole::Seller,
        )?;

        let token_addr = storage::token(&env)?;
        let refunded = ledger.deposit;
        release(&env, &token_addr, &config.buyer, ledger.deposit);
        release(&env, &token_addr, &config.seller, ledger.freeze_fee);

        ledger.deposit = 0;
        ledger.freeze_fee = 0;
        ledger.state = DealState::Cancelled;
        storage::save_ledger(&env, id, &ledger);

        env.events().publish(
            (symbol_short!("cancelled"), id),
            DealCancelled { deal_id: id, refunded },
        );
        Ok(())
    }

    /// Seller collects `cost + freeze_fee` from a completed deal.
    ///
    /// Productive exactly once: after the held funds are zeroed, further
    /// calls fail with `InvalidState`.
    pub fn pay_to_seller(env: Env, id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let config = storage::load_config(&env, id)?;
        let mut ledger = storage::load_ledger(&env, id)?;
        require_transition(
            &config,
            &ledger,
            &[DealState::Complete],
            &caller,
            DealRole::Seller,
        )?;
        if ledger.deposit == 0 && ledger.freeze_fee == 0 {
            return Err(Error::InvalidState);
        }

        let token_addr = storage::token(&env)?;
        let amount = ledger.deposit + ledger.freeze_fee;
        release(&env, &token_addr, &config.seller, amount);

        ledger.deposit = 0;
        ledger.freeze_fee = 0;
        storage::save_ledger(&env, id, &ledger);

        env.events()
            .publish((symbol_short!("payout"), id), SellerPaid { deal_id: id, amount });
        Ok(())
    }

    /// Retrieve a deal by its ID.
    pub fn get_escrow(env: Env, id: u64) -> Result<Deal, Error> {
        storage::load_deal(&env, id)
    }

    /// Number of deals opened so far.
    pub fn escrow_count(env: Env) -> u64 {
        storage::deal_count(&env)
    }

    /// Deposit the buyer must pay for deal `id`.
    pub fn deposit_required(env: Env, id: u64) -> Result<i128, Error> {
        Ok(storage::load_config(&env, id)?.deposit_required())
    }

    /// Fee the seller must post to freeze the deposit of deal `id`.
    pub fn freeze_fee_required(env: Env, id: u64) -> Result<i128, Error> {
        Ok(storage::load_config(&env, id)?.freeze_fee_required())
    }
}
