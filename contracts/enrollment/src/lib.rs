//! # Enrollment
//!
//! Assigns students round-robin into a fixed set of groups and answers
//! per-group roster queries. Pure registry: no settlement token, no
//! clock.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, String, Vec,
};

mod types;

#[cfg(test)]
mod test;

pub use types::{Student, StudentAssigned};

/// Number of groups students are spread across.
pub const GROUP_COUNT: u32 = 5;

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidArgument = 1,
    InvalidGroup = 2,
}

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global enrollment counter driving the round-robin (Instance).
    StudentCount,
    /// Roster per group (Persistent).
    Group(u32),
}

fn group_roster(env: &Env, group: u32) -> Vec<Student> {
    env.storage()
        .persistent()
        .get(&DataKey::Group(group))
        .unwrap_or(Vec::new(env))
}

#[contract]
pub struct Enrollment;

#[contractimpl]
impl Enrollment {
    /// Enroll a student and return the group they were assigned to.
    ///
    /// Groups are filled round-robin by enrollment order.
    ///
    /// # Errors
    /// - `InvalidArgument` if `name` is empty or `age` is 0.
    pub fn assign_to_group(
        env: Env,
        caller: Address,
        name: String,
        age: u32,
    ) -> Result<u32, Error> {
        caller.require_auth();
        if name.len() == 0 || age == 0 {
            return Err(Error::InvalidArgument);
        }

        let count: u64 = env
            .storage()
            .instance()
            .get(&DataKey::StudentCount)
            .unwrap_or(0);
        let group = (count % GROUP_COUNT as u64) as u32;

        let key = DataKey::Group(group);
        let mut roster = group_roster(&env, group);
        roster.push_back(Student { name, age });
        env.storage().persistent().set(&key, &roster);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
        env.storage()
            .instance()
            .set(&DataKey::StudentCount, &(count + 1));

        env.events()
            .publish((symbol_short!("assigned"), group), StudentAssigned { group });
        Ok(group)
    }

    /// Roster of `group`, in enrollment order. Possibly empty.
    ///
    /// # Errors
    /// - `InvalidGroup` if `group` is out of range.
    pub fn get_students(env: Env, group: u32) -> Result<Vec<Student>, Error> {
        if group >= GROUP_COUNT {
            return Err(Error::InvalidGroup);
        }
        Ok(group_roster(&env, group))
    }

    /// Total number of students enrolled.
    pub fn student_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::StudentCount)
            .unwrap_or(0)
    }
}
