//! Shared data structures for the enrollment registry.

use soroban_sdk::{contracttype, String};

/// One enrolled student.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Student {
    pub name: String,
    pub age: u32,
}

/// A student was assigned to a group.
///
/// Topic: `(symbol_short!("assigned"), group)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StudentAssigned {
    pub group: u32,
}
