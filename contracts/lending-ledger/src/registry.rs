// SPDX-License-Identifier: MIT
//! The slice of the collateral registry interface the ledger calls into.

use soroban_sdk::{contractclient, contracttype, Address, BytesN, Env, String};

/// Mirror of the registry's record layout; decoded from its `get_record`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralRecord {
    pub id: u32,
    pub amount: i128,
    pub due_date: u64,
    pub debtor: String,
    pub document_hash: BytesN<32>,
    pub originator: Address,
}

#[allow(dead_code)]
#[contractclient(name = "RegistryClient")]
pub trait CollateralRegistryInterface {
    fn get_record(e: Env, id: u32) -> CollateralRecord;
    fn owner_of(e: Env, token_id: u32) -> Address;
    fn transfer(e: Env, from: Address, to: Address, token_id: u32);
}
