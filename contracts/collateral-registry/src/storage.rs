// SPDX-License-Identifier: MIT
use soroban_sdk::{contracttype, panic_with_error, Address, BytesN, Env, String};

use crate::error::RegistryError;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// A tokenized invoice. Only custody changes after mint, and custody lives
/// in the token storage, not here.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralRecord {
    pub id: u32,
    /// Face value of the invoice.
    pub amount: i128,
    /// Ledger timestamp the invoice falls due.
    pub due_date: u64,
    pub debtor: String,
    pub document_hash: BytesN<32>,
    /// Whoever minted the record. Never changes, unlike the holder.
    pub originator: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    NextId,
    Record(u32),
}

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn read_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(e, RegistryError::NotInitialized))
}

pub fn write_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_next_id(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::NextId).unwrap_or(0)
}

pub fn write_next_id(e: &Env, next: u32) {
    e.storage().instance().set(&DataKey::NextId, &next);
}

pub fn read_record(e: &Env, id: u32) -> Option<CollateralRecord> {
    let key = DataKey::Record(id);
    let record = e.storage().persistent().get(&key);
    if record.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    }
    record
}

/// Like [`read_record`], aborting with `NotFound` for ids never minted.
pub fn load_record(e: &Env, id: u32) -> CollateralRecord {
    read_record(e, id).unwrap_or_else(|| panic_with_error!(e, RegistryError::NotFound))
}

pub fn write_record(e: &Env, record: &CollateralRecord) {
    let key = DataKey::Record(record.id);
    e.storage().persistent().set(&key, record);
    e.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}
