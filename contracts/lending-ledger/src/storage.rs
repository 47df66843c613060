// SPDX-License-Identifier: MIT
use core::fmt::Debug;

use soroban_sdk::{contracttype, Address, Env, IntoVal, TryFromVal, Val};

use crate::error::LedgerError;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoanStatus {
    Requested = 0,
    Active = 1,
    /// Terminal. Reached by repayment or by a lender claiming collateral
    /// after default.
    Repaid = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanRequest {
    pub id: u32,
    pub collateral_id: u32,
    pub borrower: Address,
    pub lender: Option<Address>,
    pub loan_amount: i128,
    pub repayment_amount: i128,
    pub due_date: u64,
    pub status: LoanStatus,
}

/// Addresses wired in at deploy time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub registry: Address,
    pub token: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Locked,
    LoanCount,
    Loan(u32),
    Balance(Address),
    Reputation(Address),
}

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn read_config(e: &Env) -> Result<Config, LedgerError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LedgerError::NotInitialized)
}

pub fn write_config(e: &Env, config: &Config) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn read_loan_count(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::LoanCount).unwrap_or(0)
}

pub fn write_loan_count(e: &Env, count: u32) {
    e.storage().instance().set(&DataKey::LoanCount, &count);
}

fn read_persistent<V>(e: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
    V::Error: Debug,
{
    let value = e.storage().persistent().get(key);
    if value.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    value
}

fn write_persistent<V>(e: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn read_loan(e: &Env, id: u32) -> Option<LoanRequest> {
    read_persistent(e, &DataKey::Loan(id))
}

pub fn write_loan(e: &Env, loan: &LoanRequest) {
    write_persistent(e, &DataKey::Loan(loan.id), loan);
}

pub fn read_balance(e: &Env, lender: &Address) -> i128 {
    read_persistent(e, &DataKey::Balance(lender.clone())).unwrap_or(0)
}

pub fn write_balance(e: &Env, lender: &Address, amount: i128) {
    write_persistent(e, &DataKey::Balance(lender.clone()), &amount);
}

pub fn read_reputation(e: &Env, borrower: &Address) -> u32 {
    read_persistent(e, &DataKey::Reputation(borrower.clone())).unwrap_or(0)
}

pub fn write_reputation(e: &Env, borrower: &Address, count: u32) {
    write_persistent(e, &DataKey::Reputation(borrower.clone()), &count);
}
