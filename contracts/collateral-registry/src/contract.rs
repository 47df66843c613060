// SPDX-License-Identifier: MIT
// Compatible with OpenZeppelin Stellar Soroban Contracts ^0.4.1

//! # Collateral Registry
//!
//! Invoices minted as non-fungible records that a borrower can post as
//! collateral. Custody, approvals and enumeration come from the
//! `Enumerable` token storage; this contract adds the invoice data and a
//! transfer policy anchored on each record's originator.

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, BytesN, Env, String};
use stellar_contract_utils::pausable::{self as pausable, Pausable};
use stellar_macros::{default_impl, when_not_paused};
use stellar_tokens::non_fungible::{
    enumerable::{Enumerable, NonFungibleEnumerable},
    NonFungibleToken, Base,
};

use crate::{
    error::RegistryError,
    events, policy,
    storage::{self, CollateralRecord},
};

#[contract]
pub struct CollateralRegistry;

#[contractimpl]
impl CollateralRegistry {
    pub fn __constructor(e: &Env, admin: Address) {
        let uri = String::from_str(e, "https://collateral.invoices.example/");
        let name = String::from_str(e, "InvoiceCollateral");
        let symbol = String::from_str(e, "INVC");
        Base::set_metadata(e, uri, name, symbol);
        storage::write_admin(e, &admin);
    }

    /// Mint a new invoice record held by `caller`, who becomes its
    /// permanent originator. Ids are handed out densely from 0.
    #[when_not_paused]
    pub fn mint(
        e: &Env,
        caller: Address,
        amount: i128,
        due_date: u64,
        debtor: String,
        document_hash: BytesN<32>,
    ) -> u32 {
        caller.require_auth();

        if amount <= 0 {
            panic_with_error!(e, RegistryError::InvalidAmount);
        }
        if due_date <= e.ledger().timestamp() {
            panic_with_error!(e, RegistryError::InvalidDate);
        }
        if debtor.len() == 0 {
            panic_with_error!(e, RegistryError::EmptyField);
        }
        if document_hash.to_array() == [0u8; 32] {
            panic_with_error!(e, RegistryError::EmptyHash);
        }

        let id = storage::read_next_id(e);
        let record = CollateralRecord {
            id,
            amount,
            due_date,
            debtor,
            document_hash,
            originator: caller.clone(),
        };
        storage::write_record(e, &record);
        storage::write_next_id(e, id + 1);
        Enumerable::non_sequential_mint(e, &caller, id);
        storage::bump_instance(e);

        events::minted(e, &record);
        id
    }

    pub fn get_record(e: &Env, id: u32) -> CollateralRecord {
        storage::load_record(e, id)
    }

    pub fn originator_of(e: &Env, id: u32) -> Address {
        storage::load_record(e, id).originator
    }

    /// Id the next successful `mint` will receive.
    pub fn next_id(e: &Env) -> u32 {
        storage::read_next_id(e)
    }

    pub fn admin(e: &Env) -> Address {
        storage::read_admin(e)
    }

    pub fn set_admin(e: &Env, new_admin: Address) {
        let admin = storage::read_admin(e);
        admin.require_auth();
        storage::write_admin(e, &new_admin);
        storage::bump_instance(e);
        events::admin_set(e, &admin, &new_admin);
    }
}

fn require_admin(e: &Env, caller: &Address) {
    caller.require_auth();
    if *caller != storage::read_admin(e) {
        panic_with_error!(e, RegistryError::Unauthorized);
    }
}

/// Applies the custody policy to a move already accepted by the token layer.
/// Panicking here reverts that move.
fn enforce_transfer_policy(e: &Env, caller: &Address, from: &Address, record: &CollateralRecord) {
    let admin = storage::read_admin(e);
    if !policy::transfer_allowed(caller, from, &record.originator, &admin) {
        log!(e, "custody move of record {} by {} denied", record.id, caller.clone());
        panic_with_error!(e, RegistryError::Unauthorized);
    }
}

// ============ NFT IMPLEMENTATIONS ============

#[default_impl]
#[contractimpl]
impl NonFungibleToken for CollateralRegistry {
    type ContractType = Enumerable;

    #[when_not_paused]
    fn transfer(e: &Env, from: Address, to: Address, token_id: u32) {
        let record = storage::load_record(e, token_id);
        Self::ContractType::transfer(e, &from, &to, token_id);
        enforce_transfer_policy(e, &from, &from, &record);
        storage::bump_instance(e);
    }

    #[when_not_paused]
    fn transfer_from(e: &Env, spender: Address, from: Address, to: Address, token_id: u32) {
        let record = storage::load_record(e, token_id);
        Self::ContractType::transfer_from(e, &spender, &from, &to, token_id);
        enforce_transfer_policy(e, &spender, &from, &record);
        storage::bump_instance(e);
    }
}

#[default_impl]
#[contractimpl]
impl NonFungibleEnumerable for CollateralRegistry {}

#[contractimpl]
impl Pausable for CollateralRegistry {
    fn paused(e: &Env) -> bool {
        pausable::paused(e)
    }

    fn pause(e: &Env, caller: Address) {
        require_admin(e, &caller);
        pausable::pause(e);
    }

    fn unpause(e: &Env, caller: Address) {
        require_admin(e, &caller);
        pausable::unpause(e);
    }
}
