// SPDX-License-Identifier: MIT
// Compatible with OpenZeppelin Stellar Soroban Contracts ^0.4.1

//! Stand-in lending asset for test networks. Anyone can draw a fixed
//! amount from the faucet; larger grants go through the admin.

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, Address, Env, String,
};
use stellar_macros::default_impl;
use stellar_tokens::fungible::{Base, FungibleToken};

pub const DECIMALS: u32 = 7;
/// Drawn per `faucet` call: 10 000 whole tokens.
pub const FAUCET_AMOUNT: i128 = 10_000 * 10i128.pow(DECIMALS);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FaucetError {
    NotInitialized = 1,
    InvalidAmount = 2,
}

#[contract]
pub struct FaucetToken;

#[contractimpl]
impl FaucetToken {
    pub fn __constructor(e: &Env, admin: Address, name: String, symbol: String) {
        Base::set_metadata(e, DECIMALS, name, symbol);
        e.storage().instance().set(&symbol_short!("admin"), &admin);
    }

    pub fn faucet(e: &Env, to: Address) {
        Base::mint(e, &to, FAUCET_AMOUNT);
    }

    pub fn mint(e: &Env, to: Address, amount: i128) {
        let admin: Address = e
            .storage()
            .instance()
            .get(&symbol_short!("admin"))
            .unwrap_or_else(|| panic_with_error!(e, FaucetError::NotInitialized));
        admin.require_auth();
        if amount <= 0 {
            panic_with_error!(e, FaucetError::InvalidAmount);
        }
        Base::mint(e, &to, amount);
    }
}

#[default_impl]
#[contractimpl]
impl FungibleToken for FaucetToken {
    type ContractType = Base;
}
