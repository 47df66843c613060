// SPDX-License-Identifier: MIT
#![no_std]

mod contract;

pub use contract::{FaucetError, FaucetToken, FaucetTokenClient, DECIMALS, FAUCET_AMOUNT};
