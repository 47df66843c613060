// SPDX-License-Identifier: MIT
#![no_std]

mod contract;
mod error;
mod events;
mod guard;
mod registry;
mod storage;

pub use contract::{LendingLedger, LendingLedgerClient, LOAN_TO_VALUE_PERCENT, REPAYMENT_PERCENT};
pub use error::LedgerError;
pub use storage::{LoanRequest, LoanStatus};
