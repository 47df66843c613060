// SPDX-License-Identifier: MIT
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    NotInitialized = 1,
    Unauthorized = 2,
    InvalidAmount = 3,
    NotFound = 4,
    NotBorrower = 5,
    NotHolder = 6,
    NotLender = 7,
    NotActive = 8,
    AlreadyActive = 9,
    Expired = 10,
    NotYetDefaulted = 11,
    InsufficientBalance = 12,
    TransferFailed = 13,
    Overflow = 14,
    Reentrant = 15,
}
