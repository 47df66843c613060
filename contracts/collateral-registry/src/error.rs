// SPDX-License-Identifier: MIT
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    NotInitialized = 1,
    Unauthorized = 2,
    InvalidAmount = 3,
    InvalidDate = 4,
    EmptyField = 5,
    EmptyHash = 6,
    NotFound = 7,
}
