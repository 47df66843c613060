// SPDX-License-Identifier: MIT
#![no_std]

mod contract;
mod error;
mod events;
pub mod policy;
mod storage;

pub use contract::{CollateralRegistry, CollateralRegistryClient};
pub use error::RegistryError;
pub use storage::CollateralRecord;
