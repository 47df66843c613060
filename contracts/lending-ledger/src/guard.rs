// SPDX-License-Identifier: MIT
//! Exclusive scope for a single ledger operation.
//!
//! Every mutating entry point holds an [`OperationGuard`] for its whole body,
//! covering the registry and asset calls it makes. A nested attempt to enter
//! any guarded operation fails with [`LedgerError::Reentrant`]. On failure the
//! host discards the lock together with the rest of the operation's writes.

use soroban_sdk::Env;

use crate::{error::LedgerError, storage::DataKey};

pub struct OperationGuard<'a> {
    e: &'a Env,
}

impl<'a> OperationGuard<'a> {
    pub fn enter(e: &'a Env) -> Result<Self, LedgerError> {
        if e.storage().instance().has(&DataKey::Locked) {
            return Err(LedgerError::Reentrant);
        }
        e.storage().instance().set(&DataKey::Locked, &true);
        Ok(Self { e })
    }
}

impl Drop for OperationGuard<'_> {
    fn drop(&mut self) {
        self.e.storage().instance().remove(&DataKey::Locked);
    }
}
