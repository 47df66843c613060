// SPDX-License-Identifier: MIT
use soroban_sdk::{symbol_short, Address, Env};

use crate::storage::CollateralRecord;

pub(crate) fn minted(e: &Env, record: &CollateralRecord) {
    let topics = (symbol_short!("minted"), record.id);
    e.events().publish(
        topics,
        (
            record.originator.clone(),
            record.amount,
            record.due_date,
            record.debtor.clone(),
        ),
    );
}

pub(crate) fn admin_set(e: &Env, previous: &Address, admin: &Address) {
    e.events()
        .publish((symbol_short!("admin_set"),), (previous.clone(), admin.clone()));
}
