// SPDX-License-Identifier: MIT
//! Custody transfer policy.
//!
//! Evaluated after the token layer has already accepted the caller as the
//! holder or an approved spender. The record's `originator` keeps a say over
//! custody for the record's whole life.

use soroban_sdk::Address;

/// Returns whether `caller` may move a record out of `from`.
///
/// A transfer is granted when any of the following holds:
/// - `caller` is the registry administrator;
/// - `caller` minted the record;
/// - `from` (the current holder) minted the record;
/// - `caller` is `from`.
///
/// The last rule lets any holder pass the record on, whether or not it is
/// the originator. Custodians such as the lending ledger rely on it to
/// return or seize collateral.
pub fn transfer_allowed(
    caller: &Address,
    from: &Address,
    originator: &Address,
    admin: &Address,
) -> bool {
    caller == admin || caller == originator || from == originator || caller == from
}
