// SPDX-License-Identifier: MIT
// Compatible with OpenZeppelin Stellar Soroban Contracts ^0.4.1

//! # Lending Ledger
//!
//! Lenders pool deposits of a single asset. A borrower posts an invoice
//! record from the collateral registry and is offered a fixed share of its
//! face value; any lender with enough pooled balance can fund it. The loan
//! ends either with the borrower repaying the full face value to the lender,
//! or with the lender taking the record once the invoice is past due.

use soroban_sdk::{contract, contractimpl, log, panic_with_error, token::TokenClient, Address, Env};
use stellar_contract_utils::pausable::{self as pausable, Pausable};
use stellar_macros::when_not_paused;

use crate::{
    error::LedgerError,
    events,
    guard::OperationGuard,
    registry::RegistryClient,
    storage::{self, Config, LoanRequest, LoanStatus},
};

/// Share of the collateral amount advanced to the borrower.
pub const LOAN_TO_VALUE_PERCENT: i128 = 80;
/// Share of the collateral amount owed back to the lender.
pub const REPAYMENT_PERCENT: i128 = 100;

/// `(loan_amount, repayment_amount)` for a record of face value `amount`,
/// rounded down.
pub(crate) fn loan_terms(amount: i128) -> Result<(i128, i128), LedgerError> {
    let loan_amount = amount
        .checked_mul(LOAN_TO_VALUE_PERCENT)
        .ok_or(LedgerError::Overflow)?
        / 100;
    let repayment_amount = amount
        .checked_mul(REPAYMENT_PERCENT)
        .ok_or(LedgerError::Overflow)?
        / 100;
    Ok((loan_amount, repayment_amount))
}

fn move_funds(e: &Env, token: &Address, from: &Address, to: &Address, amount: i128) -> Result<(), LedgerError> {
    match TokenClient::new(e, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(e, "asset transfer of {} from {} failed", amount, from.clone());
            Err(LedgerError::TransferFailed)
        }
    }
}

fn load_loan(e: &Env, loan_id: u32) -> Result<LoanRequest, LedgerError> {
    storage::read_loan(e, loan_id).ok_or(LedgerError::NotFound)
}

fn require_admin(e: &Env, caller: &Address) {
    caller.require_auth();
    let config = match storage::read_config(e) {
        Ok(config) => config,
        Err(err) => panic_with_error!(e, err),
    };
    if *caller != config.admin {
        panic_with_error!(e, LedgerError::Unauthorized);
    }
}

#[contract]
pub struct LendingLedger;

#[contractimpl]
impl LendingLedger {
    pub fn __constructor(e: &Env, admin: Address, registry: Address, token: Address) {
        storage::write_config(e, &Config { admin, registry, token });
    }

    // ===== POOL BALANCES =====

    #[when_not_paused]
    pub fn deposit(e: &Env, lender: Address, amount: i128) -> Result<(), LedgerError> {
        lender.require_auth();
        let _guard = OperationGuard::enter(e)?;

        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }
        let config = storage::read_config(e)?;

        // credit only once the asset is actually in the pool
        move_funds(e, &config.token, &lender, &e.current_contract_address(), amount)?;
        let balance = storage::read_balance(e, &lender)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        storage::write_balance(e, &lender, balance);
        storage::bump_instance(e);

        events::deposited(e, &lender, amount);
        Ok(())
    }

    #[when_not_paused]
    pub fn withdraw(e: &Env, lender: Address, amount: i128) -> Result<(), LedgerError> {
        lender.require_auth();
        let _guard = OperationGuard::enter(e)?;

        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }
        let balance = storage::read_balance(e, &lender);
        if balance < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        let config = storage::read_config(e)?;

        storage::write_balance(e, &lender, balance - amount);
        move_funds(e, &config.token, &e.current_contract_address(), &lender, amount)?;
        storage::bump_instance(e);

        events::withdrawn(e, &lender, amount);
        Ok(())
    }

    // ===== LOAN LIFECYCLE =====

    /// Open a loan request against `collateral_id`. The record moves into
    /// the ledger's custody until the loan resolves.
    #[when_not_paused]
    pub fn create_loan_request(e: &Env, borrower: Address, collateral_id: u32) -> Result<u32, LedgerError> {
        borrower.require_auth();
        let _guard = OperationGuard::enter(e)?;

        let config = storage::read_config(e)?;
        let registry = RegistryClient::new(e, &config.registry);
        let record = match registry.try_get_record(&collateral_id) {
            Ok(Ok(record)) => record,
            _ => return Err(LedgerError::NotFound),
        };

        if record.originator != borrower {
            return Err(LedgerError::NotBorrower);
        }
        if registry.owner_of(&collateral_id) != borrower {
            return Err(LedgerError::NotHolder);
        }
        if record.due_date <= e.ledger().timestamp() {
            return Err(LedgerError::Expired);
        }

        let (loan_amount, repayment_amount) = loan_terms(record.amount)?;
        let id = storage::read_loan_count(e);
        let loan = LoanRequest {
            id,
            collateral_id,
            borrower: borrower.clone(),
            lender: None,
            loan_amount,
            repayment_amount,
            due_date: record.due_date,
            status: LoanStatus::Requested,
        };
        storage::write_loan(e, &loan);
        storage::write_loan_count(e, id.checked_add(1).ok_or(LedgerError::Overflow)?);

        registry.transfer(&borrower, &e.current_contract_address(), &collateral_id);
        storage::bump_instance(e);

        events::loan_requested(e, &loan);
        Ok(id)
    }

    #[when_not_paused]
    pub fn fund_loan(e: &Env, lender: Address, loan_id: u32) -> Result<(), LedgerError> {
        lender.require_auth();
        let _guard = OperationGuard::enter(e)?;

        let mut loan = load_loan(e, loan_id)?;
        if loan.status != LoanStatus::Requested {
            return Err(LedgerError::AlreadyActive);
        }
        if e.ledger().timestamp() >= loan.due_date {
            return Err(LedgerError::Expired);
        }
        let balance = storage::read_balance(e, &lender);
        if balance < loan.loan_amount {
            return Err(LedgerError::InsufficientBalance);
        }
        let config = storage::read_config(e)?;

        storage::write_balance(e, &lender, balance - loan.loan_amount);
        loan.lender = Some(lender.clone());
        loan.status = LoanStatus::Active;
        storage::write_loan(e, &loan);

        move_funds(
            e,
            &config.token,
            &e.current_contract_address(),
            &loan.borrower,
            loan.loan_amount,
        )?;
        storage::bump_instance(e);

        events::loan_funded(e, &loan, &lender);
        Ok(())
    }

    /// Pay the full repayment amount straight to the lender and take the
    /// collateral back. Allowed for as long as the loan is active, i.e.
    /// until the lender claims the collateral.
    #[when_not_paused]
    pub fn repay_loan(e: &Env, borrower: Address, loan_id: u32) -> Result<(), LedgerError> {
        borrower.require_auth();
        let _guard = OperationGuard::enter(e)?;

        let mut loan = load_loan(e, loan_id)?;
        if loan.borrower != borrower {
            return Err(LedgerError::NotBorrower);
        }
        if loan.status != LoanStatus::Active {
            return Err(LedgerError::NotActive);
        }
        let lender = loan.lender.clone().ok_or(LedgerError::NotActive)?;
        let config = storage::read_config(e)?;

        loan.status = LoanStatus::Repaid;
        storage::write_loan(e, &loan);

        move_funds(e, &config.token, &borrower, &lender, loan.repayment_amount)?;
        RegistryClient::new(e, &config.registry).transfer(
            &e.current_contract_address(),
            &borrower,
            &loan.collateral_id,
        );

        let reputation = storage::read_reputation(e, &borrower)
            .checked_add(1)
            .ok_or(LedgerError::Overflow)?;
        storage::write_reputation(e, &borrower, reputation);
        storage::bump_instance(e);

        events::loan_repaid(e, &loan, &lender);
        Ok(())
    }

    /// Seize the collateral of a loan that is past due. Irreversible: the
    /// loan is closed and the borrower can no longer repay it.
    #[when_not_paused]
    pub fn claim_defaulted_collateral(e: &Env, lender: Address, loan_id: u32) -> Result<(), LedgerError> {
        lender.require_auth();
        let _guard = OperationGuard::enter(e)?;

        let mut loan = load_loan(e, loan_id)?;
        if loan.lender.as_ref() != Some(&lender) {
            return Err(LedgerError::NotLender);
        }
        if loan.status != LoanStatus::Active {
            return Err(LedgerError::NotActive);
        }
        if e.ledger().timestamp() <= loan.due_date {
            return Err(LedgerError::NotYetDefaulted);
        }
        let config = storage::read_config(e)?;

        loan.status = LoanStatus::Repaid;
        storage::write_loan(e, &loan);

        RegistryClient::new(e, &config.registry).transfer(
            &e.current_contract_address(),
            &lender,
            &loan.collateral_id,
        );
        storage::bump_instance(e);

        events::collateral_claimed(e, &loan, &lender);
        Ok(())
    }

    // ===== READS =====

    /// Unknown ids yield `None` rather than an error, unlike the registry's
    /// `get_record`.
    pub fn get_loan_request(e: &Env, loan_id: u32) -> Option<LoanRequest> {
        storage::read_loan(e, loan_id)
    }

    pub fn get_lender_balance(e: &Env, lender: Address) -> i128 {
        storage::read_balance(e, &lender)
    }

    pub fn get_borrower_reputation(e: &Env, borrower: Address) -> u32 {
        storage::read_reputation(e, &borrower)
    }

    pub fn loan_count(e: &Env) -> u32 {
        storage::read_loan_count(e)
    }

    pub fn admin(e: &Env) -> Result<Address, LedgerError> {
        Ok(storage::read_config(e)?.admin)
    }

    pub fn registry(e: &Env) -> Result<Address, LedgerError> {
        Ok(storage::read_config(e)?.registry)
    }

    pub fn token(e: &Env) -> Result<Address, LedgerError> {
        Ok(storage::read_config(e)?.token)
    }
}

#[contractimpl]
impl Pausable for LendingLedger {
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
