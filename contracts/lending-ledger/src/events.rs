// SPDX-License-Identifier: MIT
use soroban_sdk::{symbol_short, Address, Env};

use crate::storage::LoanRequest;

pub(crate) fn deposited(e: &Env, lender: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("deposit"), lender.clone()), amount);
}

pub(crate) fn withdrawn(e: &Env, lender: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("withdraw"), lender.clone()), amount);
}

pub(crate) fn loan_requested(e: &Env, loan: &LoanRequest) {
    e.events().publish(
        (symbol_short!("requested"), loan.id),
        (
            loan.collateral_id,
            loan.borrower.clone(),
            loan.loan_amount,
            loan.repayment_amount,
            loan.due_date,
        ),
    );
}

pub(crate) fn loan_funded(e: &Env, loan: &LoanRequest, lender: &Address) {
    e.events().publish(
        (symbol_short!("funded"), loan.id),
        (lender.clone(), loan.borrower.clone(), loan.loan_amount),
    );
}

pub(crate) fn loan_repaid(e: &Env, loan: &LoanRequest, lender: &Address) {
    e.events().publish(
        (symbol_short!("repaid"), loan.id),
        (loan.borrower.clone(), lender.clone(), loan.repayment_amount),
    );
}

pub(crate) fn collateral_claimed(e: &Env, loan: &LoanRequest, lender: &Address) {
    e.events().publish(
        (symbol_short!("defaulted"), loan.id),
        (lender.clone(), loan.collateral_id),
    );
}
