//! Checked arithmetic for balances, allowances and supply.
//!
//! Every mutation in the pallet goes through these helpers rather than the raw operators, so
//! a would-be wrap turns into a failed call instead of a corrupted ledger.

use sp_runtime::ArithmeticError;

pub fn add(a: u128, b: u128) -> Result<u128, ArithmeticError> {
    a.checked_add(b).ok_or(ArithmeticError::Overflow)
}

pub fn sub(a: u128, b: u128) -> Result<u128, ArithmeticError> {
    a.checked_sub(b).ok_or(ArithmeticError::Underflow)
}

pub fn mul(a: u128, b: u128) -> Result<u128, ArithmeticError> {
    a.checked_mul(b).ok_or(ArithmeticError::Overflow)
}

/// Truncating division.
pub fn div(a: u128, b: u128) -> Result<u128, ArithmeticError> {
    a.checked_div(b).ok_or(ArithmeticError::DivisionByZero)
}
