//! Read-only view onto the predecessor ledger.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// The predecessor ledger could not answer a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo)]
pub struct LegacyLedgerUnavailable;

/// The ledger being superseded.
///
/// The pallet never writes through this trait. Balances read from it are folded into the new
/// ledger at most once per account, on that account's first spend or explicit migration.
pub trait LegacyLedger<AccountId> {
    /// Total supply of the predecessor, read once when the supply snapshot is taken.
    fn legacy_total_supply() -> Result<u128, LegacyLedgerUnavailable>;

    /// Balance `who` holds in the predecessor.
    fn legacy_balance_of(who: &AccountId) -> Result<u128, LegacyLedgerUnavailable>;
}

/// No predecessor: every legacy balance and the legacy supply are zero.
impl<AccountId> LegacyLedger<AccountId> for () {
    fn legacy_total_supply() -> Result<u128, LegacyLedgerUnavailable> {
        Ok(0)
    }

    fn legacy_balance_of(_who: &AccountId) -> Result<u128, LegacyLedgerUnavailable> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_fault_is_scale_encodable() {
        let encoded = LegacyLedgerUnavailable.encode();
        assert_eq!(encoded.len(), LegacyLedgerUnavailable::max_encoded_len());
        assert_eq!(LegacyLedgerUnavailable::decode(&mut &encoded[..]), Ok(LegacyLedgerUnavailable));
    }

    #[test]
    fn no_predecessor_reports_zero() {
        assert_eq!(<() as LegacyLedger<u64>>::legacy_total_supply(), Ok(0));
        assert_eq!(<() as LegacyLedger<u64>>::legacy_balance_of(&7), Ok(0));
    }
}
