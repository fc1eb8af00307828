#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are kept until the pallet moves to view functions
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! Token ledger that succeeds a predecessor ledger.
//!
//! Every account's balance transparently includes whatever it held in the predecessor. The
//! legacy balance is folded into the account's local balance exactly once, the first time the
//! account spends (or calls `migrate`), and is never read for that account again afterwards.
//! Until then `balance_of` reports local + legacy without persisting anything.
//!
//! Total supply is the predecessor's supply captured at genesis, minus whatever sits at the
//! null account, which acts as a burn sink.
//!
//! Two behaviours differ between `transfer` and `transfer_from` and are kept on purpose:
//!
//! - `transfer` is refused while the access gate reports paused; `transfer_from` is not gated.
//! - `transfer_from` debits the owner's local balance without folding the legacy balance first
//!   (see `Pallet::debit_local_without_fold`).

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::Get};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::{ArithmeticError, DispatchError};
use sp_std::prelude::*;

pub use pallet::*;

pub mod arithmetic;
pub mod gate;
pub mod legacy;
pub mod migrations;
pub mod roles;
pub mod weights;

pub use gate::{AccessGate, PauseSwitch};
pub use legacy::{LegacyLedger, LegacyLedgerUnavailable};
pub use roles::{HasRole, Role, StoredRoles};
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;



#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-migrating-token";

/// An account's entry in the new ledger.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug,
)]
pub struct AccountLedger {
    /// Balance held natively, including the legacy balance once folded.
    pub local: u128,
    /// Set when the legacy balance has been folded into `local`. Never cleared.
    pub migrated: bool,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The ledger this pallet supersedes.
        type LegacyLedger: LegacyLedger<Self::AccountId>;

        /// Consulted before every `transfer`.
        type AccessGate: AccessGate;

        /// Capability check for ownership, admin and pause operations.
        type Roles: HasRole<Self::AccountId>;

        /// Burn sink. Balances held here are excluded from the reported total supply.
        #[pallet::constant]
        type NullAccount: Get<Self::AccountId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Sovereign Bond Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "SBT")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Predecessor total supply, captured once at genesis or by the v1 storage migration.
    #[pallet::storage]
    #[pallet::getter(fn supply_snapshot)]
    pub type SupplySnapshot<T> = StorageValue<_, u128, ValueQuery>;

    /// Local balance and migration flag per account.
    #[pallet::storage]
    #[pallet::getter(fn ledger)]
    pub type Ledgers<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, AccountLedger, ValueQuery>;

    /// Amount `spender` may still move out of `owner`'s balance.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Backing flag for [`PauseSwitch`].
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type IsPaused<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn is_admin)]
    pub type Admins<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved from one account to another
        Transfer { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance of `spender` over `owner`'s balance set to `amount`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Legacy balance folded into the account's local balance
        Migrated { account: T::AccountId, legacy_balance: u128 },
        /// Self-transfers suspended
        Paused,
        /// Self-transfers resumed
        Unpaused,
        OwnershipTransferred { previous: Option<T::AccountId>, new: T::AccountId },
        AdminAdded { account: T::AccountId },
        AdminRemoved { account: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Arithmetic result exceeds `u128`
        Overflow,
        /// Subtraction would go below zero
        Underflow,
        /// Division by zero
        DivideByZero,
        /// Sender's effective balance is below the amount
        InsufficientBalance,
        /// Spender's allowance is below the amount
        InsufficientAllowance,
        /// The access gate refused a self-transfer
        Paused,
        /// The predecessor ledger failed to answer
        ExternalLedgerUnavailable,
        /// The null account was given where a real account is required
        InvalidAccount,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Move `amount` from the caller to `to`.
        ///
        /// Folds the caller's legacy balance first if it has not been folded yet. Refused with
        /// `Paused` while the access gate is closed.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(!T::AccessGate::is_paused(), Error::<T>::Paused);

            Self::migrate_and_debit(&sender, amount)?;
            Self::credit(&to, amount)?;
            Self::deposit_event(Event::Transfer { from: sender, to, amount });
            Ok(())
        }

        /// Let `spender` move up to `amount` of the caller's balance. Overwrites any previous
        /// allowance.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::set_allowance(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        /// Move `amount` from `owner` to `to` against the caller's allowance.
        ///
        /// Not gated by the access gate. The owner's balance is checked before the allowance,
        /// and only the owner's local balance counts (no legacy fold).
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;

            Self::debit_local_without_fold(&owner, amount)?;
            Self::spend_allowance(&owner, &spender, amount)?;
            Self::credit(&to, amount)?;
            Self::deposit_event(Event::Transfer { from: owner, to, amount });
            Ok(())
        }

        /// Fold the caller's legacy balance now instead of on first spend.
        ///
        /// Succeeds without effect for an account that is already migrated.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::migrate())]
        pub fn migrate(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let mut ledger = Ledgers::<T>::get(&who);
            if let Some(legacy_balance) = Self::fold_legacy(&who, &mut ledger)? {
                Ledgers::<T>::insert(&who, ledger);
                Self::deposit_event(Event::Migrated { account: who, legacy_balance });
            }
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_role(origin, Role::Admin)?;
            IsPaused::<T>::put(true);
            Self::deposit_event(Event::Paused);
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_role(origin, Role::Admin)?;
            IsPaused::<T>::put(false);
            Self::deposit_event(Event::Unpaused);
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            Self::ensure_role(origin, Role::Owner)?;
            ensure!(new_owner != T::NullAccount::get(), Error::<T>::InvalidAccount);

            let previous = Owner::<T>::get();
            Owner::<T>::put(&new_owner);
            Self::deposit_event(Event::OwnershipTransferred { previous, new: new_owner });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::add_admin())]
        pub fn add_admin(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_role(origin, Role::Owner)?;
            ensure!(account != T::NullAccount::get(), Error::<T>::InvalidAccount);

            Admins::<T>::insert(&account, true);
            Self::deposit_event(Event::AdminAdded { account });
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::remove_admin())]
        pub fn remove_admin(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_role(origin, Role::Owner)?;
            Admins::<T>::remove(&account);
            Self::deposit_event(Event::AdminRemoved { account });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial owner
        pub owner: Option<T::AccountId>,
        /// Accounts holding the admin role at genesis
        pub admins: Vec<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Start with self-transfers suspended
        pub paused: bool,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref owner) = self.owner {
                assert!(*owner != T::NullAccount::get(), "Owner must not be the null account");
                Owner::<T>::put(owner);
            }

            for admin in &self.admins {
                assert!(*admin != T::NullAccount::get(), "Admin must not be the null account");
                Admins::<T>::insert(admin, true);
            }

            IsPaused::<T>::put(self.paused);

            let snapshot = T::LegacyLedger::legacy_total_supply()
                .expect("Predecessor ledger must be reachable at genesis");
            SupplySnapshot::<T>::put(snapshot);
        }
    }
}

impl<T: Config> From<ArithmeticError> for Error<T> {
    fn from(error: ArithmeticError) -> Self {
        match error {
            ArithmeticError::Overflow => Error::Overflow,
            ArithmeticError::Underflow => Error::Underflow,
            ArithmeticError::DivisionByZero => Error::DivideByZero,
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Balance of `who` as seen by callers: local balance, plus the legacy balance while it
    /// has not been folded yet. Reading never folds.
    pub fn balance_of(who: &T::AccountId) -> Result<u128, DispatchError> {
        Self::effective_balance(who).map_err(Into::into)
    }

    /// Supply snapshot minus the effective balance of the null account.
    pub fn total_supply() -> Result<u128, DispatchError> {
        let burned = Self::effective_balance(&T::NullAccount::get())?;
        Ok(arithmetic::sub(SupplySnapshot::<T>::get(), burned).map_err(Error::<T>::from)?)
    }

    pub fn is_migrated(who: &T::AccountId) -> bool {
        Ledgers::<T>::get(who).migrated
    }

    pub(crate) fn effective_balance(who: &T::AccountId) -> Result<u128, Error<T>> {
        let ledger = Ledgers::<T>::get(who);
        if ledger.migrated {
            return Ok(ledger.local);
        }
        let legacy = Self::read_legacy_balance(who)?;
        Ok(arithmetic::add(ledger.local, legacy)?)
    }

    /// Fold the legacy balance into `ledger` unless that already happened.
    ///
    /// Returns the folded amount, or `None` for an account that was already migrated. The
    /// caller is responsible for writing `ledger` back.
    fn fold_legacy(
        who: &T::AccountId,
        ledger: &mut AccountLedger,
    ) -> Result<Option<u128>, Error<T>> {
        if ledger.migrated {
            return Ok(None);
        }
        let legacy = Self::read_legacy_balance(who)?;
        ledger.local = arithmetic::add(ledger.local, legacy)?;
        ledger.migrated = true;
        log::debug!(target: LOG_TARGET, "Folded legacy balance {legacy} for {who:?}");
        Ok(Some(legacy))
    }

    /// First step of every self-transfer: fold once, then debit.
    ///
    /// Nothing is written unless the debit succeeds, so a failed spend leaves the account
    /// unmigrated.
    pub(crate) fn migrate_and_debit(who: &T::AccountId, amount: u128) -> Result<(), Error<T>> {
        let mut ledger = Ledgers::<T>::get(who);
        let folded = Self::fold_legacy(who, &mut ledger)?;
        ledger.local =
            arithmetic::sub(ledger.local, amount).map_err(|_| Error::<T>::InsufficientBalance)?;
        Ledgers::<T>::insert(who, ledger);

        if let Some(legacy_balance) = folded {
            Self::deposit_event(Event::Migrated { account: who.clone(), legacy_balance });
        }
        Ok(())
    }

    /// Debit `who`'s local balance without folding the legacy balance first.
    ///
    /// Used only by `transfer_from`. An owner who has never spent directly can be refused here
    /// even though `balance_of` reports enough. Replacing this call with `migrate_and_debit`
    /// makes delegated transfers see the folded balance.
    pub(crate) fn debit_local_without_fold(
        who: &T::AccountId,
        amount: u128,
    ) -> Result<(), Error<T>> {
        Ledgers::<T>::try_mutate(who, |ledger| -> Result<(), Error<T>> {
            ledger.local = arithmetic::sub(ledger.local, amount)
                .map_err(|_| Error::<T>::InsufficientBalance)?;
            Ok(())
        })
    }

    /// Never migrates the recipient.
    pub(crate) fn credit(who: &T::AccountId, amount: u128) -> Result<(), Error<T>> {
        Ledgers::<T>::try_mutate(who, |ledger| -> Result<(), Error<T>> {
            ledger.local = arithmetic::add(ledger.local, amount)?;
            Ok(())
        })
    }

    pub(crate) fn set_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        Allowances::<T>::insert(owner, spender, amount);
    }

    pub(crate) fn spend_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: u128,
    ) -> Result<(), Error<T>> {
        Allowances::<T>::try_mutate(owner, spender, |allowance| -> Result<(), Error<T>> {
            *allowance =
                arithmetic::sub(*allowance, amount).map_err(|_| Error::<T>::InsufficientAllowance)?;
            Ok(())
        })
    }

    fn read_legacy_balance(who: &T::AccountId) -> Result<u128, Error<T>> {
        T::LegacyLedger::legacy_balance_of(who).map_err(|_| {
            log::warn!(target: LOG_TARGET, "Predecessor ledger unavailable reading {who:?}");
            Error::<T>::ExternalLedgerUnavailable
        })
    }

    fn ensure_role(origin: OriginFor<T>, role: Role) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(T::Roles::has_role(&who, role), DispatchError::BadOrigin);
        Ok(who)
    }

    /// Sum of local balances never exceeds the supply snapshot.
    #[cfg(any(feature = "try-runtime", test))]
    pub(crate) fn do_try_state() -> Result<(), DispatchError> {
        let mut total: u128 = 0;
        for ledger in Ledgers::<T>::iter_values() {
            total = arithmetic::add(total, ledger.local)
                .map_err(|_| DispatchError::Other("Local balances overflow"))?;
        }
        ensure!(
            total <= SupplySnapshot::<T>::get(),
            DispatchError::Other("Local balances exceed supply snapshot")
        );
        Ok(())
    }
}
