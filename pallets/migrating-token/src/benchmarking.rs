//! Benchmarking setup for pallet-migrating-token
//!
//! Role-gated calls are set up through `Owner`/`Admins` storage, so these benchmarks assume the
//! runtime wires `Roles = StoredRoles<Runtime>`.

use super::*;

#[allow(unused)]
use crate::Pallet as MigratingToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn funded<T: Config>(who: &T::AccountId, local: u128) {
    Ledgers::<T>::insert(who, AccountLedger { local, migrated: true });
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        funded::<T>(&caller, 10_000_000);
        IsPaused::<T>::put(false);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Ledgers::<T>::get(&recipient).local, amount);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        funded::<T>(&owner, 10_000_000);
        Allowances::<T>::insert(&owner, &spender, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), amount);

        assert_eq!(Ledgers::<T>::get(&recipient).local, amount);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 0);
    }

    #[benchmark]
    fn approve() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 1_000_000);
    }

    #[benchmark]
    fn migrate() {
        let caller: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        assert!(Ledgers::<T>::get(&caller).migrated);
    }

    #[benchmark]
    fn pause() {
        let caller: T::AccountId = whitelisted_caller();
        Admins::<T>::insert(&caller, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(IsPaused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let caller: T::AccountId = whitelisted_caller();
        Admins::<T>::insert(&caller, true);
        IsPaused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(!IsPaused::<T>::get());
    }

    #[benchmark]
    fn transfer_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("owner", 0, 0);
        Owner::<T>::put(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn add_admin() {
        let caller: T::AccountId = whitelisted_caller();
        let admin: T::AccountId = account("admin", 0, 0);
        Owner::<T>::put(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), admin.clone());

        assert!(Admins::<T>::get(&admin));
    }

    #[benchmark]
    fn remove_admin() {
        let caller: T::AccountId = whitelisted_caller();
        let admin: T::AccountId = account("admin", 0, 0);
        Owner::<T>::put(&caller);
        Admins::<T>::insert(&admin, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), admin.clone());

        assert!(!Admins::<T>::get(&admin));
    }

    impl_benchmark_test_suite!(MigratingToken, crate::mock::new_test_ext(), crate::mock::Test);
}
