//! Storage migrations for pallet-migrating-token.
//!
//! Chains that start with this pallet in genesis get the supply snapshot from the genesis
//! build. Chains that add the pallet through a runtime upgrade have no genesis for it, so
//! [`v1::MigrateToV1`] takes the snapshot instead.
//!
//! Wire it into the runtime's `Executive` migration tuple:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_migrating_token::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```
//!
//! On a freshly added pallet `Executive` stamps the in-code storage version before any
//! custom migration runs, so the snapshot's presence decides whether there is work to do,
//! not the on-chain version.

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, LegacyLedger, Pallet, SupplySnapshot, LOG_TARGET};

/// Capture the predecessor's total supply.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        /// Takes the snapshot if none is stored yet. On an outage nothing is written so the
        /// next upgrade tries again.
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if SupplySnapshot::<T>::exists() {
                log::info!(
                    target: LOG_TARGET,
                    "Supply snapshot already present at v{on_chain_version:?}, skipping"
                );
                if on_chain_version < 1 {
                    StorageVersion::new(1).put::<Pallet<T>>();
                    return T::DbWeight::get().reads_writes(2, 1);
                }
                return T::DbWeight::get().reads(2);
            }

            match T::LegacyLedger::legacy_total_supply() {
                Ok(supply) => {
                    SupplySnapshot::<T>::put(supply);
                    if on_chain_version < 1 {
                        StorageVersion::new(1).put::<Pallet<T>>();
                    }
                    log::info!(
                        target: LOG_TARGET,
                        "Migrated to v1: captured predecessor supply {supply}"
                    );
                    T::DbWeight::get().reads_writes(2, 2)
                },
                Err(_) => {
                    log::error!(
                        target: LOG_TARGET,
                        "Predecessor ledger unavailable, v1 supply snapshot deferred"
                    );
                    T::DbWeight::get().reads(2)
                },
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let had_snapshot = SupplySnapshot::<T>::exists();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: storage version {:?}, snapshot present: {}",
                Pallet::<T>::on_chain_storage_version(),
                had_snapshot
            );
            Ok(had_snapshot.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let had_snapshot: bool = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            if !had_snapshot && SupplySnapshot::<T>::exists() {
                let expected = T::LegacyLedger::legacy_total_supply().map_err(|_| {
                    sp_runtime::TryRuntimeError::Other("Predecessor ledger unavailable")
                })?;
                frame_support::ensure!(
                    SupplySnapshot::<T>::get() == expected,
                    sp_runtime::TryRuntimeError::Other("Supply snapshot does not match predecessor")
                );
                frame_support::ensure!(
                    Pallet::<T>::on_chain_storage_version() >= 1,
                    sp_runtime::TryRuntimeError::Other("Storage version not bumped")
                );
            }

            Pallet::<T>::do_try_state()
        }
    }
}
