//! Weights for pallet-migrating-token.
//!
//! Fixed placeholder weights. Replace with generated values once the benchmarks in
//! `benchmarking.rs` have been run on reference hardware.

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn migrate() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn transfer_ownership() -> Weight;
    fn add_admin() -> Weight;
    fn remove_admin() -> Weight;
}

const BASE: u64 = 10_000;

impl WeightInfo for () {
    // Reads: IsPaused, sender ledger, recipient ledger. Writes: both ledgers.
    fn transfer() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 3))
    }
    fn approve() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn migrate() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn pause() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn add_admin() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn remove_admin() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
}
