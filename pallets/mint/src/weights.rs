//! Weights for pallet-mint.
//!
//! Hand-estimated from the storage accesses of each call until `benchmarking.rs` is run on
//! reference hardware and this file is regenerated.
//!
//! Runtimes set `type WeightInfo = pallet_mint::weights::SubstrateWeight<Runtime>`; the `()`
//! implementation is for tests.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn add_token_type() -> Weight;
    fn mint() -> Weight;
    fn toggle_mint_permission() -> Weight;
    fn set_price() -> Weight;
    fn set_base_uri() -> Weight;
    fn withdraw_all() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `Mint::Owner` (r:1 w:0)
    /// Storage: `Mint::TokenTypeCount` (r:1 w:1)
    /// Storage: `Mint::TokenTypes` (r:0 w:1)
    fn add_token_type() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Mint::TokenTypes` (r:1 w:1)
    /// Storage: `Mint::Holdings` (r:1 w:1)
    /// Storage: `System::Account` (r:2 w:2)
    fn mint() -> Weight {
        Weight::from_parts(48_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(4_u64))
    }
    /// Storage: `Mint::Owner` (r:1 w:0)
    /// Storage: `Mint::TokenTypes` (r:1 w:1)
    fn toggle_mint_permission() -> Weight {
        Weight::from_parts(11_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Mint::Owner` (r:1 w:0)
    /// Storage: `Mint::TokenTypes` (r:1 w:1)
    fn set_price() -> Weight {
        Weight::from_parts(11_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Mint::Owner` (r:1 w:0)
    /// Storage: `Mint::BaseUri` (r:0 w:1)
    fn set_base_uri() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Mint::Owner` (r:1 w:0)
    /// Storage: `System::Account` (r:2 w:2)
    fn withdraw_all() -> Weight {
        Weight::from_parts(40_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn add_token_type() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn mint() -> Weight {
        Weight::from_parts(48_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(4_u64))
    }
    fn toggle_mint_permission() -> Weight {
        Weight::from_parts(11_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_price() -> Weight {
        Weight::from_parts(11_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_base_uri() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn withdraw_all() -> Weight {
        Weight::from_parts(40_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
}
