use crate as pallet_mint;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
    PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Balances: pallet_balances,
        Mint: pallet_mint,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<u64>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type AccountStore = System;
    type ExistentialDeposit = ExistentialDeposit;
}

parameter_types! {
    pub const ExistentialDeposit: u64 = 10;
    pub const MintPalletId: PalletId = PalletId(*b"py/mint_");
}

impl pallet_mint::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type PalletId = MintPalletId;
    type MaxBaseUriLength = ConstU32<128>;
    type WeightInfo = ();
}

pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
/// Endowed with just enough to pay small amounts.
pub const BOB: u64 = 3;

pub const SAMPLE_URI: &[u8] = b"ipfs://bafybeihkoviema7g3gxyt6la7vd5ho32ictqbilu3wnlo3rs/";

pub const ONE_E18: u128 = 1_000_000_000_000_000_000;
pub const ONE_E27: u128 = 1_000_000_000_000_000_000_000_000_000;

/// Withdrawable funds held by the ledger account when built with [`new_test_ext_with_balance`].
pub const LEDGER_FUNDS: u64 = 0x1000;

fn build_ext(ledger_funds: u64) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    let mut balances = vec![(OWNER, 1_000_000), (ALICE, 1_000_000), (BOB, 100)];
    if ledger_funds > 0 {
        balances.push((Mint::account_id(), ledger_funds + ExistentialDeposit::get()));
    }
    pallet_balances::GenesisConfig::<Test> { balances, dev_accounts: None }
        .assimilate_storage(&mut t)
        .unwrap();

    pallet_mint::GenesisConfig::<Test> {
        owner: Some(OWNER),
        base_uri: SAMPLE_URI.to_vec(),
        token_types: vec![(0, ONE_E18, true), (0, ONE_E27, true), (0, 1, true)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    t.into()
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(0)
}

/// Same as [`new_test_ext`], with the ledger account already holding [`LEDGER_FUNDS`].
pub fn new_test_ext_with_balance() -> sp_io::TestExternalities {
    build_ext(LEDGER_FUNDS)
}
