//! Benchmarking setup for pallet-mint

use super::*;

#[allow(unused)]
use crate::Pallet as Mint;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn set_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = whitelisted_caller();
    Owner::<T>::put(&owner);
    owner
}

/// Registers an enabled token type priced at `price` and returns its id.
fn priced_token_type<T: Config>(price: BalanceOf<T>) -> TokenTypeId {
    Pallet::<T>::insert_token_type(price, 0, true).expect("Fresh id space")
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn add_token_type() {
        let owner = set_owner::<T>();
        let count = TokenTypeCount::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), 1_000u32.into(), 0u128, true);

        assert_eq!(TokenTypeCount::<T>::get(), count + 1);
    }

    // Payment is transferred into the ledger account.
    #[benchmark]
    fn mint() {
        let payer: T::AccountId = account("payer", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let price = T::Currency::minimum_balance();
        let id = priced_token_type::<T>(price);
        let quantity: u128 = 10;
        let payment = price * 10u32.into();
        T::Currency::set_balance(&payer, payment * 10u32.into());
        Pallet::<T>::endow_ledger_account();
        let proceeds = Pallet::<T>::ledger_balance();

        #[extrinsic_call]
        _(RawOrigin::Signed(payer), recipient.clone(), id, quantity, payment);

        assert_eq!(Holdings::<T>::get(&recipient, id), quantity);
        assert_eq!(Pallet::<T>::ledger_balance(), proceeds + payment);
    }

    #[benchmark]
    fn toggle_mint_permission() {
        let owner = set_owner::<T>();
        let id = priced_token_type::<T>(1u32.into());

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), id);

        assert_eq!(TokenTypes::<T>::get(id).map(|t| t.can_mint), Some(false));
    }

    #[benchmark]
    fn set_price() {
        let owner = set_owner::<T>();
        let id = priced_token_type::<T>(1u32.into());
        let price: BalanceOf<T> = 5_000u32.into();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), id, price);

        assert_eq!(TokenTypes::<T>::get(id).map(|t| t.price), Some(price));
    }

    #[benchmark]
    fn set_base_uri() {
        let owner = set_owner::<T>();
        let uri = sp_std::vec![b'u'; T::MaxBaseUriLength::get() as usize];

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), uri.clone());

        assert_eq!(Pallet::<T>::base_uri(), uri);
    }

    #[benchmark]
    fn withdraw_all() {
        let owner = set_owner::<T>();
        let amount = T::Currency::minimum_balance() * 100u32.into();
        T::Currency::set_balance(&Pallet::<T>::account_id(), amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(Pallet::<T>::ledger_balance().is_zero());
    }

    impl_benchmark_test_suite!(Mint, crate::mock::new_test_ext(), crate::mock::Test);
}
