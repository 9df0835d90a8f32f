//! Multi-type token mint ledger.
//!
//! Keeps an append-only registry of token types, each with its own price, minted supply
//! counter and mint permission flag. Anyone may mint units of an enabled type by paying
//! `price * quantity` in the native currency; payments are held by the ledger account until
//! the owner withdraws them.

#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are kept for the plain values until the pallet moves to view functions.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{
        fungible::{Inspect, Mutate},
        tokens::{Fortitude, Preservation},
    },
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::{AccountIdConversion, CheckedMul, Zero};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub const LOG_TARGET: &str = "runtime::mint";

/// Sequential identifier of a registered token type.
pub type TokenTypeId = u32;

pub type BalanceOf<T> =
    <<T as Config>::Currency as Inspect<<T as frame_system::Config>::AccountId>>::Balance;

/// A registered token type.
#[derive(
    Clone, Copy, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct TokenType<Balance> {
    /// Native currency required per unit minted.
    pub price: Balance,
    /// Units accounted as minted, including any supply seeded at registration.
    pub minted_supply: u128,
    pub can_mint: bool,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Currency that mint payments are made in.
        type Currency: Mutate<Self::AccountId>;

        /// Id the ledger account holding mint proceeds is derived from.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Maximum length in bytes of the metadata base URI.
        #[pallet::constant]
        type MaxBaseUriLength: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Account allowed to manage token types and withdraw proceeds. Fixed at genesis.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Metadata base URI (e.g. "ipfs://<cid>/")
    #[pallet::storage]
    pub type BaseUri<T: Config> =
        StorageValue<_, BoundedVec<u8, T::MaxBaseUriLength>, ValueQuery>;

    /// Number of registered token types, which is also the next id to assign.
    #[pallet::storage]
    #[pallet::getter(fn token_type_count)]
    pub type TokenTypeCount<T> = StorageValue<_, TokenTypeId, ValueQuery>;

    /// Token type registry. Keys always form the dense range `0..TokenTypeCount`.
    #[pallet::storage]
    pub type TokenTypes<T: Config> =
        StorageMap<_, Twox64Concat, TokenTypeId, TokenType<BalanceOf<T>>, OptionQuery>;

    /// Units held per (account, token type)
    #[pallet::storage]
    pub type Holdings<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Twox64Concat,
        TokenTypeId,
        u128,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A token type was registered
        TokenTypeAdded {
            id: TokenTypeId,
            price: BalanceOf<T>,
            initial_supply: u128,
            can_mint: bool,
        },
        /// Units of a token type were minted to `to`, paid for by `payer`
        Minted {
            payer: T::AccountId,
            to: T::AccountId,
            id: TokenTypeId,
            quantity: u128,
            paid: BalanceOf<T>,
        },
        /// Minting was enabled or disabled for a token type
        MintPermissionToggled { id: TokenTypeId, can_mint: bool },
        /// Price of a token type changed
        PriceSet { id: TokenTypeId, price: BalanceOf<T> },
        /// Metadata base URI replaced
        BaseUriSet { uri: BoundedVec<u8, T::MaxBaseUriLength> },
        /// Ledger proceeds paid out to the owner
        Withdrawn { to: T::AccountId, amount: BalanceOf<T> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Token type doesn't exist.
        UnknownTokenType,
        /// Minting not allowed for this token type.
        MintingDisabled,
        /// Insufficient funds.
        InsufficientPayment,
        /// No funds available for withdrawal.
        NoFundsAvailable,
        /// Caller is not the owner.
        Unauthorized,
        /// Mint quantity must be greater than zero.
        ZeroQuantity,
        Overflow,
        BaseUriTooLong,
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
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::add_token_type())]
        pub fn add_token_type(
            origin: OriginFor<T>,
            price: BalanceOf<T>,
            initial_supply: u128,
            can_mint: bool,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            let id = Self::insert_token_type(price, initial_supply, can_mint)?;
            log::debug!(target: LOG_TARGET, "Registered token type {id}");
            Self::deposit_event(Event::TokenTypeAdded { id, price, initial_supply, can_mint });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(
            origin: OriginFor<T>,
            to: T::AccountId,
            id: TokenTypeId,
            quantity: u128,
            payment: BalanceOf<T>,
        ) -> DispatchResult {
            let payer = ensure_signed(origin)?;

            let mut token_type = TokenTypes::<T>::get(id).ok_or(Error::<T>::UnknownTokenType)?;
            ensure!(token_type.can_mint, Error::<T>::MintingDisabled);
            ensure!(quantity > 0, Error::<T>::ZeroQuantity);
            let cost = Self::mint_cost(token_type.price, quantity)?;
            ensure!(payment >= cost, Error::<T>::InsufficientPayment);

            let minted_supply =
                token_type.minted_supply.checked_add(quantity).ok_or(Error::<T>::Overflow)?;
            let holding =
                Holdings::<T>::get(&to, id).checked_add(quantity).ok_or(Error::<T>::Overflow)?;

            // Overpayment stays with the ledger.
            if !payment.is_zero() {
                let ledger = Self::account_id();
                T::Currency::transfer(&payer, &ledger, payment, Preservation::Preserve)?;
            }

            token_type.minted_supply = minted_supply;
            TokenTypes::<T>::insert(id, token_type);
            Holdings::<T>::insert(&to, id, holding);

            log::debug!(
                target: LOG_TARGET,
                "Minted {quantity} of token type {id}, paid {payment:?}"
            );
            Self::deposit_event(Event::Minted { payer, to, id, quantity, paid: payment });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::toggle_mint_permission())]
        pub fn toggle_mint_permission(origin: OriginFor<T>, id: TokenTypeId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            let can_mint =
                TokenTypes::<T>::try_mutate(id, |maybe_type| -> Result<bool, DispatchError> {
                    let token_type = maybe_type.as_mut().ok_or(Error::<T>::UnknownTokenType)?;
                    token_type.can_mint = !token_type.can_mint;
                    Ok(token_type.can_mint)
                })?;
            Self::deposit_event(Event::MintPermissionToggled { id, can_mint });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::set_price())]
        pub fn set_price(
            origin: OriginFor<T>,
            id: TokenTypeId,
            price: BalanceOf<T>,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            TokenTypes::<T>::try_mutate(id, |maybe_type| -> DispatchResult {
                let token_type = maybe_type.as_mut().ok_or(Error::<T>::UnknownTokenType)?;
                token_type.price = price;
                Ok(())
            })?;
            Self::deposit_event(Event::PriceSet { id, price });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::set_base_uri())]
        pub fn set_base_uri(origin: OriginFor<T>, uri: Vec<u8>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            let uri: BoundedVec<u8, T::MaxBaseUriLength> =
                uri.try_into().map_err(|_| Error::<T>::BaseUriTooLong)?;
            BaseUri::<T>::put(&uri);
            Self::deposit_event(Event::BaseUriSet { uri });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::withdraw_all())]
        pub fn withdraw_all(origin: OriginFor<T>) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            let amount = Self::ledger_balance();
            ensure!(!amount.is_zero(), Error::<T>::NoFundsAvailable);

            // The existential deposit stays behind so small payments can always land.
            T::Currency::transfer(&Self::account_id(), &owner, amount, Preservation::Preserve)?;

            log::info!(target: LOG_TARGET, "Withdrew {amount:?} from the mint ledger");
            Self::deposit_event(Event::Withdrawn { to: owner, amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Ledger owner. Without one, every owner-only call is rejected.
        pub owner: Option<T::AccountId>,
        /// Metadata base URI
        pub base_uri: Vec<u8>,
        /// Token types to register, in id order: (price, initial supply, can mint)
        pub token_types: Vec<(u128, u128, bool)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }
            Pallet::<T>::endow_ledger_account();

            let uri: BoundedVec<u8, T::MaxBaseUriLength> =
                self.base_uri.clone().try_into().expect("Base URI too long");
            BaseUri::<T>::put(uri);

            for (price, initial_supply, can_mint) in &self.token_types {
                let price = <BalanceOf<T>>::try_from(*price)
                    .unwrap_or_else(|_| panic!("Token type price {price} overflows balance"));
                Pallet::<T>::insert_token_type(price, *initial_supply, *can_mint)
                    .expect("Token type id space exhausted");
            }

            log::info!(
                target: LOG_TARGET,
                "Seeded mint ledger with {} token types",
                self.token_types.len()
            );
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The keyless account holding mint proceeds.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    /// Tops the ledger account up to the existential deposit so it is never reaped and
    /// payments below the deposit can be received.
    pub(crate) fn endow_ledger_account() {
        let account = Self::account_id();
        let minimum = T::Currency::minimum_balance();
        if T::Currency::balance(&account) < minimum {
            let _ = T::Currency::set_balance(&account, minimum);
        }
    }

    /// Proceeds currently available to `withdraw_all`. Excludes the existential deposit.
    pub fn ledger_balance() -> BalanceOf<T> {
        T::Currency::reducible_balance(
            &Self::account_id(),
            Preservation::Preserve,
            Fortitude::Polite,
        )
    }

    /// All registered ids in registration order.
    pub fn token_types() -> Vec<TokenTypeId> {
        (0..TokenTypeCount::<T>::get()).collect()
    }

    /// Minted supply per token type, aligned with [`Self::token_types`].
    pub fn minted_tokens() -> Vec<u128> {
        (0..TokenTypeCount::<T>::get())
            .filter_map(|id| TokenTypes::<T>::get(id))
            .map(|token_type| token_type.minted_supply)
            .collect()
    }

    pub fn token_type(id: TokenTypeId) -> Option<TokenType<BalanceOf<T>>> {
        TokenTypes::<T>::get(id)
    }

    pub fn price(id: TokenTypeId) -> Result<BalanceOf<T>, DispatchError> {
        TokenTypes::<T>::get(id)
            .map(|token_type| token_type.price)
            .ok_or_else(|| Error::<T>::UnknownTokenType.into())
    }

    pub fn balance_of(who: &T::AccountId, id: TokenTypeId) -> u128 {
        Holdings::<T>::get(who, id)
    }

    pub fn base_uri() -> Vec<u8> {
        BaseUri::<T>::get().into_inner()
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    /// Appends a token type and returns its id.
    fn insert_token_type(
        price: BalanceOf<T>,
        initial_supply: u128,
        can_mint: bool,
    ) -> Result<TokenTypeId, DispatchError> {
        let id = TokenTypeCount::<T>::get();
        let next = id.checked_add(1).ok_or(Error::<T>::Overflow)?;
        TokenTypes::<T>::insert(id, TokenType { price, minted_supply: initial_supply, can_mint });
        TokenTypeCount::<T>::put(next);
        Ok(id)
    }

    /// `price * quantity`. A product that does not fit the balance type can never be paid.
    fn mint_cost(price: BalanceOf<T>, quantity: u128) -> Result<BalanceOf<T>, Error<T>> {
        if price.is_zero() {
            return Ok(Zero::zero());
        }
        let quantity =
            <BalanceOf<T>>::try_from(quantity).map_err(|_| Error::<T>::InsufficientPayment)?;
        price.checked_mul(&quantity).ok_or(Error::<T>::InsufficientPayment)
    }

    /// Checks the registry is dense and that no type is held beyond its minted supply.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        use sp_std::collections::btree_map::BTreeMap;

        let count = TokenTypeCount::<T>::get();
        let mut registered: TokenTypeId = 0;
        for (id, _) in TokenTypes::<T>::iter() {
            if id >= count {
                log::error!(target: LOG_TARGET, "Token type {id} beyond registry length {count}");
                return Err("Token type id beyond registry length".into());
            }
            registered = registered.saturating_add(1);
        }
        if registered != count {
            log::error!(target: LOG_TARGET, "Registry holds {registered} of {count} token types");
            return Err("Token type registry is not dense".into());
        }

        let mut held: BTreeMap<TokenTypeId, u128> = BTreeMap::new();
        for (_, id, amount) in Holdings::<T>::iter() {
            let total = held.entry(id).or_default();
            *total = total.checked_add(amount).ok_or("Holdings overflow")?;
        }
        for (id, total) in held {
            let token_type = TokenTypes::<T>::get(id).ok_or_else(|| {
                log::error!(target: LOG_TARGET, "Holdings reference unknown token type {id}");
                "Holding of unknown token type"
            })?;
            if total > token_type.minted_supply {
                log::error!(
                    target: LOG_TARGET,
                    "Token type {id} held {total} beyond minted supply {}",
                    token_type.minted_supply
                );
                return Err("Holdings exceed minted supply".into());
            }
        }
        Ok(())
    }
}
