//! Use cases composing the store and credential ports into user-facing operations.

pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

pub use use_cases::{
    cart::{AddToCartUseCase, CartUpdateStrategy, CartUseCaseError, RemoveFromCartUseCase},
    change_password::{ChangePasswordError, ChangePasswordUseCase},
    favorites::{AddFavoriteUseCase, ListFavoritesUseCase, RemoveFavoriteUseCase},
    login::{LoginError, LoginUseCase},
    profile::{UpdateAddressUseCase, UpdateNameUseCase},
    signup::{Session, SignupError, SignupUseCase},
};
