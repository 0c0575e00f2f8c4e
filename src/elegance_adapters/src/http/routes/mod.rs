pub mod cart;
pub mod error;
pub mod favorites;
pub mod health;
pub mod login;
pub mod logout;
pub mod profile;
pub mod signup;

pub use cart::{AddToCartRequest, RemoveFromCartRequest, add_to_cart, remove_from_cart};
pub use error::ApiError;
pub use favorites::{
    FavoriteRequest, ListFavoritesRequest, add_favorite, list_favorites, remove_favorite,
};
pub use health::health;
pub use login::{LoginRequest, login};
pub use logout::logout;
pub use profile::{
    AddressRequest, ChangePasswordRequest, NameRequest, change_password, update_address,
    update_name,
};
pub use signup::{SignupRequest, signup};
