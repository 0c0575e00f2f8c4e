pub mod cart;
pub mod email;
pub mod password;
pub mod product;
pub mod user;
