pub mod cart;
pub mod change_password;
pub mod favorites;
pub mod login;
pub mod profile;
pub mod signup;
