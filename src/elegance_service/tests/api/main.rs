mod cart;
mod favorites;
mod helpers;
mod login;
mod logout;
mod profile;
mod signup;
