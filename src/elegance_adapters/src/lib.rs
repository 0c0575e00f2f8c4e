//! Storage, credential, configuration and HTTP adapters for the elegance ports.

pub mod config;
pub mod credentials;
pub mod http;
pub mod persistence;
