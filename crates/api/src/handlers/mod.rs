pub mod account;
pub mod auth;
pub mod character;
pub mod dictionary;
