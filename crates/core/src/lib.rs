//! Domain types and pure logic shared by the store, API, and client crates.
//!
//! Nothing in here performs I/O.

pub mod catalog;
pub mod character_form;
pub mod error;
pub mod plans;
pub mod types;
