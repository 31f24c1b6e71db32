//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod character_repo;
pub mod dictionary_repo;
pub mod user_repo;

pub use character_repo::CharacterRepo;
pub use dictionary_repo::DictionaryRepo;
pub use user_repo::UserRepo;
