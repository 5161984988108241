//! Data access over PostgreSQL.
//!
//! Each repository owns a handle to the shared connection pool and is
//! constructed fresh for every request it serves. All queries are runtime
//! `query_as`/`bind` forms.

pub mod character;
pub mod favorite;
pub mod user;

pub use character::CharacterRepository;
pub use favorite::FavoriteCharacterRepository;
pub use user::UserRepository;
