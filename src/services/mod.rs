//! Business orchestration over the repositories.
//!
//! Services are constructed per request from their repositories by the route
//! handlers; nothing in this layer is shared across requests.

pub mod auth;
pub mod character;
pub mod favorite;
pub mod user;

pub use auth::AuthenticationService;
pub use character::CharacterService;
pub use favorite::FavoriteCharacterService;
pub use user::UserService;
