pub mod character;
pub mod favorite;
pub mod user;

pub use character::{Character, CharacterInput, CharacterListQuery, DEFAULT_PAGE_SIZE};
pub use favorite::{FavoriteCharacter, FavoriteInput};
pub use user::User;
