use crate::error::AppError;
use crate::models::FavoriteCharacter;
use crate::repositories::{CharacterRepository, FavoriteCharacterRepository};
use uuid::Uuid;

/// Maintains a user's favorite-character list.
pub struct FavoriteCharacterService {
    favorites: FavoriteCharacterRepository,
    characters: CharacterRepository,
}

impl FavoriteCharacterService {
    pub fn new(favorites: FavoriteCharacterRepository, characters: CharacterRepository) -> Self {
        Self {
            favorites,
            characters,
        }
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<FavoriteCharacter>, AppError> {
        self.favorites.list_for_user(user_id).await
    }

    /// Adds a character to the user's favorites.
    ///
    /// The character must exist, and favoriting it twice is a client error.
    pub async fn add(
        &self,
        user_id: i32,
        character_id: Uuid,
    ) -> Result<FavoriteCharacter, AppError> {
        if self.characters.find(character_id).await?.is_none() {
            return Err(AppError::NotFound("Character not found".into()));
        }
        if self.favorites.exists(user_id, character_id).await? {
            return Err(AppError::BadRequest(
                "Character is already a favorite".into(),
            ));
        }

        self.favorites
            .insert(&FavoriteCharacter::new(user_id, character_id))
            .await
    }

    pub async fn remove(&self, user_id: i32, character_id: Uuid) -> Result<(), AppError> {
        let removed = self.favorites.delete(user_id, character_id).await?;
        if removed == 0 {
            return Err(AppError::NotFound("Favorite not found".into()));
        }
        Ok(())
    }
}
