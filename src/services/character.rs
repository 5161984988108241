use crate::error::AppError;
use crate::models::{Character, CharacterInput, CharacterListQuery};
use crate::repositories::CharacterRepository;
use uuid::Uuid;

/// Catalog operations over characters.
pub struct CharacterService {
    characters: CharacterRepository,
}

impl CharacterService {
    pub fn new(characters: CharacterRepository) -> Self {
        Self { characters }
    }

    /// Lists characters for a decoded listing query. Paging defaults are
    /// resolved by the query's accessors, not here.
    pub async fn list(&self, query: &CharacterListQuery) -> Result<Vec<Character>, AppError> {
        self.characters
            .list(query.skip(), query.take(), query.name_starts_with.as_deref())
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<Character, AppError> {
        self.characters
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".into()))
    }

    pub async fn create(&self, input: CharacterInput) -> Result<Character, AppError> {
        self.characters.insert(&Character::new(input)).await
    }

    pub async fn update(&self, id: Uuid, input: CharacterInput) -> Result<Character, AppError> {
        self.characters
            .update(id, &input.name, input.description.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".into()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let removed = self.characters.delete(id).await?;
        if removed == 0 {
            return Err(AppError::NotFound("Character not found".into()));
        }
        Ok(())
    }
}
