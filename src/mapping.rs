//! Entity-to-DTO mapping.
//!
//! Mapping rules are explicit functions on `Mapper` rather than a generic
//! reflection-based engine. `Mapper` is constructed once in the composition
//! root and shared across all in-flight requests via `web::Data`; it holds no
//! mutable state. Computed fields that need data access take the repository
//! they depend on as a parameter.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Character, FavoriteCharacter, User};
use crate::repositories::{CharacterRepository, UserRepository};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// API-facing representation of a user. Email is intentionally omitted.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
}

/// API-facing representation of a catalog character.
#[derive(Debug, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// API-facing representation of a favorite, with the linked user and
/// character resolved into embedded DTOs.
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteCharacterDto {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub user: UserDto,
    pub character: CharacterDto,
}

/// Process-scope singleton holding the mapping rules.
#[derive(Debug, Default)]
pub struct Mapper;

impl Mapper {
    pub fn new() -> Self {
        Self
    }

    pub fn user_to_dto(&self, user: &User) -> UserDto {
        UserDto {
            id: user.id,
            username: user.username.clone(),
        }
    }

    pub fn character_to_dto(&self, character: &Character) -> CharacterDto {
        CharacterDto {
            id: character.id,
            name: character.name.clone(),
            description: character.description.clone(),
        }
    }

    /// Resolves a favorite link into a full DTO by loading the linked user
    /// and character through the given repositories.
    ///
    /// Resolution costs two lookups per favorite, so listing a user's
    /// favorites issues one query pair per row. Favorite lists are small and
    /// per-user; if that ever changes, batch the lookups in the caller
    /// instead of widening this signature.
    ///
    /// Foreign keys guarantee both rows exist; a miss here means the data is
    /// inconsistent and surfaces as an internal error.
    pub async fn favorite_to_dto(
        &self,
        favorite: &FavoriteCharacter,
        users: &UserRepository,
        characters: &CharacterRepository,
    ) -> Result<FavoriteCharacterDto, AppError> {
        let user = users.find(favorite.user_id).await?.ok_or_else(|| {
            AppError::InternalServerError("Favorite references a missing user".into())
        })?;
        let character = characters.find(favorite.character_id).await?.ok_or_else(|| {
            AppError::InternalServerError("Favorite references a missing character".into())
        })?;

        Ok(FavoriteCharacterDto {
            id: favorite.id,
            created_at: favorite.created_at,
            user: self.user_to_dto(&user),
            character: self.character_to_dto(&character),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CharacterInput;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_to_dto_drops_email() {
        let user = User {
            id: 9,
            username: "peter".to_string(),
            email: "peter@example.com".to_string(),
            created_at: Utc::now(),
        };

        let dto = Mapper::new().user_to_dto(&user);
        assert_eq!(dto.id, 9);
        assert_eq!(dto.username, "peter");

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_character_to_dto() {
        let character = Character::new(CharacterInput {
            name: "Spider-Man".to_string(),
            description: Some("Friendly neighborhood".to_string()),
        });

        let dto = Mapper::new().character_to_dto(&character);
        assert_eq!(dto.id, character.id);
        assert_eq!(dto.name, "Spider-Man");
        assert_eq!(dto.description.as_deref(), Some("Friendly neighborhood"));
    }
}
