use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Links a user to a character they have marked as a favorite.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct FavoriteCharacter {
    pub id: Uuid,
    pub user_id: i32,
    pub character_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Payload for adding a character to the caller's favorites.
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteInput {
    pub character_id: Uuid,
}

impl FavoriteCharacter {
    /// Creates a new favorite link for a user and character.
    pub fn new(user_id: i32, character_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            character_id,
            created_at: Utc::now(),
        }
    }
}
