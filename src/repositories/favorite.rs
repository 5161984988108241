use crate::error::AppError;
use crate::models::FavoriteCharacter;
use sqlx::PgPool;
use uuid::Uuid;

/// CRUD access to the `favorite_characters` table.
pub struct FavoriteCharacterRepository {
    pool: PgPool,
}

impl FavoriteCharacterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<FavoriteCharacter>, AppError> {
        let favorites = sqlx::query_as::<_, FavoriteCharacter>(
            "SELECT id, user_id, character_id, created_at FROM favorite_characters
             WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(favorites)
    }

    pub async fn exists(&self, user_id: i32, character_id: Uuid) -> Result<bool, AppError> {
        let row = sqlx::query_as::<_, (Uuid,)>(
            "SELECT id FROM favorite_characters WHERE user_id = $1 AND character_id = $2",
        )
        .bind(user_id)
        .bind(character_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }

    pub async fn insert(
        &self,
        favorite: &FavoriteCharacter,
    ) -> Result<FavoriteCharacter, AppError> {
        let stored = sqlx::query_as::<_, FavoriteCharacter>(
            "INSERT INTO favorite_characters (id, user_id, character_id, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, user_id, character_id, created_at",
        )
        .bind(favorite.id)
        .bind(favorite.user_id)
        .bind(favorite.character_id)
        .bind(favorite.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    /// Removes a user's favorite link for a character; returns the number of
    /// rows removed.
    pub async fn delete(&self, user_id: i32, character_id: Uuid) -> Result<u64, AppError> {
        let result =
            sqlx::query("DELETE FROM favorite_characters WHERE user_id = $1 AND character_id = $2")
                .bind(user_id)
                .bind(character_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }
}
