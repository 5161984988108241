use crate::error::AppError;
use crate::models::Character;
use sqlx::PgPool;
use uuid::Uuid;

const CHARACTER_COLUMNS: &str = "id, name, description, created_at, updated_at";

/// CRUD access to the `characters` table.
pub struct CharacterRepository {
    pool: PgPool,
}

impl CharacterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists characters ordered by name, with an optional case-insensitive
    /// name prefix filter and OFFSET/LIMIT paging.
    pub async fn list(
        &self,
        skip: i64,
        take: i64,
        name_starts_with: Option<&str>,
    ) -> Result<Vec<Character>, AppError> {
        let sql = list_statement(name_starts_with.is_some());

        let mut query_builder = sqlx::query_as::<_, Character>(&sql);
        if let Some(prefix) = name_starts_with {
            query_builder = query_builder.bind(format!("{}%", escape_like(prefix)));
        }
        query_builder = query_builder.bind(skip).bind(take);

        let characters = query_builder.fetch_all(&self.pool).await?;
        Ok(characters)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Character>, AppError> {
        let character = sqlx::query_as::<_, Character>(&format!(
            "SELECT {} FROM characters WHERE id = $1",
            CHARACTER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(character)
    }

    pub async fn insert(&self, character: &Character) -> Result<Character, AppError> {
        let stored = sqlx::query_as::<_, Character>(&format!(
            "INSERT INTO characters (id, name, description, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            CHARACTER_COLUMNS
        ))
        .bind(character.id)
        .bind(&character.name)
        .bind(&character.description)
        .bind(character.created_at)
        .bind(character.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    /// Updates name and description; returns `None` if the id is unknown.
    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Character>, AppError> {
        let updated = sqlx::query_as::<_, Character>(&format!(
            "UPDATE characters SET name = $1, description = $2, updated_at = NOW()
             WHERE id = $3
             RETURNING {}",
            CHARACTER_COLUMNS
        ))
        .bind(name)
        .bind(description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Deletes a character; returns the number of rows removed.
    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Builds the listing statement. The prefix condition is appended
/// conditionally, so the paging placeholders must keep consecutive numbers;
/// the bind order in `list` is prefix (when present), then OFFSET, then
/// LIMIT.
fn list_statement(with_prefix: bool) -> String {
    let mut sql = format!("SELECT {} FROM characters", CHARACTER_COLUMNS);
    let mut param_count = 1;

    if with_prefix {
        sql.push_str(&format!(" WHERE name ILIKE ${}", param_count));
        param_count += 1;
    }

    sql.push_str(&format!(
        " ORDER BY name OFFSET ${} LIMIT ${}",
        param_count,
        param_count + 1
    ));
    sql
}

/// Escapes LIKE metacharacters so a prefix filter matches literally.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_statement_without_prefix() {
        assert_eq!(
            list_statement(false),
            "SELECT id, name, description, created_at, updated_at FROM characters \
             ORDER BY name OFFSET $1 LIMIT $2"
        );
    }

    #[test]
    fn test_list_statement_with_prefix_renumbers_paging_placeholders() {
        assert_eq!(
            list_statement(true),
            "SELECT id, name, description, created_at, updated_at FROM characters \
             WHERE name ILIKE $1 ORDER BY name OFFSET $2 LIMIT $3"
        );
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("Spi"), "Spi");
        assert_eq!(escape_like("100%_a"), "100\\%\\_a");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
