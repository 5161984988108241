use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Page size applied when a listing request omits `take` or sets it to 0.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Represents a catalog character as stored in the database.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Character {
    /// Unique identifier for the character (UUID v4).
    pub id: Uuid,
    /// Display name, unique within the catalog.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Timestamp of when the character was added to the catalog.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update.
    pub updated_at: DateTime<Utc>,
}

/// Input structure for creating or updating a character.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CharacterInput {
    /// Must be between 1 and 100 characters.
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Maximum length of 1000 characters if provided.
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

impl Character {
    /// Creates a new `Character` from input, with a fresh UUID and both
    /// timestamps set to now.
    pub fn new(input: CharacterInput) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Query parameters accepted by the character listing endpoint.
///
/// Decoding is deliberately lenient: a missing or unparseable numeric value
/// is treated as absent rather than rejected, so query binding never produces
/// a client error on its own.
///
/// The raw fields are private; read access goes through [`skip`](Self::skip)
/// and [`take`](Self::take), which apply the paging defaults.
#[derive(Debug, Deserialize)]
pub struct CharacterListQuery {
    /// Offset into the result set. Absent or unparseable means 0.
    #[serde(default, deserialize_with = "lenient_i64")]
    skip: i64,
    /// Requested page size. The stored value may be 0 (absent, explicit 0, or
    /// unparseable); reads resolve that to `DEFAULT_PAGE_SIZE`.
    #[serde(default, deserialize_with = "lenient_i64")]
    take: i64,
    /// Case-insensitive name prefix filter. `None` means no filter.
    #[serde(rename = "nameStartsWith")]
    pub name_starts_with: Option<String>,
}

impl CharacterListQuery {
    /// Offset to skip, clamped to be non-negative.
    pub fn skip(&self) -> i64 {
        self.skip.max(0)
    }

    /// Effective page size: the stored value when positive, otherwise
    /// `DEFAULT_PAGE_SIZE`. A caller therefore cannot request zero results;
    /// `take=0` means "use the default".
    pub fn take(&self) -> i64 {
        if self.take <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.take
        }
    }
}

/// Deserializes an integer query value, mapping anything unparseable to 0.
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web;
    use pretty_assertions::assert_eq;

    fn decode(query: &str) -> CharacterListQuery {
        web::Query::<CharacterListQuery>::from_query(query)
            .expect("query binding must not fail")
            .into_inner()
    }

    #[test]
    fn test_take_passes_through_positive_values() {
        for n in [1, 5, 42, 100, 250] {
            let query = decode(&format!("take={}", n));
            assert_eq!(query.take(), n);
        }
    }

    #[test]
    fn test_take_zero_and_absent_resolve_to_default() {
        assert_eq!(decode("take=0").take(), DEFAULT_PAGE_SIZE);
        assert_eq!(decode("").take(), DEFAULT_PAGE_SIZE);
        assert_eq!(decode("skip=5").take(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_skip_defaults_to_zero() {
        assert_eq!(decode("").skip(), 0);
        assert_eq!(decode("take=10").skip(), 0);
        assert_eq!(decode("skip=20").skip(), 20);
    }

    #[test]
    fn test_unparseable_numbers_are_treated_as_absent() {
        let query = decode("skip=abc&take=xyz");
        assert_eq!(query.skip(), 0);
        assert_eq!(query.take(), DEFAULT_PAGE_SIZE);

        assert_eq!(decode("skip=&take=").take(), DEFAULT_PAGE_SIZE);
        assert_eq!(decode("skip=-3").skip(), 0);
    }

    #[test]
    fn test_name_prefix_passes_through() {
        assert_eq!(decode("").name_starts_with, None);
        assert_eq!(
            decode("nameStartsWith=Spi").name_starts_with.as_deref(),
            Some("Spi")
        );
    }

    #[test]
    fn test_full_query_scenario() {
        let query = decode("skip=20&take=0&nameStartsWith=Spi");
        assert_eq!(query.skip(), 20);
        assert_eq!(query.take(), DEFAULT_PAGE_SIZE);
        assert_eq!(query.name_starts_with.as_deref(), Some("Spi"));
    }

    #[test]
    fn test_character_creation() {
        let input = CharacterInput {
            name: "Spider-Man".to_string(),
            description: Some("Friendly neighborhood".to_string()),
        };
        let character = Character::new(input);
        assert_eq!(character.name, "Spider-Man");
        assert_eq!(character.created_at, character.updated_at);
    }

    #[test]
    fn test_character_input_validation() {
        let valid = CharacterInput {
            name: "Valid Name".to_string(),
            description: None,
        };
        assert!(valid.validate().is_ok());

        let empty_name = CharacterInput {
            name: "".to_string(),
            description: None,
        };
        assert!(empty_name.validate().is_err());

        let long_name = CharacterInput {
            name: "a".repeat(101),
            description: None,
        };
        assert!(long_name.validate().is_err());

        let long_description = CharacterInput {
            name: "Valid Name".to_string(),
            description: Some("b".repeat(1001)),
        };
        assert!(long_description.validate().is_err());
    }
}
