use crate::{
    error::AppError,
    mapping::Mapper,
    models::{CharacterInput, CharacterListQuery},
    repositories::CharacterRepository,
    services::CharacterService,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

fn character_service(pool: &web::Data<PgPool>) -> CharacterService {
    CharacterService::new(CharacterRepository::new(pool.get_ref().clone()))
}

/// Lists catalog characters.
///
/// ## Query Parameters:
/// - `skip` (optional): offset into the result set, default 0.
/// - `take` (optional): page size; 0 or absent means the default of 100.
/// - `nameStartsWith` (optional): case-insensitive name prefix filter.
///
/// Missing or unparseable numeric values fall back to their defaults rather
/// than producing a client error.
///
/// ## Responses:
/// - `200 OK`: JSON array of character objects, ordered by name.
/// - `401 Unauthorized`: missing or invalid bearer token.
#[get("")]
pub async fn list_characters(
    pool: web::Data<PgPool>,
    mapper: web::Data<Mapper>,
    query: web::Query<CharacterListQuery>,
) -> Result<impl Responder, AppError> {
    let characters = character_service(&pool).list(&query).await?;

    let dtos: Vec<_> = characters
        .iter()
        .map(|c| mapper.character_to_dto(c))
        .collect();
    Ok(HttpResponse::Ok().json(dtos))
}

/// Adds a new character to the catalog.
///
/// ## Responses:
/// - `201 Created`: the stored character.
/// - `422 Unprocessable Entity`: name/description length validation failed.
#[post("")]
pub async fn create_character(
    pool: web::Data<PgPool>,
    mapper: web::Data<Mapper>,
    input: web::Json<CharacterInput>,
) -> Result<impl Responder, AppError> {
    input.validate()?;

    let character = character_service(&pool).create(input.into_inner()).await?;
    Ok(HttpResponse::Created().json(mapper.character_to_dto(&character)))
}

/// Retrieves a single character by its UUID.
///
/// ## Responses:
/// - `200 OK`: the character.
/// - `404 Not Found`: unknown id.
#[get("/{id}")]
pub async fn get_character(
    pool: web::Data<PgPool>,
    mapper: web::Data<Mapper>,
    character_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let character = character_service(&pool)
        .get(character_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(mapper.character_to_dto(&character)))
}

/// Updates a character's name and description.
///
/// ## Responses:
/// - `200 OK`: the updated character.
/// - `404 Not Found`: unknown id.
/// - `422 Unprocessable Entity`: validation failed.
#[put("/{id}")]
pub async fn update_character(
    pool: web::Data<PgPool>,
    mapper: web::Data<Mapper>,
    character_id: web::Path<Uuid>,
    input: web::Json<CharacterInput>,
) -> Result<impl Responder, AppError> {
    input.validate()?;

    let character = character_service(&pool)
        .update(character_id.into_inner(), input.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(mapper.character_to_dto(&character)))
}

/// Deletes a character.
///
/// ## Responses:
/// - `204 No Content`: removed.
/// - `404 Not Found`: unknown id.
#[delete("/{id}")]
pub async fn delete_character(
    pool: web::Data<PgPool>,
    character_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    character_service(&pool)
        .delete(character_id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
