use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    mapping::Mapper,
    models::FavoriteInput,
    repositories::{CharacterRepository, FavoriteCharacterRepository, UserRepository},
    services::FavoriteCharacterService,
};
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;

fn favorite_service(pool: &web::Data<PgPool>) -> FavoriteCharacterService {
    FavoriteCharacterService::new(
        FavoriteCharacterRepository::new(pool.get_ref().clone()),
        CharacterRepository::new(pool.get_ref().clone()),
    )
}

/// Lists the authenticated user's favorite characters, with the linked user
/// and character resolved into embedded objects.
#[get("")]
pub async fn list_favorites(
    pool: web::Data<PgPool>,
    mapper: web::Data<Mapper>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let favorites = favorite_service(&pool).list_for_user(user.0).await?;

    let users = UserRepository::new(pool.get_ref().clone());
    let characters = CharacterRepository::new(pool.get_ref().clone());
    let mut dtos = Vec::with_capacity(favorites.len());
    for favorite in &favorites {
        dtos.push(mapper.favorite_to_dto(favorite, &users, &characters).await?);
    }

    Ok(HttpResponse::Ok().json(dtos))
}

/// Adds a character to the authenticated user's favorites.
///
/// ## Responses:
/// - `201 Created`: the new favorite link.
/// - `400 Bad Request`: the character is already a favorite.
/// - `404 Not Found`: the character does not exist.
#[post("")]
pub async fn add_favorite(
    pool: web::Data<PgPool>,
    mapper: web::Data<Mapper>,
    user: AuthenticatedUserId,
    input: web::Json<FavoriteInput>,
) -> Result<impl Responder, AppError> {
    let favorite = favorite_service(&pool)
        .add(user.0, input.character_id)
        .await?;

    let users = UserRepository::new(pool.get_ref().clone());
    let characters = CharacterRepository::new(pool.get_ref().clone());
    let dto = mapper.favorite_to_dto(&favorite, &users, &characters).await?;

    Ok(HttpResponse::Created().json(dto))
}

/// Removes a character from the authenticated user's favorites.
///
/// ## Responses:
/// - `204 No Content`: removed.
/// - `404 Not Found`: the character was not in the user's favorites.
#[delete("/{character_id}")]
pub async fn remove_favorite(
    pool: web::Data<PgPool>,
    user: AuthenticatedUserId,
    character_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    favorite_service(&pool)
        .remove(user.0, character_id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
