use crate::{
    auth::AuthenticatedUserId, error::AppError, mapping::Mapper, repositories::UserRepository,
    services::UserService,
};
use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;

/// Returns the authenticated user's own profile.
#[get("/me")]
pub async fn me(
    pool: web::Data<PgPool>,
    mapper: web::Data<Mapper>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let service = UserService::new(UserRepository::new(pool.get_ref().clone()));
    let profile = service.get(user.0).await?;
    Ok(HttpResponse::Ok().json(mapper.user_to_dto(&profile)))
}
