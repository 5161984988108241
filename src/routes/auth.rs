use crate::{
    auth::{LoginRequest, RegisterRequest},
    config::AuthenticationSettings,
    error::AppError,
    repositories::UserRepository,
    services::AuthenticationService,
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

fn authentication_service(
    pool: &web::Data<PgPool>,
    settings: &web::Data<AuthenticationSettings>,
) -> AuthenticationService {
    AuthenticationService::new(
        UserRepository::new(pool.get_ref().clone()),
        settings.get_ref().clone(),
    )
}

/// Register a new user
///
/// Creates a new user account and returns an authentication token.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    settings: web::Data<AuthenticationSettings>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let response = authentication_service(&pool, &settings)
        .register(&register_data)
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// Login user
///
/// Authenticates a user and returns an authentication token.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    settings: web::Data<AuthenticationSettings>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let response = authentication_service(&pool, &settings)
        .login(&login_data)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
