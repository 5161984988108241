use crate::auth::{generate_token, hash_password, verify_password};
use crate::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::config::AuthenticationSettings;
use crate::error::AppError;
use crate::repositories::UserRepository;

/// Registration and login.
pub struct AuthenticationService {
    users: UserRepository,
    settings: AuthenticationSettings,
}

impl AuthenticationService {
    pub fn new(users: UserRepository, settings: AuthenticationSettings) -> Self {
        Self { users, settings }
    }

    /// Creates a new account and issues a token for it.
    ///
    /// Fails with `BadRequest` when the email is already registered.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError> {
        if self.users.email_exists(&request.email).await? {
            return Err(AppError::BadRequest("Email already registered".into()));
        }

        let password_hash = hash_password(&request.password)?;
        let user = self
            .users
            .insert(&request.username, &request.email, &password_hash)
            .await?;

        let token = generate_token(user.id, &self.settings.secret)?;
        Ok(AuthResponse {
            token,
            user_id: user.id,
        })
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
        match self.users.find_credentials(&request.email).await? {
            Some((user_id, password_hash)) => {
                if verify_password(&request.password, &password_hash)? {
                    let token = generate_token(user_id, &self.settings.secret)?;
                    Ok(AuthResponse { token, user_id })
                } else {
                    Err(AppError::Unauthorized("Invalid credentials".into()))
                }
            }
            None => Err(AppError::Unauthorized("Invalid credentials".into())),
        }
    }
}
