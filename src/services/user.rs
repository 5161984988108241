use crate::error::AppError;
use crate::models::User;
use crate::repositories::UserRepository;

/// User account lookups.
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        self.users
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }
}
