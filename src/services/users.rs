//! Identity lookup and API key service

use rand::RngCore;

use crate::{
    error::{AppError, AppResult},
    models::{user::LoginResponse, Identity, User},
    repository::Repository,
};

/// Random bytes in a freshly issued API key (hex encoded, so twice as many characters)
const API_KEY_BYTES: usize = 20;

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Resolve an `ApiKey username:key` credential
    pub async fn authenticate_api_key(&self, username: &str, key: &str) -> AppResult<Identity> {
        let user = self
            .repository
            .users_get_by_api_key(username, key)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid API key".to_string()))?;
        Ok(Identity::from(&user))
    }

    /// Load the user behind a bearer identity; unknown users fail authentication
    pub async fn known_user(&self, identity: &Identity) -> AppResult<User> {
        let user = self.repository.users_get_by_id(identity.user_id).await?;
        match_identity(user, identity)
    }

    /// The caller's own profile and API key. The key is issued on first
    /// lookup and returned unchanged afterwards.
    pub async fn login(&self, identity: &Identity) -> AppResult<LoginResponse> {
        let user = self.known_user(identity).await?;

        let api_key = self
            .repository
            .api_keys_get_or_create(user.id, &generate_api_key())
            .await?;

        tracing::debug!(user_id = user.id, "Identity lookup");
        Ok(LoginResponse::new(user, api_key))
    }
}

fn match_identity(user: Option<User>, identity: &Identity) -> AppResult<User> {
    user.filter(|user| user.username == identity.username)
        .ok_or_else(|| AppError::Authentication("Unknown user".to_string()))
}

fn generate_api_key() -> String {
    let mut bytes = [0u8; API_KEY_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
