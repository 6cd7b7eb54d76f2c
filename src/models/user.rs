//! User model and identity types

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// User profile as provisioned by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// Authenticated caller, resolved from a bearer token or an API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub username: String,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
        }
    }
}

/// JWT claims issued by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub sub: String,
    pub user_id: i32,
    pub exp: i64,
    pub iat: i64,
}

impl IdentityClaims {
    /// Claims for `identity`, valid for `ttl_seconds` from now
    pub fn new(identity: &Identity, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: identity.username.clone(),
            user_id: identity.user_id,
            exp: now + ttl_seconds,
            iat: now,
        }
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and verify a JWT token
    pub fn from_token(
        token: &str,
        secret: &str,
        leeway_seconds: u64,
    ) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let mut validation = Validation::default();
        validation.leeway = leeway_seconds;
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )?;
        Ok(token_data.claims)
    }

    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.user_id,
            username: self.sub.clone(),
        }
    }
}

/// Identity lookup response: the caller's own profile plus API key
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub api_key: String,
}

impl LoginResponse {
    pub fn new(user: User, api_key: String) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            api_key,
        }
    }
}
