//! User registration, login, and account management.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use sqlx::types::Json;
use tracing::info;
use uuid::Uuid;

use freshgrad_auth::jwt::JwtEncoder;
use freshgrad_auth::password::PasswordHasher;
use freshgrad_core::error::AppError;
use freshgrad_core::result::AppResult;
use freshgrad_core::types::Patch;
use freshgrad_database::repositories::user::UserRepository;
use freshgrad_entity::user::{User, UserRole};

/// Fields accepted when updating a user, keyed by email in the route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New password (hashed before storage).
    #[serde(default)]
    pub password: Option<String>,
    /// New role.
    #[serde(default)]
    pub role: Option<UserRole>,
    /// New verified flag.
    #[serde(default)]
    pub verified: Option<bool>,
    /// Applicant status; explicit null clears it.
    #[serde(default)]
    pub applicant_status: Patch<String>,
    /// Replacement document map, applied wholesale when present.
    #[serde(default)]
    pub documents: Option<Map<String, Value>>,
}

/// Successful login result.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Signed access token.
    pub access_token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
}

/// Handles registration, authentication, and user administration.
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    jwt_encoder: Arc<JwtEncoder>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            jwt_encoder,
        }
    }

    /// Register a new user. Rejects with Conflict when the
    /// case-insensitive email is already taken.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Option<UserRole>,
    ) -> AppResult<User> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.clone(),
            name: name.to_string(),
            password_hash: self.hasher.hash_password(password)?,
            role: role.unwrap_or(UserRole::Teacher),
            verified: false,
            applicant_status: None,
            documents: Json(Map::new()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let created = self.user_repo.create(&user).await?;
        info!(email = %created.email, role = %created.role, "User registered");
        Ok(created)
    }

    /// Authenticate by email and password.
    ///
    /// The failure message is identical whether the email was unknown or
    /// the password was wrong, so callers cannot probe for accounts.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let unauthorized = || AppError::authentication("Invalid email or password");

        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(unauthorized)?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(unauthorized());
        }

        let (access_token, expires_at) =
            self.jwt_encoder
                .generate_access_token(user.id, &user.email, user.role)?;

        info!(email = %user.email, "User logged in");
        Ok(LoginOutcome {
            user,
            access_token,
            expires_at,
        })
    }

    /// List all users, newest first.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all().await
    }

    /// Apply a partial update to the user with the given email.
    pub async fn update(&self, email: &str, input: UpdateUserInput) -> AppResult<User> {
        let mut user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{email}' not found")))?;

        if let Some(name) = input.name {
            user.name = name;
        }
        if let Some(password) = input.password {
            user.password_hash = self.hasher.hash_password(&password)?;
        }
        if let Some(role) = input.role {
            user.role = role;
        }
        if let Some(verified) = input.verified {
            user.verified = verified;
        }
        input.applicant_status.apply_to(&mut user.applicant_status);
        if let Some(documents) = input.documents {
            user.documents = Json(documents);
        }

        self.user_repo.update(&user).await
    }

    /// Hard-delete the user with the given email.
    pub async fn delete(&self, email: &str) -> AppResult<()> {
        if !self.user_repo.delete(email).await? {
            return Err(AppError::not_found(format!("User '{email}' not found")));
        }
        info!(email, "User deleted");
        Ok(())
    }
}
