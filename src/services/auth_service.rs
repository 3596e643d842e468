use sqlx::PgPool;

use crate::config::AppConfig;
use crate::dto::{LoginRequest, LoginResponse};
use crate::interceptors::AppError;
use crate::middleware::{generate_token, Claims};
use crate::models::User;
use crate::utils::{hash_password, validate_request, verify_password};

/// Operator sign-in. Only accounts carrying the admin flag get a token;
/// everyone else is turned away at the door.
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
}

impl AuthService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Authenticate an operator and issue a JWT.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        validate_request(&request)?;

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(&request.email)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::Unauthorized("Invalid email or password".to_string()));
        }

        if !user.admin {
            return Err(AppError::Forbidden(
                "Access denied. Only administrators may sign in.".to_string(),
            ));
        }

        let claims = Claims::with_env_expiration(user.uid.clone(), user.email.clone(), user.admin);
        let token = generate_token(&claims)?;

        tracing::info!("Administrator {} signed in", user.email);

        Ok(LoginResponse {
            token,
            user: user.to_response(),
        })
    }

    /// Create the first administrator account from environment configuration,
    /// if one was configured and no account with that email exists yet.
    pub async fn ensure_bootstrap_admin(&self, config: &AppConfig) -> Result<(), AppError> {
        let (Some(email), Some(password)) =
            (config.admin_email.as_ref(), config.admin_password.as_ref())
        else {
            return Ok(());
        };

        let existing = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;

        if existing.is_some() {
            return Ok(());
        }

        let nickname = config
            .admin_nickname
            .clone()
            .unwrap_or_else(|| "admin".to_string());
        let user = User::new_admin(email.clone(), hash_password(password)?, nickname);

        sqlx::query(
            "INSERT INTO users (uid, email, password_hash, login_nickname, admin, activated, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&user.uid)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.login_nickname)
        .bind(user.admin)
        .bind(user.activated)
        .bind(user.created_at)
        .execute(&self.db)
        .await?;

        tracing::info!("Bootstrap administrator {} created", user.email);
        Ok(())
    }
}
