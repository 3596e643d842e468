use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::dto::UserResponse;

/// Lounge member record (database entity). Regular members are created by the
/// customer-facing app; this backend only reads them, toggles activation and
/// admits them into waitlists. Admin operators are the same record with the
/// `admin` flag set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub uid: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub login_nickname: String,
    pub cpf: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub responsible_phone: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub admin: bool,
    pub activated: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a bootstrap administrator account.
    pub fn new_admin(email: String, password_hash: String, login_nickname: String) -> Self {
        Self {
            uid: Uuid::new_v4().to_string(),
            email,
            password_hash,
            full_name: None,
            login_nickname,
            cpf: None,
            date_of_birth: None,
            phone: None,
            responsible_phone: None,
            state: None,
            city: None,
            admin: true,
            activated: true,
            created_at: Utc::now(),
        }
    }

    /// Convert to response (without password hash)
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            uid: self.uid.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            login_nickname: self.login_nickname.clone(),
            cpf: self.cpf.clone(),
            date_of_birth: self.date_of_birth,
            phone: self.phone.clone(),
            responsible_phone: self.responsible_phone.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
            admin: self.admin,
            activated: self.activated,
            created_at: self.created_at,
        }
    }
}
