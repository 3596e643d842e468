use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// User profile response (without the password hash). Carries everything the
/// activation screen shows on the profile card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub uid: String,
    pub email: String,
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
