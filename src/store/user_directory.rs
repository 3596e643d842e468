use async_trait::async_trait;

use crate::interceptors::AppError;
use crate::models::User;

/// Port over the member directory. The queue core only reads `uid` and
/// `login_nickname` from the resolved record; the activation screen uses the
/// full profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve an operator-typed nickname to the canonical user record.
    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, AppError>;

    /// Flip the activation flag of one account, returning the updated record.
    async fn set_activated(&self, uid: &str, activated: bool) -> Result<User, AppError>;
}
