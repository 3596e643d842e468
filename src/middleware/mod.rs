pub mod auth;
pub mod logging;

pub use auth::{generate_token, require_admin, verify_token, Claims, JwtMiddleware};
pub use logging::setup_logging;
