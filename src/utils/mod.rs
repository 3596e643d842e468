pub mod password;
pub mod validation;
pub mod wait_time;

pub use password::{hash_password, verify_password};
pub use validation::validate_request;
pub use wait_time::WaitTime;
