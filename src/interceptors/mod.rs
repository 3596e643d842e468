pub mod error;
pub mod response;

pub use error::{AppError, AppResult, ErrorCode};
pub use response::{ApiError, ApiResponse, ApiSuccess};
