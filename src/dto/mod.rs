pub mod auth_dto;
pub mod queue_dto;
pub mod user_dto;

pub use auth_dto::{LoginRequest, LoginResponse};
pub use queue_dto::{EnqueueRequest, QueueResponse, SelectCategoryRequest};
pub use user_dto::UserResponse;
