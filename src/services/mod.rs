pub mod auth_service;
pub mod queue_service;

pub use auth_service::AuthService;
pub use queue_service::QueueService;
