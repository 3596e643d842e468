pub mod auth_handler;
pub mod health_handler;
pub mod queue_handler;
pub mod user_handler;

pub use auth_handler::login;
pub use health_handler::health_check;
pub use queue_handler::{add_to_queue, clear_queue, get_queue, remove_from_queue, select_category};
pub use user_handler::{get_user_by_nickname, toggle_activation};
