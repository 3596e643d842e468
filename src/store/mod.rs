pub mod postgres;
pub mod queue_store;
pub mod user_directory;

pub use postgres::{PgQueueStore, PgUserDirectory};
pub use queue_store::{ClearFailure, ClearReport, QueueStore};
pub use user_directory::UserDirectory;

#[cfg(test)]
pub use user_directory::MockUserDirectory;
