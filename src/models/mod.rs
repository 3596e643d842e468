pub mod queue_entry;
pub mod station;
pub mod user;

pub use queue_entry::QueueEntry;
pub use station::StationCategory;
pub use user::User;
