pub mod activity_directory;
pub mod seed_catalog;

pub use activity_directory::{ActivityDirectory, CapacityPolicy, DirectoryError, Enrollment};
