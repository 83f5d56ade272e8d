pub mod models;

pub use models::{Category, EmploymentStatus, SnapshotRow};
