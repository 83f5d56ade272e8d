pub mod snapshot_row;

pub use snapshot_row::{Category, EmploymentStatus, SnapshotRow};
