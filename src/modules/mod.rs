pub mod commissions;
pub mod snapshots;
pub mod teams;
