//! Komisi Sales Commission Engine Library
//!
//! This library computes sales commissions, bonuses, achievement tiers and
//! manager overrides for a telecom subscription business from per-invoice
//! snapshot rows.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::commissions;
pub use modules::snapshots;
pub use modules::teams;
