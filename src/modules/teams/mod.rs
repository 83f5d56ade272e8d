pub mod models;
pub mod services;

pub use models::{SubordinateResult, TeamPerformance, TeamPerformanceReport};
pub use services::OverrideCalculator;
