pub mod team_performance;

pub use team_performance::{SubordinateResult, TeamPerformance, TeamPerformanceReport};
