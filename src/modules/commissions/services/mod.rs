pub mod activity;
pub mod annual_rollup;
pub mod bonus;
pub mod period_aggregator;
pub mod rate_resolver;

pub use activity::PeriodContext;
pub use annual_rollup::AnnualRollup;
pub use bonus::BonusCalculator;
pub use period_aggregator::PeriodAggregator;
pub use rate_resolver::{PricedRow, RateResolver};
