pub mod models;
pub mod services;

pub use models::{AnnualReport, AnnualResult, PeriodReport, PeriodResult};
pub use services::{AnnualRollup, BonusCalculator, PeriodAggregator, RateResolver};
