use rust_decimal::Decimal;

use crate::modules::commissions::models::{DetailByType, ServiceBreakdown, ServiceLine, StatBucket};

/// Achievement tier for one employee and one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementInfo {
    /// Paired activity count the tier was derived from
    pub activity: u32,
    pub employment_status: String,
    pub tier: String,
    pub motivation: String,
}

/// Aggregate commission result for one calendar period (a commission month
/// or an arbitrary date range). Full-precision decimals throughout; the
/// report views format at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodResult {
    pub stats: StatBucket,
    pub bonus: Decimal,
    /// `stats.commission + bonus`
    pub total_commission: Decimal,
    pub detail: DetailByType,
    /// One entry per tracked service line, in `ServiceLine::TRACKED` order
    pub service: Vec<ServiceBreakdown>,
    /// Absent on year-level rollups, which have no single activity count
    pub achievement: Option<AchievementInfo>,
}

impl PeriodResult {
    /// Empty result with zeroed accumulators and all tracked service lines
    /// initialized.
    pub fn empty() -> Self {
        Self {
            stats: StatBucket::default(),
            bonus: Decimal::ZERO,
            total_commission: Decimal::ZERO,
            detail: DetailByType::default(),
            service: ServiceLine::TRACKED
                .iter()
                .map(|line| ServiceBreakdown::new(*line))
                .collect(),
            achievement: None,
        }
    }

    /// Breakdown entry for a tracked line, if the line is tracked.
    pub fn service_mut(&mut self, line: ServiceLine) -> Option<&mut ServiceBreakdown> {
        line.tracked_index().map(|i| &mut self.service[i])
    }
}

/// One commission month inside an annual report.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthResult {
    /// English month name ("January".."December")
    pub month: &'static str,
    pub result: PeriodResult,
}

/// Twelve commission months plus the yearly rollup.
///
/// The yearly fields are sums of already-rounded month values, so small
/// cumulative rounding drift against a from-raw-rows total is expected.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualResult {
    pub year: i32,
    pub months: Vec<MonthResult>,
    pub yearly: PeriodResult,
}
