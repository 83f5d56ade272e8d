use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::Money;
use crate::modules::commissions::models::PeriodResult;
use crate::modules::snapshots::models::EmploymentStatus;

/// One subordinate's aggregate for the period under review, as computed by
/// the per-period aggregator, plus their contractual status.
#[derive(Debug, Clone)]
pub struct SubordinateResult {
    pub employee_id: String,
    pub status: EmploymentStatus,
    pub result: PeriodResult,
}

impl SubordinateResult {
    /// Paired activity count carried inside the period result.
    pub fn activity(&self) -> u32 {
        self.result
            .achievement
            .as_ref()
            .map(|a| a.activity)
            .unwrap_or(0)
    }
}

/// Manager-level team performance and override commission for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamPerformance {
    pub team_size: usize,
    pub permanent_count: usize,
    pub activity_sum: u32,
    /// Team activity as a percentage of the permanent-staff target
    pub activity_percentage: Decimal,
    /// Team-size-dependent threshold the percentage is measured against
    pub target_threshold: Decimal,
    pub target_met: bool,
    /// New-business override rate as a percentage
    pub new_rate: Decimal,
    /// Team `new`-type subscription value the new rate applies to
    pub new_base: Decimal,
    pub new_override: Decimal,
    /// Recurring override rate as a percentage
    pub recurring_rate: Decimal,
    /// Team `recurring`-type subscription value the recurring rate applies to
    pub recurring_base: Decimal,
    pub recurring_override: Decimal,
    pub total_override: Decimal,
}

impl TeamPerformance {
    pub fn team_status(&self) -> &'static str {
        if self.target_met {
            "Capai Target"
        } else {
            "Tidak Capai Target"
        }
    }
}

/// Serialization-boundary view of `TeamPerformance`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPerformanceReport {
    pub team_size: usize,
    pub permanent_count: usize,
    pub activity_sum: u32,
    pub activity_percentage: String,
    pub target_threshold: String,
    pub status: String,
    pub new_override: String,
    pub recurring_override: String,
    pub total_override: String,
}

impl From<&TeamPerformance> for TeamPerformanceReport {
    fn from(perf: &TeamPerformance) -> Self {
        Self {
            team_size: perf.team_size,
            permanent_count: perf.permanent_count,
            activity_sum: perf.activity_sum,
            activity_percentage: Money::format(perf.activity_percentage),
            target_threshold: Money::format(perf.target_threshold),
            status: perf.team_status().to_string(),
            new_override: Money::format(perf.new_override),
            recurring_override: Money::format(perf.recurring_override),
            total_override: Money::format(perf.total_override),
        }
    }
}
