use rust_decimal::Decimal;
use tracing::info;

use crate::core::Money;
use crate::modules::commissions::models::CommissionType;
use crate::modules::snapshots::models::EmploymentStatus;
use crate::modules::teams::models::{SubordinateResult, TeamPerformance};

/// Manager performance and override commission calculator.
///
/// Consumes each subordinate's per-period aggregate; the manager earns from
/// the team's new and recurring business, not from their own invoices.
pub struct OverrideCalculator;

impl OverrideCalculator {
    /// Compute team performance and the manager's override for one period.
    pub fn compute(subordinates: &[SubordinateResult]) -> TeamPerformance {
        let team_size = subordinates.len();
        let permanent_count = subordinates
            .iter()
            .filter(|s| s.status == EmploymentStatus::Permanent)
            .count();
        let probation_count = subordinates
            .iter()
            .filter(|s| s.status == EmploymentStatus::Probation)
            .count();
        let activity_sum: u32 = subordinates.iter().map(|s| s.activity()).sum();

        let activity_percentage =
            Self::activity_percentage(activity_sum, permanent_count, probation_count);
        let target_threshold = Self::target_threshold(team_size);
        let target_met = activity_percentage >= target_threshold;

        // The manager's new-business cut steps with how far the team is over
        // (or under) its activity target.
        let new_rate = Self::new_override_rate(activity_percentage);
        let new_base: Decimal = subordinates
            .iter()
            .map(|s| s.result.detail.get(CommissionType::New).dpp)
            .sum();
        let new_override = Money::apply_percentage(new_base, new_rate);

        let recurring_rate = if target_met {
            Decimal::new(90, 2) // 0.90
        } else {
            Decimal::new(50, 2) // 0.50
        };
        let recurring_base: Decimal = subordinates
            .iter()
            .map(|s| s.result.detail.get(CommissionType::Recurring).dpp)
            .sum();
        let recurring_override = Money::apply_percentage(recurring_base, recurring_rate);

        let perf = TeamPerformance {
            team_size,
            permanent_count,
            activity_sum,
            activity_percentage,
            target_threshold,
            target_met,
            new_rate,
            new_base,
            new_override,
            recurring_rate,
            recurring_base,
            recurring_override,
            total_override: new_override + recurring_override,
        };

        info!(
            team_size,
            permanent_count,
            activity = activity_sum,
            percentage = %perf.activity_percentage,
            status = perf.team_status(),
            total = %perf.total_override,
            "computed manager override"
        );

        perf
    }

    /// Team activity as a percentage of the permanent-staff target of 12
    /// activity units per head.
    ///
    /// A team with no permanent or probation members scores 0%; a team with
    /// only probation members scores 100% regardless of activity.
    fn activity_percentage(
        activity_sum: u32,
        permanent_count: usize,
        probation_count: usize,
    ) -> Decimal {
        if permanent_count == 0 && probation_count == 0 {
            return Decimal::ZERO;
        }
        if permanent_count == 0 {
            return Decimal::ONE_HUNDRED;
        }

        Decimal::from(activity_sum) / (Decimal::from(permanent_count as u64) * Decimal::from(12))
            * Decimal::ONE_HUNDRED
    }

    /// Target threshold by team size; small teams are held to higher bars.
    fn target_threshold(team_size: usize) -> Decimal {
        let threshold = match team_size {
            1 => 120,
            2 => 115,
            3 => 110,
            4 => 105,
            5 => 100,
            6 => 95,
            7 => 92,
            8 => 90,
            9 => 88,
            _ => 85,
        };
        Decimal::from(threshold)
    }

    /// New-business override rate (percent) as a step function of the team
    /// activity percentage.
    fn new_override_rate(activity_percentage: Decimal) -> Decimal {
        if activity_percentage >= Decimal::from(150) {
            Decimal::from(60)
        } else if activity_percentage >= Decimal::from(125) {
            Decimal::from(50)
        } else if activity_percentage >= Decimal::from(100) {
            Decimal::from(40)
        } else if activity_percentage >= Decimal::from(50) {
            Decimal::from(25)
        } else {
            Decimal::ZERO
        }
    }
}
