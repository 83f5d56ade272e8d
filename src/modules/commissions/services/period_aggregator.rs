use tracing::info;

use crate::modules::commissions::models::PeriodResult;
use crate::modules::commissions::services::activity::PeriodContext;
use crate::modules::commissions::services::bonus::BonusCalculator;
use crate::modules::commissions::services::rate_resolver::{PricedRow, RateResolver};
use crate::modules::snapshots::models::{EmploymentStatus, SnapshotRow};

/// Per-period aggregator: folds one employee's classified, priced rows into
/// a `PeriodResult`.
pub struct PeriodAggregator;

impl PeriodAggregator {
    /// Compute the full result for one employee and one period.
    ///
    /// Stage 1 scans the rows into an immutable `PeriodContext`; stage 2
    /// prices each row against that context and folds it into the totals,
    /// the per-type detail, and (for tracked lines) the service breakdown.
    pub fn compute(rows: &[SnapshotRow], status: EmploymentStatus) -> PeriodResult {
        let ctx = PeriodContext::scan(rows);
        let mut result = PeriodResult::empty();

        for row in rows.iter().filter(|r| !r.is_deleted) {
            let priced = RateResolver::price(row, status, &ctx);
            Self::fold(&mut result, &priced);
        }

        result.bonus = BonusCalculator::bonus(ctx.activity_count);
        result.total_commission = result.stats.commission + result.bonus;
        result.achievement = Some(BonusCalculator::achievement(ctx.activity_count, status));

        info!(
            rows = result.stats.count,
            activity = ctx.activity_count,
            commission = %result.stats.commission,
            bonus = %result.bonus,
            "aggregated commission period"
        );

        result
    }

    /// Fold one priced row into every aggregation level it belongs to.
    ///
    /// Rows on untracked (`Other`) lines still count toward the totals and
    /// the per-type detail, just not toward any service breakdown.
    fn fold(result: &mut PeriodResult, priced: &PricedRow) {
        result
            .stats
            .fold(priced.commission, priced.mrc, priced.dpp);
        result
            .detail
            .get_mut(priced.commission_type)
            .fold(priced.commission, priced.mrc, priced.dpp);

        if let Some(service) = result.service_mut(priced.service_line) {
            service
                .stats
                .fold(priced.commission, priced.mrc, priced.dpp);
            service
                .detail
                .get_mut(priced.commission_type)
                .fold(priced.commission, priced.mrc, priced.dpp);
        }
    }
}
