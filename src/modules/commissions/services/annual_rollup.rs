use chrono::NaiveDate;
use tracing::info;

use crate::core::{CommissionPeriod, Money, Result};
use crate::modules::commissions::models::{
    AnnualResult, CommissionType, MonthResult, PeriodResult, StatBucket,
};
use crate::modules::commissions::services::period_aggregator::PeriodAggregator;
use crate::modules::snapshots::models::{EmploymentStatus, SnapshotRow};

/// Month→year rollup orchestrator.
///
/// Computes the twelve commission months of a year and sums them into a
/// yearly total. Yearly decimal fields are sums of month values rounded to
/// the report scale first, matching what consumers reconstruct from the
/// monthly reports; re-deriving from raw rows would shift the total by the
/// accumulated rounding and break that equality.
pub struct AnnualRollup;

impl AnnualRollup {
    /// Compute the annual result for one employee.
    ///
    /// Row fetching stays with the caller: `fetch_rows` receives the
    /// inclusive 26th–25th date range of each commission month.
    pub fn compute<F>(
        year: i32,
        status: EmploymentStatus,
        mut fetch_rows: F,
    ) -> Result<AnnualResult>
    where
        F: FnMut(NaiveDate, NaiveDate) -> Result<Vec<SnapshotRow>>,
    {
        let mut months = Vec::with_capacity(12);

        for month in 1..=12 {
            let (start, end) = CommissionPeriod::month_range(year, month)?;
            let rows = fetch_rows(start, end)?;
            let result = PeriodAggregator::compute(&rows, status);
            months.push(MonthResult {
                month: CommissionPeriod::month_name(month),
                result,
            });
        }

        let yearly = Self::rollup(&months);

        info!(
            year,
            commission = %yearly.stats.commission,
            total = %yearly.total_commission,
            "rolled up annual commission"
        );

        Ok(AnnualResult {
            year,
            months,
            yearly,
        })
    }

    /// Sum month results into a yearly `PeriodResult`-shaped total.
    ///
    /// Counts add raw; every decimal field adds after 2-dp rounding. The
    /// yearly total carries no achievement.
    pub fn rollup(months: &[MonthResult]) -> PeriodResult {
        let mut yearly = PeriodResult::empty();

        for month in months {
            let result = &month.result;

            Self::add_rounded(&mut yearly.stats, &result.stats);
            yearly.bonus += Money::round(result.bonus);
            yearly.total_commission += Money::round(result.total_commission);

            for ty in CommissionType::ALL {
                Self::add_rounded(yearly.detail.get_mut(ty), result.detail.get(ty));
            }

            for (yearly_service, month_service) in
                yearly.service.iter_mut().zip(result.service.iter())
            {
                Self::add_rounded(&mut yearly_service.stats, &month_service.stats);
                for ty in CommissionType::ALL {
                    Self::add_rounded(
                        yearly_service.detail.get_mut(ty),
                        month_service.detail.get(ty),
                    );
                }
            }
        }

        yearly
    }

    fn add_rounded(into: &mut StatBucket, from: &StatBucket) {
        into.count += from.count;
        into.commission += Money::round(from.commission);
        into.mrc += Money::round(from.mrc);
        into.dpp += Money::round(from.dpp);
    }
}
