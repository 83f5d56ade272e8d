use std::collections::HashSet;

use tracing::debug;

use crate::modules::commissions::models::{CommissionType, ServiceLine};
use crate::modules::snapshots::models::SnapshotRow;

/// Immutable per-period context built by the first pass over a period's
/// rows and consumed by the pricing pass.
///
/// The two passes are strictly sequential: a row's rate can depend on the
/// whole period (activity count, per-customer setup flags), so the scan must
/// complete before any row is priced.
#[derive(Debug, Clone, Default)]
pub struct PeriodContext {
    /// Paired activity count for the period
    pub activity_count: u32,
    /// All `new` rows, before pairing
    pub total_new: u32,
    /// `new` rows on NusaSelecta lines, excluding the NFSP200 flagship
    pub selecta_new: u32,
    customers_with_setup: HashSet<String>,
}

impl PeriodContext {
    /// First pass: classify every non-deleted row, count new activations,
    /// and record which customers have an in-period setup row.
    pub fn scan(rows: &[SnapshotRow]) -> Self {
        let mut ctx = PeriodContext::default();

        for row in rows.iter().filter(|r| !r.is_deleted) {
            match CommissionType::classify(row) {
                CommissionType::New => {
                    ctx.total_new += 1;
                    if ServiceLine::from_service_id(&row.service_id) == ServiceLine::NusaSelecta
                        && row.service_id != "NFSP200"
                    {
                        ctx.selecta_new += 1;
                    }
                }
                CommissionType::Setup => {
                    ctx.customers_with_setup.insert(row.customer_id.clone());
                }
                _ => {}
            }
        }

        // Standalone NusaSelecta sign-ups count at half weight: two of them
        // make one unit of activity, an unpaired one makes none.
        let standard_new = ctx.total_new - ctx.selecta_new;
        let selecta_pairs = ctx.selecta_new / 2;
        ctx.activity_count = standard_new + selecta_pairs;

        debug!(
            total_new = ctx.total_new,
            selecta_new = ctx.selecta_new,
            activity = ctx.activity_count,
            "scanned period rows"
        );

        ctx
    }

    /// Whether this customer has any setup row in the period.
    pub fn customer_has_setup(&self, customer_id: &str) -> bool {
        self.customers_with_setup.contains(customer_id)
    }

    #[cfg(test)]
    pub(crate) fn record_setup_customer(&mut self, customer_id: &str) {
        self.customers_with_setup.insert(customer_id.to_string());
    }
}
