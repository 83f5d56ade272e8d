use rust_decimal::Decimal;

use crate::core::Money;
use crate::modules::commissions::models::{CommissionType, ServiceLine};
use crate::modules::commissions::services::activity::PeriodContext;
use crate::modules::snapshots::models::{EmploymentStatus, SnapshotRow};

/// Commission rate tiers for new/upgrade subscriptions, keyed by minimum
/// contract length in months.
#[derive(Debug, Clone, Copy)]
struct RateTier {
    one: Decimal,
    six: Decimal,
    twelve: Decimal,
}

/// A snapshot row with its resolved type, rate and commission amount.
#[derive(Debug, Clone)]
pub struct PricedRow {
    pub commission_type: CommissionType,
    pub service_line: ServiceLine,
    pub commission: Decimal,
    pub commission_percentage: Decimal,
    pub mrc: Decimal,
    pub dpp: Decimal,
}

/// Row Classifier & Rate Resolver.
///
/// Pure: the commission of a row depends only on the row itself and the
/// `PeriodContext` built by the activity scan (employment status, paired
/// activity count, per-customer setup flags).
pub struct RateResolver;

impl RateResolver {
    /// Resolve the commission percentage for an already-classified row.
    pub fn resolve_percentage(
        row: &SnapshotRow,
        commission_type: CommissionType,
        status: EmploymentStatus,
        ctx: &PeriodContext,
    ) -> Decimal {
        match commission_type {
            CommissionType::Prorate => Decimal::new(10, 0),
            CommissionType::New | CommissionType::Upgrade => {
                Self::acquisition_percentage(&row.service_id, row.months())
            }
            CommissionType::Recurring => {
                // Permanent staff below 12 units of monthly activity earn the
                // reduced recurring rate.
                if status == EmploymentStatus::Permanent && ctx.activity_count < 12 {
                    Decimal::new(5, 1) // 0.5
                } else {
                    Decimal::new(15, 1) // 1.5
                }
            }
            CommissionType::Setup => Decimal::new(5, 0),
            CommissionType::Alat => {
                // Equipment sold alongside an installation in the same period
                // commissions at double rate.
                if ctx.customer_has_setup(&row.customer_id) {
                    Decimal::new(2, 0)
                } else {
                    Decimal::ONE
                }
            }
        }
    }

    /// Classify and price one row.
    pub fn price(row: &SnapshotRow, status: EmploymentStatus, ctx: &PeriodContext) -> PricedRow {
        let commission_type = CommissionType::classify(row);
        let commission_percentage = Self::resolve_percentage(row, commission_type, status, ctx);
        let dpp = row.dpp();

        PricedRow {
            commission_type,
            service_line: ServiceLine::from_service_id(&row.service_id),
            commission: Money::apply_percentage(dpp, commission_percentage),
            commission_percentage,
            mrc: row.mrc(),
            dpp,
        }
    }

    /// New/upgrade percentage from the static rate table.
    ///
    /// NusaSelecta flagship plans (NFSP030/NFSP100/NFSP200) only enter the
    /// 6-month tier at exactly 6 months; every other service falls into it
    /// from 2 months up. The asymmetry is contractual, not an accident.
    fn acquisition_percentage(service_id: &str, months: i64) -> Decimal {
        let Some(tier) = Self::rate_table(service_id) else {
            return Decimal::ZERO;
        };

        let strict_six_month_floor =
            matches!(service_id, "NFSP030" | "NFSP100" | "NFSP200");

        if months >= 12 {
            tier.twelve
        } else if (strict_six_month_floor && months >= 6)
            || (!strict_six_month_floor && months > 1)
        {
            tier.six
        } else {
            tier.one
        }
    }

    /// Static per-service rate table (percentages for 1/6/12-month
    /// contracts). Unknown service identifiers have no entry and price at 0.
    fn rate_table(service_id: &str) -> Option<RateTier> {
        let (one, six, twelve) = match service_id {
            "BFLITE" => (2838, 655, 509),
            "NFSP030" | "NFSP100" => (2000, 556, 444),
            "NFSP200" => (2600, 600, 467),
            "HOME100" => (2857, 595, 476),
            "HOMEADV200" | "HOMEADV" => (2778, 556, 463),
            "HOMEPREM300" => (3125, 625, 521),
            _ => return None,
        };

        Some(RateTier {
            one: Decimal::new(one, 2),
            six: Decimal::new(six, 2),
            twelve: Decimal::new(twelve, 2),
        })
    }
}
