// The accumulator shapes shared by every aggregation level: period totals,
// per-type detail, per-service breakdowns, and per-service per-type detail
// all fold rows through the same StatBucket.

use rust_decimal::Decimal;

use crate::modules::commissions::models::{CommissionType, ServiceLine};

/// Sums over the rows folded into one aggregation cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatBucket {
    /// Number of rows folded in
    pub count: u64,
    pub commission: Decimal,
    pub mrc: Decimal,
    pub dpp: Decimal,
}

impl StatBucket {
    /// Fold one priced row into this bucket.
    pub fn fold(&mut self, commission: Decimal, mrc: Decimal, dpp: Decimal) {
        self.count += 1;
        self.commission += commission;
        self.mrc += mrc;
        self.dpp += dpp;
    }
}

/// One `StatBucket` per `CommissionType`, zero-initialized before folding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailByType {
    buckets: [StatBucket; CommissionType::COUNT],
}

impl DetailByType {
    pub fn get(&self, ty: CommissionType) -> &StatBucket {
        &self.buckets[ty.index()]
    }

    pub fn get_mut(&mut self, ty: CommissionType) -> &mut StatBucket {
        &mut self.buckets[ty.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (CommissionType, &StatBucket)> {
        CommissionType::ALL.iter().map(|ty| (*ty, self.get(*ty)))
    }

    /// Total row count across all types.
    pub fn total_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Per-service-line aggregate with its own per-type detail.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceBreakdown {
    pub line: ServiceLine,
    pub stats: StatBucket,
    pub detail: DetailByType,
}

impl ServiceBreakdown {
    pub fn new(line: ServiceLine) -> Self {
        Self {
            line,
            stats: StatBucket::default(),
            detail: DetailByType::default(),
        }
    }
}
