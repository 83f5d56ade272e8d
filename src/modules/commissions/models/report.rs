// Serialization-boundary views of the aggregate models.
//
// Internal accumulation runs on full-precision decimals; these views render
// every decimal field as a fixed 2-decimal-place string, matching the wire
// shape downstream consumers already parse (camelCase keys, "0.00" strings).

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::Money;
use crate::modules::commissions::models::{
    AchievementInfo, AnnualResult, CommissionType, DetailByType, PeriodResult, ServiceBreakdown,
    StatBucket,
};

#[derive(Debug, Clone, Serialize)]
pub struct StatBucketReport {
    pub count: u64,
    pub commission: String,
    pub mrc: String,
    pub dpp: String,
}

impl From<&StatBucket> for StatBucketReport {
    fn from(bucket: &StatBucket) -> Self {
        Self {
            count: bucket.count,
            commission: Money::format(bucket.commission),
            mrc: Money::format(bucket.mrc),
            dpp: Money::format(bucket.dpp),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailReport {
    pub new: StatBucketReport,
    pub upgrade: StatBucketReport,
    pub prorate: StatBucketReport,
    pub recurring: StatBucketReport,
    pub alat: StatBucketReport,
    pub setup: StatBucketReport,
}

impl From<&DetailByType> for DetailReport {
    fn from(detail: &DetailByType) -> Self {
        Self {
            new: detail.get(CommissionType::New).into(),
            upgrade: detail.get(CommissionType::Upgrade).into(),
            prorate: detail.get(CommissionType::Prorate).into(),
            recurring: detail.get(CommissionType::Recurring).into(),
            alat: detail.get(CommissionType::Alat).into(),
            setup: detail.get(CommissionType::Setup).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceReport {
    pub name: String,
    pub count: u64,
    pub commission: String,
    pub mrc: String,
    pub dpp: String,
    pub detail: DetailReport,
}

impl From<&ServiceBreakdown> for ServiceReport {
    fn from(service: &ServiceBreakdown) -> Self {
        Self {
            name: service.line.to_string(),
            count: service.stats.count,
            commission: Money::format(service.stats.commission),
            mrc: Money::format(service.stats.mrc),
            dpp: Money::format(service.stats.dpp),
            detail: (&service.detail).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementReport {
    pub activity: u32,
    pub status: String,
    pub motivation: String,
    #[serde(rename = "employmentStatus")]
    pub employment_status: String,
}

impl From<&AchievementInfo> for AchievementReport {
    fn from(achievement: &AchievementInfo) -> Self {
        Self {
            activity: achievement.activity,
            status: achievement.tier.clone(),
            motivation: achievement.motivation.clone(),
            employment_status: achievement.employment_status.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReport {
    pub count: u64,
    pub commission: String,
    pub bonus: String,
    pub total_commission: String,
    pub mrc: String,
    pub dpp: String,
    pub detail: DetailReport,
    pub service: Vec<ServiceReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievement: Option<AchievementReport>,
}

impl From<&PeriodResult> for PeriodReport {
    fn from(result: &PeriodResult) -> Self {
        Self {
            count: result.stats.count,
            commission: Money::format(result.stats.commission),
            bonus: Money::format(result.bonus),
            total_commission: Money::format(result.total_commission),
            mrc: Money::format(result.stats.mrc),
            dpp: Money::format(result.stats.dpp),
            detail: (&result.detail).into(),
            service: result.service.iter().map(ServiceReport::from).collect(),
            achievement: result.achievement.as_ref().map(AchievementReport::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualReport {
    pub year: i32,
    #[serde(flatten)]
    pub yearly: PeriodReport,
    /// Month name → that month's report; BTreeMap keeps key order stable
    pub monthly: BTreeMap<String, PeriodReport>,
}

impl From<&AnnualResult> for AnnualReport {
    fn from(annual: &AnnualResult) -> Self {
        Self {
            year: annual.year,
            yearly: (&annual.yearly).into(),
            monthly: annual
                .months
                .iter()
                .map(|m| (m.month.to_string(), PeriodReport::from(&m.result)))
                .collect(),
        }
    }
}
