pub mod commission_type;
pub mod period_result;
pub mod report;
pub mod service_line;
pub mod stat_bucket;

pub use commission_type::CommissionType;
pub use period_result::{AchievementInfo, AnnualResult, MonthResult, PeriodResult};
pub use report::{AnnualReport, PeriodReport};
pub use service_line::ServiceLine;
pub use stat_bucket::{DetailByType, ServiceBreakdown, StatBucket};
