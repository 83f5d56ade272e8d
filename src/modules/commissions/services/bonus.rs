use rust_decimal::Decimal;

use crate::modules::commissions::models::AchievementInfo;
use crate::modules::snapshots::models::EmploymentStatus;

/// Bonus ladder and achievement tiers, both keyed by the paired activity
/// count for the period.
pub struct BonusCalculator;

impl BonusCalculator {
    /// Monthly bonus for an activity count.
    ///
    /// 15-16 and 17-19 are flat bands, 20 is a flat band equal to the floor
    /// of the linear range, and everything above 20 is linear.
    pub fn bonus(activity: u32) -> Decimal {
        if activity < 15 {
            return Decimal::ZERO;
        }

        if activity > 20 {
            Decimal::from(1_500_000 + u64::from(activity - 20) * 150_000)
        } else if activity == 20 {
            Decimal::from(1_500_000)
        } else if activity >= 17 {
            Decimal::from(1_000_000)
        } else {
            Decimal::from(500_000)
        }
    }

    /// Achievement tier and motivation line for the period.
    ///
    /// The strings are part of the response contract and must not change.
    pub fn achievement(activity: u32, status: EmploymentStatus) -> AchievementInfo {
        let (tier, motivation) = match status {
            EmploymentStatus::Permanent => {
                if activity >= 15 {
                    (
                        "Capai target Bonus",
                        "Congratulations on your outstanding achievement!",
                    )
                } else if activity >= 12 {
                    ("Capai target", "Bravo! Keep up the great work!")
                } else if activity < 3 {
                    ("SP1", "Keep fighting and don't give up!")
                } else {
                    ("Tidak Capai target", "Just a little more fights, go on!")
                }
            }
            EmploymentStatus::Probation | EmploymentStatus::Contract => {
                if activity >= 8 {
                    (
                        "Excelent",
                        "Congratulations on your outstanding achievement!",
                    )
                } else if activity >= 5 {
                    ("Very Good", "Bravo! Keep up the great work!")
                } else if activity >= 3 {
                    ("Average", "You’re much better than what you think!")
                } else {
                    ("Below Average", "Keep pushing!")
                }
            }
            EmploymentStatus::Unknown => ("N/A", "N/A"),
        };

        AchievementInfo {
            activity,
            employment_status: status.as_str().to_string(),
            tier: tier.to_string(),
            motivation: motivation.to_string(),
        }
    }
}
