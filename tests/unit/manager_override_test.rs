// Tests for manager team performance and override commissions, driven
// end-to-end through the per-period aggregator.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use komisi::modules::commissions::services::PeriodAggregator;
use komisi::modules::snapshots::models::{Category, EmploymentStatus, SnapshotRow};
use komisi::modules::teams::models::{SubordinateResult, TeamPerformanceReport};
use komisi::modules::teams::services::OverrideCalculator;

fn new_row(ai: u32, dpp: Decimal) -> SnapshotRow {
    SnapshotRow {
        ai: format!("INV-{}", ai),
        customer_id: format!("CUST-{}", ai),
        service_id: "BFLITE".to_string(),
        category: Category::Home,
        type_hint: Some("new".to_string()),
        mrc: Some(dec!(100000)),
        dpp: Some(dpp),
        months: Some(12),
        is_deleted: false,
        period_start: None,
        period_end: None,
    }
}

fn recurring_row(ai: u32, dpp: Decimal) -> SnapshotRow {
    SnapshotRow {
        type_hint: None,
        ..new_row(ai, dpp)
    }
}

fn subordinate(id: &str, status: EmploymentStatus, rows: &[SnapshotRow]) -> SubordinateResult {
    SubordinateResult {
        employee_id: id.to_string(),
        status,
        result: PeriodAggregator::compute(rows, status),
    }
}

#[test]
fn test_probation_only_team_is_always_at_hundred_percent() {
    // No activity at all, still 100%
    let team = vec![
        subordinate("A", EmploymentStatus::Probation, &[]),
        subordinate("B", EmploymentStatus::Probation, &[]),
    ];
    let perf = OverrideCalculator::compute(&team);
    assert_eq!(perf.activity_percentage, dec!(100));

    // And with activity it stays 100%
    let rows: Vec<_> = (0..30).map(|i| new_row(i, dec!(100000))).collect();
    let team = vec![
        subordinate("A", EmploymentStatus::Probation, &rows),
        subordinate("B", EmploymentStatus::Probation, &[]),
    ];
    let perf = OverrideCalculator::compute(&team);
    assert_eq!(perf.activity_percentage, dec!(100));
}

#[test]
fn test_team_without_permanent_or_probation_scores_zero() {
    let rows: Vec<_> = (0..20).map(|i| new_row(i, dec!(100000))).collect();
    let team = vec![
        subordinate("A", EmploymentStatus::Contract, &rows),
        subordinate("B", EmploymentStatus::Unknown, &[]),
    ];
    let perf = OverrideCalculator::compute(&team);
    assert_eq!(perf.activity_percentage, dec!(0));
    assert_eq!(perf.new_rate, dec!(0));
    assert_eq!(perf.new_override, dec!(0));
}

#[test]
fn test_override_from_subordinate_aggregates() {
    // One permanent rep with 24 activations of 1,000,000 each and recurring
    // business of 2,000,000: 24/(1×12) = 200% team performance.
    let mut rows: Vec<_> = (0..24).map(|i| new_row(i, dec!(1000000))).collect();
    rows.push(recurring_row(100, dec!(2000000)));

    let team = vec![subordinate("A", EmploymentStatus::Permanent, &rows)];
    let perf = OverrideCalculator::compute(&team);

    assert_eq!(perf.activity_sum, 24);
    assert_eq!(perf.activity_percentage, dec!(200));
    assert_eq!(perf.target_threshold, dec!(120));
    assert!(perf.target_met);

    // 60% of the 24,000,000 new dpp, 0.90% of the 2,000,000 recurring dpp
    assert_eq!(perf.new_base, dec!(24000000));
    assert_eq!(perf.new_override, dec!(14400000));
    assert_eq!(perf.recurring_base, dec!(2000000));
    assert_eq!(perf.recurring_override, dec!(18000));
    assert_eq!(perf.total_override, dec!(14418000));
}

#[test]
fn test_mixed_team_threshold_and_status() {
    // 2 permanent with 9 activations each: 18/(2×12) = 75%; probation
    // members count toward team size but not the permanent target.
    let rows_nine: Vec<_> = (0..9).map(|i| new_row(i, dec!(500000))).collect();
    let team = vec![
        subordinate("A", EmploymentStatus::Permanent, &rows_nine),
        subordinate("B", EmploymentStatus::Permanent, &rows_nine),
        subordinate("C", EmploymentStatus::Probation, &[]),
    ];
    let perf = OverrideCalculator::compute(&team);

    assert_eq!(perf.team_size, 3);
    assert_eq!(perf.permanent_count, 2);
    assert_eq!(perf.activity_percentage, dec!(75));
    assert_eq!(perf.target_threshold, dec!(110));
    assert!(!perf.target_met);
    assert_eq!(perf.team_status(), "Tidak Capai Target");
    // 75% earns the 25% new-business band and the reduced recurring rate
    assert_eq!(perf.new_rate, dec!(25));
    assert_eq!(perf.recurring_rate, dec!(0.50));
}

#[test]
fn test_report_renders_fixed_decimals() {
    let rows: Vec<_> = (0..24).map(|i| new_row(i, dec!(1000000))).collect();
    let team = vec![subordinate("A", EmploymentStatus::Permanent, &rows)];
    let perf = OverrideCalculator::compute(&team);
    let report = TeamPerformanceReport::from(&perf);

    assert_eq!(report.activity_percentage, "200.00");
    assert_eq!(report.status, "Capai Target");
    assert_eq!(report.new_override, "14400000.00");
    assert_eq!(report.total_override, report.new_override);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("totalOverride").is_some());
    assert!(json.get("activityPercentage").is_some());
}
