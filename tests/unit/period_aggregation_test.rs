// Consistency tests for the per-period aggregator: totals, per-type detail
// and per-service breakdowns must agree with each other for any row mix.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use komisi::modules::commissions::models::{CommissionType, PeriodReport, ServiceLine};
use komisi::modules::commissions::services::PeriodAggregator;
use komisi::modules::snapshots::models::{Category, EmploymentStatus, SnapshotRow};

fn row(ai: u32, service_id: &str, category: Category, hint: Option<&str>, dpp: Decimal) -> SnapshotRow {
    SnapshotRow {
        ai: format!("INV-{}", ai),
        customer_id: format!("CUST-{}", ai % 5),
        service_id: service_id.to_string(),
        category,
        type_hint: hint.map(str::to_string),
        mrc: Some(dec!(150000)),
        dpp: Some(dpp),
        months: Some(12),
        is_deleted: false,
        period_start: None,
        period_end: None,
    }
}

fn arb_row(ai: u32, kind: u8, dpp: u64) -> SnapshotRow {
    match kind % 6 {
        0 => row(ai, "BFLITE", Category::Home, Some("new"), Decimal::from(dpp)),
        1 => row(ai, "NFSP030", Category::Home, Some("new"), Decimal::from(dpp)),
        2 => row(ai, "HOME100", Category::Home, None, Decimal::from(dpp)),
        3 => row(ai, "BFLITE", Category::Home, Some("prorata"), Decimal::from(dpp)),
        4 => row(ai, "MYSTERY", Category::Alat, None, Decimal::from(dpp)),
        _ => row(ai, "MYSTERY", Category::Setup, None, Decimal::from(dpp)),
    }
}

#[test]
fn test_mixed_period_end_to_end() {
    let rows = vec![
        row(1, "BFLITE", Category::Home, Some("new"), dec!(1000000)),
        row(2, "NFSP030", Category::Home, Some("new"), dec!(500000)),
        row(3, "HOME100", Category::Home, None, dec!(250000)),
        row(4, "BFLITE", Category::Home, Some("prorata"), dec!(90000)),
        row(5, "MYSTERY", Category::Setup, None, dec!(200000)),
    ];
    let result = PeriodAggregator::compute(&rows, EmploymentStatus::Permanent);

    assert_eq!(result.stats.count, 5);
    // BFLITE 12m new: 50,900; NFSP030 12m new: 22,200; recurring at the
    // 0.5% discount (1 activity unit < 12, Permanent): 1,250;
    // prorate 10%: 9,000; setup 5%: 10,000
    assert_eq!(result.detail.get(CommissionType::New).commission, dec!(73100));
    assert_eq!(
        result.detail.get(CommissionType::Recurring).commission,
        dec!(1250)
    );
    assert_eq!(result.detail.get(CommissionType::Prorate).commission, dec!(9000));
    assert_eq!(result.detail.get(CommissionType::Setup).commission, dec!(10000));
    assert_eq!(result.stats.commission, dec!(93350));

    // The setup row's service is unknown, so only four rows land in
    // service breakdowns
    let tracked_count: u64 = result.service.iter().map(|s| s.stats.count).sum();
    assert_eq!(tracked_count, 4);
}

#[test]
fn test_report_boundary_formatting() {
    let rows = vec![row(1, "BFLITE", Category::Home, Some("new"), dec!(333333))];
    let result = PeriodAggregator::compute(&rows, EmploymentStatus::Contract);
    let report = PeriodReport::from(&result);

    // 333,333 × 5.09% = 16,966.6497 → "16966.65"
    assert_eq!(report.commission, "16966.65");
    assert_eq!(report.bonus, "0.00");
    assert_eq!(report.total_commission, "16966.65");
    assert_eq!(report.detail.new.commission, "16966.65");
}

proptest! {
    #[test]
    fn test_detail_counts_always_sum_to_total(
        kinds in prop::collection::vec(0u8..6u8, 0..40),
    ) {
        let rows: Vec<_> = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| arb_row(i as u32, *kind, 100_000 + i as u64))
            .collect();
        let result = PeriodAggregator::compute(&rows, EmploymentStatus::Contract);

        prop_assert_eq!(result.detail.total_count(), result.stats.count);
        prop_assert_eq!(result.stats.count as usize, rows.len());
    }

    #[test]
    fn test_detail_commissions_sum_to_total(
        kinds in prop::collection::vec(0u8..6u8, 0..40),
    ) {
        let rows: Vec<_> = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| arb_row(i as u32, *kind, 100_000 + i as u64))
            .collect();
        let result = PeriodAggregator::compute(&rows, EmploymentStatus::Contract);

        let detail_sum: Decimal = result.detail.iter().map(|(_, b)| b.commission).sum();
        prop_assert_eq!(detail_sum, result.stats.commission);
    }

    #[test]
    fn test_service_buckets_agree_with_their_detail(
        kinds in prop::collection::vec(0u8..6u8, 0..40),
    ) {
        let rows: Vec<_> = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| arb_row(i as u32, *kind, 100_000 + i as u64))
            .collect();
        let result = PeriodAggregator::compute(&rows, EmploymentStatus::Contract);

        for service in &result.service {
            prop_assert_eq!(service.detail.total_count(), service.stats.count);
            let detail_commission: Decimal =
                service.detail.iter().map(|(_, b)| b.commission).sum();
            prop_assert_eq!(detail_commission, service.stats.commission);
        }
    }

    #[test]
    fn test_untracked_rows_stay_out_of_breakdowns(
        count in 0usize..20usize,
    ) {
        let rows: Vec<_> = (0..count)
            .map(|i| row(i as u32, "MYSTERY", Category::Alat, None, dec!(100000)))
            .collect();
        let result = PeriodAggregator::compute(&rows, EmploymentStatus::Contract);

        prop_assert_eq!(result.stats.count as usize, count);
        for service in &result.service {
            prop_assert_eq!(service.stats.count, 0);
            prop_assert_eq!(service.line.tracked_index().is_some(), true);
        }
        prop_assert!(!result
            .service
            .iter()
            .any(|s| s.line == ServiceLine::Other));
    }
}
