// Tests for the two-pass activity scan and its pairing rule.

use proptest::prelude::*;

use komisi::modules::commissions::services::PeriodContext;
use komisi::modules::snapshots::models::{Category, SnapshotRow};

fn new_row(ai: u32, service_id: &str) -> SnapshotRow {
    SnapshotRow {
        ai: format!("INV-{}", ai),
        customer_id: format!("CUST-{}", ai),
        service_id: service_id.to_string(),
        category: Category::Home,
        type_hint: Some("new".to_string()),
        mrc: None,
        dpp: None,
        months: Some(12),
        is_deleted: false,
        period_start: None,
        period_end: None,
    }
}

#[test]
fn test_three_selecta_rows_pair_to_one() {
    let rows: Vec<_> = (0..3).map(|i| new_row(i, "NFSP030")).collect();
    let ctx = PeriodContext::scan(&rows);
    assert_eq!(ctx.activity_count, 1);
}

#[test]
fn test_four_selecta_rows_pair_to_two() {
    let rows: Vec<_> = (0..4).map(|i| new_row(i, "FSP100")).collect();
    let ctx = PeriodContext::scan(&rows);
    assert_eq!(ctx.activity_count, 2);
}

#[test]
fn test_flagship_nfsp200_is_not_paired() {
    let rows = vec![new_row(0, "NFSP200"), new_row(1, "NFSP200")];
    let ctx = PeriodContext::scan(&rows);
    assert_eq!(ctx.selecta_new, 0);
    assert_eq!(ctx.activity_count, 2);
}

#[test]
fn test_recurring_and_prorate_rows_do_not_count() {
    let mut recurring = new_row(0, "BFLITE");
    recurring.type_hint = None;
    let mut prorate = new_row(1, "BFLITE");
    prorate.type_hint = Some("prorata".to_string());

    let ctx = PeriodContext::scan(&[recurring, prorate, new_row(2, "BFLITE")]);
    assert_eq!(ctx.total_new, 1);
    assert_eq!(ctx.activity_count, 1);
}

proptest! {
    #[test]
    fn test_activity_bounds(
        standard in 0u32..30u32,
        selecta in 0u32..30u32,
    ) {
        let mut rows = Vec::new();
        for i in 0..standard {
            rows.push(new_row(i, "BFLITE"));
        }
        for i in 0..selecta {
            rows.push(new_row(1000 + i, "NFSP030"));
        }

        let ctx = PeriodContext::scan(&rows);

        // standard rows count full, selecta rows count half rounded down
        prop_assert_eq!(ctx.activity_count, standard + selecta / 2);
        prop_assert!(ctx.activity_count <= ctx.total_new);
    }

    #[test]
    fn test_deleted_rows_never_contribute(count in 0u32..20u32) {
        let mut rows: Vec<_> = (0..count).map(|i| new_row(i, "BFLITE")).collect();
        for row in rows.iter_mut() {
            row.is_deleted = true;
        }

        let ctx = PeriodContext::scan(&rows);
        prop_assert_eq!(ctx.activity_count, 0);
        prop_assert_eq!(ctx.total_new, 0);
    }
}
