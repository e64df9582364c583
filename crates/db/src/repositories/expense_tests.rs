//! Tests for expense aggregate folding.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{DbBackend, QueryTrait};
use uuid::Uuid;

use super::{fold_aggregate, qualifying_query};

#[test]
fn test_qualifying_query_drops_refused_and_non_final_states() {
    let sql = qualifying_query(&[Uuid::new_v4()])
        .build(DbBackend::Postgres)
        .to_string();

    // An expense in state draft, or flagged refused, must never reach the
    // billed total; the filter belongs to the query itself.
    assert!(sql.contains(r#""is_refused" = FALSE"#));
    assert!(sql.contains(r#""state" IN"#));
    assert!(sql.contains("'approved'"));
    assert!(sql.contains("'done'"));
    assert!(!sql.contains("'draft'"));
    assert!(!sql.contains("'submitted'"));
    assert!(!sql.contains("'refused'"));
}

#[test]
fn test_qualifying_query_scopes_to_analytic_accounts() {
    let analytic = Uuid::new_v4();
    let sql = qualifying_query(&[analytic])
        .build(DbBackend::Postgres)
        .to_string();

    assert!(sql.contains(r#""analytic_account_id" IN"#));
    assert!(sql.contains(&analytic.to_string()));
}

#[test]
fn test_no_rows_yields_no_aggregate() {
    assert!(fold_aggregate(vec![]).is_none());
}

#[test]
fn test_single_row_aggregate() {
    let id = Uuid::new_v4();
    let aggregate = fold_aggregate(vec![(id, dec!(42.50))]).unwrap();

    assert_eq!(aggregate.count, 1);
    assert_eq!(aggregate.untaxed_total, dec!(42.50));
    assert_eq!(aggregate.expense_ids, vec![id]);
}

#[test]
fn test_rows_sum_and_keep_order() {
    let (e1, e3) = (Uuid::new_v4(), Uuid::new_v4());
    let aggregate = fold_aggregate(vec![(e1, dec!(100)), (e3, dec!(30))]).unwrap();

    assert_eq!(aggregate.count, 2);
    assert_eq!(aggregate.untaxed_total, dec!(130));
    assert_eq!(aggregate.expense_ids, vec![e1, e3]);
}

proptest! {
    /// Count always equals the number of rows, and the total equals the
    /// sum of row amounts.
    #[test]
    fn prop_fold_preserves_count_and_sum(
        amounts in proptest::collection::vec(0i64..10_000_000i64, 1..50),
    ) {
        let rows: Vec<(Uuid, Decimal)> = amounts
            .iter()
            .map(|n| (Uuid::new_v4(), Decimal::new(*n, 2)))
            .collect();
        let expected_total: Decimal = rows.iter().map(|(_, amount)| *amount).sum();

        let aggregate = fold_aggregate(rows.clone()).unwrap();

        prop_assert_eq!(aggregate.count as usize, rows.len());
        prop_assert_eq!(aggregate.untaxed_total, expected_total);
        prop_assert_eq!(aggregate.expense_ids.len(), rows.len());
    }
}
