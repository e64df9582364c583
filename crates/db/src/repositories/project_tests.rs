//! Tests for project repository helpers.

use std::collections::HashMap;

use proptest::prelude::*;
use uuid::Uuid;

use super::distribute_expense_counts;

#[test]
fn test_project_without_analytic_account_counts_zero() {
    let project = Uuid::new_v4();
    let counts = distribute_expense_counts(&[(project, None)], &HashMap::new());
    assert_eq!(counts.get(&project), Some(&0));
}

#[test]
fn test_missing_group_row_counts_zero() {
    let project = Uuid::new_v4();
    let analytic = Uuid::new_v4();
    // The analytic account exists but no expense row grouped onto it.
    let counts = distribute_expense_counts(&[(project, Some(analytic))], &HashMap::new());
    assert_eq!(counts.get(&project), Some(&0));
}

#[test]
fn test_counts_distribute_to_matching_projects() {
    let (p1, p2, p3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let (a1, a2) = (Uuid::new_v4(), Uuid::new_v4());
    let grouped = HashMap::from([(a1, 3), (a2, 7)]);

    let counts = distribute_expense_counts(
        &[(p1, Some(a1)), (p2, Some(a2)), (p3, None)],
        &grouped,
    );

    assert_eq!(counts.get(&p1), Some(&3));
    assert_eq!(counts.get(&p2), Some(&7));
    assert_eq!(counts.get(&p3), Some(&0));
}

#[test]
fn test_projects_sharing_an_analytic_account_share_the_count() {
    let (p1, p2) = (Uuid::new_v4(), Uuid::new_v4());
    let shared = Uuid::new_v4();
    let grouped = HashMap::from([(shared, 5)]);

    let counts = distribute_expense_counts(&[(p1, Some(shared)), (p2, Some(shared))], &grouped);

    assert_eq!(counts.get(&p1), Some(&5));
    assert_eq!(counts.get(&p2), Some(&5));
}

proptest! {
    /// Every requested project appears in the result exactly once, and
    /// counts come straight from its analytic account's group row.
    #[test]
    fn prop_every_project_gets_a_count(
        num_projects in 0usize..20,
        group_count in 0u64..1000,
    ) {
        let analytic = Uuid::new_v4();
        let projects: Vec<(Uuid, Option<Uuid>)> = (0..num_projects)
            .map(|i| {
                let linked = i % 2 == 0;
                (Uuid::new_v4(), linked.then_some(analytic))
            })
            .collect();
        let grouped = HashMap::from([(analytic, group_count)]);

        let counts = distribute_expense_counts(&projects, &grouped);

        prop_assert_eq!(counts.len(), projects.len());
        for (project_id, analytic_id) in &projects {
            let expected = if analytic_id.is_some() { group_count } else { 0 };
            prop_assert_eq!(counts.get(project_id), Some(&expected));
        }
    }
}
