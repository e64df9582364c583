//! Analytic-ledger repository for profitability base totals.

use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
    QueryTrait, Select,
};
use tracing::debug;
use uuid::Uuid;

use margin_core::profitability::AnalyticSummary;

use crate::entities::{account_moves, analytic_lines};

/// Error types for analytic operations.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Analytic repository for ledger-line queries.
#[derive(Debug, Clone)]
pub struct AnalyticRepository {
    db: DatabaseConnection,
}

impl AnalyticRepository {
    /// Creates a new analytic repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sums analytic line amounts on the given accounts into revenue
    /// (positive) and cost (negative) totals.
    ///
    /// Lines posted from an expense-generated journal entry are excluded;
    /// those amounts already reach the report through the expense section
    /// and must not be double-counted. Lines with no journal entry at all
    /// are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn profitability_summary(
        &self,
        organization_id: Uuid,
        analytic_ids: &[Uuid],
    ) -> Result<AnalyticSummary, AnalyticError> {
        if analytic_ids.is_empty() {
            return Ok(AnalyticSummary::default());
        }

        let amounts: Vec<Decimal> = summary_query(organization_id, analytic_ids)
            .into_tuple()
            .all(&self.db)
            .await?;

        debug!(lines = amounts.len(), "summarized analytic lines");

        Ok(summarize_amounts(&amounts))
    }
}

/// Builds the amount query for the profitability base.
///
/// Expense-generated moves stay excluded inside the database via a
/// `NOT IN (subquery)`; a line with no move passes through the `IS NULL`
/// branch.
fn summary_query(
    organization_id: Uuid,
    analytic_ids: &[Uuid],
) -> Select<analytic_lines::Entity> {
    let expense_moves = account_moves::Entity::find()
        .filter(account_moves::Column::OrganizationId.eq(organization_id))
        .filter(account_moves::Column::ExpenseId.is_not_null())
        .select_only()
        .column(account_moves::Column::Id)
        .into_query();

    analytic_lines::Entity::find()
        .filter(analytic_lines::Column::OrganizationId.eq(organization_id))
        .filter(analytic_lines::Column::AnalyticAccountId.is_in(analytic_ids.to_vec()))
        .filter(
            Condition::any()
                .add(analytic_lines::Column::MoveId.is_null())
                .add(analytic_lines::Column::MoveId.not_in_subquery(expense_moves)),
        )
        .select_only()
        .column(analytic_lines::Column::Amount)
}

/// Splits line amounts into revenue (positive) and cost (negative) totals.
#[must_use]
pub fn summarize_amounts(amounts: &[Decimal]) -> AnalyticSummary {
    let mut summary = AnalyticSummary::default();
    for amount in amounts {
        if amount.is_sign_negative() {
            summary.cost_total += *amount;
        } else {
            summary.revenue_total += *amount;
        }
    }
    summary
}

#[cfg(test)]
#[path = "analytic_tests.rs"]
mod tests;
