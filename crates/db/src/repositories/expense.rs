//! Expense repository for search and profitability aggregation.

use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Select,
};
use tracing::debug;
use uuid::Uuid;

use margin_core::profitability::ExpenseAggregate;

use crate::entities::{expenses, sea_orm_active_enums::ExpenseState};

/// Error types for expense operations.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Expense repository for expense queries.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the ids of all expenses linked to the given analytic
    /// accounts, regardless of state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn search_ids(&self, analytic_ids: &[Uuid]) -> Result<Vec<Uuid>, ExpenseError> {
        if analytic_ids.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = expenses::Entity::find()
            .filter(expenses::Column::AnalyticAccountId.is_in(analytic_ids.to_vec()))
            .order_by_asc(expenses::Column::ExpenseDate)
            .select_only()
            .column(expenses::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(ids)
    }

    /// Aggregates qualifying expenses for the profitability report.
    ///
    /// Qualifying: analytic account in `analytic_ids`, not refused, state
    /// approved or done. Returns `None` when nothing qualifies so the
    /// report section stays absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn aggregate_qualifying(
        &self,
        analytic_ids: &[Uuid],
    ) -> Result<Option<ExpenseAggregate>, ExpenseError> {
        if analytic_ids.is_empty() {
            return Ok(None);
        }

        let rows: Vec<(Uuid, Decimal)> = qualifying_query(analytic_ids)
            .into_tuple()
            .all(&self.db)
            .await?;

        debug!(qualifying = rows.len(), "aggregated project expenses");

        Ok(fold_aggregate(rows))
    }
}

/// Builds the (id, untaxed_amount) query over qualifying expenses:
/// not refused, state approved or done.
fn qualifying_query(analytic_ids: &[Uuid]) -> Select<expenses::Entity> {
    expenses::Entity::find()
        .filter(expenses::Column::AnalyticAccountId.is_in(analytic_ids.to_vec()))
        .filter(expenses::Column::IsRefused.eq(false))
        .filter(expenses::Column::State.is_in([ExpenseState::Approved, ExpenseState::Done]))
        .order_by_asc(expenses::Column::ExpenseDate)
        .select_only()
        .column(expenses::Column::Id)
        .column(expenses::Column::UntaxedAmount)
}

/// Folds (id, untaxed_amount) rows into a single aggregate bucket.
///
/// Empty input yields `None`, never a zero-count aggregate.
#[must_use]
pub fn fold_aggregate(rows: Vec<(Uuid, Decimal)>) -> Option<ExpenseAggregate> {
    if rows.is_empty() {
        return None;
    }

    let untaxed_total: Decimal = rows.iter().map(|(_, amount)| *amount).sum();
    let expense_ids: Vec<Uuid> = rows.into_iter().map(|(id, _)| id).collect();

    Some(ExpenseAggregate {
        count: expense_ids.len() as u64,
        untaxed_total,
        expense_ids,
    })
}

#[cfg(test)]
#[path = "expense_tests.rs"]
mod tests;
