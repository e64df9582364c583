//! Expense contribution to the profitability report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::ExpenseDomain;

use super::registry::{SectionId, SectionRegistry};
use super::service::ProfitabilityContributor;
use super::types::{CostItem, ProfitabilityContribution, SectionAction, SectionActionKind};

/// Server method invoked by the expense section's drill-down action.
pub const PROFITABILITY_ITEMS_ACTION: &str = "open_profitability_items";

/// Single-bucket aggregate over a project's qualifying expenses.
///
/// Qualifying means: analytic account matches the project's, not refused,
/// and state is approved or done. The repository owns the filter; this type
/// only carries the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseAggregate {
    /// Number of qualifying expenses.
    pub count: u64,
    /// Sum of their untaxed amounts.
    pub untaxed_total: Decimal,
    /// Ids of the qualifying expenses.
    pub expense_ids: Vec<Uuid>,
}

/// Contributes the "expenses" cost line to the report.
#[derive(Debug, Clone)]
pub struct ExpenseContributor {
    aggregate: Option<ExpenseAggregate>,
    sequence: u16,
    include_action: bool,
}

impl ExpenseContributor {
    /// Creates the contributor from a pre-queried aggregate.
    ///
    /// `include_action` is the caller's combined "actions requested AND
    /// caller may see expenses" decision; privilege checking itself stays
    /// with the authorization layer.
    #[must_use]
    pub fn new(
        registry: &SectionRegistry,
        aggregate: Option<ExpenseAggregate>,
        include_action: bool,
    ) -> Self {
        Self {
            aggregate,
            sequence: registry.sequence(SectionId::Expenses).unwrap_or(u16::MAX),
            include_action,
        }
    }

    fn build_action(&self, expense_ids: &[Uuid]) -> SectionAction {
        SectionAction {
            name: PROFITABILITY_ITEMS_ACTION.to_string(),
            kind: SectionActionKind::ObjectMethod,
            section: SectionId::Expenses,
            domain: ExpenseDomain::IdIn(expense_ids.to_vec()).encode(),
            res_ids: expense_ids.to_vec(),
        }
    }
}

impl ProfitabilityContributor for ExpenseContributor {
    fn contribute(&self) -> Option<ProfitabilityContribution> {
        let aggregate = self.aggregate.as_ref()?;
        if aggregate.count == 0 {
            return None;
        }

        let action = self
            .include_action
            .then(|| self.build_action(&aggregate.expense_ids));

        Some(ProfitabilityContribution {
            revenues: None,
            costs: Some(CostItem {
                id: SectionId::Expenses,
                sequence: self.sequence,
                // Expenses are costs: negate the untaxed total. Nothing is
                // ever "to bill" for an expense.
                billed: -aggregate.untaxed_total,
                to_bill: Decimal::ZERO,
                action,
            }),
        })
    }
}
