//! Expense action construction.

use uuid::Uuid;

use super::types::{ActionContext, ActionDescriptor, ExpenseDomain, ViewMode, WindowAction};

/// Full view sequence for browsing a project's expenses.
const EXPENSE_VIEWS: [ViewMode; 5] = [
    ViewMode::List,
    ViewMode::Form,
    ViewMode::Kanban,
    ViewMode::Chart,
    ViewMode::Pivot,
];

/// Builds an action descriptor opening expenses filtered to `domain` or to
/// an explicit id set.
///
/// Returns `None` when both the domain and the id list are empty; there is
/// nothing to show. With exactly one id the descriptor collapses to a single
/// form view targeting that record.
#[must_use]
pub fn expense_action(
    analytic_account_id: Option<Uuid>,
    domain: Option<ExpenseDomain>,
    expense_ids: &[Uuid],
) -> Option<ActionDescriptor> {
    if domain.is_none() && expense_ids.is_empty() {
        return None;
    }

    let mut action = ActionDescriptor::all_expenses();
    action.display_name = "Expenses".to_string();
    action.views = EXPENSE_VIEWS.to_vec();
    action.context = ActionContext {
        default_analytic_account_id: analytic_account_id,
    };
    action.domain = Some(domain.unwrap_or_else(|| ExpenseDomain::IdIn(expense_ids.to_vec())));

    if let [only] = expense_ids {
        action.views = vec![ViewMode::Form];
        action.res_id = Some(*only);
    }

    Some(action)
}

/// Builds the "open project expenses" window action.
///
/// Projects without an analytic account have no linked expenses by
/// definition, so the client window just closes.
#[must_use]
pub fn open_project_expenses(
    analytic_account_id: Option<Uuid>,
    expense_ids: Vec<Uuid>,
) -> WindowAction {
    let Some(analytic_id) = analytic_account_id else {
        return WindowAction::CloseWindow;
    };

    match expense_action(Some(analytic_id), None, &expense_ids) {
        Some(action) => WindowAction::Open(action),
        None => WindowAction::CloseWindow,
    }
}
