//! Window-action data types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Presentation views the client can render for a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Tabular list view.
    List,
    /// Single-record form view.
    Form,
    /// Card board view.
    Kanban,
    /// Chart view.
    Chart,
    /// Pivot table view.
    Pivot,
}

/// Filter predicate over expense records, encoded for the query layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseDomain {
    /// Expense id is one of the given ids.
    IdIn(Vec<Uuid>),
    /// Expense analytic account is one of the given accounts.
    AnalyticAccountIn(Vec<Uuid>),
}

impl ExpenseDomain {
    /// Encodes the domain as JSON for transport inside section actions.
    #[must_use]
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Default values pre-filled when the client creates a record from the view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionContext {
    /// Analytic account pre-filled on new expenses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_analytic_account_id: Option<Uuid>,
}

/// Descriptor for opening the expense list/form in the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Title shown in the client breadcrumb.
    pub display_name: String,
    /// Model the views are bound to.
    pub res_model: String,
    /// View sequence, in presentation order.
    pub views: Vec<ViewMode>,
    /// Default values for records created from the view.
    pub context: ActionContext,
    /// Filter restricting the visible records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<ExpenseDomain>,
    /// Direct target record; set when the action opens a single form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_id: Option<Uuid>,
}

impl ActionDescriptor {
    /// The well-known "show all expenses" base template.
    ///
    /// Builders copy this template and override fields rather than
    /// constructing descriptors from scratch.
    #[must_use]
    pub fn all_expenses() -> Self {
        Self {
            display_name: "All Expenses".to_string(),
            res_model: "expense".to_string(),
            views: vec![ViewMode::List, ViewMode::Form],
            context: ActionContext::default(),
            domain: None,
            res_id: None,
        }
    }
}

/// Instruction returned to the client by an action endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "action", rename_all = "snake_case")]
pub enum WindowAction {
    /// Open the given descriptor.
    Open(ActionDescriptor),
    /// Close the current window; nothing to show.
    CloseWindow,
}
