//! `SeaORM` active enums mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an expense record.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "expense_state")]
#[serde(rename_all = "snake_case")]
pub enum ExpenseState {
    /// Being drafted by the employee.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Submitted for approval.
    #[sea_orm(string_value = "submitted")]
    Submitted,
    /// Approved by a manager.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Posted and reimbursed.
    #[sea_orm(string_value = "done")]
    Done,
    /// Rejected by a manager.
    #[sea_orm(string_value = "refused")]
    Refused,
}
