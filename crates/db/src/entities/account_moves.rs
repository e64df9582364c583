//! `SeaORM` Entity for the account_moves table.
//!
//! Journal entries. `expense_id` is set when the move was generated by
//! posting an expense; the analytic repository uses it to keep
//! expense-driven entries out of the revenue base.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "account_moves")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub reference: String,
    pub expense_id: Option<Uuid>,
    pub move_date: Date,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::expenses::Entity",
        from = "Column::ExpenseId",
        to = "super::expenses::Column::Id"
    )]
    Expenses,
    #[sea_orm(has_many = "super::analytic_lines::Entity")]
    AnalyticLines,
}

impl Related<super::expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl Related<super::analytic_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnalyticLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
