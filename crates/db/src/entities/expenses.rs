//! `SeaORM` Entity for the expenses table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ExpenseState;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub analytic_account_id: Option<Uuid>,
    /// Monetary value before tax; the cost basis for profitability.
    pub untaxed_amount: Decimal,
    pub state: ExpenseState,
    pub is_refused: bool,
    pub expense_date: Date,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::analytic_accounts::Entity",
        from = "Column::AnalyticAccountId",
        to = "super::analytic_accounts::Column::Id"
    )]
    AnalyticAccounts,
    #[sea_orm(has_many = "super::account_moves::Entity")]
    AccountMoves,
}

impl Related<super::analytic_accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnalyticAccounts.def()
    }
}

impl Related<super::account_moves::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountMoves.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
