//! `SeaORM` Entity for the analytic_lines table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "analytic_lines")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub analytic_account_id: Uuid,
    /// Journal entry this line was posted from, if any.
    pub move_id: Option<Uuid>,
    pub name: String,
    /// Positive amounts are revenue, negative amounts are cost.
    pub amount: Decimal,
    pub line_date: Date,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::analytic_accounts::Entity",
        from = "Column::AnalyticAccountId",
        to = "super::analytic_accounts::Column::Id"
    )]
    AnalyticAccounts,
    #[sea_orm(
        belongs_to = "super::account_moves::Entity",
        from = "Column::MoveId",
        to = "super::account_moves::Column::Id"
    )]
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
