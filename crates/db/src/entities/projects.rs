//! `SeaORM` Entity for the projects table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    /// Analytic account relating this project to expenses and ledger lines.
    pub analytic_account_id: Option<Uuid>,
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
}

impl Related<super::analytic_accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnalyticAccounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
