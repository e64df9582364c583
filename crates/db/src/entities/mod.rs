//! `SeaORM` entity definitions.

pub mod account_moves;
pub mod analytic_accounts;
pub mod analytic_lines;
pub mod expenses;
pub mod projects;
pub mod sea_orm_active_enums;
