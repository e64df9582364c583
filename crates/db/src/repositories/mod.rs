//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Margin only reads project/expense data; the wider ERP
//! owns writes.

pub mod analytic;
pub mod expense;
pub mod project;

pub use analytic::{AnalyticError, AnalyticRepository};
pub use expense::{ExpenseError, ExpenseRepository};
pub use project::{ProjectError, ProjectRepository};
