//! UI window-action descriptors.
//!
//! The web client consumes these descriptors to open the expense list or a
//! single expense form. This module only builds the structures; rendering
//! and dispatch belong to the client.

pub mod builder;
pub mod types;


pub use builder::{expense_action, open_project_expenses};
pub use types::{ActionContext, ActionDescriptor, ExpenseDomain, ViewMode, WindowAction};
