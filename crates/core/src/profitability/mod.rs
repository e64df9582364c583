//! Project profitability report assembly.
//!
//! A profitability report is a pair of "revenues" and "costs" sections, each
//! an ordered list of per-source line items plus running totals. Feature
//! modules contribute partial reports through [`ProfitabilityContributor`];
//! the service merges them in registration order. Section labels and display
//! sequences live in an explicit [`SectionRegistry`] passed at construction,
//! so no module mutates shared global tables.

pub mod analytic;
pub mod expense;
pub mod registry;
pub mod service;
pub mod types;


pub use analytic::{AnalyticLinesContributor, AnalyticSummary};
pub use expense::{ExpenseAggregate, ExpenseContributor};
pub use registry::{SectionId, SectionRegistry};
pub use service::{ProfitabilityContributor, ProfitabilityService};
pub use types::{
    CostItem, CostSection, CostTotal, ProfitabilityContribution, ProfitabilityReport, RevenueItem,
    RevenueSection, RevenueTotal, SectionAction, SectionActionKind,
};
