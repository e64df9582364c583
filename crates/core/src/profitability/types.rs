//! Profitability report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::registry::SectionId;

/// How the client should invoke a section action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionActionKind {
    /// Call a server object method with the encoded domain.
    ObjectMethod,
}

/// Action reference attached to a section line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAction {
    /// Server method the client invokes.
    pub name: String,
    /// Invocation kind.
    pub kind: SectionActionKind,
    /// Section the action belongs to.
    pub section: SectionId,
    /// JSON-encoded domain restricting the opened records.
    pub domain: String,
    /// Matching record ids, when known.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub res_ids: Vec<Uuid>,
}

/// One revenue line in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueItem {
    /// Section identifier.
    pub id: SectionId,
    /// Display sequence; the renderer orders sections ascending.
    pub sequence: u16,
    /// Amount already invoiced.
    pub invoiced: Decimal,
    /// Amount still to invoice.
    pub to_invoice: Decimal,
    /// Optional drill-down action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<SectionAction>,
}

/// One cost line in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    /// Section identifier.
    pub id: SectionId,
    /// Display sequence; the renderer orders sections ascending.
    pub sequence: u16,
    /// Amount billed; costs are negative.
    pub billed: Decimal,
    /// Amount still to bill.
    pub to_bill: Decimal,
    /// Optional drill-down action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<SectionAction>,
}

/// Running totals of the revenues section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueTotal {
    /// Sum of invoiced amounts.
    pub invoiced: Decimal,
    /// Sum of to-invoice amounts.
    pub to_invoice: Decimal,
}

/// Running totals of the costs section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostTotal {
    /// Sum of billed amounts.
    pub billed: Decimal,
    /// Sum of to-bill amounts.
    pub to_bill: Decimal,
}

/// Revenues section: per-source items plus running totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSection {
    /// Line items, in contribution order.
    pub data: Vec<RevenueItem>,
    /// Running totals over `data`.
    pub total: RevenueTotal,
}

/// Costs section: per-source items plus running totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSection {
    /// Line items, in contribution order.
    pub data: Vec<CostItem>,
    /// Running totals over `data`.
    pub total: CostTotal,
}

/// Full profitability report for one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitabilityReport {
    /// Revenues section.
    pub revenues: RevenueSection,
    /// Costs section.
    pub costs: CostSection,
}

/// Partial report returned by one contributor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfitabilityContribution {
    /// Revenue line to merge, if any.
    pub revenues: Option<RevenueItem>,
    /// Cost line to merge, if any.
    pub costs: Option<CostItem>,
}

impl ProfitabilityContribution {
    /// Returns true if the contribution carries no line items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.revenues.is_none() && self.costs.is_none()
    }
}
