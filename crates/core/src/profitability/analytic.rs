//! Analytic-ledger contribution to the profitability report.
//!
//! The base of every project report: analytic lines on the project's
//! account, split into revenue (positive amounts) and cost (negative
//! amounts) totals. Lines generated from expense accounting moves are
//! excluded upstream by the repository so expenses are never counted twice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::registry::{SectionId, SectionRegistry};
use super::service::ProfitabilityContributor;
use super::types::{CostItem, ProfitabilityContribution, RevenueItem};

/// Revenue/cost totals over a project's analytic lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticSummary {
    /// Sum of positive line amounts.
    pub revenue_total: Decimal,
    /// Sum of negative line amounts; zero or negative.
    pub cost_total: Decimal,
}

/// Contributes the "other revenues" and "other costs" lines.
#[derive(Debug, Clone)]
pub struct AnalyticLinesContributor {
    summary: AnalyticSummary,
    revenue_sequence: u16,
    cost_sequence: u16,
}

impl AnalyticLinesContributor {
    /// Creates the contributor from pre-queried analytic totals.
    #[must_use]
    pub fn new(registry: &SectionRegistry, summary: AnalyticSummary) -> Self {
        Self {
            summary,
            revenue_sequence: registry
                .sequence(SectionId::OtherRevenues)
                .unwrap_or(u16::MAX),
            cost_sequence: registry.sequence(SectionId::OtherCosts).unwrap_or(u16::MAX),
        }
    }
}

impl ProfitabilityContributor for AnalyticLinesContributor {
    fn contribute(&self) -> Option<ProfitabilityContribution> {
        let revenues = (self.summary.revenue_total != Decimal::ZERO).then(|| RevenueItem {
            id: SectionId::OtherRevenues,
            sequence: self.revenue_sequence,
            invoiced: self.summary.revenue_total,
            to_invoice: Decimal::ZERO,
            action: None,
        });

        let costs = (self.summary.cost_total != Decimal::ZERO).then(|| CostItem {
            id: SectionId::OtherCosts,
            sequence: self.cost_sequence,
            billed: self.summary.cost_total,
            to_bill: Decimal::ZERO,
            action: None,
        });

        let contribution = ProfitabilityContribution { revenues, costs };
        if contribution.is_empty() {
            None
        } else {
            Some(contribution)
        }
    }
}
