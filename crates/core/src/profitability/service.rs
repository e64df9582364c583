//! Profitability report assembly service.

use super::registry::{SectionId, SectionRegistry};
use super::types::{ProfitabilityContribution, ProfitabilityReport};

/// A feature module contributing line items to the profitability report.
///
/// Contributors are pure: they hold pre-queried aggregates and return an
/// optional partial report. Returning `None` (or an empty contribution)
/// leaves the report untouched.
pub trait ProfitabilityContributor {
    /// Returns this module's partial report, if it has anything to add.
    fn contribute(&self) -> Option<ProfitabilityContribution>;
}

/// Assembles profitability reports from an ordered contributor list.
#[derive(Debug, Clone)]
pub struct ProfitabilityService {
    registry: SectionRegistry,
}

impl ProfitabilityService {
    /// Creates the service with an explicit section registry.
    #[must_use]
    pub const fn new(registry: SectionRegistry) -> Self {
        Self { registry }
    }

    /// Returns the section registry, for contributor construction and for
    /// the renderer's label lookup.
    #[must_use]
    pub const fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Returns the display label for a section id.
    #[must_use]
    pub fn section_label(&self, id: SectionId) -> Option<&str> {
        self.registry.label(id)
    }

    /// Merges contributions into a report, in the order given.
    ///
    /// Each revenue item is appended to `revenues.data` and added into the
    /// revenue totals; each cost item is appended to `costs.data` and added
    /// into the cost totals. Contributors with nothing to add leave the
    /// report unchanged.
    #[must_use]
    pub fn assemble(&self, contributors: &[&dyn ProfitabilityContributor]) -> ProfitabilityReport {
        let mut report = ProfitabilityReport::default();
        for contributor in contributors {
            if let Some(contribution) = contributor.contribute() {
                merge_contribution(&mut report, contribution);
            }
        }
        report
    }
}

impl Default for ProfitabilityService {
    fn default() -> Self {
        Self::new(SectionRegistry::with_defaults())
    }
}

fn merge_contribution(report: &mut ProfitabilityReport, contribution: ProfitabilityContribution) {
    if let Some(revenue) = contribution.revenues {
        report.revenues.total.invoiced += revenue.invoiced;
        report.revenues.total.to_invoice += revenue.to_invoice;
        report.revenues.data.push(revenue);
    }
    if let Some(cost) = contribution.costs {
        report.costs.total.billed += cost.billed;
        report.costs.total.to_bill += cost.to_bill;
        report.costs.data.push(cost);
    }
}
