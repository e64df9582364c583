//! Section label and ordering registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier of a profitability report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    /// Employee expenses billed to the project.
    Expenses,
    /// Revenue analytic lines not claimed by another section.
    OtherRevenues,
    /// Cost analytic lines not claimed by another section.
    OtherCosts,
}

impl SectionId {
    /// Returns the stable string id used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expenses => "expenses",
            Self::OtherRevenues => "other_revenues",
            Self::OtherCosts => "other_costs",
        }
    }
}

/// Display metadata for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SectionInfo {
    label: String,
    sequence: u16,
}

/// Registry of section labels and display sequences.
///
/// The renderer lays out sections by ascending sequence. Contributors look
/// up their sequence here instead of hard-coding it, and the registry is
/// built once at service construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRegistry {
    entries: BTreeMap<SectionId, SectionInfo>,
}

impl SectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a section, replacing any previous registration.
    pub fn register(&mut self, id: SectionId, label: &str, sequence: u16) {
        self.entries.insert(
            id,
            SectionInfo {
                label: label.to_string(),
                sequence,
            },
        );
    }

    /// Returns the display label for a section, if registered.
    #[must_use]
    pub fn label(&self, id: SectionId) -> Option<&str> {
        self.entries.get(&id).map(|info| info.label.as_str())
    }

    /// Returns the display sequence for a section, if registered.
    #[must_use]
    pub fn sequence(&self, id: SectionId) -> Option<u16> {
        self.entries.get(&id).map(|info| info.sequence)
    }

    /// Registry with the sections this service contributes.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SectionId::Expenses, "Expenses", 11);
        registry.register(SectionId::OtherRevenues, "Other Revenues", 14);
        registry.register(SectionId::OtherCosts, "Other Costs", 15);
        registry
    }
}
