//! Branch selection.
//!
//! The selection is an explicit request parameter; nothing about it
//! is kept between requests.

use crate::{
    record::SaleRecord,
    types::{Branch, ALL_BRANCHES},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "branch", rename_all = "snake_case")]
pub enum BranchFilter {
    #[default]
    All,
    Only(Branch),
}

impl BranchFilter {
    /// Map a user choice to a filter. `"Todas"` selects every branch.
    pub fn from_choice(choice: &str) -> Self {
        if choice == ALL_BRANCHES {
            Self::All
        } else {
            Self::Only(choice.to_string())
        }
    }

    pub fn matches(&self, record: &SaleRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(branch) => record.branch == *branch,
        }
    }

    /// Rows whose branch matches exactly, in input order.
    pub fn apply(&self, records: &[SaleRecord]) -> Vec<SaleRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }

    pub fn title(&self) -> String {
        match self {
            Self::All => "Datos de Ventas Totales".to_string(),
            Self::Only(branch) => format!("Datos de Ventas en {branch}"),
        }
    }
}

/// Distinct branch names in first-seen order.
pub fn branches(records: &[SaleRecord]) -> Vec<Branch> {
    let mut seen: Vec<Branch> = Vec::new();
    for r in records {
        if !seen.contains(&r.branch) {
            seen.push(r.branch.clone());
        }
    }
    seen
}

/// The selectable choices: `"Todas"` followed by every branch.
pub fn branch_choices(records: &[SaleRecord]) -> Vec<String> {
    std::iter::once(ALL_BRANCHES.to_string())
        .chain(branches(records))
        .collect()
}
