//! Plan records
//!
//! A plan is the unit a merchant selects: a display name, an optional badge,
//! a one-line price summary and the fee clauses that make up the contract terms.

use serde::{Deserialize, Serialize};

/// One fee clause of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDetail {
    /// Clause heading, e.g. `1-1. 交易服務費`
    pub title: String,
    /// Clause body
    pub description: String,
}

impl PlanDetail {
    /// Create new clause
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A selectable pricing plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOption {
    /// Unique id within the catalog
    pub id: String,
    /// Display name, numbered by catalog position
    pub name: String,
    /// Optional promotional badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// One-line price summary
    pub price_display: String,
    /// Fee clauses in display order
    #[serde(default)]
    pub details: Vec<PlanDetail>,
}

impl PlanOption {
    /// Create new plan without badge or clauses
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_display: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            badge: None,
            price_display: price_display.into(),
            details: Vec::new(),
        }
    }

    /// With badge
    #[inline]
    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// With an additional fee clause
    #[inline]
    #[must_use]
    pub fn with_detail(mut self, detail: PlanDetail) -> Self {
        self.details.push(detail);
        self
    }
}
