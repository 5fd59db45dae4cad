//! Resolve a loose commodity target into one concrete catalog entry.
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! 1. the sentinel `"all"` (exact, lowercase) picks the first catalog entry;
//! 2. exact case-insensitive name match;
//! 3. category token (`"fish"` → `"Fish"`), first entry in that category;
//! 4. case-insensitive substring of the name, first in catalog order.
//!
//! Anything else is [`Resolution::Unresolved`], which is a normal "no data for
//! this selection" outcome rather than an error.

use super::Commodity;
use crate::shared::CommodityId;
use serde::Serialize;

/// Target that selects the first catalog entry.
pub const ALL_TARGET: &str = "all";

/// Category tokens accepted by rule 3, mapped to the catalog's category names.
pub const CATEGORY_TOKENS: &[(&str, &str)] = &[
    ("rice", "Rice"),
    ("grains", "Grains"),
    ("fish", "Fish"),
    ("meat", "Meat"),
    ("poultry", "Poultry"),
    ("eggs", "Poultry"),
    ("vegetables", "Vegetables"),
    ("fruits", "Fruits"),
    ("spices", "Spices"),
    ("staples", "Staples"),
];

/// Look up the catalog category for a category token.
pub fn category_for_token(token: &str) -> Option<&'static str> {
    CATEGORY_TOKENS
        .iter()
        .find(|(t, _)| t.eq_ignore_ascii_case(token))
        .map(|(_, category)| *category)
}

/// Which rule produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    First,
    ExactName,
    Category,
    NameContains,
}

/// Outcome of resolving a target against a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Resolved {
        id: CommodityId,
        name: String,
        rule: MatchRule,
    },
    Unresolved,
}

impl Resolution {
    fn from_match(commodity: &Commodity, rule: MatchRule) -> Self {
        Resolution::Resolved {
            id: commodity.id.clone(),
            name: commodity.name.clone(),
            rule,
        }
    }

    pub fn id(&self) -> Option<&CommodityId> {
        match self {
            Resolution::Resolved { id, .. } => Some(id),
            Resolution::Unresolved => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Resolution::Resolved { name, .. } => Some(name),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }
}

/// Resolve `target` against `catalog` (catalog order as returned by the service).
pub fn resolve(target: &str, catalog: &[Commodity]) -> Resolution {
    let target = target.trim();
    if target.is_empty() {
        return Resolution::Unresolved;
    }

    if target == ALL_TARGET {
        return catalog
            .first()
            .map(|c| Resolution::from_match(c, MatchRule::First))
            .unwrap_or(Resolution::Unresolved);
    }

    let needle = target.to_lowercase();

    if let Some(c) = catalog.iter().find(|c| c.name.to_lowercase() == needle) {
        return Resolution::from_match(c, MatchRule::ExactName);
    }

    if let Some(category) = category_for_token(target) {
        if let Some(c) = catalog.iter().find(|c| c.category() == Some(category)) {
            return Resolution::from_match(c, MatchRule::Category);
        }
    }

    catalog
        .iter()
        .find(|c| c.name.to_lowercase().contains(&needle))
        .map(|c| Resolution::from_match(c, MatchRule::NameContains))
        .unwrap_or(Resolution::Unresolved)
}
