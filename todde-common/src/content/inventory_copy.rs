//! Copy for the three inventory pages

use serde::{Deserialize, Serialize};

use crate::models::{Choice, ListingType};

use super::non_empty_or;

/// Which inventory page is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InventoryPageKind {
    All,
    Registered,
    ForeignUsed,
}

impl Choice for InventoryPageKind {
    const ALL: &'static [Self] = &[
        InventoryPageKind::All,
        InventoryPageKind::Registered,
        InventoryPageKind::ForeignUsed,
    ];

    fn value(&self) -> &'static str {
        match self {
            InventoryPageKind::All => "all",
            InventoryPageKind::Registered => "registered",
            InventoryPageKind::ForeignUsed => "foreign-used",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            InventoryPageKind::All => "All Cars",
            InventoryPageKind::Registered => "Registered Cars",
            InventoryPageKind::ForeignUsed => "Foreign Used Cars",
        }
    }
}

impl InventoryPageKind {
    /// Listing type the page is restricted to, `None` for every type
    pub fn listing_type(&self) -> Option<ListingType> {
        match self {
            InventoryPageKind::All => None,
            InventoryPageKind::Registered => Some(ListingType::Registered),
            InventoryPageKind::ForeignUsed => Some(ListingType::ForeignUsed),
        }
    }

    /// Literal copy used when no configuration overrides a field
    pub fn default_copy(&self) -> InventoryCopy {
        let (title, intro, meta_title, meta_description, summary) = match self {
            InventoryPageKind::All => (
                "All Cars",
                "Discover certified cars inspected by Todde. Use the filters to zero in on the right price, year, transmission, or body style.",
                "Todde Inventory | Browse certified cars",
                "Explore certified vehicles across sedans, SUVs, and more. Filter by price, year, and transmission to find your next car.",
                "vehicles available",
            ),
            InventoryPageKind::Registered => (
                "Registered Cars",
                "Browse Nigerian-registered vehicles with verified history and trusted ownership records.",
                "Todde Registered Cars | Locally owned, certified inventory",
                "See registered cars inspected by Todde, ready for quick transfer with transparent documentation.",
                "registered vehicles",
            ),
            InventoryPageKind::ForeignUsed => (
                "Foreign Used Cars",
                "Shop Tokunbo cars sourced from top international auctions, freshly inspected by Todde.",
                "Todde Foreign Used Cars | Tokunbo vehicles you can trust",
                "Discover foreign used vehicles imported by Todde with full inspection reports and financing options.",
                "foreign used vehicles",
            ),
        };

        InventoryCopy {
            page_title: title.to_string(),
            intro_text: intro.to_string(),
            page_kicker: "Inventory".to_string(),
            summary_badge_label: summary.to_string(),
            meta_title: meta_title.to_string(),
            meta_description: meta_description.to_string(),
        }
    }
}

/// Admin-maintained overrides for one inventory page; empty means unset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryPageConfig {
    pub slug: InventoryPageKind,
    pub title: String,
    pub intro_text: String,
    pub page_kicker: String,
    pub summary_badge_label: String,
    pub meta_title: String,
    pub meta_description: String,
    pub is_active: bool,
}

/// Resolved inventory page copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryCopy {
    pub page_title: String,
    pub intro_text: String,
    pub page_kicker: String,
    pub summary_badge_label: String,
    pub meta_title: String,
    pub meta_description: String,
}

impl InventoryCopy {
    /// Overlay an active configuration's non-empty fields onto `defaults`
    pub fn resolve(config: Option<&InventoryPageConfig>, defaults: InventoryCopy) -> Self {
        let Some(config) = config.filter(|c| c.is_active) else {
            return defaults;
        };

        Self {
            page_title: non_empty_or(&config.title, &defaults.page_title),
            intro_text: non_empty_or(&config.intro_text, &defaults.intro_text),
            page_kicker: non_empty_or(&config.page_kicker, &defaults.page_kicker),
            summary_badge_label: non_empty_or(
                &config.summary_badge_label,
                &defaults.summary_badge_label,
            ),
            meta_title: non_empty_or(&config.meta_title, &defaults.meta_title),
            meta_description: non_empty_or(&config.meta_description, &defaults.meta_description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(title: &str, active: bool) -> InventoryPageConfig {
        InventoryPageConfig {
            slug: InventoryPageKind::Registered,
            title: title.to_string(),
            intro_text: "In-country, ready to transfer".to_string(),
            page_kicker: String::new(),
            summary_badge_label: String::new(),
            meta_title: "Registered Cars | Todde".to_string(),
            meta_description: String::new(),
            is_active: active,
        }
    }

    #[test]
    fn test_page_scopes() {
        assert_eq!(InventoryPageKind::All.listing_type(), None);
        assert_eq!(
            InventoryPageKind::ForeignUsed.listing_type(),
            Some(ListingType::ForeignUsed)
        );
        assert_eq!(InventoryPageKind::from_value("foreign-used"), Some(InventoryPageKind::ForeignUsed));
    }

    #[test]
    fn test_no_config_returns_defaults() {
        let defaults = InventoryPageKind::Registered.default_copy();
        assert_eq!(InventoryCopy::resolve(None, defaults.clone()), defaults);
        assert_eq!(defaults.summary_badge_label, "registered vehicles");
        assert_eq!(defaults.page_kicker, "Inventory");
    }

    #[test]
    fn test_non_empty_overrides_win() {
        let defaults = InventoryPageKind::Registered.default_copy();
        let cfg = config("", true);
        let copy = InventoryCopy::resolve(Some(&cfg), defaults);
        assert_eq!(copy.page_title, "Registered Cars");
        assert_eq!(copy.intro_text, "In-country, ready to transfer");
        assert_eq!(copy.meta_title, "Registered Cars | Todde");
        assert_eq!(copy.summary_badge_label, "registered vehicles");
    }

    #[test]
    fn test_inactive_config_is_ignored() {
        let defaults = InventoryPageKind::Registered.default_copy();
        let cfg = config("Custom", false);
        assert_eq!(InventoryCopy::resolve(Some(&cfg), defaults.clone()), defaults);
    }
}
