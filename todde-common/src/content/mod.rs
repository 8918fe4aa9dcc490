//! Editable marketing content
//!
//! Small content blocks maintained by the admin layer. Lookups return
//! `Option`; each caller supplies its own literal default per field, and an
//! empty stored string counts as "not overridden".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Choice;

pub mod financing_page;
pub mod homepage;
pub mod inventory_copy;

pub use financing_page::{FinancingPage, FinancingPageConfig};
pub use homepage::{Homepage, HomepageContent, NavCategory};
pub use inventory_copy::{InventoryCopy, InventoryPageConfig, InventoryPageKind};

/// `value` unless it is empty, else `default`
pub fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Heading/CTA copy for one page section, keyed by slug
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionCopy {
    pub slug: String,
    pub heading: String,
    pub subheading: String,
    pub supporting_text: String,
    pub cta_label: String,
    pub cta_url: String,
}

/// Active section copy entries by slug
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SectionCopyMap {
    entries: BTreeMap<String, SectionCopy>,
}

impl SectionCopyMap {
    pub fn get(&self, slug: &str) -> Option<&SectionCopy> {
        self.entries.get(slug)
    }

    /// Non-empty heading of `slug`, else `default`
    pub fn heading_or(&self, slug: &str, default: &str) -> String {
        non_empty_or(self.get(slug).map_or("", |c| c.heading.as_str()), default)
    }

    /// Non-empty subheading of `slug`, else `default`
    pub fn subheading_or(&self, slug: &str, default: &str) -> String {
        non_empty_or(self.get(slug).map_or("", |c| c.subheading.as_str()), default)
    }
}

impl FromIterator<SectionCopy> for SectionCopyMap {
    fn from_iter<I: IntoIterator<Item = SectionCopy>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|c| (c.slug.clone(), c)).collect(),
        }
    }
}

/// Page title and description for `<head>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLink {
    pub label: String,
    pub href: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub badge_label: String,
    pub title: String,
    pub subtitle: String,
    pub primary_cta_label: String,
    pub primary_cta_url: String,
    pub image_url: String,
}

/// Kind of a generic ordered content block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    HomepageCategory,
    ValueProposition,
    BrandMetric,
    FinancingHighlight,
    FinancingStep,
    ContactCard,
    FinancingSnapshot,
    FinancingBenefit,
}

impl Choice for BlockKind {
    const ALL: &'static [Self] = &[
        BlockKind::HomepageCategory,
        BlockKind::ValueProposition,
        BlockKind::BrandMetric,
        BlockKind::FinancingHighlight,
        BlockKind::FinancingStep,
        BlockKind::ContactCard,
        BlockKind::FinancingSnapshot,
        BlockKind::FinancingBenefit,
    ];

    fn value(&self) -> &'static str {
        match self {
            BlockKind::HomepageCategory => "homepage_category",
            BlockKind::ValueProposition => "value_proposition",
            BlockKind::BrandMetric => "brand_metric",
            BlockKind::FinancingHighlight => "financing_highlight",
            BlockKind::FinancingStep => "financing_step",
            BlockKind::ContactCard => "contact_card",
            BlockKind::FinancingSnapshot => "financing_snapshot",
            BlockKind::FinancingBenefit => "financing_benefit",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            BlockKind::HomepageCategory => "Homepage category",
            BlockKind::ValueProposition => "Value proposition",
            BlockKind::BrandMetric => "Brand metric",
            BlockKind::FinancingHighlight => "Financing highlight",
            BlockKind::FinancingStep => "Financing step",
            BlockKind::ContactCard => "Contact card",
            BlockKind::FinancingSnapshot => "Financing snapshot item",
            BlockKind::FinancingBenefit => "Financing benefit",
        }
    }
}

/// Ordered title/description block
///
/// Brand metrics store their value in `title` and label in `description`;
/// snapshot items use `title` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: i64,
    pub kind: BlockKind,
    pub order: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub link_label: String,
    pub link_url: String,
}

impl ContentBlock {
    /// Block without a database identity, used for literal fallbacks
    pub fn literal(kind: BlockKind, title: &str, description: &str, icon: &str) -> Self {
        Self {
            id: 0,
            kind,
            order: 0,
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            link_label: String::new(),
            link_url: String::new(),
        }
    }
}

/// Blocks of one kind, in the order they were loaded
pub fn blocks_of(blocks: &[ContentBlock], kind: BlockKind) -> Vec<ContentBlock> {
    blocks.iter().filter(|b| b.kind == kind).cloned().collect()
}
