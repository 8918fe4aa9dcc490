//! Financing page copy
//!
//! Every field resolves to the active configuration's non-empty value, else
//! the literal default below.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{non_empty_or, BlockKind, ContentBlock, PageMeta, SectionCopyMap};

const DEFAULTS: &[(&str, &str)] = &[
    ("hero_title", "Buy your dream car, now. Pay monthly."),
    ("hero_subtitle", "Todde Financing makes car ownership accessible with transparent offers, fair interest rates, and bundled protection."),
    ("hero_primary_cta_label", "Start now"),
    ("hero_primary_cta_url", "/financing/"),
    ("hero_secondary_cta_label", "Explore inventory"),
    ("hero_secondary_cta_url", "/#inventory"),
    ("hero_background_image_url", "https://images.unsplash.com/photo-1517677129300-07b130802f46?auto=format&fit=crop&w=1400&q=80"),
    ("hero_callout_title", "Need advice?"),
    ("hero_callout_text", "Book a free financing clinic every Friday at Todde hubs nationwide."),
    ("steps_heading", "How Todde Financing works"),
    ("steps_subheading", "Eight clear steps to owning your vehicle with confidence."),
    ("benefits_heading", "What you get with every plan"),
    ("benefits_subheading", ""),
    ("eligibility_heading", "Eligibility snapshot"),
    ("eligibility_description", "Minimum monthly income of ₦250,000, verifiable employment, and BVN confirmation."),
    ("eligibility_cta_label", "Review full requirements"),
    ("eligibility_cta_url", "/financing/"),
    ("testimonial_image_url", "https://images.unsplash.com/photo-1502877338535-766e1452684a?auto=format&fit=crop&w=900&q=80"),
    ("testimonial_card_title", "Todde customer stories"),
    ("testimonial_card_text", "“Financing with Todde helped our logistics business scale in 3 months.”"),
    ("corporate_heading", "Bring Todde Financing to your business fleets"),
    ("corporate_subheading", "Talk to us about flexible corporate plans, driver training, and maintenance coordination."),
    ("corporate_primary_cta_label", "Partner with Todde"),
    ("corporate_primary_cta_url", "mailto:partners@todde.africa"),
    ("corporate_secondary_cta_label", "Call +234 1700 1234"),
    ("corporate_secondary_cta_url", "tel:+23417001234"),
    ("corporate_availability_heading", "Available nationwide"),
    ("corporate_availability_description", "Lagos • Abuja • Port Harcourt • Ibadan • Enugu"),
];

const DEFAULT_META_TITLE: &str = "Todde Car Financing | Spread payments and own your dream car";
const DEFAULT_META_DESCRIPTION: &str =
    "Pay only 30% upfront and finance the rest with Todde. See how our 8-step process gets you on the road fast.";

/// Field names a financing page configuration may override
pub fn field_names() -> impl Iterator<Item = &'static str> {
    DEFAULTS.iter().map(|(name, _)| *name)
}

fn default_for(field: &str) -> &'static str {
    DEFAULTS
        .iter()
        .find(|(name, _)| *name == field)
        .map_or("", |(_, value)| *value)
}

/// Stored overrides for the financing page, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingPageConfig {
    pub slug: String,
    pub fields: BTreeMap<String, String>,
    pub is_active: bool,
}

impl FinancingPageConfig {
    /// Non-empty stored value of `field`, else `fallback`
    pub fn resolve(&self, field: &str, fallback: &str) -> String {
        non_empty_or(self.fields.get(field).map_or("", String::as_str), fallback)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cta {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Eligibility {
    pub heading: String,
    pub description: String,
    pub cta_label: String,
    pub cta_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub image_url: String,
    pub card_title: String,
    pub card_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Corporate {
    pub heading: String,
    pub subheading: String,
    pub primary_label: String,
    pub primary_url: String,
    pub secondary_label: String,
    pub secondary_url: String,
    pub availability_heading: String,
    pub availability_description: String,
}

/// Fully resolved financing page context
#[derive(Debug, Clone, Serialize)]
pub struct FinancingPage {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_background_image_url: String,
    pub hero_primary_cta: Cta,
    pub hero_secondary_cta: Cta,
    pub hero_callout_title: String,
    pub hero_callout_text: String,
    pub steps_heading: String,
    pub steps_subheading: String,
    pub benefits_heading: String,
    pub benefits_subheading: String,
    pub eligibility: Eligibility,
    pub testimonial: Testimonial,
    pub corporate: Corporate,
    pub financing_steps: Vec<ContentBlock>,
    pub financing_highlights: Vec<ContentBlock>,
    pub snapshot_items: Vec<ContentBlock>,
    pub benefits: Vec<ContentBlock>,
    pub meta: PageMeta,
}

fn default_snapshot_items() -> Vec<ContentBlock> {
    [
        "Pay only 30% upfront and get your keys within 48 hours of approval.",
        "Automated payment reminders and flexible repayment channels.",
        "Roadside assistance, insurance, and maintenance bundles included.",
    ]
    .into_iter()
    .map(|text| ContentBlock::literal(BlockKind::FinancingSnapshot, text, "", ""))
    .collect()
}

fn default_benefits() -> Vec<ContentBlock> {
    [
        (
            "Comprehensive insurance",
            "Comprehensive insurance coverage and annual renewals handled by Todde.",
            "heroicons:shield-check",
        ),
        (
            "Dedicated support",
            "Dedicated support agents for servicing, documentation, and payment plans.",
            "heroicons:lifebuoy",
        ),
        (
            "Transparent pricing",
            "Transparent pricing and zero hidden charges on every contract.",
            "heroicons:banknotes",
        ),
    ]
    .into_iter()
    .map(|(title, description, icon)| {
        ContentBlock::literal(BlockKind::FinancingBenefit, title, description, icon)
    })
    .collect()
}

/// Assemble the financing page
///
/// `blocks` holds every active content block; only the financing kinds are
/// used. Snapshot items and benefits fall back to literal defaults when none
/// are stored.
pub fn build_financing_page(
    config: Option<&FinancingPageConfig>,
    section_copy: &SectionCopyMap,
    blocks: &[ContentBlock],
) -> FinancingPage {
    let config = config.filter(|c| c.is_active);
    let resolve = |field: &str| match config {
        Some(config) => config.resolve(field, default_for(field)),
        None => default_for(field).to_string(),
    };

    let mut snapshot_items = super::blocks_of(blocks, BlockKind::FinancingSnapshot);
    if snapshot_items.is_empty() {
        snapshot_items = default_snapshot_items();
    }
    let mut benefits = super::blocks_of(blocks, BlockKind::FinancingBenefit);
    if benefits.is_empty() {
        benefits = default_benefits();
    }

    FinancingPage {
        hero_title: resolve("hero_title"),
        hero_subtitle: resolve("hero_subtitle"),
        hero_background_image_url: resolve("hero_background_image_url"),
        hero_primary_cta: Cta {
            label: resolve("hero_primary_cta_label"),
            url: resolve("hero_primary_cta_url"),
        },
        hero_secondary_cta: Cta {
            label: resolve("hero_secondary_cta_label"),
            url: resolve("hero_secondary_cta_url"),
        },
        hero_callout_title: resolve("hero_callout_title"),
        hero_callout_text: resolve("hero_callout_text"),
        steps_heading: resolve("steps_heading"),
        steps_subheading: resolve("steps_subheading"),
        benefits_heading: resolve("benefits_heading"),
        benefits_subheading: resolve("benefits_subheading"),
        eligibility: Eligibility {
            heading: resolve("eligibility_heading"),
            description: resolve("eligibility_description"),
            cta_label: resolve("eligibility_cta_label"),
            cta_url: resolve("eligibility_cta_url"),
        },
        testimonial: Testimonial {
            image_url: resolve("testimonial_image_url"),
            card_title: resolve("testimonial_card_title"),
            card_text: resolve("testimonial_card_text"),
        },
        corporate: Corporate {
            heading: resolve("corporate_heading"),
            subheading: resolve("corporate_subheading"),
            primary_label: resolve("corporate_primary_cta_label"),
            primary_url: resolve("corporate_primary_cta_url"),
            secondary_label: resolve("corporate_secondary_cta_label"),
            secondary_url: resolve("corporate_secondary_cta_url"),
            availability_heading: resolve("corporate_availability_heading"),
            availability_description: resolve("corporate_availability_description"),
        },
        financing_steps: super::blocks_of(blocks, BlockKind::FinancingStep),
        financing_highlights: super::blocks_of(blocks, BlockKind::FinancingHighlight),
        snapshot_items,
        benefits,
        meta: PageMeta {
            title: section_copy.heading_or("financing_meta", DEFAULT_META_TITLE),
            description: section_copy.subheading_or("financing_meta", DEFAULT_META_DESCRIPTION),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionCopy;

    fn config(pairs: &[(&str, &str)], active: bool) -> FinancingPageConfig {
        FinancingPageConfig {
            slug: "financing".to_string(),
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            is_active: active,
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let page = build_financing_page(None, &SectionCopyMap::default(), &[]);
        assert_eq!(page.hero_title, "Buy your dream car, now. Pay monthly.");
        assert_eq!(page.hero_primary_cta.url, "/financing/");
        assert_eq!(page.corporate.secondary_url, "tel:+23417001234");
        assert_eq!(page.benefits_subheading, "");
        assert_eq!(page.meta.title, DEFAULT_META_TITLE);
        assert_eq!(page.snapshot_items.len(), 3);
        assert_eq!(page.benefits.len(), 3);
        assert_eq!(page.benefits[2].icon, "heroicons:banknotes");
    }

    #[test]
    fn test_overrides_apply_per_field() {
        let cfg = config(&[("hero_title", "Drive today"), ("steps_heading", "")], true);
        let page = build_financing_page(Some(&cfg), &SectionCopyMap::default(), &[]);
        assert_eq!(page.hero_title, "Drive today");
        assert_eq!(page.steps_heading, "How Todde Financing works");
    }

    #[test]
    fn test_inactive_config_ignored() {
        let cfg = config(&[("hero_title", "Drive today")], false);
        let page = build_financing_page(Some(&cfg), &SectionCopyMap::default(), &[]);
        assert_eq!(page.hero_title, "Buy your dream car, now. Pay monthly.");
    }

    #[test]
    fn test_stored_blocks_replace_fallbacks() {
        let mut snapshot = ContentBlock::literal(BlockKind::FinancingSnapshot, "Zero paperwork", "", "");
        snapshot.id = 7;
        let step = ContentBlock::literal(BlockKind::FinancingStep, "Apply", "Online in minutes", "");
        let page = build_financing_page(None, &SectionCopyMap::default(), &[snapshot, step]);
        assert_eq!(page.snapshot_items.len(), 1);
        assert_eq!(page.snapshot_items[0].title, "Zero paperwork");
        assert_eq!(page.financing_steps.len(), 1);
        assert_eq!(page.benefits.len(), 3);
    }

    #[test]
    fn test_meta_from_section_copy() {
        let copy: SectionCopyMap = vec![SectionCopy {
            slug: "financing_meta".to_string(),
            heading: "Finance | Todde".to_string(),
            ..Default::default()
        }]
        .into_iter()
        .collect();
        let page = build_financing_page(None, &copy, &[]);
        assert_eq!(page.meta.title, "Finance | Todde");
        assert_eq!(page.meta.description, DEFAULT_META_DESCRIPTION);
    }

    #[test]
    fn test_every_field_has_a_default_entry() {
        assert_eq!(field_names().count(), 28);
    }
}
