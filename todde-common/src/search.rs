//! Header quick search across manufacturers, models and listings

use serde::Serialize;

use crate::catalog::Catalog;
use crate::images::resolve_primary_image;
use crate::models::Listing;

/// Queries shorter than this (after trimming) return nothing
pub const MIN_QUERY_CHARS: usize = 2;
const MANUFACTURER_LIMIT: usize = 5;
const MODEL_LIMIT: usize = 5;
const LISTING_LIMIT: usize = 8;
/// Cap on the combined result list
pub const RESULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchResultKind {
    Manufacturer,
    Model,
    Variant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: SearchResultKind,
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub url: String,
    /// Primary image URL; `None` when only the placeholder is available
    pub image: Option<String>,
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Run a quick search; manufacturers first, then models, then listings
pub fn quick_search(
    query: &str,
    catalog: &Catalog,
    listings: &[Listing],
    placeholder_url: &str,
) -> Vec<SearchResult> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut results: Vec<SearchResult> = catalog
        .active_manufacturers()
        .into_iter()
        .filter(|m| contains_ci(&m.name, &needle))
        .take(MANUFACTURER_LIMIT)
        .map(|m| SearchResult {
            kind: SearchResultKind::Manufacturer,
            id: m.id,
            title: m.name.clone(),
            subtitle: "Manufacturer".to_string(),
            url: format!("/cars/?manufacturer={}", m.id),
            image: None,
        })
        .collect();

    let mut models: Vec<_> = catalog
        .active_manufacturers()
        .into_iter()
        .flat_map(|m| {
            catalog
                .active_models_of(m.id)
                .into_iter()
                .filter(|model| contains_ci(&model.name, &needle))
                .map(move |model| (m, model))
        })
        .collect();
    models.sort_by(|(_, a), (_, b)| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    results.extend(models.into_iter().take(MODEL_LIMIT).map(|(m, model)| SearchResult {
        kind: SearchResultKind::Model,
        id: model.id,
        title: format!("{} {}", m.name, model.name),
        subtitle: "Model".to_string(),
        url: format!("/cars/?model={}", model.id),
        image: None,
    }));

    let mut matched: Vec<&Listing> = listings
        .iter()
        .filter(|l| l.is_visible())
        .filter(|l| {
            contains_ci(&l.manufacturer.name, &needle)
                || contains_ci(&l.model.name, &needle)
                || contains_ci(&l.trim, &needle)
                || l.year.to_string().contains(&needle)
        })
        .collect();
    matched.sort_by(|a, b| {
        b.year
            .cmp(&a.year)
            .then_with(|| a.manufacturer.name.cmp(&b.manufacturer.name))
            .then_with(|| a.model.name.cmp(&b.model.name))
            .then(a.id.cmp(&b.id))
    });
    results.extend(matched.into_iter().take(LISTING_LIMIT).map(|l| {
        let image = resolve_primary_image(l, placeholder_url);
        let subtitle = if l.trim.is_empty() {
            l.formatted_price()
        } else {
            format!("{} • {}", l.trim, l.formatted_price())
        };
        SearchResult {
            kind: SearchResultKind::Variant,
            id: l.id,
            title: l.display_name(),
            subtitle,
            url: format!("/cars/{}/", l.id),
            image: (!image.is_placeholder).then_some(image.source_url),
        }
    }));

    results.truncate(RESULT_LIMIT);
    tracing::debug!(query, results = results.len(), "Quick search");
    results
}
