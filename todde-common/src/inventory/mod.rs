//! Inventory filter/facet engine
//!
//! A pure function of the loaded listings and the raw query parameters:
//! scope, facet, filter, sort, paginate, then resolve display images for the
//! visible page. Malformed input never produces an error.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::content::{InventoryCopy, InventoryPageConfig, InventoryPageKind, PageMeta};
use crate::images::{resolve_primary_image, ResolvedImage};
use crate::models::{BodyType, Choice, Listing, ListingType, Transmission};
use crate::pagination::{calculate_pagination, parse_page_number, Pagination};

pub mod facets;
pub mod query;
pub mod title;

pub use facets::{compute_stats, facet_counts, FacetOption, InventoryStats};
pub use query::{InventoryFilters, Predicate, QueryParams, SortKey};
pub use title::dynamic_title;

/// Listing summary shown in result grids
#[derive(Debug, Clone, Serialize)]
pub struct ListingCard {
    pub id: i64,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub year: i64,
    pub trim: String,
    pub price: Decimal,
    pub currency: String,
    pub formatted_price: String,
    pub transmission: Transmission,
    pub body_type: BodyType,
    pub listing_type: ListingType,
    pub display_image: ResolvedImage,
    pub detail_url: String,
}

impl ListingCard {
    pub fn new(listing: &Listing, placeholder_url: &str) -> Self {
        Self {
            id: listing.id,
            name: listing.display_name(),
            manufacturer: listing.manufacturer.name.clone(),
            model: listing.model.name.clone(),
            year: listing.year,
            trim: listing.trim.clone(),
            price: listing.price,
            currency: listing.currency.clone(),
            formatted_price: listing.formatted_price(),
            transmission: listing.transmission,
            body_type: listing.body_type(),
            listing_type: listing.listing_type,
            display_image: resolve_primary_image(listing, placeholder_url),
            detail_url: format!("/cars/{}/", listing.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// One page of inventory plus everything needed to render its filters
#[derive(Debug, Clone, Serialize)]
pub struct InventoryResult {
    pub items: Vec<ListingCard>,
    pub total_results: usize,
    pub pagination: Pagination,
    pub stats: InventoryStats,
    pub available_categories: Vec<FacetOption>,
    pub available_transmissions: Vec<FacetOption>,
    pub selected_filters: InventoryFilters,
    pub selected_sort: SortKey,
    pub sort_options: Vec<SortOption>,
    pub filters_querystring: String,
}

/// Run one inventory query
///
/// `scope` restricts the base set to one listing type; `None` covers every
/// type. Facets and stats describe the base set, not the filtered result.
pub fn run_inventory(
    listings: &[Listing],
    scope: Option<ListingType>,
    params: &QueryParams,
    placeholder_url: &str,
) -> InventoryResult {
    let base: Vec<&Listing> = listings
        .iter()
        .filter(|l| l.is_visible())
        .filter(|l| scope.map_or(true, |t| l.listing_type == t))
        .collect();

    let stats = compute_stats(&base);
    let available_categories = facet_counts(&base, Listing::body_type);
    let available_transmissions = facet_counts(&base, |l| l.transmission);

    let filters = InventoryFilters::from_params(params);
    let predicates = filters.predicates();
    let sort = SortKey::from_params(params);

    let mut matched: Vec<&Listing> = base
        .into_iter()
        .filter(|l| predicates.iter().all(|p| p.matches(l)))
        .collect();
    matched.sort_by(|a, b| sort.compare(a, b));

    let total_results = matched.len();
    let pagination = calculate_pagination(total_results, parse_page_number(params.get("page")));
    let items = matched[pagination.range(total_results)]
        .iter()
        .map(|l| ListingCard::new(l, placeholder_url))
        .collect();

    tracing::debug!(
        scope = ?scope,
        total_results,
        page = pagination.page,
        filters = predicates.len(),
        "Inventory query evaluated"
    );

    InventoryResult {
        items,
        total_results,
        pagination,
        stats,
        available_categories,
        available_transmissions,
        filters_querystring: filters.to_query_string(),
        selected_filters: filters,
        selected_sort: sort,
        sort_options: SortKey::ALL
            .iter()
            .map(|key| SortOption {
                value: key.value(),
                label: key.label(),
            })
            .collect(),
    }
}

/// Inventory page context: copy, heading and results
#[derive(Debug, Clone, Serialize)]
pub struct InventoryPage {
    pub page_slug: InventoryPageKind,
    #[serde(flatten)]
    pub copy: InventoryCopy,
    pub meta: PageMeta,
    #[serde(flatten)]
    pub result: InventoryResult,
}

/// Assemble one of the three inventory pages
///
/// The filter-derived heading replaces the page's literal default title; an
/// active configured title still wins over both.
pub fn build_inventory_page(
    kind: InventoryPageKind,
    config: Option<&InventoryPageConfig>,
    listings: &[Listing],
    catalog: &Catalog,
    params: &QueryParams,
    placeholder_url: &str,
) -> InventoryPage {
    let result = run_inventory(listings, kind.listing_type(), params, placeholder_url);

    let mut defaults = kind.default_copy();
    defaults.page_title = dynamic_title(&result.selected_filters, catalog, &defaults.page_title);
    let copy = InventoryCopy::resolve(config.filter(|c| c.slug == kind), defaults);

    InventoryPage {
        page_slug: kind,
        meta: PageMeta {
            title: copy.meta_title.clone(),
            description: copy.meta_description.clone(),
        },
        copy,
        result,
    }
}
