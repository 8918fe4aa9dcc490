//! Homepage context and site-wide navigation categories

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, EntityRef};
use crate::images::resolve_primary_image;
use crate::inventory::facet_counts;
use crate::models::{BodyType, Choice, Listing};

use super::{blocks_of, BlockKind, ContentBlock, HeroSlide, NavigationLink, PageMeta, SectionCopyMap};

const DEFAULT_META_TITLE: &str =
    "Todde Integrated Services | Empowering Nigerians to own cars with flexible financing";
const DEFAULT_META_DESCRIPTION: &str =
    "Shop certified vehicles, access Todde's flexible financing, and drive home with confidence in 48 hours.";

/// Navigation shows at most this many categories
pub const NAV_CATEGORY_LIMIT: usize = 4;

/// Curated homepage vehicle, optionally linked to a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedVehicle {
    pub id: i64,
    pub listing_id: Option<i64>,
    pub name: String,
    pub price: String,
    pub payment_plan: String,
    pub image_url: String,
    pub location: String,
    pub badge: String,
}

/// Featured vehicle with its display image settled
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedCard {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub payment_plan: String,
    pub location: String,
    pub badge: String,
    pub detail_url: Option<String>,
    pub display_image_url: String,
    pub display_image_alt: String,
    pub display_image_is_placeholder: bool,
}

/// Active homepage content as loaded from storage
#[derive(Debug, Clone, Default)]
pub struct HomepageContent {
    pub nav_links: Vec<NavigationLink>,
    pub hero_slides: Vec<HeroSlide>,
    pub featured: Vec<FeaturedVehicle>,
    pub blocks: Vec<ContentBlock>,
    pub section_copy: SectionCopyMap,
}

#[derive(Debug, Clone, Serialize)]
pub struct Homepage {
    pub nav_links: Vec<NavigationLink>,
    pub nav_categories: Vec<NavCategory>,
    pub hero_slides: Vec<HeroSlide>,
    pub categories: Vec<ContentBlock>,
    pub featured_vehicles: Vec<FeaturedCard>,
    pub value_props: Vec<ContentBlock>,
    pub brand_metrics: Vec<ContentBlock>,
    pub financing_highlights: Vec<ContentBlock>,
    pub financing_steps: Vec<ContentBlock>,
    pub contact_cards: Vec<ContentBlock>,
    pub section_copy: SectionCopyMap,
    pub car_manufacturers: Vec<EntityRef>,
    pub meta: PageMeta,
}

/// Body type shown in the site navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavCategory {
    pub value: &'static str,
    pub label: String,
    pub description: String,
    pub count: usize,
}

fn friendly_category(body_type: BodyType) -> (String, String) {
    let (label, description) = match body_type {
        BodyType::Sedan => ("Sedans", "Comfortable city cars"),
        BodyType::Suv => ("SUVs", "Spacious family vehicles"),
        BodyType::Coupe => ("Coupes", "Stylish performance cars"),
        BodyType::Hatchback => ("Hatchbacks", "Efficient urban cars"),
        BodyType::Truck => ("Trucks", "Heavy-duty work vehicles"),
        BodyType::Van => ("Vans", "Spacious cargo vehicles"),
        BodyType::Other => {
            let label = body_type.label();
            return (label.to_string(), format!("{label} vehicles"));
        }
    };
    (label.to_string(), description.to_string())
}

/// Body types with at least one visible listing, in choice order, capped at
/// [`NAV_CATEGORY_LIMIT`]
pub fn nav_categories(listings: &[Listing]) -> Vec<NavCategory> {
    let visible: Vec<&Listing> = listings.iter().filter(|l| l.is_visible()).collect();

    facet_counts(&visible, Listing::body_type)
        .into_iter()
        .take(NAV_CATEGORY_LIMIT)
        .filter_map(|facet| {
            let body_type = BodyType::from_value(facet.value)?;
            let (label, description) = friendly_category(body_type);
            Some(NavCategory {
                value: facet.value,
                label,
                description,
                count: facet.count,
            })
        })
        .collect()
}

fn featured_card(vehicle: &FeaturedVehicle, listings: &[Listing], placeholder_url: &str) -> FeaturedCard {
    let linked = vehicle
        .listing_id
        .and_then(|id| listings.iter().find(|l| l.id == id));

    let (url, alt, is_placeholder) = match linked {
        Some(listing) => {
            let image = resolve_primary_image(listing, placeholder_url);
            let alt = if image.alt_text.is_empty() {
                vehicle.name.clone()
            } else {
                image.alt_text
            };
            (image.source_url, alt, image.is_placeholder)
        }
        None if !vehicle.image_url.is_empty() => (vehicle.image_url.clone(), vehicle.name.clone(), false),
        None => (placeholder_url.to_string(), vehicle.name.clone(), true),
    };

    let price = match linked {
        Some(listing) if vehicle.price.is_empty() => listing.formatted_price(),
        _ => vehicle.price.clone(),
    };

    FeaturedCard {
        id: vehicle.id,
        name: vehicle.name.clone(),
        price,
        payment_plan: vehicle.payment_plan.clone(),
        location: vehicle.location.clone(),
        badge: vehicle.badge.clone(),
        detail_url: linked.map(|l| format!("/cars/{}/", l.id)),
        display_image_url: url,
        display_image_alt: alt,
        display_image_is_placeholder: is_placeholder,
    }
}

pub fn build_homepage(
    content: HomepageContent,
    listings: &[Listing],
    catalog: &Catalog,
    placeholder_url: &str,
) -> Homepage {
    let featured_vehicles = content
        .featured
        .iter()
        .map(|v| featured_card(v, listings, placeholder_url))
        .collect();

    let meta = PageMeta {
        title: content.section_copy.heading_or("meta", DEFAULT_META_TITLE),
        description: content.section_copy.subheading_or("meta", DEFAULT_META_DESCRIPTION),
    };

    Homepage {
        nav_categories: nav_categories(listings),
        categories: blocks_of(&content.blocks, BlockKind::HomepageCategory),
        value_props: blocks_of(&content.blocks, BlockKind::ValueProposition),
        brand_metrics: blocks_of(&content.blocks, BlockKind::BrandMetric),
        financing_highlights: blocks_of(&content.blocks, BlockKind::FinancingHighlight),
        financing_steps: blocks_of(&content.blocks, BlockKind::FinancingStep),
        contact_cards: blocks_of(&content.blocks, BlockKind::ContactCard),
        car_manufacturers: catalog
            .active_manufacturers()
            .into_iter()
            .map(EntityRef::from)
            .collect(),
        nav_links: content.nav_links,
        hero_slides: content.hero_slides,
        featured_vehicles,
        section_copy: content.section_copy,
        meta,
    }
}
