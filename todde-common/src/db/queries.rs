//! Read-side loaders
//!
//! Each loader returns domain types from `models`/`content`. Stored enum
//! values and decimal text that fail to parse surface as
//! [`Error::InvalidData`] naming the offending column.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::catalog::Catalog;
use crate::content::homepage::FeaturedVehicle;
use crate::content::{
    BlockKind, ContentBlock, FinancingPageConfig, HeroSlide, HomepageContent, InventoryPageConfig,
    InventoryPageKind, NavigationLink, SectionCopy, SectionCopyMap,
};
use crate::detail::{ListingExtras, Specification};
use crate::models::{
    BodyType, CarModel, Choice, FinancingDetail, Listing, ListingImage, ListingType, Manufacturer,
    Transmission,
};
use crate::{Error, Result};

fn parse_choice<C: Choice>(raw: &str, column: &str) -> Result<C> {
    C::from_value(raw)
        .ok_or_else(|| Error::InvalidData(format!("Unknown {} value: {:?}", column, raw)))
}

fn parse_decimal(raw: &str, column: &str) -> Result<Decimal> {
    Decimal::from_str(raw.trim())
        .map_err(|e| Error::InvalidData(format!("Invalid {} {:?}: {}", column, raw, e)))
}

fn manufacturer_from_row(row: &SqliteRow, prefix: &str) -> Result<Manufacturer> {
    Ok(Manufacturer {
        id: row.try_get(format!("{prefix}id").as_str())?,
        name: row.try_get(format!("{prefix}name").as_str())?,
        slug: row.try_get(format!("{prefix}slug").as_str())?,
        is_active: row.try_get(format!("{prefix}is_active").as_str())?,
    })
}

fn model_from_row(row: &SqliteRow, prefix: &str) -> Result<CarModel> {
    let body_type: String = row.try_get(format!("{prefix}body_type").as_str())?;
    Ok(CarModel {
        id: row.try_get(format!("{prefix}id").as_str())?,
        manufacturer_id: row.try_get(format!("{prefix}manufacturer_id").as_str())?,
        name: row.try_get(format!("{prefix}name").as_str())?,
        slug: row.try_get(format!("{prefix}slug").as_str())?,
        body_type: parse_choice::<BodyType>(&body_type, "body_type")?,
        is_active: row.try_get(format!("{prefix}is_active").as_str())?,
    })
}

/// Every manufacturer and model, active or not
pub async fn load_catalog(pool: &SqlitePool) -> Result<Catalog> {
    let manufacturers = sqlx::query("SELECT id, name, slug, is_active FROM manufacturers ORDER BY name, id")
        .fetch_all(pool)
        .await?
        .iter()
        .map(|row| manufacturer_from_row(row, ""))
        .collect::<Result<Vec<_>>>()?;

    let models = sqlx::query(
        "SELECT id, manufacturer_id, name, slug, body_type, is_active FROM car_models ORDER BY name, id",
    )
    .fetch_all(pool)
    .await?
    .iter()
    .map(|row| model_from_row(row, ""))
    .collect::<Result<Vec<_>>>()?;

    Ok(Catalog::new(manufacturers, models))
}

/// Every listing joined with its model, manufacturer and images
///
/// Visibility is left to the caller; inactive rows are included.
pub async fn load_listings(pool: &SqlitePool) -> Result<Vec<Listing>> {
    let mut images: HashMap<i64, Vec<ListingImage>> = HashMap::new();
    let image_rows = sqlx::query(
        "SELECT id, listing_id, sort_order, source_url, alt_text, is_active FROM listing_images ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    for row in &image_rows {
        let listing_id: i64 = row.try_get("listing_id")?;
        images.entry(listing_id).or_default().push(ListingImage {
            id: row.try_get("id")?,
            order: row.try_get("sort_order")?,
            source_url: row.try_get("source_url")?,
            alt_text: row.try_get("alt_text")?,
            is_active: row.try_get("is_active")?,
        });
    }

    let rows = sqlx::query(
        r#"
        SELECT l.id, l.year, l.trim, l.price, l.currency, l.transmission, l.listing_type,
               l.is_active, l.updated_at,
               cm.id AS cm_id, cm.manufacturer_id AS cm_manufacturer_id, cm.name AS cm_name,
               cm.slug AS cm_slug, cm.body_type AS cm_body_type, cm.is_active AS cm_is_active,
               m.id AS m_id, m.name AS m_name, m.slug AS m_slug, m.is_active AS m_is_active
        FROM listings l
        JOIN car_models cm ON cm.id = l.model_id
        JOIN manufacturers m ON m.id = cm.manufacturer_id
        ORDER BY l.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut listings = Vec::with_capacity(rows.len());
    for row in &rows {
        let id: i64 = row.try_get("id")?;
        let price: String = row.try_get("price")?;
        let transmission: String = row.try_get("transmission")?;
        let listing_type: String = row.try_get("listing_type")?;

        listings.push(Listing {
            id,
            year: row.try_get("year")?,
            trim: row.try_get("trim")?,
            price: parse_decimal(&price, "price")?,
            currency: row.try_get("currency")?,
            transmission: parse_choice::<Transmission>(&transmission, "transmission")?,
            listing_type: parse_choice::<ListingType>(&listing_type, "listing_type")?,
            is_active: row.try_get("is_active")?,
            updated_at: row.try_get("updated_at")?,
            model: model_from_row(row, "cm_")?,
            manufacturer: manufacturer_from_row(row, "m_")?,
            images: images.remove(&id).unwrap_or_default(),
        });
    }

    Ok(listings)
}

async fn load_financing_detail(pool: &SqlitePool, listing_id: i64) -> Result<Option<FinancingDetail>> {
    let Some(row) = sqlx::query(
        r#"
        SELECT headline, subheadline, description, mileage_km, location, finance_intro,
               loan_rate, loan_deposit_percent, loan_period_months, applicant_types, is_active
        FROM listing_details WHERE listing_id = ?
        "#,
    )
    .bind(listing_id)
    .fetch_optional(pool)
    .await?
    else {
        return Ok(None);
    };

    let loan_rate: Option<String> = row.try_get("loan_rate")?;
    let loan_deposit_percent: Option<String> = row.try_get("loan_deposit_percent")?;

    Ok(Some(FinancingDetail {
        headline: row.try_get("headline")?,
        subheadline: row.try_get("subheadline")?,
        description: row.try_get("description")?,
        mileage_km: row.try_get("mileage_km")?,
        location: row.try_get("location")?,
        finance_intro: row.try_get("finance_intro")?,
        loan_rate: loan_rate
            .as_deref()
            .map(|raw| parse_decimal(raw, "loan_rate"))
            .transpose()?,
        loan_deposit_percent: loan_deposit_percent
            .as_deref()
            .map(|raw| parse_decimal(raw, "loan_deposit_percent"))
            .transpose()?,
        loan_period_months: row.try_get("loan_period_months")?,
        applicant_types: row.try_get("applicant_types")?,
        is_active: row.try_get("is_active")?,
    }))
}

/// Financing detail (active or not) plus active features and specifications
pub async fn load_listing_extras(pool: &SqlitePool, listing_id: i64) -> Result<ListingExtras> {
    let features = sqlx::query_scalar::<_, String>(
        "SELECT text FROM listing_features WHERE listing_id = ? AND is_active = 1 ORDER BY sort_order, id",
    )
    .bind(listing_id)
    .fetch_all(pool)
    .await?;

    let specifications = sqlx::query_as::<_, (String, String)>(
        "SELECT label, value FROM listing_specifications WHERE listing_id = ? AND is_active = 1 ORDER BY sort_order, id",
    )
    .bind(listing_id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|(label, value)| Specification { label, value })
    .collect();

    Ok(ListingExtras {
        detail: load_financing_detail(pool, listing_id).await?,
        features,
        specifications,
    })
}

pub async fn load_section_copy(pool: &SqlitePool) -> Result<SectionCopyMap> {
    let rows = sqlx::query_as::<_, (String, String, String, String, String, String)>(
        "SELECT slug, heading, subheading, supporting_text, cta_label, cta_url FROM section_copy WHERE is_active = 1",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(slug, heading, subheading, supporting_text, cta_label, cta_url)| SectionCopy {
            slug,
            heading,
            subheading,
            supporting_text,
            cta_label,
            cta_url,
        })
        .collect())
}

pub async fn load_navigation_links(pool: &SqlitePool) -> Result<Vec<NavigationLink>> {
    let rows = sqlx::query_as::<_, (String, String, String)>(
        "SELECT label, href, description FROM navigation_links WHERE is_active = 1 ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(label, href, description)| NavigationLink { label, href, description })
        .collect())
}

/// Active content blocks of every kind, ordered by `(sort_order, id)`
pub async fn load_content_blocks(pool: &SqlitePool) -> Result<Vec<ContentBlock>> {
    let rows = sqlx::query(
        r#"
        SELECT id, kind, sort_order, title, description, icon, link_label, link_url
        FROM content_blocks WHERE is_active = 1 ORDER BY sort_order, id
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<ContentBlock> {
            let kind: String = row.try_get("kind")?;
            Ok(ContentBlock {
                id: row.try_get("id")?,
                kind: parse_choice::<BlockKind>(&kind, "kind")?,
                order: row.try_get("sort_order")?,
                title: row.try_get("title")?,
                description: row.try_get("description")?,
                icon: row.try_get("icon")?,
                link_label: row.try_get("link_label")?,
                link_url: row.try_get("link_url")?,
            })
        })
        .collect()
}

async fn load_hero_slides(pool: &SqlitePool) -> Result<Vec<HeroSlide>> {
    let rows = sqlx::query_as::<_, (String, String, String, String, String, String)>(
        r#"
        SELECT badge_label, title, subtitle, primary_cta_label, primary_cta_url, image_url
        FROM homepage_heroes WHERE is_active = 1 ORDER BY sort_order, id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(
            |(badge_label, title, subtitle, primary_cta_label, primary_cta_url, image_url)| HeroSlide {
                badge_label,
                title,
                subtitle,
                primary_cta_label,
                primary_cta_url,
                image_url,
            },
        )
        .collect())
}

async fn load_featured_vehicles(pool: &SqlitePool) -> Result<Vec<FeaturedVehicle>> {
    let rows = sqlx::query(
        r#"
        SELECT id, listing_id, name, price, payment_plan, image_url, location, badge
        FROM featured_vehicles WHERE is_active = 1 ORDER BY sort_order, id
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<FeaturedVehicle> {
            Ok(FeaturedVehicle {
                id: row.try_get("id")?,
                listing_id: row.try_get("listing_id")?,
                name: row.try_get("name")?,
                price: row.try_get("price")?,
                payment_plan: row.try_get("payment_plan")?,
                image_url: row.try_get("image_url")?,
                location: row.try_get("location")?,
                badge: row.try_get("badge")?,
            })
        })
        .collect()
}

/// Everything the homepage shows apart from listings and the catalog
pub async fn load_homepage_content(pool: &SqlitePool) -> Result<HomepageContent> {
    Ok(HomepageContent {
        nav_links: load_navigation_links(pool).await?,
        hero_slides: load_hero_slides(pool).await?,
        featured: load_featured_vehicles(pool).await?,
        blocks: load_content_blocks(pool).await?,
        section_copy: load_section_copy(pool).await?,
    })
}

/// Active configuration for one inventory page, if any
pub async fn load_inventory_page_config(
    pool: &SqlitePool,
    kind: InventoryPageKind,
) -> Result<Option<InventoryPageConfig>> {
    let row = sqlx::query_as::<_, (String, String, String, String, String, String, bool)>(
        r#"
        SELECT title, intro_text, page_kicker, summary_badge_label, meta_title, meta_description, is_active
        FROM inventory_page_configs WHERE slug = ? AND is_active = 1
        "#,
    )
    .bind(kind.value())
    .fetch_optional(pool)
    .await?;

    Ok(row.map(
        |(title, intro_text, page_kicker, summary_badge_label, meta_title, meta_description, is_active)| {
            InventoryPageConfig {
                slug: kind,
                title,
                intro_text,
                page_kicker,
                summary_badge_label,
                meta_title,
                meta_description,
                is_active,
            }
        },
    ))
}

/// First active financing page configuration by slug, with its fields
pub async fn load_financing_page_config(pool: &SqlitePool) -> Result<Option<FinancingPageConfig>> {
    let Some(slug) = sqlx::query_scalar::<_, String>(
        "SELECT slug FROM financing_page_configs WHERE is_active = 1 ORDER BY slug LIMIT 1",
    )
    .fetch_optional(pool)
    .await?
    else {
        return Ok(None);
    };

    let fields = sqlx::query_as::<_, (String, String)>(
        "SELECT field, value FROM financing_page_fields WHERE config_slug = ?",
    )
    .bind(&slug)
    .fetch_all(pool)
    .await?
    .into_iter()
    .collect();

    Ok(Some(FinancingPageConfig {
        slug,
        fields,
        is_active: true,
    }))
}
