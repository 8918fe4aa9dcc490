//! Database initialization
//!
//! Creates the marketplace schema on first run. Every statement is
//! `CREATE TABLE IF NOT EXISTS`, so initialization is safe to repeat against
//! an existing database. Decimal columns (prices, rates) are stored as TEXT.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Open (creating if needed) a read-write database and ensure the schema
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_catalog_tables(&pool).await?;
    create_listing_tables(&pool).await?;
    create_content_tables(&pool).await?;
    create_page_config_tables(&pool).await?;

    Ok(pool)
}

async fn create_catalog_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS manufacturers (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS car_models (
            id INTEGER PRIMARY KEY,
            manufacturer_id INTEGER NOT NULL REFERENCES manufacturers(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            slug TEXT NOT NULL,
            body_type TEXT NOT NULL DEFAULT 'sedan',
            is_active INTEGER NOT NULL DEFAULT 1,
            UNIQUE (manufacturer_id, slug)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_listing_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS listings (
            id INTEGER PRIMARY KEY,
            model_id INTEGER NOT NULL REFERENCES car_models(id) ON DELETE CASCADE,
            year INTEGER NOT NULL,
            trim TEXT NOT NULL DEFAULT '',
            price TEXT NOT NULL,
            currency TEXT NOT NULL DEFAULT 'NGN',
            transmission TEXT NOT NULL DEFAULT 'automatic',
            listing_type TEXT NOT NULL DEFAULT 'registered',
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS listing_images (
            id INTEGER PRIMARY KEY,
            listing_id INTEGER NOT NULL REFERENCES listings(id) ON DELETE CASCADE,
            sort_order INTEGER NOT NULL DEFAULT 0,
            source_url TEXT NOT NULL DEFAULT '',
            alt_text TEXT NOT NULL DEFAULT '',
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS listing_details (
            listing_id INTEGER PRIMARY KEY REFERENCES listings(id) ON DELETE CASCADE,
            headline TEXT NOT NULL DEFAULT '',
            subheadline TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            mileage_km INTEGER NOT NULL DEFAULT 0,
            location TEXT NOT NULL DEFAULT '',
            finance_intro TEXT NOT NULL DEFAULT '',
            loan_rate TEXT,
            loan_deposit_percent TEXT,
            loan_period_months INTEGER,
            applicant_types TEXT NOT NULL DEFAULT '',
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS listing_features (
            id INTEGER PRIMARY KEY,
            listing_id INTEGER NOT NULL REFERENCES listings(id) ON DELETE CASCADE,
            sort_order INTEGER NOT NULL DEFAULT 0,
            text TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS listing_specifications (
            id INTEGER PRIMARY KEY,
            listing_id INTEGER NOT NULL REFERENCES listings(id) ON DELETE CASCADE,
            sort_order INTEGER NOT NULL DEFAULT 0,
            label TEXT NOT NULL,
            value TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_content_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS navigation_links (
            id INTEGER PRIMARY KEY,
            sort_order INTEGER NOT NULL DEFAULT 0,
            label TEXT NOT NULL,
            href TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS section_copy (
            slug TEXT PRIMARY KEY,
            heading TEXT NOT NULL DEFAULT '',
            subheading TEXT NOT NULL DEFAULT '',
            supporting_text TEXT NOT NULL DEFAULT '',
            cta_label TEXT NOT NULL DEFAULT '',
            cta_url TEXT NOT NULL DEFAULT '',
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS homepage_heroes (
            id INTEGER PRIMARY KEY,
            sort_order INTEGER NOT NULL DEFAULT 0,
            badge_label TEXT NOT NULL DEFAULT '',
            title TEXT NOT NULL,
            subtitle TEXT NOT NULL DEFAULT '',
            primary_cta_label TEXT NOT NULL DEFAULT '',
            primary_cta_url TEXT NOT NULL DEFAULT '',
            image_url TEXT NOT NULL DEFAULT '',
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS featured_vehicles (
            id INTEGER PRIMARY KEY,
            sort_order INTEGER NOT NULL DEFAULT 0,
            listing_id INTEGER REFERENCES listings(id) ON DELETE SET NULL,
            name TEXT NOT NULL,
            price TEXT NOT NULL DEFAULT '',
            payment_plan TEXT NOT NULL DEFAULT '',
            image_url TEXT NOT NULL DEFAULT '',
            location TEXT NOT NULL DEFAULT '',
            badge TEXT NOT NULL DEFAULT '',
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Ordered title/description blocks of every kind (categories, metrics,
    // financing steps, snapshot items, ...)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS content_blocks (
            id INTEGER PRIMARY KEY,
            kind TEXT NOT NULL,
            sort_order INTEGER NOT NULL DEFAULT 0,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            icon TEXT NOT NULL DEFAULT '',
            link_label TEXT NOT NULL DEFAULT '',
            link_url TEXT NOT NULL DEFAULT '',
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_page_config_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS inventory_page_configs (
            slug TEXT PRIMARY KEY,
            title TEXT NOT NULL DEFAULT '',
            intro_text TEXT NOT NULL DEFAULT '',
            page_kicker TEXT NOT NULL DEFAULT '',
            summary_badge_label TEXT NOT NULL DEFAULT '',
            meta_title TEXT NOT NULL DEFAULT '',
            meta_description TEXT NOT NULL DEFAULT '',
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS financing_page_configs (
            slug TEXT PRIMARY KEY,
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS financing_page_fields (
            config_slug TEXT NOT NULL REFERENCES financing_page_configs(slug) ON DELETE CASCADE,
            field TEXT NOT NULL,
            value TEXT NOT NULL DEFAULT '',
            PRIMARY KEY (config_slug, field)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
