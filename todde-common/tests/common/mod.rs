//! Shared fixture: a small seeded marketplace database

use sqlx::SqlitePool;
use std::path::Path;
use todde_common::db::init_database;

/// Create the schema at `path` and insert a small catalog
///
/// Listings:
/// 1. Toyota Corolla 2021 sedan, automatic, registered, 15,000,000, two images
/// 2. Toyota RAV4 2022 suv, automatic, foreign-used, 25,000,000, with detail
/// 3. Honda Civic 2019 sedan, manual, registered, 12,000,000
/// 4. Kia Rio 2020 (inactive manufacturer)
pub async fn seeded_database(path: &Path) -> SqlitePool {
    let pool = init_database(path).await.expect("init database");

    let statements = [
        "INSERT INTO manufacturers (id, name, slug, is_active) VALUES (1, 'Toyota', 'toyota', 1), (2, 'Honda', 'honda', 1), (3, 'Kia', 'kia', 0)",
        "INSERT INTO car_models (id, manufacturer_id, name, slug, body_type, is_active) VALUES (10, 1, 'Corolla', 'corolla', 'sedan', 1), (11, 1, 'RAV4', 'rav4', 'suv', 1), (20, 2, 'Civic', 'civic', 'sedan', 1), (30, 3, 'Rio', 'rio', 'hatchback', 1)",
        "INSERT INTO listings (id, model_id, year, trim, price, currency, transmission, listing_type, is_active, updated_at) VALUES \
            (1, 10, 2021, 'XLE', '15000000.00', 'NGN', 'automatic', 'registered', 1, '2024-05-01 10:00:00'), \
            (2, 11, 2022, 'Adventure', '25000000', 'NGN', 'automatic', 'foreign-used', 1, '2024-05-03 10:00:00'), \
            (3, 20, 2019, '', '12000000', 'NGN', 'manual', 'registered', 1, '2024-05-02 10:00:00'), \
            (4, 30, 2020, '', '9000000', 'NGN', 'automatic', 'registered', 1, '2024-05-04 10:00:00')",
        "INSERT INTO listing_images (id, listing_id, sort_order, source_url, alt_text, is_active) VALUES \
            (1, 1, 2, 'https://cdn.todde.test/corolla-side.jpg', '', 1), \
            (2, 1, 1, '   ', '', 1), \
            (3, 1, 3, 'https://cdn.todde.test/corolla-rear.jpg', 'Rear view', 1)",
        "INSERT INTO listing_details (listing_id, description, mileage_km, loan_rate, loan_deposit_percent, loan_period_months, applicant_types, is_active) VALUES \
            (2, 'Imported RAV4 with full inspection report.', 45000, '18', NULL, 30, 'Salary Earner, Business Owner', 1)",
        "INSERT INTO listing_features (listing_id, sort_order, text, is_active) VALUES (2, 1, 'Sunroof', 1), (2, 2, 'Tow hitch', 0)",
        "INSERT INTO listing_specifications (listing_id, sort_order, label, value, is_active) VALUES (2, 1, 'Engine Type', '2.5L I4', 1)",
        "INSERT INTO section_copy (slug, heading, subheading, is_active) VALUES ('meta', 'Todde | Cars on credit', '', 1), ('financing_meta', 'Hidden', 'Hidden', 0)",
        "INSERT INTO navigation_links (sort_order, label, href, description) VALUES (1, 'Home', '/', ''), (2, 'Financing', '/financing/', 'See financing options')",
        "INSERT INTO homepage_heroes (sort_order, badge_label, title) VALUES (1, 'New', 'Drive home in 48 hours')",
        "INSERT INTO featured_vehicles (sort_order, listing_id, name) VALUES (1, 1, '2021 Toyota Corolla XLE')",
        "INSERT INTO content_blocks (kind, sort_order, title, description) VALUES ('brand_metric', 1, '15K+', 'Customers empowered'), ('financing_step', 1, 'Apply', 'Online in minutes'), ('financing_snapshot', 1, 'Keys in 48 hours', '')",
        "INSERT INTO inventory_page_configs (slug, title, intro_text, is_active) VALUES ('registered', '', 'Locally registered, ready to transfer', 1)",
        "INSERT INTO financing_page_configs (slug, is_active) VALUES ('financing', 1)",
        "INSERT INTO financing_page_fields (config_slug, field, value) VALUES ('financing', 'hero_title', 'Own it monthly'), ('financing', 'steps_heading', '')",
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .unwrap_or_else(|e| panic!("seed failed: {e}\n{statement}"));
    }

    pool
}
