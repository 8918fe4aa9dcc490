//! Seeded marketplace database and router for endpoint tests

use axum::{body::Body, http::Request, Router};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use todde_common::db::{connect_readonly, init_database};
use todde_web::{build_router, AppState};

pub const PLACEHOLDER: &str = "/static/images/vehicle-placeholder.svg";

/// Router over a read-only pool; keep the returned guards alive for the test
pub struct TestSite {
    pub app: Router,
    _writer: SqlitePool,
    _dir: TempDir,
}

/// Seeds:
/// - Toyota (1): Corolla (10, sedan), RAV4 (11, suv)
/// - Honda (2): Civic (20, sedan)
/// - Kia (3, inactive): Rio (30)
/// - Listings 1 Corolla 15M registered, 2 RAV4 25M foreign-used with
///   financing detail, 3 Civic 12M manual registered, 4 Rio (hidden)
pub async fn test_site() -> TestSite {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("todde.db");
    let writer = init_database(&path).await.expect("init database");

    let statements = [
        "INSERT INTO manufacturers (id, name, slug, is_active) VALUES (1, 'Toyota', 'toyota', 1), (2, 'Honda', 'honda', 1), (3, 'Kia', 'kia', 0)",
        "INSERT INTO car_models (id, manufacturer_id, name, slug, body_type) VALUES (10, 1, 'Corolla', 'corolla', 'sedan'), (11, 1, 'RAV4', 'rav4', 'suv'), (20, 2, 'Civic', 'civic', 'sedan'), (30, 3, 'Rio', 'rio', 'hatchback')",
        "INSERT INTO listings (id, model_id, year, trim, price, transmission, listing_type) VALUES \
            (1, 10, 2021, 'XLE', '15000000', 'automatic', 'registered'), \
            (2, 11, 2022, 'Adventure', '25000000', 'automatic', 'foreign-used'), \
            (3, 20, 2019, '', '12000000', 'manual', 'registered'), \
            (4, 30, 2020, '', '9000000', 'automatic', 'registered')",
        "INSERT INTO listing_images (listing_id, sort_order, source_url) VALUES (1, 1, 'https://cdn.todde.test/corolla.jpg')",
        "INSERT INTO listing_details (listing_id, mileage_km, loan_rate, loan_period_months, applicant_types) VALUES (2, 45000, '18', 30, 'Salary Earner, Business Owner')",
        "INSERT INTO listing_features (listing_id, sort_order, text) VALUES (2, 1, 'Sunroof')",
        "INSERT INTO section_copy (slug, heading) VALUES ('meta', 'Todde | Cars on credit')",
        "INSERT INTO navigation_links (sort_order, label, href) VALUES (1, 'Home', '/'), (2, 'Financing', '/financing/')",
        "INSERT INTO featured_vehicles (sort_order, listing_id, name) VALUES (1, 1, '2021 Toyota Corolla XLE')",
        "INSERT INTO inventory_page_configs (slug, intro_text) VALUES ('registered', 'Locally registered, ready to transfer')",
        "INSERT INTO financing_page_configs (slug) VALUES ('financing')",
        "INSERT INTO financing_page_fields (config_slug, field, value) VALUES ('financing', 'hero_title', 'Own it monthly')",
    ];
    for statement in statements {
        sqlx::query(statement)
            .execute(&writer)
            .await
            .unwrap_or_else(|e| panic!("seed failed: {e}\n{statement}"));
    }

    let pool = connect_readonly(&path).await.expect("read-only pool");
    TestSite {
        app: build_router(AppState::new(pool, PLACEHOLDER)),
        _writer: writer,
        _dir: dir,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}
