//! Inventory listing pages and the vehicle detail page

use axum::{
    extract::{Path, RawQuery, State},
    Json,
};
use todde_common::content::InventoryPageKind;
use todde_common::db::{load_catalog, load_inventory_page_config, load_listing_extras, load_listings};
use todde_common::detail::{build_vehicle_detail, VehicleDetail};
use todde_common::inventory::{build_inventory_page, InventoryPage, QueryParams};
use tracing::debug;

use super::{ApiError, SitePage};
use crate::AppState;

async fn inventory_page(
    state: &AppState,
    kind: InventoryPageKind,
    raw_query: Option<String>,
) -> Result<Json<SitePage<InventoryPage>>, ApiError> {
    let params = QueryParams::parse(raw_query.as_deref().unwrap_or_default());
    let listings = load_listings(&state.db).await?;
    let catalog = load_catalog(&state.db).await?;
    let config = load_inventory_page_config(&state.db, kind).await?;

    let page = build_inventory_page(
        kind,
        config.as_ref(),
        &listings,
        &catalog,
        &params,
        &state.placeholder_image_url,
    );
    Ok(Json(SitePage::wrap(state, &listings, page).await?))
}

/// GET /cars/
pub async fn all_cars(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<SitePage<InventoryPage>>, ApiError> {
    inventory_page(&state, InventoryPageKind::All, query).await
}

/// GET /registered-cars/
pub async fn registered_cars(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<SitePage<InventoryPage>>, ApiError> {
    inventory_page(&state, InventoryPageKind::Registered, query).await
}

/// GET /foreign-used/
pub async fn foreign_used_cars(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<SitePage<InventoryPage>>, ApiError> {
    inventory_page(&state, InventoryPageKind::ForeignUsed, query).await
}

/// GET /cars/:id/
///
/// 404 unless the listing and its whole catalog chain are active.
pub async fn vehicle_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<SitePage<VehicleDetail>>, ApiError> {
    let not_found = || ApiError::NotFound("Vehicle not found".to_string());
    let id: i64 = raw_id.parse().map_err(|_| not_found())?;

    let listings = load_listings(&state.db).await?;
    let catalog = load_catalog(&state.db).await?;
    let extras = load_listing_extras(&state.db, id).await?;

    let detail = build_vehicle_detail(id, &listings, extras, &catalog, &state.placeholder_image_url)
        .ok_or_else(|| {
            debug!(id, "Listing not viewable");
            not_found()
        })?;
    Ok(Json(SitePage::wrap(&state, &listings, detail).await?))
}
