//! Catalog lookup API used by the filter dropdowns

use axum::{
    extract::{RawQuery, State},
    Json,
};
use serde::Serialize;
use todde_common::catalog::{
    models_for_manufacturer, variants_for_model, EntityKey, EntityRef, ManufacturerModels,
    ModelVariants,
};
use todde_common::db::{load_catalog, load_listings};
use todde_common::inventory::QueryParams;

use super::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ManufacturersResponse {
    pub manufacturers: Vec<EntityRef>,
}

/// GET /api/car-manufacturers/
pub async fn car_manufacturers(
    State(state): State<AppState>,
) -> Result<Json<ManufacturersResponse>, ApiError> {
    let catalog = load_catalog(&state.db).await?;
    Ok(Json(ManufacturersResponse {
        manufacturers: catalog
            .active_manufacturers()
            .into_iter()
            .map(EntityRef::from)
            .collect(),
    }))
}

/// GET /api/car-models/?manufacturer=<id>&manufacturer_slug=<slug>
pub async fn car_models(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ManufacturerModels>, ApiError> {
    let params = QueryParams::parse(query.as_deref().unwrap_or_default());
    let key = EntityKey::new(params.get("manufacturer"), params.get("manufacturer_slug"));
    if key.is_missing() {
        return Err(ApiError::BadRequest("Missing manufacturer parameter.".to_string()));
    }

    let catalog = load_catalog(&state.db).await?;
    models_for_manufacturer(&catalog, &key)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Manufacturer not found".to_string()))
}

/// GET /api/car-variants/?model=<id>&model_slug=<slug>
pub async fn car_variants(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ModelVariants>, ApiError> {
    let params = QueryParams::parse(query.as_deref().unwrap_or_default());
    let key = EntityKey::new(params.get("model"), params.get("model_slug"));
    if key.is_missing() {
        return Err(ApiError::BadRequest("Missing model parameter.".to_string()));
    }

    let catalog = load_catalog(&state.db).await?;
    let listings = load_listings(&state.db).await?;
    variants_for_model(&catalog, &listings, &key)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Model not found".to_string()))
}
