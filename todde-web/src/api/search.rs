//! Header quick search

use axum::{
    extract::{RawQuery, State},
    Json,
};
use serde::Serialize;
use todde_common::db::{load_catalog, load_listings};
use todde_common::inventory::QueryParams;
use todde_common::search::{quick_search, SearchResult, MIN_QUERY_CHARS};

use super::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// GET /api/search/?q=<text>
pub async fn search(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<SearchResponse>, ApiError> {
    let params = QueryParams::parse(query.as_deref().unwrap_or_default());
    let q = params.get("q").unwrap_or_default().trim();
    if q.chars().count() < MIN_QUERY_CHARS {
        return Ok(Json(SearchResponse { results: Vec::new() }));
    }

    let catalog = load_catalog(&state.db).await?;
    let listings = load_listings(&state.db).await?;
    Ok(Json(SearchResponse {
        results: quick_search(q, &catalog, &listings, &state.placeholder_image_url),
    }))
}
