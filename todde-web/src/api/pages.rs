//! Homepage and financing page, plus the navigation wrapper shared by pages

use axum::{extract::State, Json};
use serde::Serialize;
use todde_common::content::financing_page::build_financing_page;
use todde_common::content::homepage::{build_homepage, nav_categories};
use todde_common::content::{FinancingPage, Homepage, NavCategory, NavigationLink};
use todde_common::db::{
    load_catalog, load_content_blocks, load_financing_page_config, load_homepage_content,
    load_listings, load_navigation_links, load_section_copy,
};
use todde_common::models::Listing;

use super::ApiError;
use crate::AppState;

/// Page context with the site navigation attached
#[derive(Debug, Serialize)]
pub struct SitePage<T: Serialize> {
    pub nav_links: Vec<NavigationLink>,
    pub nav_categories: Vec<NavCategory>,
    #[serde(flatten)]
    pub page: T,
}

impl<T: Serialize> SitePage<T> {
    /// Wrap `page`, deriving navigation categories from `listings`
    pub async fn wrap(state: &AppState, listings: &[Listing], page: T) -> Result<Self, ApiError> {
        Ok(Self {
            nav_links: load_navigation_links(&state.db).await?,
            nav_categories: nav_categories(listings),
            page,
        })
    }
}

/// GET /
pub async fn homepage(State(state): State<AppState>) -> Result<Json<Homepage>, ApiError> {
    let content = load_homepage_content(&state.db).await?;
    let listings = load_listings(&state.db).await?;
    let catalog = load_catalog(&state.db).await?;

    Ok(Json(build_homepage(
        content,
        &listings,
        &catalog,
        &state.placeholder_image_url,
    )))
}

/// GET /financing/
pub async fn financing(
    State(state): State<AppState>,
) -> Result<Json<SitePage<FinancingPage>>, ApiError> {
    let config = load_financing_page_config(&state.db).await?;
    let section_copy = load_section_copy(&state.db).await?;
    let blocks = load_content_blocks(&state.db).await?;
    let listings = load_listings(&state.db).await?;

    let page = build_financing_page(config.as_ref(), &section_copy, &blocks);
    Ok(Json(SitePage::wrap(&state, &listings, page).await?))
}
