use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::gallery::{ImageDetails, SearchQuery, SearchResultItem};
use crate::http::response::{ApiError, ApiResult};
use crate::http::server::AppState;

/// Raw `/images` query string. `page` stays a string so a bad value yields
/// a descriptive 400 instead of a generic rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<String>,
}

impl SearchParams {
    /// Without search text the page is never used, so it is not validated.
    pub fn into_query(self) -> ApiResult<SearchQuery> {
        let query = SearchQuery::new(self.q, 1);
        if query.text().is_none() {
            return Ok(query);
        }
        Ok(SearchQuery {
            page: parse_page(self.page.as_deref())?,
            ..query
        })
    }
}

fn parse_page(raw: Option<&str>) -> ApiResult<u32> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(1),
        Some(raw) => raw,
    };
    match raw.parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(ApiError::BadRequest(format!(
            "page must be a positive integer, got '{}'",
            raw
        ))),
    }
}

pub async fn search_images(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<SearchResultItem>>> {
    let query = params.into_query()?;
    let items = state.gallery.search(&query).await?;
    tracing::info!(
        text = query.text().unwrap_or_default(),
        page = query.page,
        count = items.len(),
        "Search complete"
    );
    Ok(Json(items))
}

pub async fn image_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ImageDetails>> {
    let details = state.gallery.details(&id).await?;
    tracing::info!(photo_id = %id, tags = details.tags.len(), "Details complete");
    Ok(Json(details))
}
