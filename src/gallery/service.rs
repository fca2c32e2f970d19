//! Gallery operations on top of the upstream client.
//!
//! # Responsibilities
//! - Search: one upstream search, then one size lookup per photo
//! - Details: metadata and size lookup for a single photo
//! - Reshape upstream payloads into client types
//!
//! # Design Decisions
//! - Fan-out tasks are spawned, so a failing sibling does not cancel the
//!   others; their results are simply discarded
//! - Results are assembled in upstream order, not completion order
//! - Any failure fails the whole operation

use futures_util::future::try_join_all;
use tokio::task::JoinHandle;

use crate::gallery::posted::format_posted;
use crate::gallery::rendition::select_rendition;
use crate::gallery::types::{ImageDetails, SearchQuery, SearchResultItem};
use crate::upstream::types::{InfoResponse, PhotoInfo, SearchResponse, SizesResponse};
use crate::upstream::{FlickrClient, FlickrMethod, UpstreamError, UpstreamResult};

/// Read-only gallery facade. Cheap to clone; clones share the HTTP pool.
#[derive(Debug, Clone)]
pub struct GalleryService {
    client: FlickrClient,
    per_page: u32,
}

impl GalleryService {
    pub fn new(client: FlickrClient, per_page: u32) -> Self {
        Self { client, per_page }
    }

    /// Search photos and resolve a display URL for each hit.
    pub async fn search(&self, query: &SearchQuery) -> UpstreamResult<Vec<SearchResultItem>> {
        let Some(text) = query.text() else {
            tracing::debug!("Empty search text, skipping upstream");
            return Ok(Vec::new());
        };

        let per_page = self.per_page.to_string();
        let page = query.page.to_string();
        let response: SearchResponse = self
            .client
            .call(
                FlickrMethod::Search,
                &[
                    ("text", text),
                    ("per_page", per_page.as_str()),
                    ("page", page.as_str()),
                ],
            )
            .await?;

        if i64::from(query.page) > response.photos.pages {
            tracing::debug!(
                page = query.page,
                pages = response.photos.pages,
                "Requested page beyond last page"
            );
            return Ok(Vec::new());
        }

        let photos = response.photos.photos;
        let handles = photos
            .iter()
            .map(|photo| {
                let service = self.clone();
                let id = photo.id.clone();
                tokio::spawn(async move { service.resolve_url(&id).await })
            })
            .collect::<Vec<_>>();

        let urls = join_all(handles).await?;

        Ok(photos
            .into_iter()
            .zip(urls)
            .map(|(photo, url)| SearchResultItem {
                id: photo.id,
                title: photo.title,
                url,
            })
            .collect())
    }

    /// Metadata plus display URL for one photo.
    pub async fn details(&self, id: &str) -> UpstreamResult<ImageDetails> {
        let metadata = {
            let service = self.clone();
            let id = id.to_string();
            tokio::spawn(async move { service.photo_metadata(&id).await })
        };
        let url = {
            let service = self.clone();
            let id = id.to_string();
            tokio::spawn(async move { service.resolve_url(&id).await })
        };

        let (mut details, url) = tokio::try_join!(join(metadata), join(url))?;
        details.url = url;
        Ok(details)
    }

    /// Resolve the preferred display URL for a photo.
    ///
    /// `Ok(None)` means the photo exists but has neither a medium nor an
    /// original rendition.
    pub async fn resolve_url(&self, id: &str) -> UpstreamResult<Option<String>> {
        let response: SizesResponse = self
            .client
            .call(FlickrMethod::GetSizes, &[("photo_id", id)])
            .await?;
        Ok(select_rendition(&response.sizes.size))
    }

    /// Photo metadata without a URL.
    pub async fn photo_metadata(&self, id: &str) -> UpstreamResult<ImageDetails> {
        let response: InfoResponse = self
            .client
            .call(FlickrMethod::GetInfo, &[("photo_id", id)])
            .await?;
        details_from_info(response.photo)
    }
}

/// Flatten an upstream info payload.
pub fn details_from_info(info: PhotoInfo) -> UpstreamResult<ImageDetails> {
    let posted = format_posted(info.dates.posted).ok_or_else(|| UpstreamError::InvalidField {
        field: "dates.posted",
        value: info.dates.posted.to_string(),
    })?;

    Ok(ImageDetails {
        id: info.id.into_string(),
        title: info.title.into_string(),
        description: info.description.into_string(),
        posted,
        tags: info.tags.tag.into_iter().map(|tag| tag.raw).collect(),
        url: None,
    })
}

async fn join<T>(handle: JoinHandle<UpstreamResult<T>>) -> UpstreamResult<T> {
    handle
        .await
        .map_err(|e| UpstreamError::Task(e.to_string()))?
}

/// Await every handle; output order matches input order.
async fn join_all<T>(handles: Vec<JoinHandle<UpstreamResult<T>>>) -> UpstreamResult<Vec<T>> {
    try_join_all(handles.into_iter().map(join)).await
}
