use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDetails {
    pub id: String,
    pub title: String,
    pub description: String,
    pub posted: String,
    pub tags: Vec<String>,
    pub url: Option<String>,
}

pub struct GalleryClient {
    client: Client,
    api_url: String,
}

impl GalleryClient {
    /// `api_url` includes the path prefix, e.g. `http://localhost:8088/api`.
    pub fn new(api_url: &str) -> Self {
        Self {
            client: Client::builder()
                .no_proxy()
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Search photos. An empty `text` returns an empty list without an upstream call.
    pub async fn search_images(
        &self,
        text: &str,
        page: u32,
    ) -> Result<Vec<SearchResultItem>, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(format!("{}/images", self.api_url))
            .query(&[("q", text.to_string()), ("page", page.to_string())])
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Fetch flattened details for one photo.
    pub async fn image_details(&self, id: &str) -> Result<ImageDetails, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(format!("{}/images/{}/details/", self.api_url, id))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        resp: Response,
    ) -> Result<T, Box<dyn std::error::Error>> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Proxy returned error status {}: {}", status, text).into());
        }

        match serde_json::from_str::<T>(&text) {
            Ok(value) => Ok(value),
            Err(e) => Err(e.into()),
        }
    }
}
