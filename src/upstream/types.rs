//! Wire types for the upstream responses this proxy reads.
//!
//! Only the fields the gallery needs are modelled; everything else in the
//! upstream payload is ignored.

use serde::{de, Deserialize, Deserializer};

/// `flickr.photos.search` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub photos: PhotoPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoPage {
    /// Total page count reported by upstream.
    #[serde(deserialize_with = "lenient_i64")]
    pub pages: i64,

    #[serde(rename = "photo", default)]
    pub photos: Vec<SearchPhoto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPhoto {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// `flickr.photos.getSizes` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SizesResponse {
    pub sizes: SizeList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SizeList {
    pub size: Vec<ImageSize>,
}

/// One available rendition of a photo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageSize {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// `flickr.photos.getInfo` response.
#[derive(Debug, Clone, Deserialize)]
pub struct InfoResponse {
    pub photo: PhotoInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoInfo {
    pub id: Content,
    pub title: Content,
    pub description: Content,
    pub dates: PhotoDates,
    pub tags: TagList,
}

/// A text field that upstream sometimes wraps as `{"_content": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Wrapped {
        #[serde(rename = "_content")]
        content: String,
    },
    Plain(String),
    Number(i64),
}

impl Content {
    pub fn into_string(self) -> String {
        match self {
            Content::Wrapped { content } => content,
            Content::Plain(s) => s,
            Content::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoDates {
    /// Unix seconds.
    #[serde(deserialize_with = "lenient_i64")]
    pub posted: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagList {
    #[serde(default)]
    pub tag: Vec<Tag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub raw: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

// Upstream encodes some integers as strings.
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n.to_string()),
        NumberOrString::Text(s) => Ok(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_pages_as_string_or_number() {
        let a: SearchResponse =
            serde_json::from_value(json!({"photos": {"pages": "3", "photo": []}})).unwrap();
        let b: SearchResponse =
            serde_json::from_value(json!({"photos": {"pages": 3, "photo": []}})).unwrap();
        assert_eq!(a.photos.pages, 3);
        assert_eq!(b.photos.pages, 3);
    }

    #[test]
    fn test_info_wrapped_and_plain_fields() {
        let info: InfoResponse = serde_json::from_value(json!({
            "photo": {
                "id": "123",
                "title": {"_content": "Sunset"},
                "description": {"_content": ""},
                "dates": {"posted": "0"},
                "tags": {"tag": [{"raw": "a"}, {"raw": "b"}]}
            }
        }))
        .unwrap();
        assert_eq!(info.photo.id.into_string(), "123");
        assert_eq!(info.photo.title.into_string(), "Sunset");
        assert_eq!(info.photo.dates.posted, 0);
        assert_eq!(info.photo.tags.tag.len(), 2);
    }

    #[test]
    fn test_missing_sizes_is_an_error() {
        let result = serde_json::from_value::<SizesResponse>(json!({"stat": "fail"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_size_without_label() {
        let sizes: SizesResponse =
            serde_json::from_value(json!({"sizes": {"size": [{"source": "s"}]}})).unwrap();
        assert_eq!(sizes.sizes.size[0].label, None);
    }

    #[test]
    fn test_size_without_source() {
        let sizes: SizesResponse = serde_json::from_value(json!({"sizes": {"size": [
            {"label": "Medium"},
            {"label": "Original", "source": "o"}
        ]}}))
        .unwrap();
        assert_eq!(sizes.sizes.size[0].source, None);
        assert_eq!(sizes.sizes.size[1].source.as_deref(), Some("o"));
    }
}
