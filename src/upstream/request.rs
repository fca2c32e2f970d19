//! Upstream URL construction.
//!
//! Every call is `<base>?api_key=..&format=json&method=..` followed by the
//! method-specific parameters in the order given. Values are
//! form-urlencoded, so caller-supplied text cannot inject extra parameters.

use url::Url;

/// The REST methods this proxy calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlickrMethod {
    Search,
    GetSizes,
    GetInfo,
}

impl FlickrMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlickrMethod::Search => "flickr.photos.search",
            FlickrMethod::GetSizes => "flickr.photos.getSizes",
            FlickrMethod::GetInfo => "flickr.photos.getInfo",
        }
    }
}

impl std::fmt::Display for FlickrMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the full URL for one method call.
pub fn method_url(base: &Url, api_key: &str, method: FlickrMethod, params: &[(&str, &str)]) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("api_key", api_key)
            .append_pair("format", "json")
            .append_pair("method", method.as_str());
        for (name, value) in params {
            query.append_pair(name, value);
        }
    }
    url
}

/// Strip the `jsonFlickrApi(...)` wrapper Flickr emits for `format=json`.
///
/// Plain JSON bodies are returned unchanged.
pub fn strip_jsonp(body: &str) -> &str {
    let trimmed = body.trim();
    trimmed
        .strip_prefix("jsonFlickrApi(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed)
}
