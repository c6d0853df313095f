//! Client configuration: endpoints, credentials, image sizing.

/// Image variants the catalog serves, each mapped to the size slug the
/// image CDN expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Poster,
    Backdrop,
    Profile,
}

impl ImageSize {
    /// The CDN size segment for this variant.
    pub fn as_segment(self) -> &'static str {
        match self {
            ImageSize::Poster => "w500",
            ImageSize::Backdrop => "w1280",
            ImageSize::Profile => "w185",
        }
    }
}

/// Configuration for [`crate::TmdbClient`].
///
/// Defaults point at the public TMDB v3 API with English responses and
/// no API key; supply a key via [`ClientConfig::with_api_key`] or the
/// `TMDB_API_KEY` environment variable when constructing the client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog API, without a trailing slash
    pub base_url: String,
    /// API key sent with every request when present
    pub api_key: Option<String>,
    /// BCP 47 language tag for localized titles and overviews
    pub language: String,
    /// Base URL of the image CDN, without a trailing slash
    pub image_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: None,
            language: "en-US".to_string(),
            image_base_url: "https://image.tmdb.org/t/p".to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration with the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}
