//! The HTTP catalog client.

use catalog::{Movie, MovieDetails, MovieId};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::config::{ClientConfig, ImageSize};
use crate::error::ClientError;

/// Placeholder shown when a movie has no poster on record.
const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// One page of a movie list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Client for the TMDB-style catalog API.
///
/// Wraps a pooled `reqwest::Client`; cloning is cheap and shares the
/// connection pool.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl TmdbClient {
    /// Create a client with the default configuration, picking up the
    /// API key from the `TMDB_API_KEY` environment variable if set.
    pub fn new() -> Self {
        Self::with_config(ClientConfig {
            api_key: std::env::var("TMDB_API_KEY").ok(),
            ..ClientConfig::default()
        })
    }

    /// Create a client with an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch one page of the popular-movies list.
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    pub async fn popular_movies(&self, page: u32) -> Result<MovieListPage, ClientError> {
        self.get_json("/movie/popular", &[("page", page.to_string())])
            .await
    }

    /// Fetch the full record for a single movie.
    pub async fn movie_details(&self, movie_id: MovieId) -> Result<MovieDetails, ClientError> {
        self.get_json(&format!("/movie/{movie_id}"), &[]).await
    }

    /// Search the catalog by title, server side.
    ///
    /// This is distinct from the client-side filter pipeline: it queries
    /// the whole remote catalog, not the locally held collection.
    pub async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<MovieListPage, ClientError> {
        self.get_json(
            "/search/movie",
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    /// Build the full URL for a poster, backdrop, or profile image.
    ///
    /// Movies without an image path get a placeholder URL so callers can
    /// always render something.
    pub fn image_url(&self, path: Option<&str>, size: ImageSize) -> String {
        match path {
            Some(path) => format!(
                "{}/{}{}",
                self.config.image_base_url,
                size.as_segment(),
                path
            ),
            None => PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }

    /// GET an endpoint and decode its JSON body.
    ///
    /// The API key and language are appended to every request. Only the
    /// endpoint path goes to the log; the key never does.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.config.base_url, endpoint);

        let mut query: Vec<(&str, String)> = Vec::with_capacity(params.len() + 2);
        query.push(("language", self.config.language.clone()));
        if let Some(api_key) = &self.config.api_key {
            query.push(("api_key", api_key.clone()));
        }
        query.extend_from_slice(params);

        debug!("GET {endpoint}");
        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Decode {
                endpoint: endpoint.to_string(),
                source,
            })
    }
}

impl Default for TmdbClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_with_path() {
        let client = TmdbClient::with_config(ClientConfig::default());
        let url = client.image_url(Some("/d5NXSklXo0qyIYkgV94XAgMIckC.jpg"), ImageSize::Poster);
        assert_eq!(
            url,
            "https://image.tmdb.org/t/p/w500/d5NXSklXo0qyIYkgV94XAgMIckC.jpg"
        );
    }

    #[test]
    fn test_image_url_without_path_is_placeholder() {
        let client = TmdbClient::with_config(ClientConfig::default());
        let url = client.image_url(None, ImageSize::Backdrop);
        assert!(url.contains("placeholder"));
    }

    #[test]
    fn test_list_page_decodes() {
        let payload = r#"{
            "page": 1,
            "results": [
                {"id": 1, "title": "Alpha", "release_date": ""},
                {"id": 2, "title": "Beta", "release_date": "2020-01-31"}
            ],
            "total_pages": 42,
            "total_results": 833
        }"#;

        let page: MovieListPage = serde_json::from_str(payload).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.total_results, 833);
        assert!(page.results[0].release_date.is_none());
        assert!(page.results[1].release_date.is_some());
    }

    #[test]
    fn test_list_page_tolerates_missing_fields() {
        let page: MovieListPage = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert_eq!(page.page, 0);
        assert!(page.results.is_empty());
    }
}
