//! Request URL construction for the OMDb service.

use crate::domain::error::{PopcornError, Result};

/// Default OMDb endpoint.
pub const DEFAULT_API_URL: &str = "https://www.omdbapi.com/";

/// Where and how to reach the movie metadata service.
///
/// Both read operations are plain `GET` requests whose parameters travel in
/// the query string: `apikey` plus either `s` (title search) or `i` (lookup
/// by IMDb id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmdbEndpoint {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for OmdbEndpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
        }
    }
}

impl OmdbEndpoint {
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
        }
    }

    /// URL for a free-text title search.
    ///
    /// # Errors
    ///
    /// Returns [`PopcornError::Config`] when no API key is configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use popcorn::api::OmdbEndpoint;
    ///
    /// let endpoint = OmdbEndpoint::new("https://www.omdbapi.com/", Some("k3y".into()));
    /// assert_eq!(
    ///     endpoint.search_url("the matrix").unwrap(),
    ///     "https://www.omdbapi.com/?apikey=k3y&s=the%20matrix"
    /// );
    /// ```
    pub fn search_url(&self, query: &str) -> Result<String> {
        self.build("s", query)
    }

    /// URL for the full detail record of one movie.
    ///
    /// # Errors
    ///
    /// Returns [`PopcornError::Config`] when no API key is configured.
    pub fn detail_url(&self, id: &str) -> Result<String> {
        self.build("i", id)
    }

    fn build(&self, param: &str, value: &str) -> Result<String> {
        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| PopcornError::Config("api_key is not set".to_string()))?;

        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        Ok(format!(
            "{}{separator}apikey={}&{param}={}",
            self.base_url,
            urlencoding::encode(key),
            urlencoding::encode(value.trim()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> OmdbEndpoint {
        OmdbEndpoint::new(DEFAULT_API_URL, Some("1234abcd".to_string()))
    }

    #[test]
    fn search_url_encodes_query() {
        let url = endpoint().search_url("  amélie & co ").unwrap();
        assert_eq!(
            url,
            "https://www.omdbapi.com/?apikey=1234abcd&s=am%C3%A9lie%20%26%20co"
        );
    }

    #[test]
    fn detail_url_uses_id_parameter() {
        let url = endpoint().detail_url("tt2294629").unwrap();
        assert_eq!(url, "https://www.omdbapi.com/?apikey=1234abcd&i=tt2294629");
    }

    #[test]
    fn base_url_with_existing_query_is_extended() {
        let endpoint = OmdbEndpoint::new("http://localhost:8080/?type=movie", Some("k".into()));
        assert_eq!(
            endpoint.search_url("heat").unwrap(),
            "http://localhost:8080/?type=movie&apikey=k&s=heat"
        );
    }

    #[test]
    fn missing_or_blank_key_is_a_config_error() {
        let mut endpoint = OmdbEndpoint::default();
        assert!(matches!(endpoint.search_url("heat"), Err(PopcornError::Config(_))));

        endpoint.api_key = Some("   ".to_string());
        assert!(matches!(endpoint.detail_url("tt1"), Err(PopcornError::Config(_))));
    }
}
