//! Wikipedia action API backend for [`PlaceSearch`]

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::{PageDetails, PageHit, PlaceSearch};
use crate::config::SearchConfig;
use crate::http_client;
use crate::models::Coordinate;
use crate::{Result, TravelError};

/// Action API envelope; `query` is absent when nothing matched
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    query: Option<T>,
}

#[derive(Debug, Deserialize)]
struct GeoSearchQuery {
    #[serde(default)]
    geosearch: Vec<PageHit>,
}

#[derive(Debug, Deserialize)]
struct TextSearchQuery {
    #[serde(default)]
    search: Vec<PageHit>,
}

#[derive(Debug, Deserialize)]
struct PagesQuery {
    #[serde(default)]
    pages: HashMap<String, PageDetails>,
}

/// Wikipedia client
pub struct WikipediaClient {
    client: ClientWithMiddleware,
    base_url: String,
}

impl WikipediaClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &SearchConfig) -> Result<Self> {
        Ok(Self::with_client(
            http_client::build_client(config)?,
            config.base_url.clone(),
        ))
    }

    #[must_use]
    pub fn with_client(client: ClientWithMiddleware, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn query<T: DeserializeOwned>(&self, params: &[(&str, String)]) -> Result<T> {
        let url = build_url(&self.base_url, params);
        debug!("Knowledge API request URL: {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TravelError::api(format!(
                "Knowledge API returned {status}: {body}"
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| TravelError::parse(format!("Unexpected knowledge API response: {e}")))
    }
}

fn build_url(base_url: &str, params: &[(&str, String)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}{query}")
}

#[async_trait]
impl PlaceSearch for WikipediaClient {
    #[instrument(skip(self))]
    async fn geosearch(
        &self,
        center: Coordinate,
        radius_meters: u32,
        limit: u32,
    ) -> Result<Vec<PageHit>> {
        let response: ApiResponse<GeoSearchQuery> = self
            .query(&[
                ("action", "query".to_string()),
                ("list", "geosearch".to_string()),
                (
                    "gscoord",
                    format!("{}|{}", center.latitude, center.longitude),
                ),
                ("gsradius", radius_meters.to_string()),
                ("gslimit", limit.to_string()),
                ("format", "json".to_string()),
            ])
            .await?;
        Ok(response.query.map(|q| q.geosearch).unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn text_search(&self, query: &str, limit: u32) -> Result<Vec<PageHit>> {
        let response: ApiResponse<TextSearchQuery> = self
            .query(&[
                ("action", "query".to_string()),
                ("list", "search".to_string()),
                ("srsearch", query.to_string()),
                ("srlimit", limit.to_string()),
                ("format", "json".to_string()),
            ])
            .await?;
        Ok(response.query.map(|q| q.search).unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn page_details(
        &self,
        page_ids: &[u64],
        extract_chars: u32,
    ) -> Result<HashMap<u64, PageDetails>> {
        let ids = page_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join("|");

        let response: ApiResponse<PagesQuery> = self
            .query(&[
                ("action", "query".to_string()),
                ("prop", "extracts|info".to_string()),
                ("pageids", ids),
                ("exintro", "1".to_string()),
                ("explaintext", "1".to_string()),
                ("inprop", "url".to_string()),
                ("exchars", extract_chars.to_string()),
                ("format", "json".to_string()),
            ])
            .await?;

        // Missing pages come back under negative ids and are skipped
        Ok(response
            .query
            .map(|q| q.pages)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(id, page)| id.parse::<u64>().ok().map(|id| (id, page)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_encodes_values() {
        let url = build_url(
            "https://en.wikipedia.org/w/api.php",
            &[
                ("gscoord", "48.85|2.35".to_string()),
                ("srsearch", "Paris tourist attraction".to_string()),
            ],
        );
        assert_eq!(
            url,
            "https://en.wikipedia.org/w/api.php?gscoord=48.85%7C2.35&srsearch=Paris%20tourist%20attraction"
        );
    }

    #[test]
    fn test_build_url_appends_to_existing_query() {
        let url = build_url("http://localhost/api.php?origin=*", &[("format", "json".to_string())]);
        assert_eq!(url, "http://localhost/api.php?origin=*&format=json");
    }

    #[test]
    fn test_missing_query_section_is_empty() {
        let response: ApiResponse<GeoSearchQuery> =
            serde_json::from_str(r#"{"batchcomplete":""}"#).unwrap();
        assert!(response.query.is_none());
    }

    #[test]
    fn test_geosearch_payload_parses() {
        let body = r#"{"batchcomplete":"","query":{"geosearch":[
            {"pageid":9232,"ns":0,"title":"Eiffel Tower","lat":48.858,"lon":2.294,"dist":95.3,"primary":""}
        ]}}"#;
        let response: ApiResponse<GeoSearchQuery> = serde_json::from_str(body).unwrap();
        let hits = response.query.unwrap().geosearch;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].pageid, 9232);
        assert_eq!(hits[0].dist, Some(95.3));
    }
}
