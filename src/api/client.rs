// client.rs
use crate::api::FetchError;
use crate::domain::Listing;
use reqwest::blocking::Client;
use std::time::Duration;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::form_urlencoded;

const USER_AGENT: &str = concat!("stayfront/", env!("CARGO_PKG_VERSION"));

/// Read-only access to the listing service.
pub trait ListingApi: Send + Sync {
    fn fetch_featured(&self) -> Result<Vec<Listing>, FetchError>;

    /// Empty or missing `query` / `property_type` are left out of the request.
    fn search(
        &self,
        query: Option<&str>,
        property_type: Option<&str>,
    ) -> Result<Vec<Listing>, FetchError>;
}

pub fn featured_url(base: &str) -> String {
    format!("{}/api/properties/featured", base.trim_end_matches('/'))
}

/// `{base}/api/properties?q=..&type=..`, only carrying the non-empty filters.
pub fn search_url(base: &str, query: Option<&str>, property_type: Option<&str>) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        params.append_pair("q", q);
    }
    if let Some(t) = property_type.filter(|t| !t.is_empty()) {
        params.append_pair("type", t);
    }
    let qs = params.finish();

    let endpoint = format!("{}/api/properties", base.trim_end_matches('/'));
    if qs.is_empty() {
        endpoint
    } else {
        format!("{endpoint}?{qs}")
    }
}

/// Keep every record that decodes; a bad one is logged and skipped instead of
/// failing the whole list.
pub fn decode_listings(records: Vec<Value>) -> Vec<Listing> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(listing) => Some(listing),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed listing record");
                None
            }
        })
        .collect()
}

pub struct HttpListingClient {
    client: Client,
    base_url: String,
}

impl HttpListingClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_listings(&self, url: &str) -> Result<Vec<Listing>, FetchError> {
        debug!(%url, "requesting listings");

        let resp = self.client.get(url).send()?.error_for_status()?;
        let records: Vec<Value> = resp.json()?;
        let items = decode_listings(records);

        info!(%url, count = items.len(), "listings fetched");
        Ok(items)
    }
}

impl ListingApi for HttpListingClient {
    fn fetch_featured(&self) -> Result<Vec<Listing>, FetchError> {
        self.get_listings(&featured_url(&self.base_url))
    }

    fn search(
        &self,
        query: Option<&str>,
        property_type: Option<&str>,
    ) -> Result<Vec<Listing>, FetchError> {
        self.get_listings(&search_url(&self.base_url, query, property_type))
    }
}
