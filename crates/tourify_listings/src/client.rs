//! Property-listing API client module
//!
//! This module provides a client for the upstream property-information
//! service. The only field the booking domain cares about is the
//! self-serve visit-policy flag nested under `listingInfo`, but the
//! response is deserialized leniently so partial payloads still parse.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tourify_config::ListingConfig;

/// Errors that can occur when querying the listing API
#[derive(Error, Debug)]
pub enum ListingApiError {
    /// Error during HTTP request to the listing API
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the listing API
    #[error("Listing API error: {0}")]
    ApiError(String),
}

/// A property record as returned by `GET /homes/{property_id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    #[serde(default)]
    pub listing_info: Option<ListingInfo>,
}

/// The listing metadata carrying the visit policy.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingInfo {
    #[serde(default)]
    pub is_self_serve_visits_allowed: Option<bool>,
}

/// Client for the upstream property-listing service
pub struct ListingClient {
    /// HTTP client for making requests to the listing API
    client: Client,

    /// Configuration, including the API base URL
    config: ListingConfig,
}

impl ListingClient {
    /// Creates a new listing client with the given configuration
    pub fn new(config: ListingConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetches the listing record for a property.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response status is not
    /// a success, or the body cannot be parsed.
    pub async fn get_listing(&self, property_id: &str) -> Result<ListingRecord, ListingApiError> {
        let url = format!(
            "{}/homes/{}",
            self.config.base_url.trim_end_matches('/'),
            property_id
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ListingApiError::ApiError(format!(
                "listing lookup for {} returned {}",
                property_id,
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}
