//! [`ListingService`] implementations.
//!
//! `ListingApiService` is the production gate backed by the listing API;
//! `StaticListingService` is the deterministic stand-in used in
//! development mode and in tests.

use crate::client::ListingClient;
use tourify_common::services::{BoxFuture, BoxedError, ListingService};
use tracing::warn;

/// The self-serve gate backed by the real listing API.
///
/// Transport failures, non-success responses, and payloads without the
/// visit-policy flag all resolve to "unknown" rather than an error: the
/// engine fails closed on unknown, and an unreachable upstream must not
/// surface as an unhandled fault.
pub struct ListingApiService {
    client: ListingClient,
}

impl ListingApiService {
    pub fn new(client: ListingClient) -> Self {
        Self { client }
    }
}

impl ListingService for ListingApiService {
    type Error = BoxedError;

    fn is_self_serve_allowed(
        &self,
        property_id: &str,
    ) -> BoxFuture<'_, Option<bool>, Self::Error> {
        let property_id = property_id.to_owned();
        Box::pin(async move {
            match self.client.get_listing(&property_id).await {
                Ok(record) => Ok(record
                    .listing_info
                    .and_then(|info| info.is_self_serve_visits_allowed)),
                Err(err) => {
                    warn!(
                        "listing lookup failed for {}: {}; treating visit policy as unknown",
                        property_id, err
                    );
                    Ok(None)
                }
            }
        })
    }
}

/// A gate that always gives the same answer.
///
/// Used when `use_listing_api` is off (every property allowed) and as a
/// test double for the engine's refusal paths.
pub struct StaticListingService {
    allowed: Option<bool>,
}

impl StaticListingService {
    pub fn new(allowed: Option<bool>) -> Self {
        Self { allowed }
    }

    /// Every property is self-serve enabled.
    pub fn allow_all() -> Self {
        Self::new(Some(true))
    }
}

impl ListingService for StaticListingService {
    type Error = BoxedError;

    fn is_self_serve_allowed(
        &self,
        _property_id: &str,
    ) -> BoxFuture<'_, Option<bool>, Self::Error> {
        let allowed = self.allowed;
        Box::pin(async move { Ok(allowed) })
    }
}
