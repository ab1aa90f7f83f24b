// --- File: crates/tourify_tours/src/routes.rs ---

use crate::handlers::{
    book_tour_handler, cancel_tour_handler, get_available_slots_handler, get_stats_handler,
    reschedule_tour_handler, TourState,
};
use crate::logic::TourEngine;
use crate::store::InMemoryTourStore;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;
use tourify_common::services::{BoxedError, Clock, ListingService, SystemClock};
use tourify_config::AppConfig;
use tourify_listings::client::ListingClient;
use tourify_listings::service::{ListingApiService, StaticListingService};
use tracing::warn;

/// Creates a router containing all routes for the tour feature, wiring
/// the engine from the runtime configuration.
///
/// With `use_listing_api` off every property is treated as self-serve
/// enabled; with it on but the `[listing]` section missing the gate
/// resolves to unknown and the engine refuses, rather than guessing.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let listings: Arc<dyn ListingService<Error = BoxedError>> =
        match (config.use_listing_api, &config.listing) {
            (true, Some(listing_config)) => Arc::new(ListingApiService::new(ListingClient::new(
                listing_config.clone(),
            ))),
            (true, None) => {
                warn!("use_listing_api is set but [listing] config is missing; refusing self-serve tours");
                Arc::new(StaticListingService::new(None))
            }
            (false, _) => Arc::new(StaticListingService::allow_all()),
        };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = Arc::new(InMemoryTourStore::new(clock.clone()));
    let engine = Arc::new(TourEngine::new(store, listings, clock));

    routes_with_engine(engine)
}

/// Creates the tour router around an already-built engine. Used by the
/// config-driven constructor above and by tests that inject doubles.
pub fn routes_with_engine(engine: Arc<TourEngine>) -> Router {
    let state = Arc::new(TourState { engine });

    Router::new()
        .route("/tour/slots/{property_id}", get(get_available_slots_handler))
        .route("/tour", post(book_tour_handler))
        .route("/tour/{tour_id}", delete(cancel_tour_handler))
        .route("/tour/{tour_id}/reschedule", patch(reschedule_tour_handler))
        .route("/tour/stats", get(get_stats_handler))
        .with_state(state)
}
