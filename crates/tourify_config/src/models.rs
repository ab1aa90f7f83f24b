// --- File: crates/tourify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Listing API Config ---
// Holds the location of the upstream property-listing service that
// answers the self-serve visit-policy question.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ListingConfig {
    pub base_url: String,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    /// When false the real listing API is not consulted and every
    /// property is treated as self-serve enabled (development mode).
    #[serde(default)]
    pub use_listing_api: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub listing: Option<ListingConfig>,
}
