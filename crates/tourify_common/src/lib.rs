// --- File: crates/tourify_common/src/lib.rs ---

// Declare modules within this crate
pub mod logging; // Logging utilities
pub mod models; // Shared data structures
pub mod services; // Service abstractions

// Re-export the most commonly used types for easier access
pub use models::{NewTour, Slot, Tour, TourStats};
pub use services::{
    BoxFuture, BoxedError, Clock, FixedClock, ListingService, StoreError, SystemClock, TourStore,
};
