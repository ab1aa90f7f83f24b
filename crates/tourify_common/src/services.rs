// --- File: crates/tourify_common/src/services.rs ---
//! Service abstractions for the booking domain.
//!
//! This module provides trait definitions for the collaborators the tour
//! engine depends on. These traits allow for dependency injection and
//! easier testing by decoupling the business logic from specific
//! implementations of the store and of external services.

use crate::models::{NewTour, Tour};
use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// Failures the booking store can report.
///
/// Absence of a record is deliberately *not* an error: lookups return
/// `Option` and flag writes on missing ids are no-ops. Callers decide
/// whether absence is fatal to the business operation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Another active tour already occupies the same property and time.
    /// Raised by the store's compare-and-insert so that a slot-check and
    /// a concurrent insert cannot both succeed.
    #[error("an active tour already occupies property {property_id} at {scheduled_at}")]
    SlotTaken {
        property_id: String,
        scheduled_at: DateTime<Utc>,
    },

    /// The store itself is unusable (infrastructure failure).
    #[error("booking store unavailable: {0}")]
    Unavailable(String),
}

/// A source of the current time.
///
/// Injected into the engine and the store so that window rules and the
/// active-record filter are deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A trait for the durable record of tours.
///
/// Lookups that say "active" apply the full active-invariant, including
/// the not-yet-passed check; the flag writers (`cancel`,
/// `mark_rescheduled`) operate on raw ids and ignore it.
pub trait TourStore: Send + Sync {
    /// Get the tour with this id if it is currently active.
    fn get(&self, tour_id: i64) -> BoxFuture<'_, Option<Tour>, StoreError>;

    /// All active tours for a property.
    fn upcoming_for_property(&self, property_id: &str) -> BoxFuture<'_, Vec<Tour>, StoreError>;

    /// Persist a new tour, assigning its identity. Fails with
    /// [`StoreError::SlotTaken`] when a flag-active tour already holds the
    /// same `(property_id, scheduled_at)` pair.
    fn insert(&self, tour: NewTour) -> BoxFuture<'_, Tour, StoreError>;

    /// Set `cancelled` on the matching record. No-op when the id is
    /// unknown.
    fn cancel(&self, tour_id: i64) -> BoxFuture<'_, (), StoreError>;

    /// Set `rescheduled` on the matching record and return the now
    /// superseded tour, or `None` when the id is unknown.
    fn mark_rescheduled(&self, tour_id: i64) -> BoxFuture<'_, Option<Tour>, StoreError>;

    /// Full scan: tours with neither terminal flag set.
    fn booked(&self) -> BoxFuture<'_, Vec<Tour>, StoreError>;

    /// Full scan: cancelled tours.
    fn cancelled(&self) -> BoxFuture<'_, Vec<Tour>, StoreError>;

    /// Full scan: rescheduled tours.
    fn rescheduled(&self) -> BoxFuture<'_, Vec<Tour>, StoreError>;
}

/// A trait for the listing-policy gate consulted before slot queries and
/// bookings.
///
/// `Some(true)` means self-serve touring is enabled for the property;
/// `None` means the upstream could not answer. The engine fails closed on
/// anything but `Some(true)`, so implementations are free to map their
/// transport failures to `Ok(None)` rather than erroring.
pub trait ListingService: Send + Sync {
    /// Error type returned by listing service operations.
    type Error: StdError + Send + Sync + 'static;

    fn is_self_serve_allowed(&self, property_id: &str)
        -> BoxFuture<'_, Option<bool>, Self::Error>;
}
