// --- File: crates/tourify_tours/src/logic.rs ---
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc, Weekday};
use std::sync::Arc;
use thiserror::Error;
use tourify_common::models::{NewTour, Slot, Tour, TourStats, SLOT_DURATION_MINUTES};
use tourify_common::services::{BoxedError, Clock, ListingService, StoreError, TourStore};
use tracing::{debug, warn};

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum TourError {
    #[error("Property is not available for self-serve tours")]
    SelfServeUnavailable,
    #[error("{0}")]
    InvalidScheduleWindow(&'static str),
    #[error("Tour slot is not available")]
    SlotUnavailable,
    #[error("Tour not found")]
    TourNotFound,
    #[error("Tour is not available to cancel")]
    TourNotCancellable,
    #[error("Tour is not available to reschedule")]
    TourNotReschedulable,
    #[error("Booking store error: {0}")]
    Store(#[from] StoreError),
}

// --- Slot grid ---

/// Number of future days offered for touring.
const BOOKING_DAYS: i64 = 3;
/// Same-day-tomorrow bookings are blocked from this hour on.
const NEXT_DAY_CUTOFF_HOUR: u32 = 21;
/// First and last bookable slot start of a touring day, inclusive.
const DAY_FIRST_SLOT: (u32, u32) = (10, 0);
const DAY_LAST_SLOT: (u32, u32) = (16, 30);

/// Advances `now + from_days` past weekends, one day at a time.
fn next_working_day(now: DateTime<Utc>, from_days: i64) -> NaiveDate {
    let candidate = (now + Duration::days(from_days)).date_naive();
    match candidate.weekday() {
        Weekday::Sat | Weekday::Sun => next_working_day(now, from_days + 1),
        _ => candidate,
    }
}

/// The half-hour slot grid of a single touring day.
fn day_slots(day: NaiveDate) -> Vec<Slot> {
    let first = day
        .and_hms_opt(DAY_FIRST_SLOT.0, DAY_FIRST_SLOT.1, 0)
        .unwrap();
    let last = day
        .and_hms_opt(DAY_LAST_SLOT.0, DAY_LAST_SLOT.1, 0)
        .unwrap();

    let mut slots = Vec::new();
    let mut cursor = first;
    while cursor <= last {
        slots.push(Slot::starting_at(Utc.from_utc_datetime(&cursor)));
        cursor = cursor + Duration::minutes(SLOT_DURATION_MINUTES);
    }
    slots
}

/// Builds the canonical set of bookable slots: three future days, each
/// advanced past weekends independently, 14 half-hour slots per day.
/// Deterministic given `now`.
///
/// The offsets shift independently, so from a Thursday or Friday the
/// candidate days can coincide; the grid is still day-major and 42 slots
/// long.
pub fn build_canonical_slots(now: DateTime<Utc>) -> Vec<Slot> {
    (1..=BOOKING_DAYS)
        .map(|offset| next_working_day(now, offset))
        .flat_map(day_slots)
        .collect()
}

/// Filters the canonical grid against a property's active tours.
///
/// Every tour removes the slot it occupies plus the slot immediately
/// before and after it, enforcing an empty buffer slot around each
/// booking. Relative order is preserved.
pub fn available_slots(canonical: Vec<Slot>, tours: &[Tour]) -> Vec<Slot> {
    let mut slots = canonical;
    for tour in tours {
        let occupied = Slot::starting_at(tour.scheduled_at);
        slots.retain(|slot| {
            slot.end_time != occupied.start_time
                && slot.start_time != occupied.start_time
                && slot.start_time != occupied.end_time
        });
    }
    slots
}

/// Applies the scheduling-window rule to a candidate tour time.
pub fn validate_schedule_window(
    tour_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), TourError> {
    if now.hour() >= NEXT_DAY_CUTOFF_HOUR
        && tour_time.date_naive() == (now + Duration::days(1)).date_naive()
    {
        return Err(TourError::InvalidScheduleWindow(
            "Cannot schedule a tour for tomorrow after 9.00pm",
        ));
    }

    if tour_time.date_naive() == now.date_naive() {
        return Err(TourError::InvalidScheduleWindow(
            "Cannot schedule a tour for the current day",
        ));
    }

    Ok(())
}

// --- Engine ---

/// Orchestrates validation, slot-conflict checking, and booking state
/// transitions against the store and the listing gate. Owns all business
/// invariants; the store and gate stay dumb.
pub struct TourEngine {
    store: Arc<dyn TourStore>,
    listings: Arc<dyn ListingService<Error = BoxedError>>,
    clock: Arc<dyn Clock>,
}

impl TourEngine {
    pub fn new(
        store: Arc<dyn TourStore>,
        listings: Arc<dyn ListingService<Error = BoxedError>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            listings,
            clock,
        }
    }

    /// Fails closed: anything but a definite "yes" from the gate refuses
    /// the operation.
    async fn ensure_self_serve_allowed(&self, property_id: &str) -> Result<(), TourError> {
        match self.listings.is_self_serve_allowed(property_id).await {
            Ok(Some(true)) => Ok(()),
            Ok(_) => Err(TourError::SelfServeUnavailable),
            Err(err) => {
                warn!("self-serve lookup failed for {}: {}", property_id, err);
                Err(TourError::SelfServeUnavailable)
            }
        }
    }

    async fn property_available_slots(
        &self,
        property_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<Slot>, TourError> {
        let tours = self.store.upcoming_for_property(property_id).await?;
        Ok(available_slots(build_canonical_slots(now), &tours))
    }

    async fn insert_tour(&self, tour: NewTour) -> Result<Tour, TourError> {
        match self.store.insert(tour).await {
            Ok(tour) => {
                debug!(
                    "booked tour {} for property {} at {}",
                    tour.id, tour.property_id, tour.scheduled_at
                );
                Ok(tour)
            }
            // Lost the check-then-insert race to a concurrent booking.
            Err(StoreError::SlotTaken { .. }) => Err(TourError::SlotUnavailable),
            Err(err) => Err(err.into()),
        }
    }

    /// The bookable slots for a property.
    pub async fn available_slots(&self, property_id: &str) -> Result<Vec<Slot>, TourError> {
        self.ensure_self_serve_allowed(property_id).await?;
        self.property_available_slots(property_id, self.clock.now())
            .await
    }

    /// Books a tour of `property_id` at `tour_time` for `user_id`.
    pub async fn book(
        &self,
        property_id: &str,
        tour_time: DateTime<Utc>,
        user_id: &str,
    ) -> Result<Tour, TourError> {
        let now = self.clock.now();
        validate_schedule_window(tour_time, now)?;
        self.ensure_self_serve_allowed(property_id).await?;

        let open = self.property_available_slots(property_id, now).await?;
        if !open.iter().any(|slot| slot.start_time == tour_time) {
            return Err(TourError::SlotUnavailable);
        }

        self.insert_tour(NewTour {
            property_id: property_id.to_owned(),
            scheduled_at: tour_time,
            user_id: user_id.to_owned(),
        })
        .await
    }

    /// Cancels an active, not-yet-started tour.
    pub async fn cancel(&self, tour_id: i64) -> Result<(), TourError> {
        let tour = self
            .store
            .get(tour_id)
            .await?
            .ok_or(TourError::TourNotFound)?;

        if tour.scheduled_at <= self.clock.now() {
            return Err(TourError::TourNotCancellable);
        }

        self.store.cancel(tour_id).await?;
        debug!("cancelled tour {}", tour_id);
        Ok(())
    }

    /// Moves an active tour to a new time: the old record is marked
    /// rescheduled and a fresh record is inserted for the same property
    /// and user.
    pub async fn reschedule(&self, tour_id: i64, tour_time: DateTime<Utc>) -> Result<Tour, TourError> {
        let now = self.clock.now();
        let tour = self
            .store
            .get(tour_id)
            .await?
            .ok_or(TourError::TourNotFound)?;

        if tour.scheduled_at <= now {
            return Err(TourError::TourNotReschedulable);
        }

        validate_schedule_window(tour_time, now)?;

        let open = self.property_available_slots(&tour.property_id, now).await?;
        if !open.iter().any(|slot| slot.start_time == tour_time) {
            return Err(TourError::SlotUnavailable);
        }

        // The record can disappear between the lookup above and this
        // write; surface that instead of booking a replacement anyway.
        let superseded = self
            .store
            .mark_rescheduled(tour_id)
            .await?
            .ok_or(TourError::TourNotFound)?;

        self.insert_tour(NewTour {
            property_id: superseded.property_id,
            scheduled_at: tour_time,
            user_id: superseded.user_id,
        })
        .await
    }

    /// Aggregate booking counters.
    pub async fn stats(&self) -> Result<TourStats, TourError> {
        Ok(TourStats {
            booked: self.store.booked().await?.len(),
            cancelled: self.store.cancelled().await?.len(),
            rescheduled: self.store.rescheduled().await?.len(),
        })
    }
}
