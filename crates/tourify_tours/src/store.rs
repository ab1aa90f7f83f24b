// --- File: crates/tourify_tours/src/store.rs ---
//! In-memory booking store.
//!
//! One mutex guards the whole table, so `insert`'s occupancy check and
//! its write are atomic. A SQL implementation would enforce the same
//! invariant with a partial unique index on `(property_id, scheduled_at)`
//! over flag-active rows.

use std::sync::{Arc, Mutex, MutexGuard};
use tourify_common::models::{NewTour, Tour};
use tourify_common::services::{BoxFuture, Clock, StoreError, TourStore};

struct StoreInner {
    next_id: i64,
    tours: Vec<Tour>,
}

pub struct InMemoryTourStore {
    inner: Mutex<StoreInner>,
    clock: Arc<dyn Clock>,
}

impl InMemoryTourStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                next_id: 1,
                tours: Vec::new(),
            }),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))
    }
}

impl TourStore for InMemoryTourStore {
    fn get(&self, tour_id: i64) -> BoxFuture<'_, Option<Tour>, StoreError> {
        Box::pin(async move {
            let now = self.clock.now();
            let inner = self.lock()?;
            Ok(inner
                .tours
                .iter()
                .find(|tour| tour.id == tour_id && tour.is_active(now))
                .cloned())
        })
    }

    fn upcoming_for_property(&self, property_id: &str) -> BoxFuture<'_, Vec<Tour>, StoreError> {
        let property_id = property_id.to_owned();
        Box::pin(async move {
            let now = self.clock.now();
            let inner = self.lock()?;
            Ok(inner
                .tours
                .iter()
                .filter(|tour| tour.property_id == property_id && tour.is_active(now))
                .cloned()
                .collect())
        })
    }

    fn insert(&self, tour: NewTour) -> BoxFuture<'_, Tour, StoreError> {
        Box::pin(async move {
            let mut inner = self.lock()?;

            let occupied = inner.tours.iter().any(|existing| {
                !existing.cancelled
                    && !existing.rescheduled
                    && existing.property_id == tour.property_id
                    && existing.scheduled_at == tour.scheduled_at
            });
            if occupied {
                return Err(StoreError::SlotTaken {
                    property_id: tour.property_id,
                    scheduled_at: tour.scheduled_at,
                });
            }

            let record = Tour {
                id: inner.next_id,
                property_id: tour.property_id,
                scheduled_at: tour.scheduled_at,
                user_id: tour.user_id,
                cancelled: false,
                rescheduled: false,
            };
            inner.next_id += 1;
            inner.tours.push(record.clone());
            Ok(record)
        })
    }

    fn cancel(&self, tour_id: i64) -> BoxFuture<'_, (), StoreError> {
        Box::pin(async move {
            let mut inner = self.lock()?;
            if let Some(tour) = inner.tours.iter_mut().find(|tour| tour.id == tour_id) {
                tour.cancelled = true;
            }
            Ok(())
        })
    }

    fn mark_rescheduled(&self, tour_id: i64) -> BoxFuture<'_, Option<Tour>, StoreError> {
        Box::pin(async move {
            let mut inner = self.lock()?;
            match inner.tours.iter_mut().find(|tour| tour.id == tour_id) {
                Some(tour) => {
                    tour.rescheduled = true;
                    Ok(Some(tour.clone()))
                }
                None => Ok(None),
            }
        })
    }

    fn booked(&self) -> BoxFuture<'_, Vec<Tour>, StoreError> {
        Box::pin(async move {
            let inner = self.lock()?;
            Ok(inner
                .tours
                .iter()
                .filter(|tour| !tour.cancelled && !tour.rescheduled)
                .cloned()
                .collect())
        })
    }

    fn cancelled(&self) -> BoxFuture<'_, Vec<Tour>, StoreError> {
        Box::pin(async move {
            let inner = self.lock()?;
            Ok(inner
                .tours
                .iter()
                .filter(|tour| tour.cancelled)
                .cloned()
                .collect())
        })
    }

    fn rescheduled(&self) -> BoxFuture<'_, Vec<Tour>, StoreError> {
        Box::pin(async move {
            let inner = self.lock()?;
            Ok(inner
                .tours
                .iter()
                .filter(|tour| tour.rescheduled)
                .cloned()
                .collect())
        })
    }
}
