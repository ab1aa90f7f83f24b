// --- File: crates/tourify_common/src/models.rs ---

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length of a bookable tour slot. Every `scheduled_at` must sit on a
/// boundary of this grid.
pub const SLOT_DURATION_MINUTES: i64 = 30;

/// A booking record for a self-serve property tour.
///
/// A tour is *active* while neither terminal flag is set and its start
/// time has not passed. `cancelled` and `rescheduled` are one-way and
/// mutually exclusive; once either is set the record is history and is
/// never deleted.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    /// Unique identifier, assigned by the store on insert.
    pub id: i64,
    pub property_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub user_id: String,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub rescheduled: bool,
}

impl Tour {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.cancelled && !self.rescheduled && self.scheduled_at >= now
    }
}

/// Insert payload for a tour that has not been assigned an identity yet.
#[derive(Debug, Clone)]
pub struct NewTour {
    pub property_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub user_id: String,
}

/// An ephemeral bookable slot. Slots are generated on demand from the
/// canonical grid and never stored.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Slot {
    /// Builds the slot starting at `start_time`; the end is derived from
    /// the fixed slot length.
    pub fn starting_at(start_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time: start_time + Duration::minutes(SLOT_DURATION_MINUTES),
        }
    }
}

/// Aggregate booking counters for reporting.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourStats {
    pub booked: usize,
    pub cancelled: usize,
    pub rescheduled: usize,
}
