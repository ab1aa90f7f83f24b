#[cfg(test)]
mod tests {
    use crate::logic::{available_slots, build_canonical_slots};
    use chrono::{Datelike, Duration, TimeZone, Timelike, Utc, Weekday};
    use proptest::prelude::*;
    use tourify_common::models::Tour;

    proptest! {
        /// The canonical grid keeps its shape for any clock reading: 42
        /// slots, weekdays only, half-hour aligned, inside working hours.
        #[test]
        fn canonical_grid_shape_holds(
            day_offset in 0i64..730,
            hour in 0u32..24,
            minute in 0u32..60,
        ) {
            let now = Utc.with_ymd_and_hms(2025, 1, 1, hour, minute, 0).unwrap()
                + Duration::days(day_offset);
            let slots = build_canonical_slots(now);

            prop_assert_eq!(slots.len(), 42);
            for slot in &slots {
                prop_assert!(slot.start_time.date_naive() > now.date_naive());
                let weekday = slot.start_time.weekday();
                prop_assert!(weekday != Weekday::Sat && weekday != Weekday::Sun);
                prop_assert_eq!(slot.start_time.minute() % 30, 0);
                prop_assert_eq!(slot.start_time.second(), 0);
                let time = (slot.start_time.hour(), slot.start_time.minute());
                prop_assert!((10, 0) <= time && time <= (16, 30));
                prop_assert_eq!(slot.end_time - slot.start_time, Duration::minutes(30));
            }

            // Day-major order: start times never go backwards
            for pair in slots.windows(2) {
                prop_assert!(pair[0].start_time <= pair[1].start_time);
            }
        }

        /// Booking any canonical slot removes exactly the slots within
        /// one grid step of it (the slot itself plus the buffer
        /// neighbours) and keeps everything else, in order.
        #[test]
        fn a_booking_removes_exactly_the_buffered_window(
            day_offset in 0i64..365,
            pick in 0usize..42,
        ) {
            let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
                + Duration::days(day_offset);
            let canonical = build_canonical_slots(now);
            let booked = canonical[pick];

            let tour = Tour {
                id: 1,
                property_id: "prop-1".to_string(),
                scheduled_at: booked.start_time,
                user_id: "user-1".to_string(),
                cancelled: false,
                rescheduled: false,
            };
            let open = available_slots(canonical.clone(), &[tour]);

            // The grid is 30-minute aligned, so "within one step" and
            // "start, end, or successor matches" are the same predicate.
            // Duplicate days (Thursday/Friday grids) lose every copy.
            let expected: Vec<_> = canonical
                .iter()
                .filter(|slot| {
                    (slot.start_time - booked.start_time).num_minutes().abs() > 30
                })
                .copied()
                .collect();
            prop_assert_eq!(open, expected);
        }
    }
}
