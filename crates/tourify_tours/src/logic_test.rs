#[cfg(test)]
mod tests {
    use crate::logic::{available_slots, build_canonical_slots, validate_schedule_window, TourError};
    use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc, Weekday};
    use tourify_common::models::Tour;

    fn tour_at(scheduled_at: DateTime<Utc>) -> Tour {
        Tour {
            id: 1,
            property_id: "prop-1".to_string(),
            scheduled_at,
            user_id: "user-1".to_string(),
            cancelled: false,
            rescheduled: false,
        }
    }

    #[test]
    fn canonical_slots_cover_three_weekdays() {
        // Tuesday noon: the next three days are all weekdays
        let now = Utc.with_ymd_and_hms(2025, 6, 3, 12, 0, 0).unwrap();

        let slots = build_canonical_slots(now);

        assert_eq!(slots.len(), 42);
        let days: Vec<NaiveDate> = slots.iter().map(|s| s.start_time.date_naive()).collect();
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()); // Wed
        assert_eq!(days[14], NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()); // Thu
        assert_eq!(days[28], NaiveDate::from_ymd_opt(2025, 6, 6).unwrap()); // Fri

        // 14 slots per day, 10:00 through 16:30
        assert_eq!(slots[0].start_time.time().hour(), 10);
        assert_eq!(slots[0].start_time.time().minute(), 0);
        assert_eq!(slots[13].start_time.time().hour(), 16);
        assert_eq!(slots[13].start_time.time().minute(), 30);
        for slot in &slots {
            assert_eq!(slot.end_time - slot.start_time, Duration::minutes(30));
            assert_eq!(slot.start_time.minute() % 30, 0);
            assert_eq!(slot.start_time.second(), 0);
        }
    }

    #[test]
    fn weekend_days_are_skipped() {
        // Thursday: offsets 2 and 3 both land on the weekend and advance
        // to Monday
        let now = Utc.with_ymd_and_hms(2025, 6, 5, 9, 0, 0).unwrap();

        let slots = build_canonical_slots(now);

        assert_eq!(slots.len(), 42);
        let friday = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        assert!(slots
            .iter()
            .all(|s| s.start_time.date_naive() == friday || s.start_time.date_naive() == monday));
        assert_eq!(
            slots
                .iter()
                .filter(|s| s.start_time.date_naive() == friday)
                .count(),
            14
        );
    }

    #[test]
    fn friday_collapses_every_offset_onto_monday() {
        let now = Utc.with_ymd_and_hms(2025, 6, 6, 9, 0, 0).unwrap();

        let slots = build_canonical_slots(now);

        let monday = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        assert_eq!(slots.len(), 42);
        assert!(slots.iter().all(|s| s.start_time.date_naive() == monday));
    }

    #[test]
    fn no_canonical_slot_falls_on_a_weekend() {
        for day_offset in 0..14 {
            let now =
                Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap() + Duration::days(day_offset);
            for slot in build_canonical_slots(now) {
                let weekday = slot.start_time.weekday();
                assert!(
                    weekday != Weekday::Sat && weekday != Weekday::Sun,
                    "slot {} falls on {}",
                    slot.start_time,
                    weekday
                );
            }
        }
    }

    #[test]
    fn a_tour_blocks_its_slot_and_both_neighbours() {
        let now = Utc.with_ymd_and_hms(2025, 6, 3, 12, 0, 0).unwrap();
        let booked = Utc.with_ymd_and_hms(2025, 6, 4, 11, 0, 0).unwrap();

        let open = available_slots(build_canonical_slots(now), &[tour_at(booked)]);

        assert_eq!(open.len(), 39);
        let blocked = [
            Utc.with_ymd_and_hms(2025, 6, 4, 10, 30, 0).unwrap(),
            booked,
            Utc.with_ymd_and_hms(2025, 6, 4, 11, 30, 0).unwrap(),
        ];
        for start in blocked {
            assert!(
                !open.iter().any(|s| s.start_time == start),
                "{} should be blocked",
                start
            );
        }
        // The next slot out is unaffected
        assert!(open
            .iter()
            .any(|s| s.start_time == Utc.with_ymd_and_hms(2025, 6, 4, 12, 0, 0).unwrap()));
    }

    #[test]
    fn edge_of_day_tours_only_block_in_grid_neighbours() {
        let now = Utc.with_ymd_and_hms(2025, 6, 3, 12, 0, 0).unwrap();

        // First slot of the day: no predecessor exists to remove
        let first = Utc.with_ymd_and_hms(2025, 6, 4, 10, 0, 0).unwrap();
        let open = available_slots(build_canonical_slots(now), &[tour_at(first)]);
        assert_eq!(open.len(), 40);

        // Last slot of the day: no successor exists to remove
        let last = Utc.with_ymd_and_hms(2025, 6, 4, 16, 30, 0).unwrap();
        let open = available_slots(build_canonical_slots(now), &[tour_at(last)]);
        assert_eq!(open.len(), 40);
        assert!(!open
            .iter()
            .any(|s| s.start_time == Utc.with_ymd_and_hms(2025, 6, 4, 16, 0, 0).unwrap()));
    }

    #[test]
    fn same_day_tours_are_rejected_at_any_hour() {
        for hour in [0, 9, 15, 23] {
            let now = Utc.with_ymd_and_hms(2025, 6, 3, hour, 0, 0).unwrap();
            let tour_time = Utc.with_ymd_and_hms(2025, 6, 3, 16, 0, 0).unwrap();
            assert!(matches!(
                validate_schedule_window(tour_time, now),
                Err(TourError::InvalidScheduleWindow(_))
            ));
        }
    }

    #[test]
    fn next_day_tours_are_rejected_after_the_evening_cutoff() {
        let tour_time = Utc.with_ymd_and_hms(2025, 6, 4, 10, 0, 0).unwrap();

        let at_2105 = Utc.with_ymd_and_hms(2025, 6, 3, 21, 5, 0).unwrap();
        assert!(matches!(
            validate_schedule_window(tour_time, at_2105),
            Err(TourError::InvalidScheduleWindow(_))
        ));

        let at_2055 = Utc.with_ymd_and_hms(2025, 6, 3, 20, 55, 0).unwrap();
        assert!(validate_schedule_window(tour_time, at_2055).is_ok());
    }

    #[test]
    fn later_days_are_unaffected_by_the_evening_cutoff() {
        let now = Utc.with_ymd_and_hms(2025, 6, 3, 22, 0, 0).unwrap();
        let two_days_out = Utc.with_ymd_and_hms(2025, 6, 5, 10, 0, 0).unwrap();
        assert!(validate_schedule_window(two_days_out, now).is_ok());
    }
}
