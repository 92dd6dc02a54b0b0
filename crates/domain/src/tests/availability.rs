// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the availability projection.

use super::helpers::booking;
use crate::{BookingStatus, compute_availability, slot_catalog};

#[test]
fn test_no_bookings_all_slots_available() {
    let view = compute_availability(&[]);

    assert_eq!(view.len(), slot_catalog().len());
    assert!(view.iter().all(|entry| entry.available));
}

#[test]
fn test_confirmed_booking_occupies_its_slot() {
    let bookings = vec![booking(
        1,
        "P1",
        "2024-06-15",
        Some("10:00 AM"),
        BookingStatus::Confirmed,
    )];

    let view = compute_availability(&bookings);

    for entry in &view {
        if entry.slot.time == "10:00 AM" {
            assert!(!entry.available);
        } else {
            assert!(entry.available);
        }
    }
}

#[test]
fn test_pending_booking_never_reduces_availability() {
    let bookings = vec![booking(
        1,
        "P1",
        "2024-06-15",
        Some("10:00 AM"),
        BookingStatus::Pending,
    )];

    let view = compute_availability(&bookings);

    assert!(view.iter().all(|entry| entry.available));
}

#[test]
fn test_declined_and_cancelled_do_not_occupy() {
    let bookings = vec![
        booking(1, "P1", "2024-06-15", Some("9:00 AM"), BookingStatus::Declined),
        booking(2, "P1", "2024-06-15", Some("1:00 PM"), BookingStatus::Cancelled),
    ];

    let view = compute_availability(&bookings);

    assert!(view.iter().all(|entry| entry.available));
}

#[test]
fn test_multiple_confirmed_bookings_occupy_each_slot() {
    let bookings = vec![
        booking(1, "P1", "2024-06-15", Some("9:00 AM"), BookingStatus::Confirmed),
        booking(2, "P1", "2024-06-15", Some("6:00 PM"), BookingStatus::Confirmed),
    ];

    let view = compute_availability(&bookings);

    let occupied: Vec<&str> = view
        .iter()
        .filter(|entry| !entry.available)
        .map(|entry| entry.slot.time)
        .collect();
    assert_eq!(occupied, vec!["9:00 AM", "6:00 PM"]);
}

#[test]
fn test_confirmed_booking_without_time_occupies_nothing() {
    let bookings = vec![booking(1, "P1", "2024-06-15", None, BookingStatus::Confirmed)];

    let view = compute_availability(&bookings);

    assert!(view.iter().all(|entry| entry.available));
}
