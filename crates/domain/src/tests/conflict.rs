// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for confirmed-slot conflict detection.

use super::helpers::{booking, slot_time};
use crate::{BookingStatus, has_confirmed_conflict};

#[test]
fn test_empty_store_has_no_conflict() {
    assert!(!has_confirmed_conflict(&[], &slot_time("10:00 AM"), None));
}

#[test]
fn test_confirmed_booking_conflicts() {
    let bookings = vec![booking(
        1,
        "P1",
        "2024-06-15",
        Some("10:00 AM"),
        BookingStatus::Confirmed,
    )];

    assert!(has_confirmed_conflict(&bookings, &slot_time("10:00 AM"), None));
}

#[test]
fn test_pending_booking_does_not_conflict() {
    let bookings = vec![booking(
        1,
        "P1",
        "2024-06-15",
        Some("10:00 AM"),
        BookingStatus::Pending,
    )];

    assert!(!has_confirmed_conflict(&bookings, &slot_time("10:00 AM"), None));
}

#[test]
fn test_different_time_does_not_conflict() {
    let bookings = vec![booking(
        1,
        "P1",
        "2024-06-15",
        Some("10:00 AM"),
        BookingStatus::Confirmed,
    )];

    assert!(!has_confirmed_conflict(&bookings, &slot_time("11:00 AM"), None));
}

#[test]
fn test_self_exclusion_allows_idempotent_check() {
    let bookings = vec![booking(
        7,
        "P1",
        "2024-06-15",
        Some("10:00 AM"),
        BookingStatus::Confirmed,
    )];

    // The booking's own confirmed record is not a conflict with itself
    assert!(!has_confirmed_conflict(&bookings, &slot_time("10:00 AM"), Some(7)));
    // But it is for any other booking
    assert!(has_confirmed_conflict(&bookings, &slot_time("10:00 AM"), Some(8)));
}

#[test]
fn test_unpersisted_confirmed_booking_still_conflicts() {
    let mut unpersisted = booking(1, "P1", "2024-06-15", Some("10:00 AM"), BookingStatus::Confirmed);
    unpersisted.booking_id = None;

    assert!(has_confirmed_conflict(
        &[unpersisted],
        &slot_time("10:00 AM"),
        Some(3)
    ));
}
