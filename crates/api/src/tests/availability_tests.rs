// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the availability query boundary.

use super::helpers::{create_pending, photographer_actor, test_store};
use crate::{ApiError, get_availability, transition_booking};
use lens_book_domain::BookingStatus;
use lens_book_notify::RecordingNotifier;

#[test]
fn test_availability_lists_full_catalog_in_order() {
    let mut store = test_store();

    let availability = get_availability(&mut store, "P1", "2024-06-15").unwrap();

    assert_eq!(availability.photographer_id, "P1");
    assert_eq!(availability.date, "2024-06-15");
    assert_eq!(availability.slots.len(), 10);
    for (index, slot) in availability.slots.iter().enumerate() {
        assert_eq!(usize::from(slot.slot_id), index + 1);
        assert!(slot.available);
    }
    assert_eq!(availability.slots[0].base_price, 150);
    assert_eq!(availability.slots[9].base_price, 200);
}

#[test]
fn test_pending_requests_do_not_block_slots() {
    let mut store = test_store();
    create_pending(&mut store, "client-1", "P1", "2024-06-15", Some("10:00 AM"));
    create_pending(&mut store, "client-2", "P1", "2024-06-15", Some("10:00 AM"));

    let availability = get_availability(&mut store, "P1", "2024-06-15").unwrap();
    assert!(availability.slots.iter().all(|slot| slot.available));
}

#[test]
fn test_availability_is_scoped_to_photographer_and_date() {
    let mut store = test_store();
    let created = create_pending(&mut store, "client-1", "P1", "2024-06-15", Some("10:00 AM"));

    let notifier = RecordingNotifier::new();
    transition_booking(
        &mut store,
        &notifier,
        created.booking_id,
        BookingStatus::Confirmed,
        &photographer_actor("P1"),
    )
    .unwrap();

    // Same photographer, same date: occupied
    let same = get_availability(&mut store, "P1", "2024-06-15").unwrap();
    assert!(
        !same
            .slots
            .iter()
            .find(|slot| slot.time == "10:00 AM")
            .unwrap()
            .available
    );

    // Different date and different photographer: free
    let other_date = get_availability(&mut store, "P1", "2024-06-16").unwrap();
    assert!(other_date.slots.iter().all(|slot| slot.available));
    let other_photographer = get_availability(&mut store, "P2", "2024-06-15").unwrap();
    assert!(other_photographer.slots.iter().all(|slot| slot.available));
}

#[test]
fn test_availability_rejects_empty_photographer() {
    let mut store = test_store();

    match get_availability(&mut store, "", "2024-06-15") {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "photographer_id"),
        other => panic!("Expected InvalidInput, got: {other:?}"),
    }
}

#[test]
fn test_availability_rejects_malformed_date() {
    let mut store = test_store();

    match get_availability(&mut store, "P1", "June 15th") {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "event_date"),
        other => panic!("Expected InvalidInput, got: {other:?}"),
    }
}

#[test]
fn test_availability_recomputes_after_cancellation() {
    let mut store = test_store();
    let created = create_pending(&mut store, "client-1", "P1", "2024-06-15", Some("2:00 PM"));

    let notifier = RecordingNotifier::new();
    transition_booking(
        &mut store,
        &notifier,
        created.booking_id,
        BookingStatus::Confirmed,
        &photographer_actor("P1"),
    )
    .unwrap();
    transition_booking(
        &mut store,
        &notifier,
        created.booking_id,
        BookingStatus::Cancelled,
        &photographer_actor("P1"),
    )
    .unwrap();

    let availability = get_availability(&mut store, "P1", "2024-06-15").unwrap();
    assert!(availability.slots.iter().all(|slot| slot.available));
}
