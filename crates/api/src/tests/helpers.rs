// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{AuthenticatedActor, BookingInfo, CreateBookingRequest, Role, create_booking};
use lens_book_notify::RecordingNotifier;
use lens_book_persistence::Persistence;

pub fn test_store() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn client_actor(id: &str) -> AuthenticatedActor {
    AuthenticatedActor::new(id.to_string(), Role::Client)
}

pub fn photographer_actor(id: &str) -> AuthenticatedActor {
    AuthenticatedActor::new(id.to_string(), Role::Photographer)
}

pub fn admin_actor() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin-1"), Role::Admin)
}

pub fn create_request(
    client_id: &str,
    photographer_id: &str,
    event_date: &str,
    event_time: Option<&str>,
) -> CreateBookingRequest {
    CreateBookingRequest {
        client_id: client_id.to_string(),
        photographer_id: photographer_id.to_string(),
        event_type: String::from("wedding"),
        event_date: event_date.to_string(),
        event_time: event_time.map(ToString::to_string),
        event_location: String::from("Riverside Park"),
        duration_hint: Some(String::from("2 hours")),
        total_amount: 150,
        deposit_amount: Some(50),
        notes: None,
    }
}

/// Creates a pending booking through the API and returns its info.
pub fn create_pending(
    store: &mut Persistence,
    client_id: &str,
    photographer_id: &str,
    event_date: &str,
    event_time: Option<&str>,
) -> BookingInfo {
    let notifier = RecordingNotifier::new();
    create_booking(
        store,
        &notifier,
        create_request(client_id, photographer_id, event_date, event_time),
        &client_actor(client_id),
    )
    .expect("Failed to create booking")
}
