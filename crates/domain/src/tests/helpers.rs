// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{Booking, BookingDraft, BookingStatus, ClientId, EventDate, PhotographerId, SlotTime};

pub fn client(id: &str) -> ClientId {
    ClientId::new(id).expect("valid client id")
}

pub fn photographer(id: &str) -> PhotographerId {
    PhotographerId::new(id).expect("valid photographer id")
}

pub fn date(value: &str) -> EventDate {
    EventDate::parse(value).expect("valid event date")
}

pub fn slot_time(value: &str) -> SlotTime {
    SlotTime::parse(value).expect("valid slot time")
}

pub fn draft(photographer_id: &str, event_date: &str, time: Option<&str>) -> BookingDraft {
    BookingDraft {
        client_id: client("client-1"),
        photographer_id: photographer(photographer_id),
        event_type: String::from("wedding"),
        event_date: date(event_date),
        event_time: time.map(slot_time),
        event_location: String::from("Riverside Park"),
        duration_hint: Some(String::from("2 hours")),
        total_amount: 150,
        deposit_amount: 50,
        notes: None,
    }
}

pub fn booking(
    id: i64,
    photographer_id: &str,
    event_date: &str,
    time: Option<&str>,
    status: BookingStatus,
) -> Booking {
    let mut booking = Booking::from_draft(
        draft(photographer_id, event_date, time),
        String::from("2024-06-01T12:00:00Z"),
    );
    booking.booking_id = Some(id);
    booking.status = status;
    booking
}
