// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use lens_book_domain::{
    Booking, BookingDraft, BookingStatus, ClientId, EventDate, PhotographerId, SlotTime,
};

pub const NOW: &str = "2024-06-10T09:00:00Z";
pub const LATER: &str = "2024-06-11T10:30:00Z";

pub fn create_test_draft(time: Option<&str>) -> BookingDraft {
    BookingDraft {
        client_id: ClientId::new("client-1").unwrap(),
        photographer_id: PhotographerId::new("P1").unwrap(),
        event_type: String::from("wedding"),
        event_date: EventDate::parse("2024-06-15").unwrap(),
        event_time: time.map(|t| SlotTime::parse(t).unwrap()),
        event_location: String::from("Riverside Park"),
        duration_hint: None,
        total_amount: 150,
        deposit_amount: 50,
        notes: None,
    }
}

pub fn create_test_booking(id: i64, time: Option<&str>, status: BookingStatus) -> Booking {
    let mut booking = Booking::from_draft(create_test_draft(time), String::from(NOW));
    booking.booking_id = Some(id);
    booking.status = status;
    booking
}
