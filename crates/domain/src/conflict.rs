// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Confirmed-slot conflict detection.
//!
//! A conflict is the condition where a confirmation would create two
//! confirmed bookings for the same photographer/date/time. The decision
//! here is a pure function over already-fetched bookings; the store's
//! unique constraint remains the authoritative guard under concurrency.

use crate::booking::Booking;
use crate::status::BookingStatus;
use crate::types::SlotTime;

/// Returns true if a confirmed booking already occupies the slot.
///
/// `exclude_booking_id` excludes the booking being transitioned, so that
/// re-examining a booking against its own confirmed record is not a
/// conflict. Safe to call repeatedly and concurrently; has no side
/// effects.
#[must_use]
pub fn has_confirmed_conflict(
    bookings: &[Booking],
    time: &SlotTime,
    exclude_booking_id: Option<i64>,
) -> bool {
    bookings.iter().any(|booking| {
        booking.status == BookingStatus::Confirmed
            && booking.event_time.as_ref() == Some(time)
            && match (booking.booking_id, exclude_booking_id) {
                (Some(id), Some(excluded)) => id != excluded,
                _ => true,
            }
    })
}
