// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-slot availability projection.
//!
//! Availability is a derived, read-only view: the slot catalog annotated
//! with occupancy computed from confirmed bookings. It is recomputed on
//! every query and never cached across requests; a cached view would
//! silently permit double-booking.

use crate::booking::Booking;
use crate::slot::{Slot, slot_catalog};
use crate::status::BookingStatus;
use std::collections::HashSet;

/// A catalog slot annotated with its availability for one photographer/date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAvailability {
    /// The catalog slot.
    pub slot: Slot,
    /// Whether the slot is free of confirmed bookings.
    pub available: bool,
}

/// Projects per-slot availability from a photographer's bookings for a date.
///
/// Only `confirmed` bookings occupy slots: a `pending` request never
/// reduces availability, because the photographer has not yet committed
/// to it. Callers pass the bookings already scoped to one
/// `(photographer, date)` key; entries with other statuses or without an
/// event time are ignored here.
#[must_use]
pub fn compute_availability(bookings: &[Booking]) -> Vec<SlotAvailability> {
    let occupied_times: HashSet<&str> = bookings
        .iter()
        .filter(|booking| booking.status == BookingStatus::Confirmed)
        .filter_map(|booking| booking.event_time.as_ref())
        .map(crate::types::SlotTime::value)
        .collect();

    slot_catalog()
        .iter()
        .map(|slot| SlotAvailability {
            slot: *slot,
            available: !occupied_times.contains(slot.time),
        })
        .collect()
}
