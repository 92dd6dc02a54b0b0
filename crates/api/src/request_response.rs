// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use lens_book_domain::{Booking, SlotAvailability};

/// API request to create a new booking.
///
/// This DTO is distinct from domain types and represents the API
/// contract: `client_id`, `photographer_id`, `event_type`, `event_date`,
/// `event_location`, and `total_amount` are mandatory; `deposit_amount`
/// defaults to 0; `event_time`, if present, must match a slot catalog
/// entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingRequest {
    /// The requesting client's reference.
    pub client_id: String,
    /// The photographer's reference.
    pub photographer_id: String,
    /// The kind of event (e.g. "wedding", "portrait").
    pub event_type: String,
    /// The event date (`YYYY-MM-DD`).
    pub event_date: String,
    /// The requested slot time (e.g. "10:00 AM"), if picked.
    pub event_time: Option<String>,
    /// Where the event takes place.
    pub event_location: String,
    /// Advisory duration hint; never enforced.
    pub duration_hint: Option<String>,
    /// The total amount in whole currency units.
    pub total_amount: i64,
    /// The deposit amount; defaults to 0 when omitted.
    pub deposit_amount: Option<i64>,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

/// A booking as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingInfo {
    /// The canonical booking identifier.
    pub booking_id: i64,
    /// The client party reference.
    pub client_id: String,
    /// The photographer party reference.
    pub photographer_id: String,
    /// The kind of event.
    pub event_type: String,
    /// The event date (`YYYY-MM-DD`).
    pub event_date: String,
    /// The reserved slot time, if one has been picked.
    pub event_time: Option<String>,
    /// Where the event takes place.
    pub event_location: String,
    /// Advisory duration hint.
    pub duration_hint: Option<String>,
    /// The total amount in whole currency units.
    pub total_amount: i64,
    /// The deposit amount in whole currency units.
    pub deposit_amount: i64,
    /// The current lifecycle status.
    pub status: String,
    /// Optional free-form notes.
    pub notes: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the last status transition.
    pub updated_at: String,
}

impl BookingInfo {
    /// Builds the API representation of a persisted booking.
    ///
    /// `booking_id` falls back to 0 only for unpersisted bookings, which
    /// handlers never expose.
    #[must_use]
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            booking_id: booking.booking_id.unwrap_or(0),
            client_id: booking.client_id.value().to_string(),
            photographer_id: booking.photographer_id.value().to_string(),
            event_type: booking.event_type.clone(),
            event_date: booking.event_date.to_string(),
            event_time: booking
                .event_time
                .as_ref()
                .map(|time| time.value().to_string()),
            event_location: booking.event_location.clone(),
            duration_hint: booking.duration_hint.clone(),
            total_amount: booking.total_amount,
            deposit_amount: booking.deposit_amount,
            status: booking.status.as_str().to_string(),
            notes: booking.notes.clone(),
            created_at: booking.created_at.clone(),
            updated_at: booking.updated_at.clone(),
        }
    }
}

/// A catalog slot annotated with availability, as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotAvailabilityInfo {
    /// Position of the slot within the day, starting at 1.
    pub slot_id: u8,
    /// The time-of-day label.
    pub time: String,
    /// The base price in whole currency units.
    pub base_price: i64,
    /// Whether the slot is free of confirmed bookings.
    pub available: bool,
}

impl SlotAvailabilityInfo {
    /// Builds the API representation of a projected slot.
    #[must_use]
    pub fn from_availability(entry: &SlotAvailability) -> Self {
        Self {
            slot_id: entry.slot.slot_id,
            time: entry.slot.time.to_string(),
            base_price: entry.slot.base_price,
            available: entry.available,
        }
    }
}

/// API response for an availability query.
///
/// A derived, non-persisted projection: recomputed on every call, never
/// cached across requests.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AvailabilityResponse {
    /// The photographer queried.
    pub photographer_id: String,
    /// The date queried (`YYYY-MM-DD`).
    pub date: String,
    /// Per-slot availability in catalog order.
    pub slots: Vec<SlotAvailabilityInfo>,
}

/// API response for listing a photographer's bookings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PhotographerBookingsResponse {
    /// The photographer queried.
    pub photographer_id: String,
    /// The bookings, ordered by event date.
    pub bookings: Vec<BookingInfo>,
}

/// API response for listing a client's bookings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClientBookingsResponse {
    /// The client queried.
    pub client_id: String,
    /// The bookings, ordered by event date.
    pub bookings: Vec<BookingInfo>,
}
