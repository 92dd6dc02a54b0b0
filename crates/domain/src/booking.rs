// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::BookingStatus;
use crate::types::{ClientId, EventDate, PhotographerId, SlotTime};

/// A booking request, validated but not yet persisted.
///
/// Drafts carry everything a client supplies at creation time. Typed
/// fields (`ClientId`, `EventDate`, `SlotTime`, ...) are validated at
/// construction; cross-field rules live in
/// [`crate::validate_booking_draft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    /// The requesting client.
    pub client_id: ClientId,
    /// The photographer whose time is being reserved.
    pub photographer_id: PhotographerId,
    /// The kind of event (e.g. "wedding", "portrait").
    pub event_type: String,
    /// The calendar date of the event.
    pub event_date: EventDate,
    /// The requested slot, when the client has picked one.
    pub event_time: Option<SlotTime>,
    /// Where the event takes place.
    pub event_location: String,
    /// Advisory duration hint (e.g. "2 hours"); never enforced.
    pub duration_hint: Option<String>,
    /// The total amount in whole currency units.
    pub total_amount: i64,
    /// The deposit amount in whole currency units.
    pub deposit_amount: i64,
    /// Optional free-form notes from the client.
    pub notes: Option<String>,
}

/// The central booking entity.
///
/// A booking is created `pending` and mutated only via the lifecycle
/// transition operation. `booking_id` is the canonical numeric identifier
/// assigned by the store; `None` indicates the booking has not been
/// persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// The canonical numeric identifier assigned by the store.
    pub booking_id: Option<i64>,
    /// The requesting client.
    pub client_id: ClientId,
    /// The photographer whose time is reserved.
    pub photographer_id: PhotographerId,
    /// The kind of event.
    pub event_type: String,
    /// The calendar date of the event.
    pub event_date: EventDate,
    /// The reserved slot, when one has been picked.
    pub event_time: Option<SlotTime>,
    /// Where the event takes place.
    pub event_location: String,
    /// Advisory duration hint; never enforced.
    pub duration_hint: Option<String>,
    /// The total amount in whole currency units.
    pub total_amount: i64,
    /// The deposit amount in whole currency units.
    pub deposit_amount: i64,
    /// The current lifecycle status.
    pub status: BookingStatus,
    /// Optional free-form notes.
    pub notes: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the last status transition.
    pub updated_at: String,
}

impl Booking {
    /// Builds a new `pending` booking from a draft.
    ///
    /// The booking carries no id until the store assigns one.
    #[must_use]
    pub fn from_draft(draft: BookingDraft, created_at: String) -> Self {
        Self {
            booking_id: None,
            client_id: draft.client_id,
            photographer_id: draft.photographer_id,
            event_type: draft.event_type,
            event_date: draft.event_date,
            event_time: draft.event_time,
            event_location: draft.event_location,
            duration_hint: draft.duration_hint,
            total_amount: draft.total_amount,
            deposit_amount: draft.deposit_amount,
            status: BookingStatus::Pending,
            notes: draft.notes,
            updated_at: created_at.clone(),
            created_at,
        }
    }
}
