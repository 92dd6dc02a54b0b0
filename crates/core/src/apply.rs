// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::outcome::{TransitionActor, TransitionOutcome};
use lens_book_domain::{
    Booking, BookingDraft, BookingStatus, DomainError, has_confirmed_conflict,
    validate_booking_draft,
};
use lens_book_notify::{NotificationEvent, NotificationKind, RecipientRole};

/// Applies a creation request, producing a `pending` booking and its
/// notification event.
///
/// Creation never blocks on slot conflicts: a pending request coexists
/// with others for the same slot until the photographer confirms one.
///
/// # Arguments
///
/// * `draft` - The validated-at-construction booking draft
/// * `now` - RFC 3339 timestamp for `created_at`/`updated_at`
///
/// # Returns
///
/// * `Ok(TransitionOutcome)` with the pending booking and a
///   `BookingRequested` notification addressed to the photographer
/// * `Err(CoreError)` if the draft violates a domain rule
///
/// # Errors
///
/// Returns an error if any draft field validation fails.
pub fn apply_create(draft: BookingDraft, now: &str) -> Result<TransitionOutcome, CoreError> {
    validate_booking_draft(&draft)?;

    let booking: Booking = Booking::from_draft(draft, now.to_string());

    // A new request is announced to the photographer, who decides on it
    let notification: NotificationEvent = NotificationEvent::new(
        booking.booking_id,
        NotificationKind::BookingRequested,
        RecipientRole::Photographer,
        booking.client_id.clone(),
        booking.photographer_id.clone(),
    );

    Ok(TransitionOutcome {
        booking,
        notification,
    })
}

/// Applies a status transition to a booking, producing the updated
/// booking and its notification event.
///
/// This is the sole transition decision point. It validates the edge
/// against the lifecycle table and, for the `pending → confirmed` edge
/// only, re-runs the conflict decision over `slot_bookings` (the
/// confirmed bookings already fetched for the booking's slot key),
/// excluding the booking itself so re-confirmation of the same record is
/// idempotent.
///
/// The re-check here is a latency optimization: the store's conditional
/// write remains the authoritative guard under concurrent confirmations.
///
/// # Arguments
///
/// * `booking` - The booking in its current state
/// * `target` - The requested status
/// * `actor` - The party initiating the transition
/// * `slot_bookings` - Confirmed bookings for the booking's slot key
/// * `now` - RFC 3339 timestamp for `updated_at`
///
/// # Returns
///
/// * `Ok(TransitionOutcome)` with the updated booking and notification
/// * `Err(CoreError)` if the edge is invalid or the slot is taken
///
/// # Errors
///
/// Returns an error if:
/// - The transition is not present in the lifecycle table
/// - The target is `confirmed` and the booking has no event time
/// - The target is `confirmed` and another confirmed booking occupies
///   the slot (`SlotAlreadyBooked`; the booking remains `pending`)
pub fn apply_transition(
    booking: &Booking,
    target: BookingStatus,
    actor: TransitionActor,
    slot_bookings: &[Booking],
    now: &str,
) -> Result<TransitionOutcome, CoreError> {
    booking.status.validate_transition(target)?;

    if target == BookingStatus::Confirmed {
        let time = booking
            .event_time
            .as_ref()
            .ok_or(DomainError::MissingEventTime)?;

        if has_confirmed_conflict(slot_bookings, time, booking.booking_id) {
            return Err(CoreError::SlotAlreadyBooked {
                photographer_id: booking.photographer_id.value().to_string(),
                event_date: booking.event_date.to_string(),
                event_time: time.value().to_string(),
            });
        }
    }

    let mut new_booking: Booking = booking.clone();
    new_booking.status = target;
    new_booking.updated_at = now.to_string();

    let (kind, recipient) = notification_for(target, actor);
    let notification: NotificationEvent = NotificationEvent::new(
        new_booking.booking_id,
        kind,
        recipient,
        new_booking.client_id.clone(),
        new_booking.photographer_id.clone(),
    );

    Ok(TransitionOutcome {
        booking: new_booking,
        notification,
    })
}

/// Picks the notification kind and recipient for a transition.
///
/// Decisions go to the client; cancellations go to the counterparty of
/// whoever initiated them (admin cancellations are announced to the
/// client, who made the original request).
const fn notification_for(
    target: BookingStatus,
    actor: TransitionActor,
) -> (NotificationKind, RecipientRole) {
    match target {
        BookingStatus::Confirmed => (NotificationKind::BookingConfirmed, RecipientRole::Client),
        BookingStatus::Declined => (NotificationKind::BookingDeclined, RecipientRole::Client),
        BookingStatus::Cancelled => match actor {
            TransitionActor::Client => {
                (NotificationKind::BookingCancelled, RecipientRole::Photographer)
            }
            TransitionActor::Photographer | TransitionActor::Admin => {
                (NotificationKind::BookingCancelled, RecipientRole::Client)
            }
        },
        // Unreachable through validate_transition; kept total for safety
        BookingStatus::Pending => (NotificationKind::BookingRequested, RecipientRole::Photographer),
    }
}
