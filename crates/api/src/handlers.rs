// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation API handlers.
//!
//! Handlers orchestrate one unit of work each: authorize, validate,
//! apply the engine decision, persist, then dispatch the notification.
//! All durable state lives in the store; nothing is cached between
//! requests.

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    AvailabilityResponse, BookingInfo, ClientBookingsResponse, CreateBookingRequest,
    PhotographerBookingsResponse, SlotAvailabilityInfo,
};
use crate::{AuthenticatedActor, AuthorizationService};
use lens_book::{TransitionOutcome, apply_create, apply_transition};
use lens_book_domain::{
    Booking, BookingDraft, BookingStatus, ClientId, EventDate, PhotographerId, SlotAvailability,
    SlotTime, compute_availability, has_confirmed_conflict,
};
use lens_book_notify::{NotificationEvent, NotificationKind, Notifier, RecipientRole, dispatch};
use lens_book_persistence::{Persistence, PersistenceError};
use tracing::{info, warn};

/// Formats the current instant as an RFC 3339 timestamp.
fn now_rfc3339() -> Result<String, ApiError> {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format timestamp: {e}"),
        })
}

/// Creates a booking request via the API boundary with authorization.
///
/// This function:
/// - Verifies the actor may create bookings (Client or Admin role)
/// - Translates the API request into domain types
/// - Applies the creation via the engine, yielding a `pending` booking
/// - Persists the booking and dispatches the request notification
///
/// Creation never blocks on slot conflicts: if the requested slot is
/// currently confirmed the request is still created `pending` (another
/// confirmed booking may be cancelled first); a structured warning is
/// logged for observability.
///
/// # Arguments
///
/// * `persistence` - The booking store
/// * `notifier` - The notification channel
/// * `request` - The API request to create a booking
/// * `authenticated_actor` - The authenticated actor performing this action
///
/// # Returns
///
/// * `Ok(BookingInfo)` for the persisted `pending` booking
/// * `Err(ApiError)` if unauthorized, the request is invalid, or the
///   store fails
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized
/// - Any field validation fails
/// - The store is unreachable
pub fn create_booking(
    persistence: &mut Persistence,
    notifier: &dyn Notifier,
    request: CreateBookingRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<BookingInfo, ApiError> {
    // Enforce authorization before executing the command
    AuthorizationService::authorize_create(authenticated_actor)?;

    // Translate API request into domain types
    let client_id: ClientId =
        ClientId::new(&request.client_id).map_err(translate_domain_error)?;
    let photographer_id: PhotographerId =
        PhotographerId::new(&request.photographer_id).map_err(translate_domain_error)?;
    let event_date: EventDate =
        EventDate::parse(&request.event_date).map_err(translate_domain_error)?;
    let event_time: Option<SlotTime> = request
        .event_time
        .as_deref()
        .map(SlotTime::parse)
        .transpose()
        .map_err(translate_domain_error)?;

    let draft: BookingDraft = BookingDraft {
        client_id,
        photographer_id,
        event_type: request.event_type,
        event_date,
        event_time,
        event_location: request.event_location,
        duration_hint: request.duration_hint,
        total_amount: request.total_amount,
        deposit_amount: request.deposit_amount.unwrap_or(0),
        notes: request.notes,
    };

    let now: String = now_rfc3339()?;
    let outcome: TransitionOutcome = apply_create(draft, &now).map_err(translate_core_error)?;

    // Informational pre-check: a pending request is created either way
    if let Some(time) = &outcome.booking.event_time {
        let confirmed: Vec<Booking> = persistence
            .list_by_photographer_and_date(
                &outcome.booking.photographer_id,
                outcome.booking.event_date,
                Some(BookingStatus::Confirmed),
            )
            .map_err(translate_persistence_error)?;
        if has_confirmed_conflict(&confirmed, time, None) {
            warn!(
                photographer_id = outcome.booking.photographer_id.value(),
                event_date = %outcome.booking.event_date,
                event_time = time.value(),
                "Requested slot is currently confirmed; creating pending request anyway"
            );
        }
    }

    let persisted: Booking = persistence
        .create_booking(&outcome.booking)
        .map_err(translate_persistence_error)?;

    // Attach the assigned id before dispatching
    let mut notification: NotificationEvent = outcome.notification;
    notification.booking_id = persisted.booking_id;
    dispatch(notifier, &notification);

    info!(
        booking_id = ?persisted.booking_id,
        photographer_id = persisted.photographer_id.value(),
        event_date = %persisted.event_date,
        "Created booking request"
    );

    Ok(BookingInfo::from_booking(&persisted))
}

/// Retrieves a booking by its ID.
///
/// # Arguments
///
/// * `persistence` - The booking store
/// * `booking_id` - The booking to retrieve
///
/// # Errors
///
/// Returns an error if the booking does not exist or the store fails.
pub fn get_booking(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<BookingInfo, ApiError> {
    let booking: Booking = persistence
        .get_booking(booking_id)
        .map_err(translate_persistence_error)?;
    Ok(BookingInfo::from_booking(&booking))
}

/// Computes per-slot availability for a photographer and date.
///
/// The view reflects `confirmed` bookings only: pending requests never
/// block availability, because the photographer has not yet committed to
/// them. The projection is recomputed from live rows on every call.
///
/// # Arguments
///
/// * `persistence` - The booking store
/// * `photographer_id` - The photographer to query (non-empty)
/// * `date` - The date to query (`YYYY-MM-DD`)
///
/// # Returns
///
/// * `Ok(AvailabilityResponse)` with the catalog annotated per slot
/// * `Err(ApiError)` on invalid input or store failure — a store failure
///   is surfaced, never reported as "all available"
///
/// # Errors
///
/// Returns an error if:
/// - The photographer id is empty
/// - The date string is not a valid calendar date
/// - The store is unreachable (`StoreUnavailable`)
pub fn get_availability(
    persistence: &mut Persistence,
    photographer_id: &str,
    date: &str,
) -> Result<AvailabilityResponse, ApiError> {
    let photographer: PhotographerId =
        PhotographerId::new(photographer_id).map_err(translate_domain_error)?;
    let event_date: EventDate = EventDate::parse(date).map_err(translate_domain_error)?;

    let confirmed: Vec<Booking> = persistence
        .list_by_photographer_and_date(&photographer, event_date, Some(BookingStatus::Confirmed))
        .map_err(translate_persistence_error)?;

    let view: Vec<SlotAvailability> = compute_availability(&confirmed);

    Ok(AvailabilityResponse {
        photographer_id: photographer.value().to_string(),
        date: event_date.to_string(),
        slots: view
            .iter()
            .map(SlotAvailabilityInfo::from_availability)
            .collect(),
    })
}

/// Transitions a booking to a target status via the API boundary.
///
/// This is the sole mutation entry point for booking status. It:
/// - Loads the current booking
/// - Verifies the actor may perform the transition
/// - Re-runs the conflict check for the `pending → confirmed` edge,
///   since another request for the same slot may have been confirmed
///   between the caller's earlier availability check and now
/// - Persists the transition as a single conditional write
/// - Dispatches the notification (failures logged, never propagated)
///
/// # Arguments
///
/// * `persistence` - The booking store
/// * `notifier` - The notification channel
/// * `booking_id` - The booking to transition
/// * `target` - The requested status
/// * `authenticated_actor` - The authenticated actor performing this action
///
/// # Returns
///
/// * `Ok(BookingInfo)` for the updated booking
/// * `Err(ApiError)` if the transition is rejected; the booking is
///   unchanged
///
/// # Errors
///
/// Returns an error if:
/// - The booking does not exist
/// - The actor is not authorized for the transition
/// - The transition is not in the lifecycle table (`DomainRuleViolation`)
/// - The slot is already confirmed for another booking
///   (`SlotAlreadyBooked`; the booking remains `pending`)
/// - The store is unreachable
pub fn transition_booking(
    persistence: &mut Persistence,
    notifier: &dyn Notifier,
    booking_id: i64,
    target: BookingStatus,
    authenticated_actor: &AuthenticatedActor,
) -> Result<BookingInfo, ApiError> {
    let booking: Booking = persistence
        .get_booking(booking_id)
        .map_err(translate_persistence_error)?;

    AuthorizationService::authorize_transition(authenticated_actor, &booking, target)?;

    // Fetch the slot's confirmed bookings only for the confirm edge; the
    // engine ignores the list for every other transition
    let slot_bookings: Vec<Booking> =
        if target == BookingStatus::Confirmed && booking.event_time.is_some() {
            persistence
                .list_by_photographer_and_date(
                    &booking.photographer_id,
                    booking.event_date,
                    Some(BookingStatus::Confirmed),
                )
                .map_err(translate_persistence_error)?
        } else {
            Vec::new()
        };

    let now: String = now_rfc3339()?;
    let outcome: TransitionOutcome = apply_transition(
        &booking,
        target,
        authenticated_actor.to_transition_actor(),
        &slot_bookings,
        &now,
    )
    .map_err(translate_core_error)?;

    // The conditional write is the authoritative guard: a concurrent
    // confirmation that slipped past the re-check fails here atomically
    let persisted: Booking = persistence
        .update_booking_status(booking_id, target, &now)
        .map_err(|err| match err {
            PersistenceError::ConfirmedSlotOccupied { .. } => ApiError::SlotAlreadyBooked {
                photographer_id: booking.photographer_id.value().to_string(),
                event_date: booking.event_date.to_string(),
                event_time: booking
                    .event_time
                    .as_ref()
                    .map_or_else(String::new, |time| time.value().to_string()),
            },
            other => translate_persistence_error(other),
        })?;

    dispatch(notifier, &outcome.notification);

    info!(
        booking_id,
        from = booking.status.as_str(),
        to = persisted.status.as_str(),
        "Transitioned booking"
    );

    Ok(BookingInfo::from_booking(&persisted))
}

/// Cancels a booking via the API boundary.
///
/// Shorthand for a transition to `cancelled`; subject to the same
/// authorization and lifecycle rules.
///
/// # Arguments
///
/// * `persistence` - The booking store
/// * `notifier` - The notification channel
/// * `booking_id` - The booking to cancel
/// * `authenticated_actor` - The authenticated actor performing this action
///
/// # Errors
///
/// Returns an error if the transition to `cancelled` is rejected.
pub fn cancel_booking(
    persistence: &mut Persistence,
    notifier: &dyn Notifier,
    booking_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<BookingInfo, ApiError> {
    transition_booking(
        persistence,
        notifier,
        booking_id,
        BookingStatus::Cancelled,
        authenticated_actor,
    )
}

/// Deletes a booking record via the API boundary.
///
/// The cancellation-as-deletion path: restricted to the owning client or
/// an admin. A deleted booking no longer participates in conflict checks.
/// The counterparty is notified of the withdrawal.
///
/// # Arguments
///
/// * `persistence` - The booking store
/// * `notifier` - The notification channel
/// * `booking_id` - The booking to delete
/// * `authenticated_actor` - The authenticated actor performing this action
///
/// # Errors
///
/// Returns an error if:
/// - The booking does not exist
/// - The actor is not the owning client or an admin
/// - The store is unreachable
pub fn delete_booking(
    persistence: &mut Persistence,
    notifier: &dyn Notifier,
    booking_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<(), ApiError> {
    let booking: Booking = persistence
        .get_booking(booking_id)
        .map_err(translate_persistence_error)?;

    AuthorizationService::authorize_delete(authenticated_actor, &booking)?;

    persistence
        .delete_booking(booking_id)
        .map_err(translate_persistence_error)?;

    let notification: NotificationEvent = NotificationEvent::new(
        Some(booking_id),
        NotificationKind::BookingCancelled,
        RecipientRole::Photographer,
        booking.client_id.clone(),
        booking.photographer_id.clone(),
    );
    dispatch(notifier, &notification);

    info!(booking_id, "Deleted booking record");

    Ok(())
}

/// Lists a photographer's bookings, optionally filtered by status.
///
/// # Arguments
///
/// * `persistence` - The booking store
/// * `photographer_id` - The photographer to query (non-empty)
/// * `status_filter` - Restrict to one lifecycle status when present
///
/// # Errors
///
/// Returns an error if the photographer id is empty or the store fails.
pub fn list_photographer_bookings(
    persistence: &mut Persistence,
    photographer_id: &str,
    status_filter: Option<BookingStatus>,
) -> Result<PhotographerBookingsResponse, ApiError> {
    let photographer: PhotographerId =
        PhotographerId::new(photographer_id).map_err(translate_domain_error)?;

    let bookings: Vec<Booking> = persistence
        .list_by_photographer(&photographer, status_filter)
        .map_err(translate_persistence_error)?;

    Ok(PhotographerBookingsResponse {
        photographer_id: photographer.value().to_string(),
        bookings: bookings.iter().map(BookingInfo::from_booking).collect(),
    })
}

/// Lists a client's bookings.
///
/// # Arguments
///
/// * `persistence` - The booking store
/// * `client_id` - The client to query (non-empty)
///
/// # Errors
///
/// Returns an error if the client id is empty or the store fails.
pub fn list_client_bookings(
    persistence: &mut Persistence,
    client_id: &str,
) -> Result<ClientBookingsResponse, ApiError> {
    let client: ClientId = ClientId::new(client_id).map_err(translate_domain_error)?;

    let bookings: Vec<Booking> = persistence
        .list_by_client(&client)
        .map_err(translate_persistence_error)?;

    Ok(ClientBookingsResponse {
        client_id: client.value().to_string(),
        bookings: bookings.iter().map(BookingInfo::from_booking).collect(),
    })
}
