// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use lens_book::TransitionActor;
use lens_book_domain::{Booking, BookingStatus};

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    cancel_booking, create_booking, delete_booking, get_availability, get_booking,
    list_client_bookings, list_photographer_bookings, transition_booking,
};
pub use request_response::{
    AvailabilityResponse, BookingInfo, ClientBookingsResponse, CreateBookingRequest,
    PhotographerBookingsResponse, SlotAvailabilityInfo,
};

/// Actor roles for authorization.
///
/// Roles determine what actions an authenticated actor may perform on a
/// booking. Ownership (which booking the role applies to) is checked
/// separately against the booking's own party references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Client role: may request bookings and cancel or delete their own.
    Client,
    /// Photographer role: may confirm, decline, or cancel bookings of
    /// their own calendar.
    Photographer,
    /// Admin role: may perform any booking action on any record.
    Admin,
}

impl Role {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Photographer => "photographer",
            Self::Admin => "admin",
        }
    }
}

/// An authenticated actor with an associated role.
///
/// This represents a caller who has been authenticated and has permission
/// to perform certain actions based on their role and the bookings they
/// own a side of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor. For clients and
    /// photographers this is their party reference on bookings.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this actor into the engine's transition party.
    #[must_use]
    pub const fn to_transition_actor(&self) -> TransitionActor {
        match self.role {
            Role::Client => TransitionActor::Client,
            Role::Photographer => TransitionActor::Photographer,
            Role::Admin => TransitionActor::Admin,
        }
    }

    /// Returns true if this actor is the booking's client party.
    #[must_use]
    pub fn owns_as_client(&self, booking: &Booking) -> bool {
        self.role == Role::Client && self.id == booking.client_id.value()
    }

    /// Returns true if this actor is the booking's photographer party.
    #[must_use]
    pub fn owns_as_photographer(&self, booking: &Booking) -> bool {
        self.role == Role::Photographer && self.id == booking.photographer_id.value()
    }
}

/// Stub authentication function.
///
/// This is a minimal placeholder: real authentication (credentials,
/// tokens, identity providers) lives with an external collaborator and
/// is out of scope for the reservation engine.
///
/// # Arguments
///
/// * `actor_id` - The identifier of the actor to authenticate
/// * `role` - The role to assign to the actor
///
/// # Returns
///
/// An authenticated actor if successful.
///
/// # Errors
///
/// Returns `AuthError::AuthenticationFailed` if the actor id is empty.
pub fn authenticate_stub(actor_id: String, role: Role) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.trim().is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor id cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(actor_id, role))
}

/// Authorization rules for booking actions.
///
/// Authorization is enforced centrally here, before any command executes.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Authorizes creating a booking request.
    ///
    /// Clients create their own requests; admins may create on a
    /// client's behalf.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is a photographer.
    pub fn authorize_create(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Client | Role::Admin => Ok(()),
            Role::Photographer => Err(AuthError::Unauthorized {
                action: String::from("create_booking"),
                required_role: String::from("Client or Admin"),
            }),
        }
    }

    /// Authorizes a status transition on a booking.
    ///
    /// Decisions (confirm/decline) belong to the booking's photographer
    /// or an admin. Cancellation belongs to either owning party or an
    /// admin. Other targets pass through so the lifecycle table can
    /// reject them with a precise error.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor may not perform the transition.
    pub fn authorize_transition(
        actor: &AuthenticatedActor,
        booking: &Booking,
        target: BookingStatus,
    ) -> Result<(), AuthError> {
        match target {
            BookingStatus::Confirmed | BookingStatus::Declined => {
                Self::authorize_decision(actor, booking)
            }
            BookingStatus::Cancelled => Self::authorize_cancel(actor, booking),
            BookingStatus::Pending => Ok(()),
        }
    }

    /// Authorizes confirming or declining a booking.
    ///
    /// # Errors
    ///
    /// Returns an error unless the actor is the booking's photographer
    /// or an admin.
    pub fn authorize_decision(
        actor: &AuthenticatedActor,
        booking: &Booking,
    ) -> Result<(), AuthError> {
        if actor.role == Role::Admin || actor.owns_as_photographer(booking) {
            return Ok(());
        }
        Err(AuthError::Unauthorized {
            action: String::from("decide_booking"),
            required_role: String::from("owning Photographer or Admin"),
        })
    }

    /// Authorizes cancelling a booking.
    ///
    /// # Errors
    ///
    /// Returns an error unless the actor is one of the booking's parties
    /// or an admin.
    pub fn authorize_cancel(
        actor: &AuthenticatedActor,
        booking: &Booking,
    ) -> Result<(), AuthError> {
        if actor.role == Role::Admin
            || actor.owns_as_client(booking)
            || actor.owns_as_photographer(booking)
        {
            return Ok(());
        }
        Err(AuthError::Unauthorized {
            action: String::from("cancel_booking"),
            required_role: String::from("owning party or Admin"),
        })
    }

    /// Authorizes deleting a booking record.
    ///
    /// # Errors
    ///
    /// Returns an error unless the actor is the owning client or an
    /// admin.
    pub fn authorize_delete(
        actor: &AuthenticatedActor,
        booking: &Booking,
    ) -> Result<(), AuthError> {
        if actor.role == Role::Admin || actor.owns_as_client(booking) {
            return Ok(());
        }
        Err(AuthError::Unauthorized {
            action: String::from("delete_booking"),
            required_role: String::from("owning Client or Admin"),
        })
    }
}
