// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lens_book_domain::Booking;
use lens_book_notify::NotificationEvent;

/// The party initiating a booking transition.
///
/// Authorization (who may initiate which transition, and ownership
/// checks) is enforced at the API boundary; the engine uses the actor
/// only to address the resulting notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionActor {
    /// The client who owns the booking request.
    Client,
    /// The photographer whose time is reserved.
    Photographer,
    /// A system administrator acting on either party's behalf.
    Admin,
}

/// The result of a successful booking transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. Every successful transition produces exactly one
/// notification event for the boundary to dispatch after persisting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    /// The booking after the transition.
    pub booking: Booking,
    /// The notification event recording this transition.
    pub notification: NotificationEvent,
}
