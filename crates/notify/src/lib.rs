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

//! Notification events and the dispatch boundary.
//!
//! Every successful booking transition produces exactly one notification
//! event describing who should hear about it. Delivery itself (email,
//! push, ...) is a collaborator concern behind the [`Notifier`] trait;
//! the engine only guarantees that a failure to deliver never rolls back
//! a transition.

use lens_book_domain::{ClientId, PhotographerId};
use tracing::{info, warn};

/// The kind of lifecycle event being announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A new booking request was created.
    BookingRequested,
    /// The photographer accepted the booking.
    BookingConfirmed,
    /// The photographer rejected the booking.
    BookingDeclined,
    /// The booking was withdrawn.
    BookingCancelled,
}

impl NotificationKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BookingRequested => "booking_requested",
            Self::BookingConfirmed => "booking_confirmed",
            Self::BookingDeclined => "booking_declined",
            Self::BookingCancelled => "booking_cancelled",
        }
    }
}

/// Which party a notification is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientRole {
    /// The client who requested the booking.
    Client,
    /// The photographer whose time is reserved.
    Photographer,
}

impl RecipientRole {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Photographer => "photographer",
        }
    }
}

/// A notification event produced by a booking transition.
///
/// Events are immutable once created and carry enough context for any
/// delivery channel to render a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    /// The booking the event concerns; `None` only before first persistence.
    pub booking_id: Option<i64>,
    /// What happened.
    pub kind: NotificationKind,
    /// Which party should be told.
    pub recipient: RecipientRole,
    /// The client party of the booking.
    pub client_id: ClientId,
    /// The photographer party of the booking.
    pub photographer_id: PhotographerId,
}

impl NotificationEvent {
    /// Creates a new notification event.
    #[must_use]
    pub const fn new(
        booking_id: Option<i64>,
        kind: NotificationKind,
        recipient: RecipientRole,
        client_id: ClientId,
        photographer_id: PhotographerId,
    ) -> Self {
        Self {
            booking_id,
            kind,
            recipient,
            client_id,
            photographer_id,
        }
    }
}

/// Errors that can occur during notification delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The delivery channel rejected or failed the send.
    DeliveryFailed(String),
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeliveryFailed(msg) => write!(f, "Notification delivery failed: {msg}"),
        }
    }
}

impl std::error::Error for NotifyError {}

/// Capability trait for notification delivery.
///
/// Implementations must be safe to call from concurrent requests.
pub trait Notifier: Send + Sync {
    /// Delivers a single notification event.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails; callers at the transition
    /// boundary swallow it (see [`dispatch`]).
    fn notify(&self, event: &NotificationEvent) -> Result<(), NotifyError>;
}

/// A notifier that writes events to the log.
///
/// Used in development and wherever no real delivery channel is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Creates a new log-backed notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        info!(
            booking_id = ?event.booking_id,
            kind = event.kind.as_str(),
            recipient = event.recipient.as_str(),
            client_id = event.client_id.value(),
            photographer_id = event.photographer_id.value(),
            "Dispatching notification"
        );
        Ok(())
    }
}

/// A notifier that records events in memory.
///
/// Test double: lets tests assert which notifications a flow produced.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub events: std::sync::Mutex<Vec<NotificationEvent>>,
    /// When set, every delivery fails; exercises the swallow boundary.
    pub fail_delivery: bool,
}

impl RecordingNotifier {
    /// Creates a new recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded events.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned (test-only type).
    #[must_use]
    pub fn events(&self) -> Vec<NotificationEvent> {
        self.events.lock().map_or_else(|_| Vec::new(), |guard| guard.clone())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        if self.fail_delivery {
            return Err(NotifyError::DeliveryFailed(String::from(
                "recording notifier configured to fail",
            )));
        }
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event.clone());
        }
        Ok(())
    }
}

/// Fire-and-forget dispatch.
///
/// Delivery failures are logged and swallowed: a booking's lifecycle must
/// never roll back because a notification could not be sent.
pub fn dispatch(notifier: &dyn Notifier, event: &NotificationEvent) {
    if let Err(error) = notifier.notify(event) {
        warn!(
            booking_id = ?event.booking_id,
            kind = event.kind.as_str(),
            recipient = event.recipient.as_str(),
            %error,
            "Notification delivery failed; continuing"
        );
    }
}
