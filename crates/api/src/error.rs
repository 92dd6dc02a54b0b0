// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use lens_book::CoreError;
use lens_book_domain::DomainError;
use lens_book_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent
/// the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A confirmed booking already occupies the slot being confirmed.
    ///
    /// The booking remains `pending`; the photographer should pick a
    /// different request or the client another slot.
    SlotAlreadyBooked {
        /// The photographer whose slot is occupied.
        photographer_id: String,
        /// The event date.
        event_date: String,
        /// The occupied slot time.
        event_time: String,
    },
    /// The underlying store failed or timed out.
    ///
    /// The only class eligible for caller-side retry. It must never be
    /// read as "slot free" or "transition succeeded".
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::SlotAlreadyBooked {
                photographer_id,
                event_date,
                event_time,
            } => {
                write!(
                    f,
                    "Slot {event_time} on {event_date} is already booked for photographer {photographer_id}"
                )
            }
            Self::StoreUnavailable { message } => {
                write!(f, "Booking store unavailable: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidClientId(msg) => ApiError::InvalidInput {
            field: String::from("client_id"),
            message: msg,
        },
        DomainError::InvalidPhotographerId(msg) => ApiError::InvalidInput {
            field: String::from("photographer_id"),
            message: msg,
        },
        DomainError::InvalidEventType(msg) => ApiError::InvalidInput {
            field: String::from("event_type"),
            message: msg,
        },
        DomainError::InvalidEventLocation(msg) => ApiError::InvalidInput {
            field: String::from("event_location"),
            message: msg,
        },
        DomainError::NegativeAmount { field, amount } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Invalid {field}: {amount}. Must not be negative"),
        },
        DomainError::DepositExceedsTotal { deposit, total } => ApiError::InvalidInput {
            field: String::from("deposit_amount"),
            message: format!("Deposit amount {deposit} exceeds total amount {total}"),
        },
        DomainError::UnknownSlotTime(value) => ApiError::InvalidInput {
            field: String::from("event_time"),
            message: format!("Time '{value}' does not match any bookable slot"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("event_date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::InvalidBookingStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid booking status: {value}"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => {
            ApiError::DomainRuleViolation {
                rule: String::from("booking_lifecycle"),
                message: format!("Cannot transition booking from '{from}' to '{to}': {reason}"),
            }
        }
        DomainError::MissingEventTime => ApiError::DomainRuleViolation {
            rule: String::from("confirmation_requires_slot"),
            message: String::from(
                "Booking has no event time; a catalog slot must be chosen before confirmation",
            ),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::SlotAlreadyBooked {
            photographer_id,
            event_date,
            event_time,
        } => ApiError::SlotAlreadyBooked {
            photographer_id,
            event_date,
            event_time,
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Store failures become `StoreUnavailable` so callers can retry with
/// backoff; they are never downgraded to a success shape.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::BookingNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking {id} does not exist"),
        },
        PersistenceError::ConfirmedSlotOccupied { booking_id } => ApiError::DomainRuleViolation {
            rule: String::from("confirmed_slot_unique"),
            message: format!(
                "Cannot confirm booking {booking_id}: a confirmed booking already occupies the slot"
            ),
        },
        PersistenceError::SerializationError(msg) => ApiError::Internal {
            message: format!("Stored booking could not be decoded: {msg}"),
        },
        PersistenceError::DatabaseError(msg)
        | PersistenceError::DatabaseConnectionFailed(msg)
        | PersistenceError::MigrationFailed(msg)
        | PersistenceError::QueryFailed(msg)
        | PersistenceError::InitializationError(msg) => ApiError::StoreUnavailable { message: msg },
    }
}
