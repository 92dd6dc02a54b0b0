// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Client reference is empty or invalid.
    InvalidClientId(String),
    /// Photographer reference is empty or invalid.
    InvalidPhotographerId(String),
    /// Event type is empty or invalid.
    InvalidEventType(String),
    /// Event location is empty or invalid.
    InvalidEventLocation(String),
    /// A monetary amount is negative.
    NegativeAmount {
        /// The field holding the invalid amount.
        field: &'static str,
        /// The invalid amount value.
        amount: i64,
    },
    /// The deposit exceeds the total amount.
    DepositExceedsTotal {
        /// The deposit amount.
        deposit: i64,
        /// The total amount.
        total: i64,
    },
    /// The requested time does not match any slot in the catalog.
    UnknownSlotTime(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Booking status string is not a valid status.
    InvalidBookingStatus(String),
    /// The requested status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not permitted.
        reason: String,
    },
    /// The booking has no event time, so it cannot occupy a slot.
    MissingEventTime,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClientId(msg) => write!(f, "Invalid client id: {msg}"),
            Self::InvalidPhotographerId(msg) => write!(f, "Invalid photographer id: {msg}"),
            Self::InvalidEventType(msg) => write!(f, "Invalid event type: {msg}"),
            Self::InvalidEventLocation(msg) => write!(f, "Invalid event location: {msg}"),
            Self::NegativeAmount { field, amount } => {
                write!(f, "Invalid {field}: {amount}. Must not be negative")
            }
            Self::DepositExceedsTotal { deposit, total } => {
                write!(
                    f,
                    "Deposit amount {deposit} exceeds total amount {total}"
                )
            }
            Self::UnknownSlotTime(value) => {
                write!(f, "Time '{value}' does not match any bookable slot")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidBookingStatus(value) => {
                write!(f, "Invalid booking status: {value}")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition booking from '{from}' to '{to}': {reason}")
            }
            Self::MissingEventTime => {
                write!(f, "Booking has no event time and cannot occupy a slot")
            }
        }
    }
}

impl std::error::Error for DomainError {}
