// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lens_book_domain::DomainError;

/// Errors that can occur during booking transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A confirmed booking already occupies the requested slot.
    ///
    /// The booking being transitioned remains `pending`; the photographer
    /// must pick a different request or the client another slot.
    SlotAlreadyBooked {
        /// The photographer whose slot is occupied.
        photographer_id: String,
        /// The event date.
        event_date: String,
        /// The occupied slot time.
        event_time: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
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
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
