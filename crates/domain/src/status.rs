// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking status tracking and transition logic.
//!
//! This module defines booking status states and valid transitions.
//! Transitions are actor-initiated only; the system never advances a
//! booking based on time alone.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Booking status states tracking a request through its lifecycle.
///
/// Status is tracked per booking. A booking starts `Pending` and only the
/// transition operation may change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Request awaiting the photographer's decision; does not block the slot.
    Pending,
    /// Accepted by the photographer; exclusively occupies its slot.
    Confirmed,
    /// Rejected by the photographer.
    Declined,
    /// Withdrawn by either party or an administrator.
    Cancelled,
}

impl BookingStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Declined => "declined",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingStatus` if the string is not a
    /// valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "declined" => Ok(Self::Declined),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }

    /// Returns true if this status is terminal (cannot transition to another state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Declined | Self::Cancelled)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// Valid transitions:
    /// - `Pending` → `Confirmed`, `Declined`, or `Cancelled`
    /// - `Confirmed` → `Cancelled`
    ///
    /// Everything else is rejected, including re-confirming an already
    /// confirmed booking and any transition out of a terminal state.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        // Cannot transition from terminal states
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        // Valid transitions based on current state
        let valid = match self {
            Self::Pending => {
                matches!(new_status, Self::Confirmed | Self::Declined | Self::Cancelled)
            }
            Self::Confirmed => matches!(new_status, Self::Cancelled),
            Self::Declined | Self::Cancelled => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by booking lifecycle rules".to_string(),
            })
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        let statuses = vec![
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Declined,
            BookingStatus::Cancelled,
        ];

        for status in statuses {
            let s = status.as_str();
            match BookingStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = BookingStatus::parse_str("invalid_status");
        assert!(result.is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Confirmed.is_terminal());
        assert!(BookingStatus::Declined.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_valid_transitions_from_pending() {
        let current = BookingStatus::Pending;

        assert!(current.validate_transition(BookingStatus::Confirmed).is_ok());
        assert!(current.validate_transition(BookingStatus::Declined).is_ok());
        assert!(current.validate_transition(BookingStatus::Cancelled).is_ok());
    }

    #[test]
    fn test_valid_transitions_from_confirmed() {
        let current = BookingStatus::Confirmed;

        assert!(current.validate_transition(BookingStatus::Cancelled).is_ok());
    }

    #[test]
    fn test_reconfirming_confirmed_is_rejected() {
        let result = BookingStatus::Confirmed.validate_transition(BookingStatus::Confirmed);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_transitions_from_confirmed() {
        let current = BookingStatus::Confirmed;

        assert!(current.validate_transition(BookingStatus::Pending).is_err());
        assert!(current.validate_transition(BookingStatus::Declined).is_err());
    }

    #[test]
    fn test_no_transitions_from_terminal_states() {
        let terminal_states = vec![BookingStatus::Declined, BookingStatus::Cancelled];

        for terminal in terminal_states {
            assert!(terminal.validate_transition(BookingStatus::Pending).is_err());
            assert!(terminal.validate_transition(BookingStatus::Confirmed).is_err());
            assert!(terminal.validate_transition(BookingStatus::Declined).is_err());
            assert!(terminal.validate_transition(BookingStatus::Cancelled).is_err());
        }
    }

    #[test]
    fn test_transition_error_names_both_statuses() {
        let result = BookingStatus::Declined.validate_transition(BookingStatus::Confirmed);
        match result {
            Err(DomainError::InvalidStatusTransition { from, to, .. }) => {
                assert_eq!(from, "declined");
                assert_eq!(to, "confirmed");
            }
            other => panic!("Expected InvalidStatusTransition, got: {other:?}"),
        }
    }
}
