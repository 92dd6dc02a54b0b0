// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::BookingDraft;
use crate::error::DomainError;

/// Validates a booking draft's field constraints.
///
/// Typed fields (`ClientId`, `PhotographerId`, `EventDate`, `SlotTime`)
/// are validated at construction; this function checks the remaining
/// required fields and cross-field rules. It is pure, deterministic, and
/// has no side effects.
///
/// # Arguments
///
/// * `draft` - The draft to validate
///
/// # Returns
///
/// * `Ok(())` if the draft's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The event type is empty
/// - The event location is empty
/// - Either amount is negative
/// - The deposit exceeds the total
pub fn validate_booking_draft(draft: &BookingDraft) -> Result<(), DomainError> {
    // Rule: event type must not be empty
    if draft.event_type.trim().is_empty() {
        return Err(DomainError::InvalidEventType(String::from(
            "Event type cannot be empty",
        )));
    }

    // Rule: event location must not be empty
    if draft.event_location.trim().is_empty() {
        return Err(DomainError::InvalidEventLocation(String::from(
            "Event location cannot be empty",
        )));
    }

    // Rule: amounts must not be negative
    if draft.total_amount < 0 {
        return Err(DomainError::NegativeAmount {
            field: "total_amount",
            amount: draft.total_amount,
        });
    }
    if draft.deposit_amount < 0 {
        return Err(DomainError::NegativeAmount {
            field: "deposit_amount",
            amount: draft.deposit_amount,
        });
    }

    // Rule: the deposit can never exceed the total
    if draft.deposit_amount > draft.total_amount {
        return Err(DomainError::DepositExceedsTotal {
            deposit: draft.deposit_amount,
            total: draft.total_amount,
        });
    }

    Ok(())
}
